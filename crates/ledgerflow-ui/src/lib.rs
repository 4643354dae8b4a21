//! LedgerFlow UI - egui Presentation Layer
//!
//! This crate provides the workspace-facing user interface pieces:
//! - Theme tokens and egui visuals
//! - Fluent-based localization
//! - Responsive viewport helper
//! - User configuration persistence
//! - The animated toggle FAB widget
//! - The sectioned page controller with its header and blocking views

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod core;
#[allow(missing_docs)]
pub mod pages;
#[allow(missing_docs)]
pub mod widgets;

pub use crate::core::*;
pub use crate::pages::*;
pub use crate::widgets::*;
