pub mod config;
pub mod i18n;
pub mod responsive;
pub mod theme;

pub use config::*;
pub use i18n::*;
pub use responsive::*;
pub use theme::*;
