pub mod section_page;

pub use section_page::*;
