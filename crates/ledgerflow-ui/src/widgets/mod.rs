pub mod blocking;
pub mod fab;
pub mod header;

pub use blocking::*;
pub use fab::*;
pub use header::*;
