pub mod catalog;
pub mod plan;

pub use catalog::*;
pub use plan::*;
