pub mod associations;
pub mod catalog;
pub mod payload;

pub use associations::*;
pub use catalog::*;
pub use payload::*;
