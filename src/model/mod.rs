pub mod crm;
pub mod deal;
pub mod study;

pub use crm::*;
pub use deal::*;
pub use study::*;
