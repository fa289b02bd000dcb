pub mod hubspot;
pub mod traits;

pub use hubspot::*;
pub use traits::*;
