pub mod car;
pub mod discount;
pub mod envelope;

pub use car::*;
pub use discount::*;
pub use envelope::*;
