pub mod discount;
pub mod mapping;
pub mod service;

pub use discount::*;
pub use mapping::*;
pub use service::*;
