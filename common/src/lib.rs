pub mod address;
pub mod calldata;
pub mod units;

pub use address::*;
pub use calldata::*;
pub use units::*;
