pub mod gas;
pub mod marketplace;
pub mod math;

pub use gas::*;
pub use marketplace::*;
pub use math::*;
