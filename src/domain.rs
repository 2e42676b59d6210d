pub mod aggregate;
pub mod display;
pub mod estimate;
pub mod weather;
