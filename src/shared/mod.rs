pub mod date;
pub mod geo;
pub mod time;

pub use date::*;
pub use geo::*;
pub use time::*;
