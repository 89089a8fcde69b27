//! Loads a GTFS feed from a zip archive into a [`Repository`](repository::Repository)
//! of typed entities that refer to each other by index.
//!
//! ```no_run
//! use feedgraph::prelude::*;
//!
//! let repository = Repository::from_zip_with_config("feed.zip", Config::new().strict(true))?;
//! for trip in &repository.trips {
//!     println!("{} has {} stop times", trip.id, trip.stop_times.len());
//! }
//! # Ok::<(), feedgraph::gtfs::Error>(())
//! ```

pub mod gtfs;
pub mod repository;
pub mod shared;

pub mod prelude {
    pub use crate::gtfs::{Config, Error, Gtfs};
    pub use crate::repository::*;
    pub use crate::shared::{Coordinate, Duration, Time};
}
