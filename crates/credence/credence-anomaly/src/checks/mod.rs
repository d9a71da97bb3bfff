//! Individual anomaly checks. Each returns at most one flag.

pub mod duplicate;
pub mod gap;
pub mod round_number;
pub mod spike;
pub mod uniform_intervals;
