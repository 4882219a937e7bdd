pub mod estimate;
pub mod format;
pub mod schedule;
