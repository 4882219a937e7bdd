pub mod estimate;
pub mod schedule;
pub mod services;
