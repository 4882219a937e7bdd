pub mod catalog;
pub mod packages;
