pub mod reports;
pub mod snapshot;
