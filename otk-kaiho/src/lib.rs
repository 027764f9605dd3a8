pub mod date_range;
pub mod error;
pub mod observed;
pub mod prediction;
pub mod record;
pub mod station;
