pub mod condition;
pub mod coordinate;
pub mod reports;
pub mod sample;
pub mod weather_condition;
