pub mod db;
pub mod fs;
pub mod lookup;
pub mod time;

pub use lookup::OpenFoodFactsClient;
pub use time::{MonotonicClock, SystemClock};
