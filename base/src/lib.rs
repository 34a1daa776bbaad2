pub mod database;
pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "booking";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// logging constants
pub const BOOKING_LOGLEVEL: &str = "BOOKING_LOGLEVEL";
