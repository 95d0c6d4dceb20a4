mod time_utils;

pub use time_utils::{AppInstant, format_clock_time};
