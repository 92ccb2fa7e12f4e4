pub mod api_utils;
pub mod fetch_guard;
pub mod number_format;
pub mod sector;
