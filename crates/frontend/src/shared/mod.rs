pub mod api_utils;
pub mod components;
pub mod date_range;
pub mod date_utils;
