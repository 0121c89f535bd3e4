pub mod date_range_picker;
