//! Date range selection engine used by every period picker in the dashboard.
//!
//! - [`calendar`] builds month grids
//! - [`selection`] is the two-click range state machine
//! - [`presets`] resolves named quick-pick ranges from the latest data date
//! - [`controller`] ties them together with open/apply/cancel/clear

pub mod calendar;
pub mod config;
pub mod controller;
pub mod error;
pub mod locale;
pub mod presets;
pub mod selection;

pub use calendar::{build_month_grid, MonthGrid, YearMonth};
pub use config::{CommitMode, PickerConfig};
pub use controller::{format_range_label, DayState, PickerController};
pub use error::DateRangeError;
pub use locale::PickerLocale;
pub use presets::{resolve_predefined_ranges, PredefinedRangeOption, PresetKind};
pub use selection::RangeSelection;
