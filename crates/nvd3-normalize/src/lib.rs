//! Teardown of tabular data into chart-ready point sets.
//!
//! - **teardown**: `normalize_index`, `normalize_series`, `normalize_table`
//!   and the `normalize` dispatcher
//! - **json**: shape inspection of untyped JSON input
//! - **frame**: polars `DataFrame`/`Column` adapter

pub mod frame;
pub mod json;
pub mod teardown;

pub use frame::{
    index_from_column, normalize_frame, series_from_column, table_from_frame, values_from_column,
};
pub use json::{normalize_json, tabular_from_json, tabular_from_json_str};
pub use teardown::{Normalized, normalize, normalize_index, normalize_series, normalize_table};
