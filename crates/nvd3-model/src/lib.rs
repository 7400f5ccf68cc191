//! Data model shared by the NVD3 normalizer and chart crates.
//!
//! - **scalar**: numeric cells that keep integer/float identity
//! - **index**: flat, temporal and composite row labels
//! - **table**: labeled series, tables and the [`TabularData`] input union
//! - **points**: canonical `{name, x, y}` point sets

pub mod error;
pub mod index;
pub mod points;
pub mod scalar;
pub mod table;

pub use error::{Nvd3Error, Result};
pub use index::{Index, NANOS_PER_MILLI};
pub use points::PointSet;
pub use scalar::Scalar;
pub use table::{LabeledSeries, Table, TabularData, Values};
