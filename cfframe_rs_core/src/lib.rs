//! # cfframe_core
//!
//! a small, column-oriented dataframe with a closed set of cell types
//! (`int`, `float`, `bool` and `string`).
//!
//! the entry points are [`df::Column`] and [`df::DataFrame`]; everything that
//! can fail returns an [`error::DfResult`].

pub mod df;
pub mod error;
pub mod toolkit;

pub use df::{Cell, Column, ColumnData, ColumnType, DataFrame, DisplayConfig};
pub use error::{Axis, DfError, DfResult};
