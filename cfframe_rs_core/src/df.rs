//! # df
//!
//! a DataFrame module built on top of independently typed columns
//!
//! a [`DataFrame`] owns an ordered list of [`Column`]s which always share the
//! same length. every column holds exactly one of the four [`ColumnType`]s, and
//! code that needs to know the concrete type branches on the column's tag
//! (`is_int_column`, `column_type`, ...) instead of casting.

pub type IntDtype = i32;
pub type FloatDtype = f32;

pub mod column;
pub mod frame;

pub use column::{Cell, Column, ColumnData, ColumnType};
pub use frame::{DataFrame, DisplayConfig};
