//! Python classes wrapping [`cfframe_core::Column`] and [`cfframe_core::DataFrame`].
//!
//! # Design
//!
//! Both classes simply own their core counterpart, so every method is a thin
//! wrapper which converts arguments with [`cfframe_bindings::df`] and maps
//! [`cfframe_core::DfError`]s to Python exceptions:
//!
//! - `IndexOutOfBounds` -> `IndexError`
//! - `TypeMismatch` -> `TypeError`
//! - everything else -> `ValueError`
//!
//! Cells are converted by their Python type alone: an `int` never fills a
//! `float` column, and `DataFrame.set_column` keeps the replaced column's
//! dtype. Both raise `TypeError` on a mismatch.
//!
//! Values are always copied when crossing the boundary (`get_column`, `get_row`,
//! `query`, ...), so Python never holds a view into a frame's storage.

use cfframe_core::{Column, ColumnData, DataFrame};
use numpy::ToPyArray;
use pyo3::{prelude::*, types::PyList};

mod column;
mod display;
mod indexing;
mod meta;
mod ops;

#[pyclass(name = "Column", module = "cfframe._rs.df")]
#[derive(Clone)]
pub struct PyColumn {
    pub inner: Column,
}

#[pyclass(name = "DataFrame", module = "cfframe._rs.df")]
#[derive(Clone)]
pub struct PyDataFrame {
    pub inner: DataFrame,
}

/// `numpy` arrays for `int`, `float` and `bool` columns, a `list` of `str` otherwise
pub(crate) fn column_values(py: Python, column: &Column) -> PyObject {
    match column.data() {
        ColumnData::Int(values) => values.to_pyarray_bound(py).into_py(py),
        ColumnData::Float(values) => values.to_pyarray_bound(py).into_py(py),
        ColumnData::Bool(values) => values.to_pyarray_bound(py).into_py(py),
        ColumnData::String(values) => PyList::new_bound(py, values).into_py(py),
    }
}
