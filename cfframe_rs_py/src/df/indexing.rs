use super::{column_values, PyDataFrame};
use cfframe_bindings::df::{cell_to_py, extract_cell, ToPyResult};
use paste::paste;
use pyo3::prelude::*;

macro_rules! is_column_impl {
    ($suffix:ident) => {
        paste! {
            #[pymethods]
            impl PyDataFrame {
                fn [<is_ $suffix _column>](&self, col: usize) -> PyResult<bool> {
                    self.inner.[<is_ $suffix _column>](col).to_py()
                }
            }
        }
    };
}

is_column_impl!(int);
is_column_impl!(float);
is_column_impl!(bool);
is_column_impl!(string);

#[pymethods]
impl PyDataFrame {
    fn get(&self, py: Python, row: usize, col: usize) -> PyResult<PyObject> {
        let cell = self.inner.get_cell(row, col).to_py()?;
        Ok(cell_to_py(py, cell))
    }

    fn set(&mut self, row: usize, col: usize, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let cell = extract_cell(value)?;
        self.inner.set_cell(row, col, cell).to_py()
    }

    fn get_row(&self, row: usize) -> PyResult<PyDataFrame> {
        let inner = self.inner.get_row(row).to_py()?;
        Ok(PyDataFrame { inner })
    }

    fn query(&self, col: usize, value: &Bound<'_, PyAny>) -> PyResult<PyDataFrame> {
        let cell = extract_cell(value)?;
        let inner = self.inner.query(col, cell).to_py()?;
        Ok(PyDataFrame { inner })
    }

    fn values(&self, py: Python, col: usize) -> PyResult<PyObject> {
        let column = self.inner.get_column(col).to_py()?;
        Ok(column_values(py, column))
    }
}
