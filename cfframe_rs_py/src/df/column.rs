use super::{column_values, PyColumn};
use cfframe_bindings::df::{cell_to_py, extract_cell, ToPyResult};
use cfframe_core::{Column, ColumnType};
use pyo3::prelude::*;

#[pymethods]
impl PyColumn {
    #[new]
    #[pyo3(signature = (dtype, values=None, header=None))]
    fn new(
        dtype: &str,
        values: Option<Vec<Bound<'_, PyAny>>>,
        header: Option<String>,
    ) -> PyResult<Self> {
        let ty = dtype.parse::<ColumnType>().to_py()?;
        let mut inner = Column::new(ty);
        for value in values.unwrap_or_default() {
            inner.push(extract_cell(&value)?).to_py()?;
        }
        if let Some(header) = header {
            inner.set_header(header);
        }
        Ok(Self { inner })
    }

    #[getter]
    fn dtype(&self) -> &'static str {
        self.inner.column_type().name()
    }

    #[getter]
    fn get_header(&self) -> Option<String> {
        self.inner.get_header().map(str::to_string)
    }

    #[setter]
    fn set_header(&mut self, header: Option<String>) {
        match header {
            Some(header) => self.inner.set_header(header),
            None => self.inner.clear_header(),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.size()
    }

    fn __eq__(&self, other: PyRef<'_, PyColumn>) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!(
            "Column(dtype={}, header={:?}, size={})",
            self.inner.column_type(),
            self.inner.get_header(),
            self.inner.size()
        )
    }

    fn get(&self, py: Python, row: usize) -> PyResult<PyObject> {
        let cell = self.inner.get_cell(row).to_py()?;
        Ok(cell_to_py(py, cell))
    }

    fn set(&mut self, row: usize, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let cell = extract_cell(value)?;
        self.inner.set_cell(row, cell).to_py()
    }

    #[pyo3(signature = (at=None))]
    fn add_row(&mut self, at: Option<usize>) -> PyResult<()> {
        match at {
            Some(at) => self.inner.add_row_at(at).to_py(),
            None => {
                self.inner.add_row();
                Ok(())
            }
        }
    }

    fn remove_row(&mut self, row: usize) -> PyResult<()> {
        self.inner.remove_row(row).to_py()
    }

    fn values(&self, py: Python) -> PyObject {
        column_values(py, &self.inner)
    }
}
