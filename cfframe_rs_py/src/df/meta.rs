use super::{PyColumn, PyDataFrame};
use cfframe_bindings::df::ToPyResult;
use cfframe_core::DataFrame;
use pyo3::prelude::*;

#[pymethods]
impl PyDataFrame {
    #[new]
    #[pyo3(signature = (columns=None))]
    fn new(columns: Option<Vec<PyColumn>>) -> Self {
        let columns = columns
            .unwrap_or_default()
            .into_iter()
            .map(|column| column.inner)
            .collect();
        PyDataFrame {
            inner: DataFrame::from_columns(columns),
        }
    }

    #[getter]
    fn nrow(&self) -> usize {
        self.inner.nrow()
    }

    #[getter]
    fn ncol(&self) -> usize {
        self.inner.ncol()
    }

    #[getter]
    fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    #[getter]
    fn headers(&self) -> Vec<Option<String>> {
        self.inner
            .get_headers()
            .into_iter()
            .map(|header| header.map(str::to_string))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.nrow()
    }

    fn __eq__(&self, other: PyRef<'_, PyDataFrame>) -> bool {
        self.inner == other.inner
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn get_header(&self, col: usize) -> PyResult<Option<String>> {
        let header = self.inner.get_header(col).to_py()?;
        Ok(header.map(str::to_string))
    }

    fn set_header(&mut self, col: usize, header: Option<String>) -> PyResult<()> {
        match header {
            Some(header) => self.inner.set_header(col, header).to_py(),
            None => self.inner.clear_header(col).to_py(),
        }
    }

    fn find_column(&self, header: &str) -> Option<usize> {
        self.inner.find_column(header)
    }

    fn column_type(&self, col: usize) -> PyResult<&'static str> {
        Ok(self.inner.column_type(col).to_py()?.name())
    }

    fn get_column(&self, col: usize) -> PyResult<PyColumn> {
        let column = self.inner.get_column(col).to_py()?;
        Ok(PyColumn {
            inner: column.clone(),
        })
    }

    fn set_column(&mut self, col: usize, column: PyColumn) -> PyResult<PyColumn> {
        let previous = self.inner.set_column(col, column.inner).to_py()?;
        Ok(PyColumn { inner: previous })
    }

    fn add_column(&mut self, index: usize, column: PyColumn) -> PyResult<()> {
        self.inner.add_column(index, column.inner).to_py()
    }

    fn push_column(&mut self, column: PyColumn) -> PyResult<()> {
        self.inner.push_column(column.inner).to_py()
    }

    fn remove_column(&mut self, col: usize) -> PyResult<PyColumn> {
        let removed = self.inner.remove_column(col).to_py()?;
        Ok(PyColumn { inner: removed })
    }
}
