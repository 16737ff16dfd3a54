use super::PyDataFrame;
use cfframe_bindings::df::ToPyResult;
use pyo3::prelude::*;

#[pymethods]
impl PyDataFrame {
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

    fn insert(&mut self, row: usize, other: PyRef<'_, PyDataFrame>) -> PyResult<()> {
        self.inner.insert(row, &other.inner).to_py()
    }

    fn append(&mut self, other: PyRef<'_, PyDataFrame>) -> PyResult<()> {
        self.inner.append(&other.inner).to_py()
    }
}
