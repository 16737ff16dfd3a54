use super::PyDataFrame;
use cfframe_core::DisplayConfig;
use pyo3::prelude::*;

#[pymethods]
impl PyDataFrame {
    #[pyo3(signature = (float_precision=None, max_rows=None, column_spacing=1, min_column_width=1))]
    fn render(
        &self,
        float_precision: Option<usize>,
        max_rows: Option<usize>,
        column_spacing: usize,
        min_column_width: usize,
    ) -> String {
        let config = DisplayConfig {
            min_column_width,
            column_spacing,
            float_precision,
            max_rows,
        };
        self.inner.render(&config)
    }

    fn print(&self) {
        self.inner.print();
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}
