use cfframe_core::{Cell, DfError, DfResult};
use pyo3::{
    exceptions::{PyIndexError, PyTypeError, PyValueError},
    prelude::*,
    types::{PyBool, PyFloat, PyLong, PyString},
};

/// converts a Python object into a [`Cell`]
///
/// `bool` is checked before `int`, since Python booleans are also integers. An
/// `int` always becomes [`Cell::Int`], so it is rejected by `float` columns.
pub fn extract_cell(value: &Bound<'_, PyAny>) -> PyResult<Cell> {
    if value.is_instance_of::<PyBool>() {
        Ok(Cell::Bool(value.extract()?))
    } else if value.is_instance_of::<PyLong>() {
        Ok(Cell::Int(value.extract()?))
    } else if value.is_instance_of::<PyFloat>() {
        Ok(Cell::Float(value.extract()?))
    } else if value.is_instance_of::<PyString>() {
        Ok(Cell::String(value.extract()?))
    } else {
        Err(PyTypeError::new_err(format!(
            "unsupported cell value of type '{}'",
            value.get_type().name()?
        )))
    }
}

pub fn cell_to_py(py: Python, cell: Cell) -> PyObject {
    match cell {
        Cell::Int(v) => v.into_py(py),
        Cell::Float(v) => v.into_py(py),
        Cell::Bool(v) => v.into_py(py),
        Cell::String(v) => v.into_py(py),
    }
}

pub fn to_py_err(err: DfError) -> PyErr {
    let message = err.to_string();
    match err {
        DfError::IndexOutOfBounds { .. } => PyIndexError::new_err(message),
        DfError::TypeMismatch(_) => PyTypeError::new_err(message),
        DfError::InvariantViolation(_) | DfError::UnknownColumnType(_) => {
            PyValueError::new_err(message)
        }
    }
}

/// `?`-friendly conversion from [`DfResult`] to [`PyResult`]
pub trait ToPyResult<T> {
    fn to_py(self) -> PyResult<T>;
}

impl<T> ToPyResult<T> for DfResult<T> {
    fn to_py(self) -> PyResult<T> {
        self.map_err(to_py_err)
    }
}
