mod df;
use cfframe_bindings::register_submodule;
use cfframe_core::ColumnType;
use pyo3::{prelude::*, py_run};

#[pymodule]
fn cfframe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let rs_module = register_submodule!(m, "cfframe._rs");
    let df_module = register_submodule!(rs_module, "cfframe._rs.df");

    let column_types: Vec<&str> = ColumnType::ALL.iter().map(ColumnType::name).collect();
    df_module.add("COLUMN_TYPES", column_types)?;
    df_module.add_class::<df::PyColumn>()?;
    df_module.add_class::<df::PyDataFrame>()?;

    Ok(())
}
