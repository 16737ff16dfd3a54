use super::{Cell, Column, ColumnData, ColumnType};
use crate::{
    df::{FloatDtype, IntDtype},
    error::{DfError, DfResult},
};
use paste::paste;

// the variant is checked before the row, so a wrong accessor always reports
// `TypeMismatch`, whatever row it was called with
macro_rules! typed_accessors_impl {
    ($suffix:ident, $variant:ident, $dtype:ty) => {
        paste! {
            pub fn [<get_ $suffix>](&self, row: usize) -> DfResult<$dtype> {
                match &self.data {
                    ColumnData::$variant(values) => values
                        .get(row)
                        .copied()
                        .ok_or_else(|| DfError::row(row, values.len())),
                    _ => Err(self.mismatch(ColumnType::$variant)),
                }
            }

            pub fn [<set_ $suffix>](&mut self, row: usize, value: $dtype) -> DfResult<()> {
                let actual = self.column_type();
                match &mut self.data {
                    ColumnData::$variant(values) => {
                        let len = values.len();
                        let cell = values.get_mut(row).ok_or_else(|| DfError::row(row, len))?;
                        *cell = value;
                        Ok(())
                    }
                    _ => Err(DfError::type_mismatch(ColumnType::$variant, actual)),
                }
            }

            #[inline]
            pub fn [<is_ $suffix _column>](&self) -> bool {
                matches!(self.data, ColumnData::$variant(_))
            }
        }
    };
}

impl Column {
    typed_accessors_impl!(int, Int, IntDtype);
    typed_accessors_impl!(float, Float, FloatDtype);
    typed_accessors_impl!(bool, Bool, bool);

    pub fn get_string(&self, row: usize) -> DfResult<&str> {
        match &self.data {
            ColumnData::String(values) => values
                .get(row)
                .map(String::as_str)
                .ok_or_else(|| DfError::row(row, values.len())),
            _ => Err(self.mismatch(ColumnType::String)),
        }
    }

    pub fn set_string(&mut self, row: usize, value: impl Into<String>) -> DfResult<()> {
        let actual = self.column_type();
        match &mut self.data {
            ColumnData::String(values) => {
                let len = values.len();
                let cell = values.get_mut(row).ok_or_else(|| DfError::row(row, len))?;
                *cell = value.into();
                Ok(())
            }
            _ => Err(DfError::type_mismatch(ColumnType::String, actual)),
        }
    }

    #[inline]
    pub fn is_string_column(&self) -> bool {
        matches!(self.data, ColumnData::String(_))
    }

    pub fn get_cell(&self, row: usize) -> DfResult<Cell> {
        self.check_row(row)?;
        Ok(self.cell_at(row))
    }

    /// dispatches to the typed setter matching the variant of `cell`
    pub fn set_cell(&mut self, row: usize, cell: impl Into<Cell>) -> DfResult<()> {
        match cell.into() {
            Cell::Int(v) => self.set_int(row, v),
            Cell::Float(v) => self.set_float(row, v),
            Cell::Bool(v) => self.set_bool(row, v),
            Cell::String(v) => self.set_string(row, v),
        }
    }

    pub(crate) fn check_row(&self, row: usize) -> DfResult<()> {
        let size = self.size();
        if row >= size {
            Err(DfError::row(row, size))
        } else {
            Ok(())
        }
    }

    /// caller must make sure that `row < self.size()`
    pub(crate) fn cell_at(&self, row: usize) -> Cell {
        match &self.data {
            ColumnData::Int(values) => Cell::Int(values[row]),
            ColumnData::Float(values) => Cell::Float(values[row]),
            ColumnData::Bool(values) => Cell::Bool(values[row]),
            ColumnData::String(values) => Cell::String(values[row].clone()),
        }
    }

    pub(crate) fn mismatch(&self, expected: ColumnType) -> DfError {
        DfError::type_mismatch(expected, self.column_type())
    }
}
