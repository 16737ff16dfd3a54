use super::DataFrame;
use crate::{
    df::{Cell, ColumnType, FloatDtype, IntDtype},
    error::DfResult,
};
use paste::paste;

// bounds are checked on the frame first, the column then checks the variant
macro_rules! typed_frame_accessors_impl {
    ($suffix:ident, $dtype:ty) => {
        paste! {
            pub fn [<get_ $suffix>](&self, row: usize, col: usize) -> DfResult<$dtype> {
                self.check_cell(row, col)?;
                self.columns[col].[<get_ $suffix>](row)
            }

            pub fn [<set_ $suffix>](&mut self, row: usize, col: usize, value: $dtype) -> DfResult<()> {
                self.check_cell(row, col)?;
                self.columns[col].[<set_ $suffix>](row, value)
            }

            pub fn [<is_ $suffix _column>](&self, col: usize) -> DfResult<bool> {
                self.check_col(col)?;
                Ok(self.columns[col].[<is_ $suffix _column>]())
            }
        }
    };
}

impl DataFrame {
    typed_frame_accessors_impl!(int, IntDtype);
    typed_frame_accessors_impl!(float, FloatDtype);
    typed_frame_accessors_impl!(bool, bool);

    pub fn get_string(&self, row: usize, col: usize) -> DfResult<&str> {
        self.check_cell(row, col)?;
        self.columns[col].get_string(row)
    }

    pub fn set_string(&mut self, row: usize, col: usize, value: impl Into<String>) -> DfResult<()> {
        self.check_cell(row, col)?;
        self.columns[col].set_string(row, value)
    }

    pub fn is_string_column(&self, col: usize) -> DfResult<bool> {
        self.check_col(col)?;
        Ok(self.columns[col].is_string_column())
    }

    pub fn column_type(&self, col: usize) -> DfResult<ColumnType> {
        self.check_col(col)?;
        Ok(self.columns[col].column_type())
    }

    pub fn get_cell(&self, row: usize, col: usize) -> DfResult<Cell> {
        self.check_cell(row, col)?;
        Ok(self.columns[col].cell_at(row))
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: impl Into<Cell>) -> DfResult<()> {
        self.check_cell(row, col)?;
        self.columns[col].set_cell(row, cell)
    }

    /// copies row `row` into a new, independent one-row frame
    pub fn get_row(&self, row: usize) -> DfResult<DataFrame> {
        self.check_row(row)?;
        Ok(self.take_rows(&[row]))
    }

    /// copies the rows at `indices` (in that order) into a new frame
    pub(crate) fn take_rows(&self, indices: &[usize]) -> DataFrame {
        let columns = self
            .columns
            .iter()
            .map(|column| column.take(indices))
            .collect();
        let df = DataFrame {
            columns,
            nrow: indices.len(),
        };
        df.debug_validate();
        df
    }

    fn check_cell(&self, row: usize, col: usize) -> DfResult<()> {
        self.check_row(row)?;
        self.check_col(col)
    }
}
