use super::DataFrame;
use crate::{
    df::Column,
    error::{DfError, DfResult},
};

impl DataFrame {
    /// creates a frame with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// builds a frame from pre-built columns
    ///
    /// columns shorter than the longest one are padded with their type's default
    /// value, so the resulting frame always satisfies the equal-length invariant.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let nrow = columns.iter().map(Column::size).max().unwrap_or(0);
        let mut columns = columns;
        for (i, column) in columns.iter_mut().enumerate() {
            if column.size() < nrow {
                tracing::debug!(
                    "padding column {} from {} to {} rows",
                    i,
                    column.size(),
                    nrow
                );
                column.pad_to(nrow);
            }
        }
        let df = Self { columns, nrow };
        df.debug_validate();
        df
    }

    #[inline]
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    #[inline]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// `(nrow, ncol)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrow, self.columns.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrow == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn get_column(&self, index: usize) -> DfResult<&Column> {
        self.check_col(index)?;
        Ok(&self.columns[index])
    }

    /// replaces the column at `index`, returning the previous one
    ///
    /// `column` must have the same variant as the replaced column, otherwise
    /// [`DfError::TypeMismatch`] is returned. A shorter `column` is padded to
    /// [`DataFrame::nrow`], a longer one is rejected with
    /// [`DfError::InvariantViolation`].
    pub fn set_column(&mut self, index: usize, column: Column) -> DfResult<Column> {
        self.check_col(index)?;
        let expected = self.columns[index].column_type();
        if column.column_type() != expected {
            return Err(DfError::type_mismatch(expected, column.column_type()));
        }
        let column = self.normalize(column)?;
        let previous = std::mem::replace(&mut self.columns[index], column);
        self.debug_validate();
        Ok(previous)
    }

    /// inserts `column` to the right of `index` (i.e. at `index + 1`)
    pub fn add_column(&mut self, index: usize, column: Column) -> DfResult<()> {
        self.check_col(index)?;
        let column = self.normalize(column)?;
        tracing::debug!("adding `{}` column at {}", column.column_type(), index + 1);
        self.columns.insert(index + 1, column);
        self.debug_validate();
        Ok(())
    }

    /// appends `column` as the last column
    ///
    /// on a frame without columns the column's length becomes the row count,
    /// otherwise it is normalized exactly like in [`DataFrame::add_column`].
    pub fn push_column(&mut self, column: Column) -> DfResult<()> {
        let column = if self.columns.is_empty() {
            self.nrow = column.size();
            column
        } else {
            self.normalize(column)?
        };
        tracing::debug!("pushing `{}` column", column.column_type());
        self.columns.push(column);
        self.debug_validate();
        Ok(())
    }

    /// removes the column at `col` and returns it, the row count is unchanged
    pub fn remove_column(&mut self, col: usize) -> DfResult<Column> {
        self.check_col(col)?;
        tracing::debug!("removing column {}", col);
        Ok(self.columns.remove(col))
    }

    pub fn get_header(&self, col: usize) -> DfResult<Option<&str>> {
        self.check_col(col)?;
        Ok(self.columns[col].get_header())
    }

    pub fn set_header(&mut self, col: usize, header: impl Into<String>) -> DfResult<()> {
        self.check_col(col)?;
        self.columns[col].set_header(header);
        Ok(())
    }

    pub fn clear_header(&mut self, col: usize) -> DfResult<()> {
        self.check_col(col)?;
        self.columns[col].clear_header();
        Ok(())
    }

    /// one entry per column, `None` for unnamed columns
    pub fn get_headers(&self) -> Vec<Option<&str>> {
        self.columns.iter().map(Column::get_header).collect()
    }

    /// index of the first column named `header`
    pub fn find_column(&self, header: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.get_header() == Some(header))
    }

    /// checks that every column holds exactly [`DataFrame::nrow`] cells
    pub fn validate(&self) -> DfResult<()> {
        for (i, column) in self.columns.iter().enumerate() {
            if column.size() != self.nrow {
                return Err(DfError::InvariantViolation(format!(
                    "column {} has {} rows, but the frame has {} rows",
                    i,
                    column.size(),
                    self.nrow
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn debug_validate(&self) {
        debug_assert_eq!(self.validate(), Ok(()));
    }

    pub(crate) fn check_col(&self, col: usize) -> DfResult<()> {
        let ncol = self.ncol();
        if col >= ncol {
            Err(DfError::column(col, ncol))
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_row(&self, row: usize) -> DfResult<()> {
        if row >= self.nrow {
            Err(DfError::row(row, self.nrow))
        } else {
            Ok(())
        }
    }

    fn normalize(&self, mut column: Column) -> DfResult<Column> {
        let size = column.size();
        if size > self.nrow {
            return Err(DfError::InvariantViolation(format!(
                "column has {} rows, which exceeds the {} rows of the frame",
                size, self.nrow
            )));
        }
        column.pad_to(self.nrow);
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::df::{frame::tests::get_test_df, ColumnType};

    #[test]
    fn test_empty() {
        let df = DataFrame::new();
        assert_eq!(df.shape(), (0, 0));
        assert!(df.is_empty());
        assert!(df.get_headers().is_empty());
        assert_eq!(df.get_column(0).unwrap_err(), DfError::column(0, 0));
        assert_eq!(DataFrame::from_columns(vec![]), df);
    }

    #[test]
    fn test_padding_on_construction() {
        let df = DataFrame::from_columns(vec![
            Column::from_ints([1, 2, 3]),
            Column::from_strings(["a", "b", "c", "d", "e"]),
            Column::from_bools([true, true, true, true]),
        ]);
        assert_eq!(df.shape(), (5, 3));
        df.validate().unwrap();
        assert_eq!(df.get_column(0).unwrap(), &Column::from_ints([1, 2, 3, 0, 0]));
        assert_eq!(
            df.get_column(2).unwrap(),
            &Column::from_bools([true, true, true, true, false])
        );
        assert_eq!(
            df.get_column(1).unwrap(),
            &Column::from_strings(["a", "b", "c", "d", "e"])
        );
    }

    #[test]
    fn test_headers() {
        let mut df = get_test_df();
        assert_eq!(
            df.get_headers(),
            vec![Some("id"), None, Some("flag"), Some("name")]
        );
        assert_eq!(df.get_header(1).unwrap(), None);
        df.set_header(1, "value").unwrap();
        assert_eq!(df.get_header(1).unwrap(), Some("value"));
        assert_eq!(df.find_column("value"), Some(1));
        assert_eq!(df.find_column("missing"), None);
        df.clear_header(0).unwrap();
        assert_eq!(df.get_header(0).unwrap(), None);
        assert!(df.set_header(4, "x").unwrap_err().is_index_out_of_bounds());
        assert!(df.get_header(4).unwrap_err().is_index_out_of_bounds());
    }

    #[test]
    fn test_set_column() {
        let mut df = get_test_df();
        let previous = df
            .set_column(1, Column::from_floats([9.5]).with_header("s"))
            .unwrap();
        assert_eq!(previous, Column::from_floats([1.5, 2.5, 3.5]));
        assert_eq!(df.shape(), (3, 4));
        assert!(df.is_float_column(1).unwrap());
        assert_eq!(df.get_float(0, 1).unwrap(), 9.5);
        assert_eq!(df.get_float(2, 1).unwrap(), 0.0);
        assert_eq!(df.get_header(1).unwrap(), Some("s"));

        let err = df
            .set_column(1, Column::from_floats([1.0, 2.0, 3.0, 4.0]))
            .unwrap_err();
        assert!(matches!(err, DfError::InvariantViolation(_)));
        assert_eq!(df.get_column(1).unwrap(), &Column::from_floats([9.5, 0.0, 0.0]));
        assert_eq!(
            df.set_column(4, Column::new(ColumnType::Int)).unwrap_err(),
            DfError::column(4, 4)
        );
    }

    #[test]
    fn test_set_column_keeps_variant() {
        let mut df = get_test_df();
        let before = df.clone();
        let err = df
            .set_column(1, Column::from_strings(["x"]).with_header("s"))
            .unwrap_err();
        assert_eq!(err, DfError::type_mismatch("float", "string"));
        assert!(err.is_type_mismatch());
        assert!(df.is_float_column(1).unwrap());
        assert_eq!(df, before);
        assert_eq!(df.get_headers(), before.get_headers());
        // checked before the length
        let err = df
            .set_column(0, Column::from_bools([true, false, true, true]))
            .unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(df, before);
    }

    #[test]
    fn test_add_column() {
        let mut df = get_test_df();
        df.add_column(0, Column::from_bools([true]).with_header("new"))
            .unwrap();
        assert_eq!(df.shape(), (3, 5));
        assert_eq!(
            df.get_headers(),
            vec![Some("id"), Some("new"), None, Some("flag"), Some("name")]
        );
        assert_eq!(
            df.get_column(1).unwrap(),
            &Column::from_bools([true, false, false])
        );

        df.add_column(4, Column::new(ColumnType::Float)).unwrap();
        assert_eq!(df.ncol(), 6);
        assert!(df.is_float_column(5).unwrap());

        assert_eq!(
            df.add_column(6, Column::new(ColumnType::Int)).unwrap_err(),
            DfError::column(6, 6)
        );
        assert!(DataFrame::new()
            .add_column(0, Column::from_ints([1]))
            .unwrap_err()
            .is_index_out_of_bounds());
        let err = df.add_column(0, Column::from_ints([1, 2, 3, 4])).unwrap_err();
        assert!(matches!(err, DfError::InvariantViolation(_)));
        assert_eq!(df.ncol(), 6);
    }

    #[test]
    fn test_push_column() {
        let mut df = DataFrame::new();
        df.push_column(Column::from_ints([1, 2])).unwrap();
        assert_eq!(df.shape(), (2, 1));
        df.push_column(Column::from_strings(["a"])).unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.get_string(1, 1).unwrap(), "");
        assert!(df.push_column(Column::from_ints([1, 2, 3])).is_err());
        assert_eq!(df.shape(), (2, 2));
    }

    #[test]
    fn test_remove_column() {
        let mut df = get_test_df();
        let removed = df.remove_column(1).unwrap();
        assert!(removed.is_float_column());
        assert_eq!(df.shape(), (3, 3));
        assert!(df.is_bool_column(1).unwrap());
        assert_eq!(df.get_header(1).unwrap(), Some("flag"));
        assert_eq!(df.remove_column(3).unwrap_err(), DfError::column(3, 3));
        while df.ncol() > 0 {
            df.remove_column(0).unwrap();
        }
        assert_eq!(df.nrow(), 3);
    }
}
