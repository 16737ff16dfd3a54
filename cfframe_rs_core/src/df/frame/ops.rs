use super::DataFrame;
use crate::{
    df::Cell,
    error::{DfError, DfResult},
};
use itertools::izip;

impl DataFrame {
    /// appends a row of default values to every column
    pub fn add_row(&mut self) {
        let nrow = self.nrow;
        self.insert_default_row(nrow);
    }

    /// inserts a row of default values at `row`, shifting the following rows down
    ///
    /// `row == self.nrow()` is allowed and behaves like [`DataFrame::add_row`].
    pub fn add_row_at(&mut self, row: usize) -> DfResult<()> {
        if row > self.nrow {
            return Err(DfError::row(row, self.nrow));
        }
        self.insert_default_row(row);
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) -> DfResult<()> {
        self.check_row(row)?;
        tracing::debug!("removing row {}", row);
        self.columns
            .iter_mut()
            .for_each(|column| column.remove_at(row));
        self.nrow -= 1;
        self.debug_validate();
        Ok(())
    }

    /// splices the rows of `other` right below `row`
    ///
    /// `other` must have the same number of columns as `self`, with matching
    /// types at every index. the cells are copied, so `other` can be used (and
    /// mutated) independently afterwards.
    pub fn insert(&mut self, row: usize, other: &DataFrame) -> DfResult<()> {
        self.check_row(row)?;
        self.check_compatible(other)?;
        self.splice_rows(row + 1, other)
    }

    /// concatenates the rows of `other` after the last row of `self`
    ///
    /// the compatibility rules are the same as [`DataFrame::insert`], but this
    /// also works on frames without any rows.
    pub fn append(&mut self, other: &DataFrame) -> DfResult<()> {
        self.check_compatible(other)?;
        self.splice_rows(self.nrow, other)
    }

    /// returns a new frame holding copies of every row whose cell at `col`
    /// equals `value`, in their original order
    ///
    /// `value` must have the same type as the column. floats are compared
    /// exactly.
    pub fn query(&self, col: usize, value: impl Into<Cell>) -> DfResult<DataFrame> {
        self.check_col(col)?;
        let value = value.into();
        let positions = self.columns[col].positions(&value)?;
        tracing::trace!(
            "query on column {} matched {} of {} rows",
            col,
            positions.len(),
            self.nrow
        );
        Ok(self.take_rows(&positions))
    }

    fn insert_default_row(&mut self, at: usize) {
        tracing::debug!("adding row at {}", at);
        self.columns
            .iter_mut()
            .for_each(|column| column.insert_default(at));
        self.nrow += 1;
        self.debug_validate();
    }

    fn check_compatible(&self, other: &DataFrame) -> DfResult<()> {
        if self.ncol() != other.ncol() {
            return Err(DfError::TypeMismatch(format!(
                "cannot merge a frame with {} columns into a frame with {} columns",
                other.ncol(),
                self.ncol()
            )));
        }
        for (i, (column, incoming)) in self.columns.iter().zip(&other.columns).enumerate() {
            if column.column_type() != incoming.column_type() {
                return Err(DfError::TypeMismatch(format!(
                    "column {} is `{}`, but the incoming column is `{}`",
                    i,
                    column.column_type(),
                    incoming.column_type()
                )));
            }
        }
        Ok(())
    }

    fn splice_rows(&mut self, at: usize, other: &DataFrame) -> DfResult<()> {
        tracing::debug!("splicing {} rows at {}", other.nrow, at);
        // types are checked in `check_compatible`, so no column can fail halfway
        for (column, incoming) in izip!(self.columns.iter_mut(), other.columns.iter()) {
            column.splice_from(at, incoming)?;
        }
        self.nrow += other.nrow;
        self.debug_validate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::df::{frame::tests::get_test_df, Column, ColumnType};

    #[test]
    fn test_add_row() {
        let mut df = DataFrame::from_columns(vec![
            Column::from_ints([1, 2]),
            Column::from_strings(["a", "b"]),
        ]);
        df.add_row();
        assert_eq!(df.nrow(), 3);
        assert_eq!(df.get_int(2, 0).unwrap(), 0);
        assert_eq!(df.get_string(2, 1).unwrap(), "");

        df.add_row_at(0).unwrap();
        assert_eq!(df.nrow(), 4);
        assert_eq!(df.get_column(0).unwrap(), &Column::from_ints([0, 1, 2, 0]));
        df.add_row_at(4).unwrap();
        assert_eq!(df.nrow(), 5);
        assert_eq!(df.add_row_at(6).unwrap_err(), DfError::row(6, 5));
        assert_eq!(df.nrow(), 5);
        df.validate().unwrap();
    }

    #[test]
    fn test_add_then_remove_restores() {
        let df = get_test_df();
        let mut other = df.clone();
        other.add_row();
        other.remove_row(other.nrow() - 1).unwrap();
        assert_eq!(other, df);
        assert_eq!(other.get_headers(), df.get_headers());
    }

    #[test]
    fn test_remove_row() {
        let mut df = get_test_df();
        df.remove_row(0).unwrap();
        assert_eq!(df.shape(), (2, 4));
        assert_eq!(df.get_int(0, 0).unwrap(), 20);
        assert_eq!(df.get_string(1, 3).unwrap(), "a");
        assert_eq!(df.remove_row(2).unwrap_err(), DfError::row(2, 2));
        df.remove_row(1).unwrap();
        df.remove_row(0).unwrap();
        assert!(df.is_empty());
        assert_eq!(df.ncol(), 4);
        df.validate().unwrap();
    }

    #[test]
    fn test_insert() {
        let mut df = DataFrame::from_columns(vec![
            Column::from_ints([12, 14]),
            Column::from_floats([1.2, 2.0]),
            Column::from_bools([true, false]),
        ]);
        let mut other = DataFrame::from_columns(vec![
            Column::from_ints([18]),
            Column::from_floats([3.2]),
            Column::from_bools([false]),
        ]);
        df.insert(0, &other).unwrap();
        let expected = DataFrame::from_columns(vec![
            Column::from_ints([12, 18, 14]),
            Column::from_floats([1.2, 3.2, 2.0]),
            Column::from_bools([true, false, false]),
        ]);
        assert_eq!(df, expected);

        other.set_int(0, 0, 0).unwrap();
        assert_eq!(df.get_int(1, 0).unwrap(), 18, "inserted cells are copies");

        df.insert(2, &other).unwrap();
        assert_eq!(df.nrow(), 4);
        assert_eq!(df.get_int(3, 0).unwrap(), 0);
        assert_eq!(df.insert(4, &other).unwrap_err(), DfError::row(4, 4));
    }

    #[test]
    fn test_insert_type_mismatch() {
        let mut df = get_test_df();
        let fewer = DataFrame::from_columns(vec![Column::from_ints([1])]);
        assert!(df.insert(0, &fewer).unwrap_err().is_type_mismatch());

        let mut swapped = df.get_row(0).unwrap();
        swapped.remove_column(1).unwrap();
        swapped.add_column(0, Column::from_ints([1])).unwrap();
        assert!(df.insert(0, &swapped).unwrap_err().is_type_mismatch());
        assert!(df.append(&swapped).unwrap_err().is_type_mismatch());
        assert_eq!(df, get_test_df());
    }

    #[test]
    fn test_append() {
        let mut df = DataFrame::from_columns(vec![
            Column::new(ColumnType::Int),
            Column::new(ColumnType::String),
        ]);
        assert!(df.insert(0, &df.clone()).unwrap_err().is_index_out_of_bounds());
        let other = DataFrame::from_columns(vec![
            Column::from_ints([1, 2]),
            Column::from_strings(["x", "y"]),
        ]);
        df.append(&other).unwrap();
        df.append(&other).unwrap();
        assert_eq!(df.nrow(), 4);
        assert_eq!(
            df.get_column(1).unwrap(),
            &Column::from_strings(["x", "y", "x", "y"])
        );
    }

    #[test]
    fn test_query() {
        let df = DataFrame::from_columns(vec![
            Column::from_ints([10, 20, 30]),
            Column::from_strings(["a", "b", "a"]),
        ]);
        let result = df.query(1, "a").unwrap();
        assert_eq!(result.shape(), (2, 2));
        assert_eq!(result.get_column(0).unwrap(), &Column::from_ints([10, 30]));
        assert_eq!(result.get_column(1).unwrap(), &Column::from_strings(["a", "a"]));

        assert_eq!(df.query(0, 20).unwrap().get_int(0, 0).unwrap(), 20);
        let empty = df.query(0, 25).unwrap();
        assert_eq!(empty.shape(), (0, 2));
        assert!(empty.is_string_column(1).unwrap());
    }

    #[test]
    fn test_query_all_types() {
        let df = get_test_df();
        assert_eq!(df.query(1, 2.5f32).unwrap().nrow(), 1);
        let flagged = df.query(2, true).unwrap();
        assert_eq!(flagged.get_column(0).unwrap(), &Column::from_ints([10, 30]));
        assert_eq!(flagged.get_headers(), df.get_headers());
        assert_eq!(df.query(3, "c").unwrap().nrow(), 0);
    }

    #[test]
    fn test_query_errors() {
        let df = get_test_df();
        assert_eq!(df.query(4, 1).unwrap_err(), DfError::column(4, 4));
        assert!(df.query(0, "10").unwrap_err().is_type_mismatch());
        assert!(df.query(1, 2).unwrap_err().is_type_mismatch());
        assert!(df.query(3, false).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_query_result_is_independent() {
        let df = get_test_df();
        let mut result = df.query(3, "a").unwrap();
        result.set_int(0, 0, 0).unwrap();
        result.add_row();
        assert_eq!(df, get_test_df());
    }
}
