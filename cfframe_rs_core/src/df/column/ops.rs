use super::{Cell, Column, ColumnData};
use crate::error::{DfError, DfResult};
use itertools::Itertools;

fn positions_of<T: PartialEq>(values: &[T], target: &T) -> Vec<usize> {
    values.iter().positions(|value| value == target).collect()
}

impl Column {
    /// appends a cell holding the default value of this column's type
    pub fn add_row(&mut self) {
        let size = self.size();
        self.insert_default(size);
    }

    /// inserts a default cell at `row`, shifting the following cells down
    ///
    /// `row == self.size()` is allowed and behaves like [`Column::add_row`].
    pub fn add_row_at(&mut self, row: usize) -> DfResult<()> {
        let size = self.size();
        if row > size {
            return Err(DfError::row(row, size));
        }
        self.insert_default(row);
        Ok(())
    }

    pub fn remove_row(&mut self, row: usize) -> DfResult<()> {
        self.check_row(row)?;
        self.remove_at(row);
        Ok(())
    }

    /// appends `cell`, which must match this column's type
    pub fn push(&mut self, cell: impl Into<Cell>) -> DfResult<()> {
        let actual = self.column_type();
        match (&mut self.data, cell.into()) {
            (ColumnData::Int(values), Cell::Int(v)) => values.push(v),
            (ColumnData::Float(values), Cell::Float(v)) => values.push(v),
            (ColumnData::Bool(values), Cell::Bool(v)) => values.push(v),
            (ColumnData::String(values), Cell::String(v)) => values.push(v),
            (_, cell) => return Err(DfError::type_mismatch(cell.column_type(), actual)),
        }
        Ok(())
    }

    /// returns the (ordered) row indices whose cell equals `target`
    pub fn positions(&self, target: &Cell) -> DfResult<Vec<usize>> {
        match (&self.data, target) {
            (ColumnData::Int(values), Cell::Int(v)) => Ok(positions_of(values, v)),
            (ColumnData::Float(values), Cell::Float(v)) => Ok(positions_of(values, v)),
            (ColumnData::Bool(values), Cell::Bool(v)) => Ok(positions_of(values, v)),
            (ColumnData::String(values), Cell::String(v)) => Ok(positions_of(values, v)),
            (_, target) => Err(self.mismatch(target.column_type())),
        }
    }

    pub(crate) fn insert_default(&mut self, at: usize) {
        dispatch!(&mut self.data, values => values.insert(at, Default::default()))
    }

    pub(crate) fn remove_at(&mut self, at: usize) {
        dispatch!(&mut self.data, values => {
            values.remove(at);
        })
    }

    /// grows the column with default cells until it holds `len` cells
    pub(crate) fn pad_to(&mut self, len: usize) {
        if self.size() < len {
            dispatch!(&mut self.data, values => values.resize(len, Default::default()))
        }
    }

    /// copies the cells at `indices` (in that order) into a fresh column with the same header
    pub(crate) fn take(&self, indices: &[usize]) -> Column {
        let data = dispatch_map!(&self.data, values => {
            indices.iter().map(|&i| values[i].clone()).collect()
        });
        Column {
            header: self.header.clone(),
            data,
        }
    }

    /// copies every cell of `other` into this column, starting at `at`
    pub(crate) fn splice_from(&mut self, at: usize, other: &Column) -> DfResult<()> {
        let expected = self.column_type();
        match (&mut self.data, &other.data) {
            (ColumnData::Int(values), ColumnData::Int(incoming)) => {
                values.splice(at..at, incoming.iter().copied());
            }
            (ColumnData::Float(values), ColumnData::Float(incoming)) => {
                values.splice(at..at, incoming.iter().copied());
            }
            (ColumnData::Bool(values), ColumnData::Bool(incoming)) => {
                values.splice(at..at, incoming.iter().copied());
            }
            (ColumnData::String(values), ColumnData::String(incoming)) => {
                values.splice(at..at, incoming.iter().cloned());
            }
            (_, incoming) => return Err(DfError::type_mismatch(expected, incoming.column_type())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::df::ColumnType;

    #[test]
    fn test_add_row() {
        let mut column = Column::from_ints([1, 2]);
        column.add_row();
        assert_eq!(column, Column::from_ints([1, 2, 0]));
        column.add_row_at(0).unwrap();
        assert_eq!(column, Column::from_ints([0, 1, 2, 0]));
        column.add_row_at(4).unwrap();
        assert_eq!(column.size(), 5);
        assert_eq!(column.add_row_at(6).unwrap_err(), DfError::row(6, 5));
        assert_eq!(column.size(), 5);

        let mut column = Column::new(ColumnType::String);
        column.add_row();
        assert_eq!(column.get_string(0).unwrap(), "");
        let mut column = Column::new(ColumnType::Bool);
        column.add_row();
        assert!(!column.get_bool(0).unwrap());
        let mut column = Column::new(ColumnType::Float);
        column.add_row();
        assert_eq!(column.get_float(0).unwrap(), 0.0);
    }

    #[test]
    fn test_remove_row() {
        let mut column = Column::from_strings(["a", "b", "c"]);
        column.remove_row(1).unwrap();
        assert_eq!(column, Column::from_strings(["a", "c"]));
        assert_eq!(column.remove_row(2).unwrap_err(), DfError::row(2, 2));
        column.remove_row(1).unwrap();
        column.remove_row(0).unwrap();
        assert!(column.is_empty());
        assert!(column.remove_row(0).unwrap_err().is_index_out_of_bounds());
    }

    #[test]
    fn test_push() {
        let mut column = Column::new(ColumnType::Int);
        column.push(3).unwrap();
        column.push(Cell::Int(4)).unwrap();
        assert_eq!(column, Column::from_ints([3, 4]));
        assert_eq!(
            column.push("x").unwrap_err(),
            DfError::type_mismatch(ColumnType::String, ColumnType::Int)
        );
        assert_eq!(column.size(), 2);
    }

    #[test]
    fn test_positions() {
        let column = Column::from_strings(["a", "b", "a", "c"]);
        assert_eq!(column.positions(&Cell::from("a")).unwrap(), vec![0, 2]);
        assert!(column.positions(&Cell::from("z")).unwrap().is_empty());
        assert!(column.positions(&Cell::Int(1)).unwrap_err().is_type_mismatch());

        let column = Column::from_floats([0.5, f32::NAN, 0.5]);
        assert_eq!(column.positions(&Cell::Float(0.5)).unwrap(), vec![0, 2]);
        assert!(column.positions(&Cell::Float(f32::NAN)).unwrap().is_empty());
    }

    #[test]
    fn test_take_and_pad() {
        let column = Column::from_bools([true, false, true]).with_header("flag");
        let taken = column.take(&[2, 1]);
        assert_eq!(taken, Column::from_bools([true, false]));
        assert_eq!(taken.get_header(), Some("flag"));

        let mut column = Column::from_ints([7]);
        column.pad_to(3);
        assert_eq!(column, Column::from_ints([7, 0, 0]));
        column.pad_to(1);
        assert_eq!(column.size(), 3, "padding never shrinks a column");
    }

    #[test]
    fn test_splice_from() {
        let mut column = Column::from_strings(["a", "d"]);
        column
            .splice_from(1, &Column::from_strings(["b", "c"]))
            .unwrap();
        assert_eq!(column, Column::from_strings(["a", "b", "c", "d"]));
        assert!(column
            .splice_from(0, &Column::from_ints([1]))
            .unwrap_err()
            .is_type_mismatch());
        assert_eq!(column.size(), 4);
    }
}
