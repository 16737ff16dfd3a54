use super::{Column, ColumnData, ColumnType};
use crate::df::{FloatDtype, IntDtype};

macro_rules! column_constructor_impl {
    ($name:ident, $variant:ident, $dtype:ty) => {
        pub fn $name(values: impl IntoIterator<Item = $dtype>) -> Self {
            Self::from_data(ColumnData::$variant(values.into_iter().collect()))
        }
    };
}

impl Column {
    /// creates an empty, unnamed column of the given type
    pub fn new(ty: ColumnType) -> Self {
        let data = match ty {
            ColumnType::Int => ColumnData::Int(Vec::new()),
            ColumnType::Float => ColumnData::Float(Vec::new()),
            ColumnType::Bool => ColumnData::Bool(Vec::new()),
            ColumnType::String => ColumnData::String(Vec::new()),
        };
        Self::from_data(data)
    }

    pub fn from_data(data: ColumnData) -> Self {
        Self { header: None, data }
    }

    column_constructor_impl!(from_ints, Int, IntDtype);
    column_constructor_impl!(from_floats, Float, FloatDtype);
    column_constructor_impl!(from_bools, Bool, bool);

    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::from_data(ColumnData::String(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[inline]
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    #[inline]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn into_data(self) -> ColumnData {
        self.data
    }

    /// number of cells, i.e. the row count of this column
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// returns `None` if the header was never set, or has been cleared
    pub fn get_header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = Some(header.into());
    }

    pub fn clear_header(&mut self) {
        self.header = None;
    }
}

macro_rules! column_from_vec_impl {
    ($variant:ident, $dtype:ty) => {
        impl From<Vec<$dtype>> for Column {
            fn from(values: Vec<$dtype>) -> Self {
                Column::from_data(ColumnData::$variant(values))
            }
        }
    };
}

column_from_vec_impl!(Int, IntDtype);
column_from_vec_impl!(Float, FloatDtype);
column_from_vec_impl!(Bool, bool);
column_from_vec_impl!(String, String);

impl From<ColumnData> for Column {
    fn from(data: ColumnData) -> Self {
        Column::from_data(data)
    }
}
