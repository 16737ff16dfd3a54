use super::{FloatDtype, IntDtype};
use crate::error::DfError;
use std::{fmt, str::FromStr};

/// runs `$body` against the typed storage of `$data`, whatever its variant
macro_rules! dispatch {
    ($data:expr, $values:ident => $body:expr) => {
        match $data {
            ColumnData::Int($values) => $body,
            ColumnData::Float($values) => $body,
            ColumnData::Bool($values) => $body,
            ColumnData::String($values) => $body,
        }
    };
}

/// same as `dispatch!`, but wraps the result back into the same variant
macro_rules! dispatch_map {
    ($data:expr, $values:ident => $body:expr) => {
        match $data {
            ColumnData::Int($values) => ColumnData::Int($body),
            ColumnData::Float($values) => ColumnData::Float($body),
            ColumnData::Bool($values) => ColumnData::Bool($body),
            ColumnData::String($values) => ColumnData::String($body),
        }
    };
}

mod indexing;
mod meta;
mod ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    String,
}

impl ColumnType {
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Bool,
        ColumnType::String,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
            ColumnType::String => "string",
        }
    }

    /// the value used to fill newly created cells
    pub fn default_cell(&self) -> Cell {
        match self {
            ColumnType::Int => Cell::Int(0),
            ColumnType::Float => Cell::Float(0.0),
            ColumnType::Bool => Cell::Bool(false),
            ColumnType::String => Cell::String(String::new()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = DfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(ColumnType::Int),
            "float" => Ok(ColumnType::Float),
            "bool" | "boolean" => Ok(ColumnType::Bool),
            "string" | "str" | "text" => Ok(ColumnType::String),
            _ => Err(DfError::UnknownColumnType(s.to_string())),
        }
    }
}

/// a single value of any of the supported column types
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(IntDtype),
    Float(FloatDtype),
    Bool(bool),
    String(String),
}

impl Cell {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Int(_) => ColumnType::Int,
            Cell::Float(_) => ColumnType::Float,
            Cell::Bool(_) => ColumnType::Bool,
            Cell::String(_) => ColumnType::String,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            // `Debug` keeps the shortest round-trip form and always shows a fraction
            Cell::Float(v) => write!(f, "{v:?}"),
            Cell::Bool(v) => write!(f, "{v}"),
            Cell::String(v) => f.write_str(v),
        }
    }
}

impl From<IntDtype> for Cell {
    fn from(value: IntDtype) -> Self {
        Cell::Int(value)
    }
}
impl From<FloatDtype> for Cell {
    fn from(value: FloatDtype) -> Self {
        Cell::Float(value)
    }
}
impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}
impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}
impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_string())
    }
}

/// typed storage of a [`Column`]
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<IntDtype>),
    Float(Vec<FloatDtype>),
    Bool(Vec<bool>),
    String(Vec<String>),
}

impl ColumnData {
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Int(_) => ColumnType::Int,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::Bool(_) => ColumnType::Bool,
            ColumnData::String(_) => ColumnType::String,
        }
    }

    pub fn len(&self) -> usize {
        dispatch!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// an optionally named, homogeneously typed sequence of cells
///
/// equality only looks at the cells: two columns are equal when they share the
/// same type and hold the same values in the same order, whatever their
/// headers are. floats are compared exactly, so `NaN` never equals itself.
#[derive(Debug, Clone)]
pub struct Column {
    header: Option<String>,
    data: ColumnData,
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
