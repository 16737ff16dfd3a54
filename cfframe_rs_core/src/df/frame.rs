use super::column::Column;

mod display;
mod indexing;
mod meta;
mod ops;

pub use display::DisplayConfig;

/// an ordered collection of equal-length [`Column`]s
///
/// every public method either succeeds, leaving all columns with exactly
/// [`DataFrame::nrow`] cells, or fails without touching the frame. frames never
/// share storage: [`DataFrame::get_row`], [`DataFrame::query`] and the merging
/// methods always copy cells.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
    nrow: usize,
}

/// frames are equal when their columns are pairwise equal (headers are ignored,
/// like in [`Column`]'s equality)
impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.nrow == other.nrow && self.columns == other.columns
    }
}
