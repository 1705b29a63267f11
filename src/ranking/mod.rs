pub mod scorer;
pub mod sortable;
pub mod sorter;
pub mod strings;

pub use scorer::score;
pub use sortable::{KeyedSlice, Sortable};
pub use sorter::{rank, rank_default, Sorter};
pub use strings::{sort_strings, sort_strings_with, StringSlice};
