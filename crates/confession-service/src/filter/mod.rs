//! Content filtering applied to messages before they are stored

mod word_list;

pub use word_list::WordListFilter;
