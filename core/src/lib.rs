//! Storage, tokenization and index building shared by the crawler and the indexer.

pub mod error;
pub mod html;
pub mod index;
pub mod pages;
pub mod persist;
pub mod tokenizer;

pub use error::{IndexError, StoreError};
pub use index::{DocId, IdfTable, IndexBuilder, InvertedIndex};
pub use pages::{PageId, PageRecord, PageStore};
