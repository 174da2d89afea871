pub mod indexer;
pub mod walker;

pub use indexer::IconIndexer;
pub use walker::{FsIconSource, IconSource, is_svg};
