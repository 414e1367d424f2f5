mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, TypeFilter, is_hidden};
