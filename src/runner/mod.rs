mod barrier;
mod single;
mod tree;

pub use barrier::CompletionBarrier;
pub use single::{FileCheckRunner, FileOutcome, SkipReason};
pub use tree::{TreeReport, TreeRunner, TreeWalk, WalkEvent};
