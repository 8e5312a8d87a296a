mod dir_tree;
mod entry;
mod map_tree;

pub use dir_tree::DirNode;
pub use entry::EntryType;
pub use map_tree::MapNode;
