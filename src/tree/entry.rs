#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    Leaf,
    Container,
}

impl EntryType {
    pub fn is_container(self) -> bool {
        self == EntryType::Container
    }

    pub fn is_leaf(self) -> bool {
        self == EntryType::Leaf
    }
}
