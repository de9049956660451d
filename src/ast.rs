/// A single atom as written in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub text: String,
    pub quoted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Atom(Literal),
    List(Vec<Literal>),
}

/// One entry of a document or of a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// `name = value` or `name = {a, b}`
    Assign {
        name: String,
        value: RawValue,
        line: usize,
    },
    /// `name { ... }` or `name title { ... }`
    Block {
        name: String,
        title: Option<String>,
        entries: Vec<Entry>,
        line: usize,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Assign { name, .. } | Entry::Block { name, .. } => name,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Entry::Assign { line, .. } | Entry::Block { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub entries: Vec<Entry>,
}
