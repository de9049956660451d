// Author: Dustin Pilgrim
// License: MIT

//! Declarations: the flat, table-based description of a schema that the
//! backing store parses against.
//!
//! Each section (and each multisection) owns one table of child descriptors.
//! Tables live in a single [`Declarations`] arena and refer to each other by
//! [`TableId`], so the whole tree is owned in one place and dropped at once.

use crate::value::{Kind, Value};

bitflags::bitflags! {
    /// Per-descriptor flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// The option holds a list of its kind.
        const LIST = 1 << 0;
        /// The option has no declared default; reads fall back to the zero value.
        const NO_DEFAULT = 1 << 1;
        /// The option or section must appear in the text.
        const MANDATORY = 1 << 2;
        /// The section is looked up by name and title.
        const TITLE = 1 << 3;
        /// The section may repeat, once per title.
        const MULTI = 1 << 4;
    }
}

/// Index of a table inside [`Declarations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

/// A declared default: scalars as native values, lists as canonical text.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Scalar(Value),
    List(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueDecl {
    pub name: String,
    pub kind: Kind,
    pub default: Option<DefaultValue>,
    pub flags: Flags,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDecl {
    pub name: String,
    pub table: TableId,
    pub flags: Flags,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Value(ValueDecl),
    Section(SectionDecl),
}

impl Descriptor {
    pub fn option(name: &str, kind: Kind, default: Option<DefaultValue>, flags: Flags) -> Self {
        let mut flags = flags;
        if default.is_none() {
            flags |= Flags::NO_DEFAULT;
        }
        Descriptor::Value(ValueDecl {
            name: name.to_string(),
            kind,
            default,
            flags,
        })
    }

    pub fn section(name: &str, table: TableId, flags: Flags) -> Self {
        Descriptor::Section(SectionDecl {
            name: name.to_string(),
            table,
            flags,
        })
    }

    pub fn multisection(name: &str, table: TableId) -> Self {
        Self::section(name, table, Flags::MULTI | Flags::TITLE)
    }

    pub fn name(&self) -> &str {
        match self {
            Descriptor::Value(decl) => &decl.name,
            Descriptor::Section(decl) => &decl.name,
        }
    }

    pub fn flags(&self) -> Flags {
        match self {
            Descriptor::Value(decl) => decl.flags,
            Descriptor::Section(decl) => decl.flags,
        }
    }
}

/// Arena owning every descriptor table of one schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    tables: Vec<Vec<Descriptor>>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an empty table with room for `capacity` descriptors.
    pub fn reserve(&mut self, capacity: usize) -> TableId {
        self.tables.push(Vec::with_capacity(capacity));
        TableId(self.tables.len() - 1)
    }

    pub fn push(&mut self, table: TableId, descriptor: Descriptor) {
        self.tables[table.0].push(descriptor);
    }

    pub fn table(&self, table: TableId) -> &[Descriptor] {
        &self.tables[table.0]
    }

    pub fn find(&self, table: TableId, name: &str) -> Option<&Descriptor> {
        self.table(table).iter().find(|d| d.name() == name)
    }

    /// Number of allocated tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_without_default_is_flagged() {
        let desc = Descriptor::option("age", Kind::Int, None, Flags::empty());
        assert!(desc.flags().contains(Flags::NO_DEFAULT));

        let desc = Descriptor::option("age", Kind::Int, Some(DefaultValue::Scalar(Value::Int(3))), Flags::empty());
        assert!(!desc.flags().contains(Flags::NO_DEFAULT));
    }

    #[test]
    fn tables_nest_by_id() {
        let mut decls = Declarations::new();
        let root = decls.reserve(2);
        let person = decls.reserve(1);
        decls.push(person, Descriptor::option("firstname", Kind::Str, None, Flags::empty()));
        decls.push(root, Descriptor::multisection("person", person));
        decls.push(root, Descriptor::option("target", Kind::Str, None, Flags::MANDATORY));

        assert_eq!(decls.len(), 2);
        assert_eq!(decls.table(root).len(), 2);

        match decls.find(root, "person") {
            Some(Descriptor::Section(sec)) => {
                assert!(sec.flags.contains(Flags::MULTI | Flags::TITLE));
                assert_eq!(decls.table(sec.table)[0].name(), "firstname");
            }
            other => panic!("expected multisection, got {:?}", other),
        }
        assert!(decls.find(root, "missing").is_none());
    }
}
