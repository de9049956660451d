// Author: Dustin Pilgrim
// License: MIT

//! The typed schema tree: what a caller declares, and what a parsed document
//! binds to the backing store.
//!
//! ```ignore
//! let schema = Schema::new()
//!     .with_child(Leaf::<String>::new("name").default_value("Hans"))
//!     .with_child(Multisection::new("person").with_child(Leaf::<i64>::new("age")));
//! ```

use crate::declare::{Declarations, Descriptor, TableId};
use crate::store::Handle;
use crate::value::List;

mod leaf;
mod multisection;
pub(crate) mod path;
mod section;

pub use leaf::{Leaf, LeafValue, Requirement};
pub use multisection::Multisection;
pub use section::{Schema, Section};

/// Any child of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Section(Section),
    Multisection(Multisection),
    Int(Leaf<i64>),
    Float(Leaf<f64>),
    Bool(Leaf<bool>),
    Str(Leaf<String>),
    IntList(Leaf<List<i64>>),
    FloatList(Leaf<List<f64>>),
    BoolList(Leaf<List<bool>>),
    StrList(Leaf<List<String>>),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Section(section) => section.name(),
            Node::Multisection(multi) => multi.name(),
            Node::Int(leaf) => leaf.name(),
            Node::Float(leaf) => leaf.name(),
            Node::Bool(leaf) => leaf.name(),
            Node::Str(leaf) => leaf.name(),
            Node::IntList(leaf) => leaf.name(),
            Node::FloatList(leaf) => leaf.name(),
            Node::BoolList(leaf) => leaf.name(),
            Node::StrList(leaf) => leaf.name(),
        }
    }

    pub(crate) fn declare(&self, decls: &mut Declarations) -> Descriptor {
        match self {
            Node::Section(section) => section.declare(decls),
            Node::Multisection(multi) => multi.declare(decls),
            Node::Int(leaf) => leaf.declare(),
            Node::Float(leaf) => leaf.declare(),
            Node::Bool(leaf) => leaf.declare(),
            Node::Str(leaf) => leaf.declare(),
            Node::IntList(leaf) => leaf.declare(),
            Node::FloatList(leaf) => leaf.declare(),
            Node::BoolList(leaf) => leaf.declare(),
            Node::StrList(leaf) => leaf.declare(),
        }
    }

    /// Bind this node below the section whose handle is `parent`.
    pub(crate) fn load(&mut self, parent: Option<&Handle>) {
        match self {
            Node::Section(section) => section.load(parent),
            Node::Multisection(multi) => multi.load(parent),
            Node::Int(leaf) => leaf.load(parent),
            Node::Float(leaf) => leaf.load(parent),
            Node::Bool(leaf) => leaf.load(parent),
            Node::Str(leaf) => leaf.load(parent),
            Node::IntList(leaf) => leaf.load(parent),
            Node::FloatList(leaf) => leaf.load(parent),
            Node::BoolList(leaf) => leaf.load(parent),
            Node::StrList(leaf) => leaf.load(parent),
        }
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Node {
        Node::Section(section)
    }
}

impl From<Multisection> for Node {
    fn from(multi: Multisection) -> Node {
        Node::Multisection(multi)
    }
}

/// Types a path lookup can return.
///
/// A lookup only succeeds when the node found has exactly the requested type.
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Option<Self>;

    /// Conversion for a section instantiated from a multisection.
    fn from_instance(section: Section) -> Option<Self> {
        let _ = section;
        None
    }
}

impl FromNode for Section {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Section(section) => Some(section.clone()),
            _ => None,
        }
    }

    fn from_instance(section: Section) -> Option<Self> {
        Some(section)
    }
}

impl<T: LeafValue> FromNode for Leaf<T> {
    fn from_node(node: &Node) -> Option<Self> {
        T::unwrap(node).cloned()
    }
}

/// Declare `children` into one freshly allocated table.
pub(crate) fn declare_table<'a>(children: impl ExactSizeIterator<Item = &'a Node>, decls: &mut Declarations) -> TableId {
    let table = decls.reserve(children.len());
    for child in children {
        let descriptor = child.declare(decls);
        decls.push(table, descriptor);
    }
    table
}

#[cfg(test)]
mod tests;
