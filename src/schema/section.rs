use std::ops::Deref;

use indexmap::IndexMap;

use super::{declare_table, path, FromNode, Multisection, Node};
use crate::declare::{Declarations, Descriptor, Flags, TableId};
use crate::store::Handle;

/// A named, optionally titled group of options and sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    title: Option<String>,
    mandatory: bool,
    children: IndexMap<String, Node>,
    bound: Option<Handle>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            mandatory: false,
            children: IndexMap::new(),
            bound: None,
        }
    }

    /// Replace all children. A later child replaces an earlier one of the same name.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.clear();
        for child in children {
            self.children.insert(child.name().to_string(), child);
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        self.children.insert(child.name().to_string(), child);
        self
    }

    /// Look the section up by name and title instead of by name alone.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Require the section to appear in the text.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Child names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct child lookup without type filtering.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn multisection(&self, name: &str) -> Option<&Multisection> {
        match self.children.get(name) {
            Some(Node::Multisection(multi)) => Some(multi),
            _ => None,
        }
    }

    /// Typed lookup of a slash-delimited path relative to this section.
    ///
    /// Returns `None` when a segment is missing, when a leaf is crossed, or
    /// when the final node is not a `T`.
    pub fn get<T: FromNode>(&self, path: &str) -> Option<T> {
        path::resolve(self, &path::segments(path))
    }

    pub(crate) fn declare(&self, decls: &mut Declarations) -> Descriptor {
        let table = self.declare_children(decls);
        let mut flags = Flags::empty();
        if self.title.is_some() {
            flags |= Flags::TITLE;
        }
        if self.mandatory {
            flags |= Flags::MANDATORY;
        }
        Descriptor::section(&self.name, table, flags)
    }

    pub(crate) fn declare_children(&self, decls: &mut Declarations) -> TableId {
        declare_table(self.children.values(), decls)
    }

    /// Resolve this section below `parent` and bind the subtree.
    ///
    /// Without a parent handle the whole subtree stays unbound.
    pub(crate) fn load(&mut self, parent: Option<&Handle>) {
        let handle = parent.and_then(|p| match &self.title {
            Some(title) => p.titled_section(&self.name, title),
            None => p.section(&self.name),
        });
        self.bind(handle);
    }

    pub(crate) fn bind(&mut self, handle: Option<Handle>) {
        for child in self.children.values_mut() {
            child.load(handle.as_ref());
        }
        self.bound = handle;
    }
}

/// The untitled top-level section of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Section,
}

impl Schema {
    pub fn new() -> Self {
        Self { root: Section::new("") }
    }

    pub fn with_children<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            root: self.root.with_children(children),
        }
    }

    pub fn with_child(self, child: impl Into<Node>) -> Self {
        Self {
            root: self.root.with_child(child),
        }
    }

    pub fn section(&self) -> &Section {
        &self.root
    }

    pub(crate) fn declare(&self, decls: &mut Declarations) -> TableId {
        self.root.declare_children(decls)
    }

    /// Bind the root directly to the store's document handle.
    pub(crate) fn load(&mut self, handle: Handle) {
        self.root.bind(Some(handle));
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Schema {
    type Target = Section;

    fn deref(&self) -> &Section {
        &self.root
    }
}
