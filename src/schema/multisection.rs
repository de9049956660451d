use std::cell::RefCell;

use indexmap::IndexMap;

use super::{declare_table, Node, Section};
use crate::declare::{Declarations, Descriptor};
use crate::store::Handle;

/// A template for any number of titled sections sharing one set of children.
///
/// Instances are created lazily: nothing is built while loading, and the
/// first lookup of a title builds, binds and caches its section. Later
/// lookups of the same title return the cached section.
#[derive(Debug, Clone, PartialEq)]
pub struct Multisection {
    name: String,
    template: Vec<Node>,
    instances: RefCell<IndexMap<String, Section>>,
    bound: Option<Handle>,
}

impl Multisection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            template: Vec::new(),
            instances: RefCell::new(IndexMap::new()),
            bound: None,
        }
    }

    /// Replace the template children.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.template.clear();
        for child in children {
            self.push(child);
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child.into());
        self
    }

    fn push(&mut self, child: Node) {
        match self.template.iter().position(|c| c.name() == child.name()) {
            Some(index) => self.template[index] = child,
            None => self.template.push(child),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &[Node] {
        &self.template
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The section titled `title`, or `None` if the text has no such instance.
    pub fn instance(&self, title: &str) -> Option<Section> {
        let cached = self.instances.borrow().get(title).cloned();
        if cached.is_some() {
            return cached;
        }

        let parent = self.bound.as_ref()?;
        parent.titled_section(&self.name, title)?;

        let mut section = Section::new(&self.name)
            .with_title(title)
            .with_children(self.template.iter().cloned());
        section.load(Some(parent));
        tracing::trace!(multisection = %self.name, title, "instantiated section");

        self.instances
            .borrow_mut()
            .insert(title.to_string(), section.clone());
        Some(section)
    }

    /// Titles of every instance in the text, in document order.
    pub fn titles(&self) -> Vec<String> {
        let Some(parent) = &self.bound else {
            return Vec::new();
        };
        (0..parent.instance_count(&self.name))
            .filter_map(|i| parent.nth_instance(&self.name, i))
            .map(|(title, _)| title)
            .collect()
    }

    /// Every instance, in document order.
    pub fn instances(&self) -> Vec<Section> {
        self.titles()
            .iter()
            .filter_map(|title| self.instance(title))
            .collect()
    }

    pub(crate) fn declare(&self, decls: &mut Declarations) -> Descriptor {
        let table = declare_table(self.template.iter(), decls);
        Descriptor::multisection(&self.name, table)
    }

    /// Remember the enclosing section's handle and drop cached instances.
    pub(crate) fn load(&mut self, parent: Option<&Handle>) {
        self.bound = parent.cloned();
        self.instances.get_mut().clear();
    }
}
