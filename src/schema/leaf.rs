// Author: Dustin Pilgrim
// License: MIT

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

use super::Node;
use crate::declare::{DefaultValue, Descriptor, Flags};
use crate::store::Handle;
use crate::value::{Kind, List, Scalar};

/// Whether a leaf must be present in the text, has a default, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// May be omitted; reads then yield the zero value of the kind.
    Optional,
    /// May be omitted; reads then yield the declared default.
    Defaulted,
    /// Parsing fails when the text omits it.
    Mandatory,
}

mod sealed {
    pub trait Sealed {}
}

/// Value types a [`Leaf`] can hold: the four scalars and lists of them.
pub trait LeafValue: sealed::Sealed + Clone + Default + PartialEq + fmt::Debug + Serialize {
    const KIND: Kind;
    const LIST: bool;

    /// Read the current value of `name` from a bound section.
    fn read(handle: &Handle, name: &str) -> Option<Self>;

    fn default_literal(&self) -> DefaultValue;

    fn wrap(leaf: Leaf<Self>) -> Node;

    fn unwrap(node: &Node) -> Option<&Leaf<Self>>;
}

macro_rules! leaf_value {
    ($scalar:ty, $single:ident, $list:ident) => {
        impl sealed::Sealed for $scalar {}
        impl sealed::Sealed for List<$scalar> {}

        impl LeafValue for $scalar {
            const KIND: Kind = <$scalar as Scalar>::KIND;
            const LIST: bool = false;

            fn read(handle: &Handle, name: &str) -> Option<Self> {
                handle.scalar(name).and_then(|v| <$scalar as Scalar>::from_value(&v))
            }

            fn default_literal(&self) -> DefaultValue {
                DefaultValue::Scalar(self.to_value())
            }

            fn wrap(leaf: Leaf<Self>) -> Node {
                Node::$single(leaf)
            }

            fn unwrap(node: &Node) -> Option<&Leaf<Self>> {
                match node {
                    Node::$single(leaf) => Some(leaf),
                    _ => None,
                }
            }
        }

        impl LeafValue for List<$scalar> {
            const KIND: Kind = <$scalar as Scalar>::KIND;
            const LIST: bool = true;

            fn read(handle: &Handle, name: &str) -> Option<Self> {
                (0..handle.list_len(name))
                    .map(|i| {
                        handle
                            .list_element(name, i)
                            .and_then(|v| <$scalar as Scalar>::from_value(&v))
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(List::new)
            }

            fn default_literal(&self) -> DefaultValue {
                DefaultValue::List(self.literal().to_string())
            }

            fn wrap(leaf: Leaf<Self>) -> Node {
                Node::$list(leaf)
            }

            fn unwrap(node: &Node) -> Option<&Leaf<Self>> {
                match node {
                    Node::$list(leaf) => Some(leaf),
                    _ => None,
                }
            }
        }
    };
}

leaf_value!(i64, Int, IntList);
leaf_value!(f64, Float, FloatList);
leaf_value!(bool, Bool, BoolList);
leaf_value!(String, Str, StrList);

/// A named option holding a scalar or a list.
///
/// Once bound, every call to [`Leaf::value`] re-reads the backing store and
/// refreshes an internal cache, which is why `value` only needs `&self`.
/// An unbound leaf yields its declared default, or the zero value of its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<T: LeafValue> {
    name: String,
    requirement: Requirement,
    declared: T,
    cached: RefCell<T>,
    bound: Option<Handle>,
}

impl<T: LeafValue> Leaf<T> {
    /// An optional leaf without a default.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            requirement: Requirement::Optional,
            declared: T::default(),
            cached: RefCell::new(T::default()),
            bound: None,
        }
    }

    /// Declare a default. A leaf with a default is never mandatory.
    pub fn default_value(mut self, value: impl Into<T>) -> Self {
        self.declared = value.into();
        self.cached = RefCell::new(self.declared.clone());
        self.requirement = Requirement::Defaulted;
        self
    }

    /// Require the leaf in the text. Drops any declared default.
    pub fn mandatory(mut self) -> Self {
        self.declared = T::default();
        self.cached = RefCell::new(T::default());
        self.requirement = Requirement::Mandatory;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    pub fn is_mandatory(&self) -> bool {
        self.requirement() == Requirement::Mandatory
    }

    pub fn has_default(&self) -> bool {
        self.requirement() == Requirement::Defaulted
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// The current value.
    pub fn value(&self) -> T {
        if let Some(handle) = &self.bound {
            let fresh = T::read(handle, &self.name).unwrap_or_else(|| self.declared.clone());
            *self.cached.borrow_mut() = fresh;
        }
        self.cached.borrow().clone()
    }

    pub(crate) fn declare(&self) -> Descriptor {
        let mut flags = Flags::empty();
        if T::LIST {
            flags |= Flags::LIST;
        }
        if self.is_mandatory() {
            flags |= Flags::MANDATORY;
        }
        let default = self.has_default().then(|| self.declared.default_literal());
        Descriptor::option(&self.name, T::KIND, default, flags)
    }

    /// Remember the handle of the enclosing section.
    pub(crate) fn load(&mut self, parent: Option<&Handle>) {
        self.bound = parent.cloned();
    }
}

impl<T: LeafValue> From<Leaf<T>> for Node {
    fn from(leaf: Leaf<T>) -> Node {
        T::wrap(leaf)
    }
}
