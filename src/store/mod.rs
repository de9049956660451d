// Author: Dustin Pilgrim
// License: MIT

//! The backing store: parses text against [`Declarations`] and exposes the
//! result as a tree of [`Handle`]s.
//!
//! Every declared option is materialized with its default when its section is
//! created, so reads never need to consult the declarations again. Untitled
//! single sections always exist; titled and repeatable sections exist only
//! when the text provides them.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::declare::{Declarations, TableId};
use crate::parser::Parser;
use crate::value::Value;
use crate::Error;

mod bind;
mod handle;

pub use handle::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SectionId(usize);

#[derive(Debug)]
pub(crate) enum Slot {
    Values { values: Vec<Value>, set: bool },
    Sections { ids: Vec<SectionId>, present: bool },
}

#[derive(Debug)]
pub(crate) struct SectionData {
    pub(crate) name: String,
    pub(crate) title: Option<String>,
    pub(crate) table: TableId,
    pub(crate) slots: IndexMap<String, Slot>,
}

/// A parsed document bound to the declarations it was parsed against.
///
/// The store owns those declarations, so both are released together when the
/// last [`Handle`] goes away.
#[derive(Debug)]
pub struct Store {
    declarations: Declarations,
    sections: Vec<SectionData>,
    root: SectionId,
}

impl Store {
    /// Parse `text` against the table `root` of `declarations`.
    ///
    /// Fails on malformed text, names that are not declared, values that do
    /// not fit the declared kind and missing mandatory options or sections.
    pub fn parse(declarations: Declarations, root: TableId, text: &str) -> Result<Rc<Store>, Error> {
        let document = Parser::new(text)?.parse_document()?;

        let mut binder = bind::Binder::new(&declarations);
        let root_id = binder.create(root, "", None)?;
        binder.apply(root_id, &document.entries)?;
        binder.check_mandatory(root_id, "")?;
        let sections = binder.finish();

        Ok(Rc::new(Store {
            declarations,
            sections,
            root: root_id,
        }))
    }

    /// Handle of the document-level section.
    pub fn root(self: &Rc<Self>) -> Handle {
        Handle::new(Rc::clone(self), self.root)
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    pub(crate) fn section(&self, id: SectionId) -> &SectionData {
        &self.sections[id.0]
    }
}
