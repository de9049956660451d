use indexmap::IndexMap;

use super::{SectionData, SectionId, Slot};
use crate::ast::{Entry, Literal, RawValue};
use crate::declare::{Declarations, DefaultValue, Descriptor, Flags, TableId, ValueDecl};
use crate::parser::Parser;
use crate::value::Value;
use crate::Error;

/// Builds the section arena of a store from parsed entries.
pub(super) struct Binder<'d> {
    decls: &'d Declarations,
    sections: Vec<SectionData>,
}

impl<'d> Binder<'d> {
    pub(super) fn new(decls: &'d Declarations) -> Self {
        Self {
            decls,
            sections: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> Vec<SectionData> {
        self.sections
    }

    /// Create a section of `table` with every option at its default.
    pub(super) fn create(&mut self, table: TableId, name: &str, title: Option<String>) -> Result<SectionId, Error> {
        let decls = self.decls;
        let mut slots = IndexMap::new();

        for desc in decls.table(table) {
            let slot = match desc {
                Descriptor::Value(decl) => Slot::Values {
                    values: default_values(decl)?,
                    set: false,
                },
                Descriptor::Section(decl) if decl.flags.intersects(Flags::TITLE | Flags::MULTI) => Slot::Sections {
                    ids: Vec::new(),
                    present: false,
                },
                Descriptor::Section(decl) => {
                    let child = self.create(decl.table, &decl.name, None)?;
                    Slot::Sections {
                        ids: vec![child],
                        present: false,
                    }
                }
            };
            slots.insert(desc.name().to_string(), slot);
        }

        self.sections.push(SectionData {
            name: name.to_string(),
            title,
            table,
            slots,
        });
        Ok(SectionId(self.sections.len() - 1))
    }

    pub(super) fn apply(&mut self, id: SectionId, entries: &[Entry]) -> Result<(), Error> {
        for entry in entries {
            self.apply_entry(id, entry)?;
        }
        Ok(())
    }

    fn apply_entry(&mut self, id: SectionId, entry: &Entry) -> Result<(), Error> {
        let decls = self.decls;
        let table = self.sections[id.0].table;

        let desc = decls.find(table, entry.name()).ok_or_else(|| Error::UnknownName {
            name: entry.name().to_string(),
            section: self.display_name(id),
            line: entry.line(),
        })?;

        match (entry, desc) {
            (Entry::Assign { name, value, line }, Descriptor::Value(decl)) => {
                let parsed = coerce_raw(decl, value, *line)?;
                if let Some(Slot::Values { values, set }) = self.sections[id.0].slots.get_mut(name) {
                    *values = parsed;
                    *set = true;
                }
                Ok(())
            }
            (Entry::Assign { name, line, .. }, Descriptor::Section(_)) => Err(Error::NotASection {
                name: name.clone(),
                line: *line,
            }),
            (Entry::Block { name, line, .. }, Descriptor::Value(_)) => Err(Error::Syntax {
                message: format!("'{}' is an option and cannot open a section", name),
                line: *line,
                column: 0,
                hint: Some(format!("assign it instead: {} = ...", name)),
            }),
            (Entry::Block { name, title, entries, line }, Descriptor::Section(decl)) => {
                let titled = decl.flags.contains(Flags::TITLE);
                match (titled, title) {
                    (true, None) => {
                        return Err(Error::MissingTitle {
                            name: name.clone(),
                            line: *line,
                        });
                    }
                    (false, Some(_)) => {
                        return Err(Error::UnexpectedTitle {
                            name: name.clone(),
                            line: *line,
                        });
                    }
                    _ => {}
                }

                let child = self.child_for(id, decl.table, name, title, decl.flags, *line)?;
                self.apply(child, entries)
            }
        }
    }

    /// Find the instance a block refers to, creating it on first sight.
    ///
    /// Repeated blocks for the same untitled section, or for the same title,
    /// merge into one instance.
    fn child_for(
        &mut self,
        id: SectionId,
        table: TableId,
        name: &str,
        title: &Option<String>,
        flags: Flags,
        line: usize,
    ) -> Result<SectionId, Error> {
        let existing = match self.sections[id.0].slots.get(name) {
            Some(Slot::Sections { ids, .. }) => {
                let found = ids.iter().copied().find(|c| self.sections[c.0].title == *title);
                if found.is_none() && !ids.is_empty() && !flags.contains(Flags::MULTI) {
                    return Err(Error::Syntax {
                        message: format!("section '{}' may appear only once", name),
                        line,
                        column: 0,
                        hint: None,
                    });
                }
                found
            }
            _ => None,
        };

        let child = match existing {
            Some(child) => child,
            None => self.create(table, name, title.clone())?,
        };

        if let Some(Slot::Sections { ids, present }) = self.sections[id.0].slots.get_mut(name) {
            if !ids.contains(&child) {
                ids.push(child);
            }
            *present = true;
        }
        Ok(child)
    }

    pub(super) fn check_mandatory(&self, id: SectionId, path: &str) -> Result<(), Error> {
        let data = &self.sections[id.0];

        for (name, slot) in &data.slots {
            let mandatory = self
                .decls
                .find(data.table, name)
                .is_some_and(|d| d.flags().contains(Flags::MANDATORY));
            let child_path = join(path, name);

            match slot {
                Slot::Values { set, .. } => {
                    if mandatory && !set {
                        return Err(Error::MissingMandatory { path: child_path });
                    }
                }
                Slot::Sections { ids, present } => {
                    if mandatory && !present {
                        return Err(Error::MissingMandatory { path: child_path });
                    }
                    for child in ids {
                        let child_path = match &self.sections[child.0].title {
                            Some(title) => join(&child_path, title),
                            None => child_path.clone(),
                        };
                        self.check_mandatory(*child, &child_path)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn display_name(&self, id: SectionId) -> String {
        let data = &self.sections[id.0];
        match (&data.title, data.name.is_empty()) {
            (_, true) => "<root>".to_string(),
            (Some(title), false) => format!("{} {}", data.name, title),
            (None, false) => data.name.clone(),
        }
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", path, name)
    }
}

fn default_values(decl: &ValueDecl) -> Result<Vec<Value>, Error> {
    match &decl.default {
        None => Ok(Vec::new()),
        Some(DefaultValue::Scalar(value)) => Ok(vec![value.clone()]),
        Some(DefaultValue::List(literal)) => {
            let invalid = || Error::InvalidDefault {
                name: decl.name.clone(),
                literal: literal.clone(),
            };
            let items = Parser::new(literal)
                .and_then(|mut p| p.parse_list_literal())
                .map_err(|_| invalid())?;
            items
                .iter()
                .map(|item| Value::coerce(decl.kind, &item.text).ok_or_else(invalid))
                .collect()
        }
    }
}

fn coerce_raw(decl: &ValueDecl, value: &RawValue, line: usize) -> Result<Vec<Value>, Error> {
    let coerce = |literal: &Literal| {
        Value::coerce(decl.kind, &literal.text).ok_or_else(|| Error::InvalidValue {
            name: decl.name.clone(),
            kind: decl.kind,
            text: literal.text.clone(),
            line,
        })
    };

    match value {
        RawValue::Atom(literal) => Ok(vec![coerce(literal)?]),
        RawValue::List(_) if !decl.flags.contains(Flags::LIST) => Err(Error::NotAList {
            name: decl.name.clone(),
            line,
        }),
        RawValue::List(items) => items.iter().map(coerce).collect(),
    }
}
