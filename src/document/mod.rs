// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::declare::Declarations;
use crate::export;
use crate::schema::{path, FromNode, Schema};
use crate::store::Store;
use crate::Error;

/// A document parsed against a [`Schema`] and bound to it.
///
/// The document owns the bound schema and the backing store; the store in
/// turn owns the declarations it was parsed against. Dropping the document
/// releases all of them.
pub struct ConfigDocument {
    schema: Schema,
    store: Rc<Store>,
}

impl ConfigDocument {
    /// Parse `text` against `schema`.
    ///
    /// Returns `None` when the text is malformed or misses a mandatory
    /// option or section. Use [`ConfigDocument::try_parse`] to learn why.
    ///
    /// # Example
    /// ```ignore
    /// let schema = Schema::new().with_child(Leaf::<String>::new("name").default_value("Hans"));
    /// let doc = ConfigDocument::parse("name = \"World\"", schema)?;
    /// assert_eq!(doc.get::<Leaf<String>>("name")?.value(), "World");
    /// ```
    pub fn parse(text: &str, schema: Schema) -> Option<Self> {
        match Self::try_parse(text, schema) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(error = %e, "configuration rejected");
                None
            }
        }
    }

    /// Parse `text` against `schema`, reporting why parsing failed.
    pub fn try_parse(text: &str, mut schema: Schema) -> Result<Self, Error> {
        let mut declarations = Declarations::new();
        let root = schema.declare(&mut declarations);

        let store = Store::parse(declarations, root, text)?;
        schema.load(store.root());

        tracing::debug!(
            tables = store.declarations().len(),
            options = schema.len(),
            "configuration parsed"
        );
        Ok(Self { schema, store })
    }

    /// Read and parse a configuration file.
    ///
    /// A leading `~/` is expanded to the home directory.
    pub fn from_file<P: AsRef<Path>>(path: P, schema: Schema) -> Result<Self, Error> {
        let path = expand_home(path.as_ref())?;
        let content = fs::read_to_string(&path).map_err(|e| Error::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::try_parse(&content, schema)
    }

    /// Typed lookup of a slash-delimited path, e.g. `person/euler/firstname`.
    ///
    /// Misses and type mismatches yield `None`.
    pub fn get<T: FromNode>(&self, path: &str) -> Option<T> {
        self.schema.get(path)
    }

    /// Titles of the instances of the multisection at `path`, in document order.
    pub fn titles(&self, path: &str) -> Vec<String> {
        path::with_multisection(self.schema.section(), &path::segments(path), |multi| multi.titles())
            .unwrap_or_default()
    }

    pub fn root(&self) -> &Schema {
        &self.schema
    }

    pub fn declarations(&self) -> &Declarations {
        self.store.declarations()
    }

    /// The bound tree with current values as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        export::section_to_json(self.schema.section())
    }
}

/// Expand `~/` against the home directory.
fn expand_home(raw: &Path) -> Result<PathBuf, Error> {
    match raw.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| Error::File {
                path: raw.display().to_string(),
                message: "could not determine home directory for ~ expansion".into(),
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(raw.to_path_buf()),
    }
}
