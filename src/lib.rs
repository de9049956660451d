pub mod ast;
pub mod declare;
pub mod document;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod schema;
pub mod store;
pub mod value;

pub use document::ConfigDocument;
pub use error::Error;
pub use schema::{FromNode, Leaf, Multisection, Node, Schema, Section};
pub use value::{Kind, List, Value};
