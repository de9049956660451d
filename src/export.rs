// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::schema::{Node, Section};

/// Export a section and everything below it to JSON.
///
/// Leaves export their current value (default, zero value, or the value
/// read from the text). Sections become objects; a multisection becomes an
/// object keyed by instance title, in document order.
///
/// # Examples
/// ```ignore
/// let doc = ConfigDocument::parse(text, schema)?;
/// println!("{}", serde_json::to_string_pretty(&doc.to_json())?);
/// ```
pub fn section_to_json(section: &Section) -> serde_json::Value {
    let mut out = serde_json::Map::new();
    for node in section.children() {
        out.insert(node.name().to_string(), node_to_json(node));
    }
    serde_json::Value::Object(out)
}

fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Section(section) => section_to_json(section),
        Node::Multisection(multi) => {
            let instances = multi
                .instances()
                .iter()
                .map(|instance| {
                    let title = instance.title().unwrap_or_default().to_string();
                    (title, section_to_json(instance))
                })
                .collect::<serde_json::Map<_, _>>();
            serde_json::Value::Object(instances)
        }
        Node::Int(leaf) => json!(leaf.value()),
        Node::Float(leaf) => json!(leaf.value()),
        Node::Bool(leaf) => json!(leaf.value()),
        Node::Str(leaf) => json!(leaf.value()),
        Node::IntList(leaf) => json!(leaf.value()),
        Node::FloatList(leaf) => json!(leaf.value()),
        Node::BoolList(leaf) => json!(leaf.value()),
        Node::StrList(leaf) => json!(leaf.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Leaf, Multisection};
    use crate::value::List;

    #[test]
    fn test_export_unbound_section_uses_defaults() {
        let section = Section::new("server")
            .with_child(Leaf::<String>::new("host").default_value("localhost"))
            .with_child(Leaf::<i64>::new("port"))
            .with_child(Leaf::<List<bool>>::new("flags").default_value([true, false]))
            .with_child(Multisection::new("backend").with_child(Leaf::<f64>::new("weight")));

        let v = section_to_json(&section);

        assert_eq!(v["host"], "localhost");
        assert_eq!(v["port"], 0);
        assert_eq!(v["flags"], json!([true, false]));
        // an unbound multisection has no instances
        assert_eq!(v["backend"], json!({}));
    }

    #[test]
    fn test_export_preserves_declaration_order() {
        let section = Section::new("")
            .with_child(Leaf::<i64>::new("third"))
            .with_child(Leaf::<i64>::new("first"))
            .with_child(Section::new("second"));

        let v = section_to_json(&section);
        let keys: Vec<&String> = v.as_object().expect("object").keys().collect();
        assert_eq!(keys, vec!["third", "first", "second"]);
    }
}
