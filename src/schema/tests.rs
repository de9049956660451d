#[cfg(test)]
use super::*;
use crate::declare::{DefaultValue, Flags};
use crate::value::{Kind, Value};

fn sample() -> Section {
    Section::new("")
        .with_child(Leaf::<i64>::new("age"))
        .with_child(Leaf::<String>::new("name").default_value("Hans"))
        .with_child(Section::new("s").with_child(Leaf::<String>::new("x").default_value("hi")))
        .with_child(Multisection::new("person").with_child(Leaf::<String>::new("firstname")))
}

#[test]
fn test_unbound_leaf_yields_default_or_zero() {
    let age = Leaf::<i64>::new("age");
    assert_eq!(age.value(), 0);
    assert!(!age.is_bound());

    let name = Leaf::<String>::new("name").default_value("Hans");
    assert_eq!(name.value(), "Hans");

    let ratio = Leaf::<f64>::new("ratio");
    assert_eq!(ratio.value(), 0.0);

    let numbers = Leaf::<List<i64>>::new("numbers").default_value([42, 13]);
    assert_eq!(numbers.value(), vec![42, 13]);
    assert!(Leaf::<List<String>>::new("empty").value().is_empty());
}

#[test]
fn test_default_and_mandatory_are_exclusive() {
    let leaf = Leaf::<i64>::new("repeat").default_value(13).mandatory();
    assert!(leaf.is_mandatory());
    assert!(!leaf.has_default());
    assert_eq!(leaf.value(), 0);

    let leaf = Leaf::<i64>::new("repeat").mandatory().default_value(13);
    assert!(!leaf.is_mandatory());
    assert_eq!(leaf.requirement(), Requirement::Defaulted);
    assert_eq!(leaf.value(), 13);
}

#[test]
fn test_leaf_descriptors() {
    match Leaf::<bool>::new("male").declare() {
        Descriptor::Value(decl) => {
            assert_eq!(decl.kind, Kind::Bool);
            assert_eq!(decl.default, None);
            assert!(decl.flags.contains(Flags::NO_DEFAULT));
            assert!(!decl.flags.contains(Flags::LIST));
        }
        other => panic!("Expected value descriptor, got {:?}", other),
    }

    match Leaf::<i64>::new("required").mandatory().declare() {
        Descriptor::Value(decl) => assert!(decl.flags.contains(Flags::MANDATORY)),
        other => panic!("Expected value descriptor, got {:?}", other),
    }

    match Leaf::<f64>::new("constant").default_value(2.5).declare() {
        Descriptor::Value(decl) => assert_eq!(decl.default, Some(DefaultValue::Scalar(Value::Float(2.5)))),
        other => panic!("Expected value descriptor, got {:?}", other),
    }

    let presidents = Leaf::<List<String>>::new("presidents").default_value(vec!["Abraham Lincoln".to_string()]);
    match presidents.declare() {
        Descriptor::Value(decl) => {
            assert_eq!(decl.kind, Kind::Str);
            assert!(decl.flags.contains(Flags::LIST));
            assert_eq!(decl.default, Some(DefaultValue::List(r#"{"Abraham Lincoln"}"#.into())));
        }
        other => panic!("Expected value descriptor, got {:?}", other),
    }
}

#[test]
fn test_section_declaration_tables() {
    let mut decls = Declarations::new();
    let root = sample().declare_children(&mut decls);

    // root, s, person
    assert_eq!(decls.len(), 3);
    let names: Vec<&str> = decls.table(root).iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["age", "name", "s", "person"]);

    assert_eq!(decls.find(root, "s").map(|d| d.flags()), Some(Flags::empty()));
    assert_eq!(
        decls.find(root, "person").map(|d| d.flags()),
        Some(Flags::MULTI | Flags::TITLE)
    );

    let titled = Section::new("db").with_title("main").mandatory().declare(&mut decls);
    assert_eq!(titled.flags(), Flags::TITLE | Flags::MANDATORY);
}

#[test]
fn test_with_children_replaces_and_dedupes() {
    let section = Section::new("s")
        .with_child(Leaf::<i64>::new("old"))
        .with_children(vec![
            Leaf::<i64>::new("a").into(),
            Leaf::<String>::new("b").into(),
            Leaf::<bool>::new("a").into(),
        ]);

    assert_eq!(section.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(matches!(section.node("a"), Some(Node::Bool(_))));
    assert!(section.node("old").is_none());

    let multi = Multisection::new("m").with_children(vec![
        Leaf::<i64>::new("x").into(),
        Leaf::<f64>::new("x").into(),
    ]);
    assert_eq!(multi.template().len(), 1);
    assert!(matches!(multi.template()[0], Node::Float(_)));
}

#[test]
fn test_unbound_path_lookups() {
    let root = sample();

    assert_eq!(root.get::<Leaf<String>>("name").map(|l| l.value()), Some("Hans".into()));
    assert_eq!(root.get::<Leaf<String>>("/s/x/").map(|l| l.value()), Some("hi".into()));
    assert_eq!(root.get::<Leaf<String>>("s//x").map(|l| l.value()), Some("hi".into()));
    assert!(root.get::<Section>("s").is_some());

    // type mismatch is a miss
    assert!(root.get::<Leaf<i64>>("name").is_none());
    assert!(root.get::<Section>("name").is_none());
    // leaves have no children
    assert!(root.get::<Leaf<String>>("name/x").is_none());
    // empty paths and missing names
    assert!(root.get::<Section>("").is_none());
    assert!(root.get::<Section>("///").is_none());
    assert!(root.get::<Leaf<i64>>("nope").is_none());
    // a multisection is never returned by itself
    assert!(root.get::<Section>("person").is_none());
    // unbound multisections have no instances
    assert!(root.get::<Section>("person/euler").is_none());
    assert!(root.multisection("person").map(|m| m.titles().is_empty()).unwrap_or(false));
}

#[test]
fn test_leaf_node_conversion() {
    let node: Node = Leaf::<List<f64>>::new("irrational_numbers").into();
    assert_eq!(node.name(), "irrational_numbers");
    assert!(matches!(node, Node::FloatList(_)));
    assert!(Leaf::<List<f64>>::from_node(&node).is_some());
    assert!(Leaf::<f64>::from_node(&node).is_none());
}
