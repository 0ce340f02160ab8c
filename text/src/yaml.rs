//! Conversion between [`Node`] trees and YAML documents.

use std::io::Read;

use codec::{Node, TreeValue};
use serde_yaml::{Mapping, Value};

use crate::error::{TextError, TextResult};
use crate::path::KeyPath;
use crate::raw::{bare_tag, RawValue};
use crate::tags::{kind_for_tag, scalar_from_tagged, scalar_to_value};

/// Renders a tree as a YAML mapping value.
#[must_use]
pub fn node_to_value(node: &Node) -> Value {
    let mut mapping = Mapping::with_capacity(node.len());
    for (key, value) in node {
        let rendered = match value {
            TreeValue::Mapping(child) => node_to_value(child),
            TreeValue::Text(text) => Value::String(text.clone()),
            TreeValue::Scalar(scalar) => scalar_to_value(*scalar),
        };
        mapping.insert(Value::String(key.as_str().to_owned()), rendered);
    }
    Value::Mapping(mapping)
}

/// Serializes a tree to a YAML string.
///
/// When the tree has digit keys the output is read back to confirm that each
/// of them still loads as a string.
///
/// # Errors
///
/// Returns an error if the emitter fails or leaves a digit key unquoted.
pub fn to_yaml_string(node: &Node) -> TextResult<String> {
    let yaml = serde_yaml::to_string(&node_to_value(node))?;
    if has_digit_keys(node) {
        let reloaded: RawValue = serde_yaml::from_str(&yaml)?;
        check_digit_keys(node, &reloaded, &KeyPath::root())?;
    }
    Ok(yaml)
}

/// Parses a YAML string into a tree.
///
/// # Errors
///
/// Returns an error for malformed YAML or values with no binary form.
pub fn from_yaml_str(text: &str) -> TextResult<Node> {
    let raw: RawValue = serde_yaml::from_str(text)?;
    raw_to_node(&raw)
}

/// Parses YAML from a reader into a tree.
///
/// # Errors
///
/// Returns an error for read failures, malformed YAML, or values with no
/// binary form.
pub fn from_yaml_reader<R: Read>(reader: R) -> TextResult<Node> {
    let raw: RawValue = serde_yaml::from_reader(reader)?;
    raw_to_node(&raw)
}

fn raw_to_node(raw: &RawValue) -> TextResult<Node> {
    match raw {
        RawValue::Mapping(entries) => mapping_to_node(entries, &KeyPath::root()),
        other => Err(TextError::RootNotMapping {
            found: other.kind_name(),
        }),
    }
}

fn mapping_to_node(entries: &[(RawValue, RawValue)], path: &KeyPath<'_>) -> TextResult<Node> {
    let mut node = Node::new();
    for (key, value) in entries {
        let RawValue::String(key) = key else {
            return Err(TextError::NonStringKey {
                path: path.to_string(),
                key: key.describe(),
            });
        };
        if node.contains_key(key) {
            return Err(TextError::DuplicateKey {
                path: path.to_string(),
                key: key.clone(),
            });
        }
        let child_path = path.child(key);
        let converted = match value {
            RawValue::Mapping(child) => TreeValue::Mapping(mapping_to_node(child, &child_path)?),
            RawValue::String(text) => TreeValue::Text(text.clone()),
            RawValue::Tagged { tag, value } => match kind_for_tag(tag) {
                Some(kind) => TreeValue::Scalar(scalar_from_tagged(kind, value, &child_path)?),
                None => {
                    return Err(TextError::UnsupportedValue {
                        path: child_path.to_string(),
                        found: format!("tag !{}", bare_tag(tag)),
                    })
                }
            },
            other => {
                return Err(TextError::UnsupportedValue {
                    path: child_path.to_string(),
                    found: other.kind_name().to_owned(),
                })
            }
        };
        node.insert(key.as_str(), converted);
    }
    Ok(node)
}

fn has_digit_keys(node: &Node) -> bool {
    node.iter().any(|(key, value)| {
        key.requires_quoting() || value.as_mapping().is_some_and(has_digit_keys)
    })
}

// Walks the emitted document alongside the tree it came from.
fn check_digit_keys(node: &Node, emitted: &RawValue, path: &KeyPath<'_>) -> TextResult<()> {
    let RawValue::Mapping(entries) = emitted else {
        return Err(TextError::UnquotedKey {
            path: path.to_string(),
        });
    };
    for ((key, value), (emitted_key, emitted_value)) in node.iter().zip(entries) {
        let child_path = path.child(key.as_str());
        let loads_as_text = matches!(emitted_key, RawValue::String(s) if s == key.as_str());
        if key.requires_quoting() && !loads_as_text {
            return Err(TextError::UnquotedKey {
                path: child_path.to_string(),
            });
        }
        if let TreeValue::Mapping(child) = value {
            check_digit_keys(child, emitted_value, &child_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{ErrorKind, TypedScalar};

    #[test]
    fn emits_block_mapping_in_order() {
        let mut root = Node::new();
        root.insert("zeta", "last");
        root.insert("alpha", TypedScalar::Int32(7));
        let yaml = to_yaml_string(&root).unwrap();
        assert_eq!(yaml, "zeta: last\nalpha: !Int32 7\n");
    }

    #[test]
    fn digit_keys_are_quoted() {
        let mut root = Node::new();
        root.insert("480", Node::new());
        let yaml = to_yaml_string(&root).unwrap();
        assert!(yaml.starts_with("'480'"), "unquoted key in {yaml:?}");
    }

    #[test]
    fn unquoted_digit_key_is_detected() {
        let mut stats = Node::new();
        stats.insert("1", "WINS");
        let mut root = Node::new();
        root.insert("stats", stats);

        let emitted: RawValue = serde_yaml::from_str("stats:\n  1: WINS\n").unwrap();
        let err = check_digit_keys(&root, &emitted, &KeyPath::root()).unwrap_err();
        match err {
            TextError::UnquotedKey { ref path } => assert_eq!(path, "stats.1"),
            ref other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::InvalidSchemaValue);

        let emitted: RawValue = serde_yaml::from_str("stats:\n  '1': WINS\n").unwrap();
        check_digit_keys(&root, &emitted, &KeyPath::root()).unwrap();
    }

    #[test]
    fn digit_key_detection_is_recursive() {
        let mut inner = Node::new();
        inner.insert("7", "x");
        let mut root = Node::new();
        root.insert("game", inner);
        assert!(has_digit_keys(&root));
        root = Node::new();
        root.insert("game", "x");
        assert!(!has_digit_keys(&root));
    }

    #[test]
    fn ambiguous_text_values_are_quoted() {
        let mut root = Node::new();
        root.insert("a", "true");
        root.insert("b", "12");
        root.insert("c", "~");
        let reloaded = from_yaml_str(&to_yaml_string(&root).unwrap()).unwrap();
        assert_eq!(reloaded, root);
    }

    #[test]
    fn loads_tagged_scalars() {
        let node = from_yaml_str("hp: !Int32 10\nrate: !Float32 1.5\nid: !UInt64 '7'\n").unwrap();
        assert_eq!(node.get("hp"), Some(&TreeValue::Scalar(TypedScalar::Int32(10))));
        assert_eq!(
            node.get("rate"),
            Some(&TreeValue::Scalar(TypedScalar::Float32(1.5)))
        );
        assert_eq!(node.get("id"), Some(&TreeValue::Scalar(TypedScalar::UInt64(7))));
    }

    #[test]
    fn wide_integer_literal_is_invalid_scalar() {
        let err = from_yaml_str("game:\n  v: !Int32 99999999999999999999999\n").unwrap_err();
        assert!(matches!(err, TextError::InvalidScalar { .. }), "{err:?}");
        assert_eq!(err.kind(), ErrorKind::InvalidSchemaValue);
        assert!(err.to_string().contains("game.v"));
    }

    #[test]
    fn duplicate_key_reported_with_path() {
        let entries = vec![
            (RawValue::String("a".into()), RawValue::String("x".into())),
            (RawValue::String("a".into()), RawValue::String("y".into())),
        ];
        let err = mapping_to_node(&entries, &KeyPath::root()).unwrap_err();
        assert!(matches!(err, TextError::DuplicateKey { ref key, .. } if key == "a"));
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn root_must_be_mapping() {
        let err = from_yaml_str("- 1\n- 2\n").unwrap_err();
        assert!(matches!(err, TextError::RootNotMapping { found: "sequence" }));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFeature);
    }

    #[test]
    fn bare_numeric_key_rejected() {
        let err = from_yaml_str("42: name\n").unwrap_err();
        assert!(matches!(err, TextError::NonStringKey { ref key, .. } if key == "42"));
        assert_eq!(err.kind(), ErrorKind::InvalidSchemaValue);
    }

    #[test]
    fn untagged_values_rejected_with_path() {
        for (yaml, found) in [
            ("a:\n  b: 5\n", "untagged number"),
            ("a:\n  b: true\n", "boolean"),
            ("a:\n  b: ~\n", "null"),
            ("a:\n  b: [1]\n", "sequence"),
        ] {
            let err = from_yaml_str(yaml).unwrap_err();
            match err {
                TextError::UnsupportedValue { path, found: got } => {
                    assert_eq!(path, "a.b");
                    assert_eq!(got, found);
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        let err = from_yaml_str("w: !WideString hello\n").unwrap_err();
        assert!(err.to_string().contains("!WideString"));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFeature);
    }

    #[test]
    fn invalid_scalar_reports_path() {
        let err = from_yaml_str("stats:\n  '1':\n    max: !Int32 1.5\n").unwrap_err();
        assert!(err.to_string().contains("stats.1.max"));
        assert_eq!(err.kind(), ErrorKind::InvalidSchemaValue);
    }

    #[test]
    fn malformed_yaml_is_syntax_error() {
        let err = from_yaml_str("a: [unclosed\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn reader_matches_str() {
        let text = "game:\n  name: Test\n";
        let from_reader = from_yaml_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, from_yaml_str(text).unwrap());
    }
}
