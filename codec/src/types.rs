//! Core tree types for the codec.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use wire::WireTag;

/// A mapping key.
///
/// Keys that consist only of ASCII digits are flagged as requiring quotes, so a
/// text form never reads them back as integers.
#[derive(Debug, Clone)]
pub struct Key {
    text: String,
    requires_quoting: bool,
}

impl Key {
    /// Creates a key, computing its quoting flag.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let requires_quoting = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
        Self {
            text,
            requires_quoting,
        }
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the key is an all-digit string.
    #[must_use]
    pub const fn requires_quoting(&self) -> bool {
        self.requires_quoting
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

// The quoting flag is derived from the text, so identity is the text alone.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The closed set of numeric kinds a scalar can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Int32,
    Float32,
    Pointer,
    Color,
    UInt64,
}

impl ScalarKind {
    pub const ALL: [Self; 5] = [
        Self::Int32,
        Self::Float32,
        Self::Pointer,
        Self::Color,
        Self::UInt64,
    ];

    /// Returns the wire tag written before values of this kind.
    #[must_use]
    pub const fn wire_tag(self) -> WireTag {
        match self {
            Self::Int32 => WireTag::Int32,
            Self::Float32 => WireTag::Float32,
            Self::Pointer => WireTag::Pointer,
            Self::Color => WireTag::Color,
            Self::UInt64 => WireTag::UInt64,
        }
    }

    /// Maps a wire tag back to its scalar kind, if it is a scalar tag.
    #[must_use]
    pub const fn from_wire_tag(tag: WireTag) -> Option<Self> {
        match tag {
            WireTag::Int32 => Some(Self::Int32),
            WireTag::Float32 => Some(Self::Float32),
            WireTag::Pointer => Some(Self::Pointer),
            WireTag::Color => Some(Self::Color),
            WireTag::UInt64 => Some(Self::UInt64),
            WireTag::MappingBegin
            | WireTag::String
            | WireTag::WideString
            | WireTag::MappingEnd => None,
        }
    }

    /// Type name used by text forms.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int32 => "Int32",
            Self::Float32 => "Float32",
            Self::Pointer => "Pointer",
            Self::Color => "Color",
            Self::UInt64 => "UInt64",
        }
    }

    /// Looks up a kind by its text type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric value tagged with its wire kind.
#[derive(Debug, Clone, Copy)]
pub enum TypedScalar {
    Int32(i32),
    Float32(f32),
    /// Opaque 32-bit value.
    Pointer(u32),
    /// Packed 32-bit color.
    Color(u32),
    UInt64(u64),
}

impl TypedScalar {
    #[must_use]
    pub const fn kind(self) -> ScalarKind {
        match self {
            Self::Int32(_) => ScalarKind::Int32,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Pointer(_) => ScalarKind::Pointer,
            Self::Color(_) => ScalarKind::Color,
            Self::UInt64(_) => ScalarKind::UInt64,
        }
    }

    #[must_use]
    pub const fn wire_tag(self) -> WireTag {
        self.kind().wire_tag()
    }
}

// Floats compare by bit pattern so round trips can be checked exactly.
impl PartialEq for TypedScalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Pointer(a), Self::Pointer(b)) | (Self::Color(a), Self::Color(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypedScalar {}

impl fmt::Display for TypedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{}({v})", self.kind()),
            Self::Float32(v) => write!(f, "{}({v})", self.kind()),
            Self::Pointer(v) | Self::Color(v) => write!(f, "{}({v})", self.kind()),
            Self::UInt64(v) => write!(f, "{}({v})", self.kind()),
        }
    }
}

/// A value stored under a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValue {
    Mapping(Node),
    Text(String),
    Scalar(TypedScalar),
}

impl TreeValue {
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Node> {
        match self {
            Self::Mapping(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<TypedScalar> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    /// Returns the wire tag this value is written with.
    #[must_use]
    pub const fn wire_tag(&self) -> WireTag {
        match self {
            Self::Mapping(_) => WireTag::MappingBegin,
            Self::Text(_) => WireTag::String,
            Self::Scalar(scalar) => scalar.wire_tag(),
        }
    }
}

impl From<Node> for TreeValue {
    fn from(node: Node) -> Self {
        Self::Mapping(node)
    }
}

impl From<String> for TreeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TreeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<TypedScalar> for TreeValue {
    fn from(scalar: TypedScalar) -> Self {
        Self::Scalar(scalar)
    }
}

/// An insertion-ordered mapping of unique keys to values.
#[derive(Debug, Clone, Default)]
pub struct Node {
    entries: IndexMap<Key, TreeValue>,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TreeValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<TreeValue>) -> Option<TreeValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &TreeValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }
}

// Equality is order-sensitive: the wire format is.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Node {}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a Key, &'a TreeValue);
    type IntoIter = indexmap::map::Iter<'a, Key, TreeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<Key>, V: Into<TreeValue>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Self::new();
        for (key, value) in iter {
            node.insert(key, value);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_digit_flag() {
        assert!(Key::new("42").requires_quoting());
        assert!(Key::new("0007").requires_quoting());
        assert!(!Key::new("stat_42").requires_quoting());
        assert!(!Key::new("1.5").requires_quoting());
        assert!(!Key::new("-1").requires_quoting());
        assert!(!Key::new("").requires_quoting());
    }

    #[test]
    fn key_equality_ignores_construction_path() {
        let a: Key = "bits".into();
        let b: Key = String::from("bits").into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "bits");
    }

    #[test]
    fn scalar_kind_wire_tags_are_distinct() {
        let tags: Vec<WireTag> = ScalarKind::ALL.iter().map(|k| k.wire_tag()).collect();
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn scalar_kind_wire_tag_roundtrip() {
        for kind in ScalarKind::ALL {
            assert_eq!(ScalarKind::from_wire_tag(kind.wire_tag()), Some(kind));
        }
        assert_eq!(ScalarKind::from_wire_tag(WireTag::String), None);
        assert_eq!(ScalarKind::from_wire_tag(WireTag::WideString), None);
    }

    #[test]
    fn scalar_kind_names() {
        for kind in ScalarKind::ALL {
            assert_eq!(ScalarKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ScalarKind::from_name("int32"), None);
        assert_eq!(ScalarKind::from_name("WideString"), None);
    }

    #[test]
    fn pointer_and_color_are_not_interchangeable() {
        assert_ne!(TypedScalar::Pointer(5), TypedScalar::Color(5));
        assert_ne!(TypedScalar::Int32(5), TypedScalar::Pointer(5));
    }

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(TypedScalar::Float32(1.5), TypedScalar::Float32(1.5));
        assert_ne!(TypedScalar::Float32(0.0), TypedScalar::Float32(-0.0));
        assert_eq!(
            TypedScalar::Float32(f32::NAN),
            TypedScalar::Float32(f32::NAN)
        );
    }

    #[test]
    fn scalar_display() {
        assert_eq!(TypedScalar::UInt64(9).to_string(), "UInt64(9)");
        assert_eq!(TypedScalar::Color(255).to_string(), "Color(255)");
    }

    #[test]
    fn node_preserves_insertion_order() {
        let mut node = Node::new();
        node.insert("zeta", "z");
        node.insert("alpha", TypedScalar::Int32(1));
        node.insert("mid", Node::new());
        let keys: Vec<&str> = node.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn node_replace_keeps_position() {
        let mut node = Node::new();
        node.insert("a", "1");
        node.insert("b", "2");
        let previous = node.insert("a", "3");
        assert_eq!(previous, Some(TreeValue::Text("1".into())));
        let keys: Vec<&str> = node.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(node.get("a").and_then(TreeValue::as_text), Some("3"));
    }

    #[test]
    fn node_equality_is_order_sensitive() {
        let ab: Node = [("a", "1"), ("b", "2")].into_iter().collect();
        let ba: Node = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn tree_value_accessors() {
        let value = TreeValue::from(TypedScalar::Pointer(3));
        assert_eq!(value.as_scalar(), Some(TypedScalar::Pointer(3)));
        assert!(value.as_text().is_none());
        assert!(value.as_mapping().is_none());
        assert_eq!(value.wire_tag(), WireTag::Pointer);
        assert_eq!(TreeValue::from("x").wire_tag(), WireTag::String);
        assert_eq!(TreeValue::from(Node::new()).wire_tag(), WireTag::MappingBegin);
    }
}
