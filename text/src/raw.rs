//! Loose YAML value used while loading.
//!
//! `serde_yaml::Value` cannot hold integers wider than 64 bits, so parsing a
//! literal like `!UInt64 18446744073709551616` into it fails before the tag is
//! seen. [`RawValue`] keeps such literals so they can be rejected against
//! their tag instead.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess};
use serde::de::{VariantAccess, Visitor};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawValue {
    Null,
    Bool(bool),
    Integer(i128),
    Real(f64),
    String(String),
    /// Sequence contents are never used.
    Sequence,
    /// Entries in document order.
    Mapping(Vec<(RawValue, RawValue)>),
    Tagged {
        tag: String,
        value: Box<RawValue>,
    },
}

impl RawValue {
    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) | Self::Real(_) => "untagged number",
            Self::String(_) => "string",
            Self::Sequence => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Tagged { .. } => "tagged value",
        }
    }

    /// Short rendering for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Real(r) => r.to_string(),
            Self::String(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Tagged { tag, .. } => format!("!{} value", bare_tag(tag)),
            other => other.kind_name().to_owned(),
        }
    }
}

/// Strips the local-tag bang, if present.
pub(crate) fn bare_tag(tag: &str) -> &str {
    tag.strip_prefix('!').unwrap_or(tag)
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawVisitor)
    }
}

struct RawVisitor;

impl<'de> Visitor<'de> for RawVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Integer(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Integer(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<RawValue, E> {
        Ok(RawValue::Integer(v))
    }

    // Beyond i128 the value is out of range for every kind anyway.
    fn visit_u128<E: de::Error>(self, v: u128) -> Result<RawValue, E> {
        Ok(RawValue::Integer(i128::try_from(v).unwrap_or(i128::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Real(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawValue::Sequence)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<RawValue, RawValue>()? {
            entries.push(entry);
        }
        Ok(RawValue::Mapping(entries))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<RawValue, A::Error> {
        let (tag, contents) = data.variant::<String>()?;
        let value = contents.newtype_variant::<RawValue>()?;
        Ok(RawValue::Tagged {
            tag,
            value: Box::new(value),
        })
    }
}
