//! Custom YAML tags for typed scalars.
//!
//! Each [`ScalarKind`] is written as a tagged scalar named after the kind,
//! e.g. `!Int32 7` or `!Float32 1.5`. On load the tagged literal may be a YAML
//! number or a string holding a numeric literal. A NaN other than the canonical
//! quiet NaN is written as `!Float32 nan:0x7fc01234` so its payload survives.

use codec::{ScalarKind, TypedScalar};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::Value;

use crate::error::{TextError, TextResult};
use crate::path::KeyPath;
use crate::raw::{bare_tag, RawValue};

const NAN_BITS_PREFIX: &str = "nan:0x";

/// A numeric literal before it is checked against a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Literal {
    Integer(i128),
    Real(f64),
    NanBits(u32),
}

/// Renders a scalar as a tagged YAML value.
pub fn scalar_to_value(scalar: TypedScalar) -> Value {
    let inner = match scalar {
        TypedScalar::Int32(v) => Value::from(v),
        TypedScalar::Float32(v) => float_value(v),
        TypedScalar::Pointer(v) | TypedScalar::Color(v) => Value::from(v),
        TypedScalar::UInt64(v) => Value::from(v),
    };
    Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(scalar.kind().name()),
        value: inner,
    }))
}

/// Looks up the scalar kind named by `tag`, if any.
pub fn kind_for_tag(tag: &str) -> Option<ScalarKind> {
    ScalarKind::from_name(bare_tag(tag))
}

/// Converts the literal under a scalar tag into a typed scalar.
pub(crate) fn scalar_from_tagged(
    kind: ScalarKind,
    value: &RawValue,
    path: &KeyPath<'_>,
) -> TextResult<TypedScalar> {
    let invalid = || TextError::InvalidScalar {
        path: path.to_string(),
        kind,
        literal: value.describe(),
    };
    let literal = literal(value).ok_or_else(invalid)?;
    scalar_from_literal(kind, literal).ok_or_else(invalid)
}

// The shortest decimal that reads back as the same f32, when one exists.
#[allow(clippy::cast_possible_truncation)]
fn float_value(v: f32) -> Value {
    if v.is_nan() && v.to_bits() != f32::NAN.to_bits() {
        return Value::String(format!("{NAN_BITS_PREFIX}{:08x}", v.to_bits()));
    }
    if v.is_finite() {
        if let Ok(shortest) = v.to_string().parse::<f64>() {
            if (shortest as f32).to_bits() == v.to_bits() {
                return Value::from(shortest);
            }
        }
    }
    Value::from(f64::from(v))
}

fn literal(value: &RawValue) -> Option<Literal> {
    match value {
        RawValue::Integer(i) => Some(Literal::Integer(*i)),
        RawValue::Real(r) => Some(Literal::Real(*r)),
        RawValue::String(s) => parse_literal(s.trim()),
        _ => None,
    }
}

fn parse_literal(text: &str) -> Option<Literal> {
    if let Some(hex) = text.strip_prefix(NAN_BITS_PREFIX) {
        let bits = u32::from_str_radix(hex, 16).ok()?;
        return f32::from_bits(bits).is_nan().then_some(Literal::NanBits(bits));
    }
    if let Ok(i) = text.parse::<i128>() {
        return Some(Literal::Integer(i));
    }
    text.parse::<f64>().ok().map(Literal::Real)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn scalar_from_literal(kind: ScalarKind, literal: Literal) -> Option<TypedScalar> {
    match kind {
        ScalarKind::Int32 => integral(literal)
            .and_then(|i| i32::try_from(i).ok())
            .map(TypedScalar::Int32),
        ScalarKind::Float32 => {
            let value = match literal {
                Literal::Integer(i) => i as f32,
                Literal::Real(r) if r.is_nan() => f32::NAN,
                Literal::Real(r) => {
                    let narrowed = r as f32;
                    if r.is_finite() && !narrowed.is_finite() {
                        return None;
                    }
                    narrowed
                }
                Literal::NanBits(bits) => f32::from_bits(bits),
            };
            Some(TypedScalar::Float32(value))
        }
        ScalarKind::Pointer => integral(literal)
            .and_then(|i| u32::try_from(i).ok())
            .map(TypedScalar::Pointer),
        ScalarKind::Color => integral(literal)
            .and_then(|i| u32::try_from(i).ok())
            .map(TypedScalar::Color),
        ScalarKind::UInt64 => integral(literal)
            .and_then(|i| u64::try_from(i).ok())
            .map(TypedScalar::UInt64),
    }
}

// Integer kinds accept a real literal only when it has no fractional part.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral(literal: Literal) -> Option<i128> {
    match literal {
        Literal::Integer(i) => Some(i),
        Literal::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e38 => {
            Some(r as i128)
        }
        Literal::Real(_) | Literal::NanBits(_) => None,
    }
}
