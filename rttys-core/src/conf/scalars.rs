//! Reads the top level of a YAML document as keys mapped to the source text
//! of their scalar values.
//!
//! Config values are consumed as text and converted per slot, so `0x1F`,
//! `1e3` or a 40-digit token must reach the overlay exactly as written.
//! The document is walked twice: the first pass records the shape of every
//! top-level value, the second pulls the raw text of the scalars only.

use serde::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level key to scalar text. Null and nested values map to `None`.
pub type ScalarTable = BTreeMap<String, Option<String>>;

/// Returns `Ok(None)` when the document is well-formed but its top level is
/// not a mapping.
pub fn read_scalars(src: &str) -> Result<Option<ScalarTable>, serde_yaml::Error> {
    if is_blank(src) {
        return Ok(Some(ScalarTable::new()));
    }

    let shape = ShapeSeed { top: true }.deserialize(serde_yaml::Deserializer::from_str(src))?;
    let entries = match shape {
        Shape::Mapping(entries) => entries,
        _ => return Ok(None),
    };

    let shapes: Vec<Shape> = entries.iter().map(|(_, shape)| shape.clone()).collect();
    let texts =
        TextSeed { shapes: &shapes }.deserialize(serde_yaml::Deserializer::from_str(src))?;

    // Later duplicates win.
    Ok(Some(texts.into_iter().collect()))
}

/// Nothing but comments, blank lines and document markers.
fn is_blank(src: &str) -> bool {
    src.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

//-----------------------------------------------------------------------------
// Pass 1: shapes
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Scalar,
    Null,
    Nested,
    Mapping(Vec<(String, Shape)>),
}

/// Only the top level records its keys; deeper levels are drained.
#[derive(Clone, Copy)]
struct ShapeSeed {
    top: bool,
}

impl<'de> DeserializeSeed<'de> for ShapeSeed {
    type Value = Shape;

    fn deserialize<D>(self, deserializer: D) -> Result<Shape, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ShapeSeed {
    type Value = Shape;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Shape, E> {
        Ok(Shape::Scalar)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Shape, E> {
        Ok(Shape::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Shape, E> {
        Ok(Shape::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Shape, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Shape, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Shape::Nested)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Shape, A::Error>
    where
        A: MapAccess<'de>,
    {
        if !self.top {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            return Ok(Shape::Nested);
        }

        let mut entries = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            let shape = map.next_value_seed(ShapeSeed { top: false })?;
            entries.push((key, shape));
        }
        Ok(Shape::Mapping(entries))
    }

    // Custom tags (`!foo bar`) arrive as enums.
    fn visit_enum<A>(self, data: A) -> Result<Shape, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_, variant) = data.variant::<IgnoredAny>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(Shape::Nested)
    }
}

//-----------------------------------------------------------------------------
// Pass 2: scalar text
//-----------------------------------------------------------------------------

/// Walks the top-level mapping again, entry by entry, reading the text of the
/// entries pass 1 found to be scalars.
struct TextSeed<'a> {
    shapes: &'a [Shape],
}

impl<'de> DeserializeSeed<'de> for TextSeed<'_> {
    type Value = Vec<(String, Option<String>)>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for TextSeed<'_> {
    type Value = Vec<(String, Option<String>)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(self.shapes.len());
        let mut index = 0;
        while let Some(key) = map.next_key::<String>()? {
            let text = match self.shapes.get(index) {
                Some(Shape::Scalar) => Some(map.next_value_seed(RawText)?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    None
                }
            };
            entries.push((key, text));
            index += 1;
        }
        Ok(entries)
    }
}

/// The scalar exactly as written, without quotes.
struct RawText;

impl<'de> DeserializeSeed<'de> for RawText {
    type Value = String;

    fn deserialize<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Visitor<'de> for RawText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }
}
