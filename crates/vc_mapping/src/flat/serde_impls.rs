use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Flat, FlatMap};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Flat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Flat::Null => serializer.serialize_unit(),
            Flat::Bool(b) => serializer.serialize_bool(*b),
            Flat::Int(i) => serializer.serialize_i64(*i),
            Flat::Uint(u) => serializer.serialize_u64(*u),
            Flat::Float(f) => serializer.serialize_f64(*f),
            Flat::Str(s) => serializer.serialize_str(s),
            Flat::Raw(raw) => raw.serialize(serializer),
            Flat::Seq(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Flat::Map(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for FlatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Deserialize

/// Builds a [`Flat`] tree, keeping object keys in input order.
struct FlatVisitor;

impl<'de> Visitor<'de> for FlatVisitor {
    type Value = Flat;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any flat value")
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<Flat, E> {
        Ok(Flat::Null)
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<Flat, E> {
        Ok(Flat::Null)
    }

    #[inline]
    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Flat, D::Error> {
        Flat::deserialize(deserializer)
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Flat, E> {
        Ok(Flat::Bool(v))
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Flat, E> {
        Ok(Flat::Int(v))
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Flat, E> {
        Ok(Flat::Uint(v))
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Flat, E> {
        Ok(Flat::Float(v))
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Flat, E> {
        Ok(Flat::Str(v.to_owned()))
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> Result<Flat, E> {
        Ok(Flat::Str(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Flat, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(64));
        while let Some(item) = seq.next_element::<Flat>()? {
            items.push(item);
        }
        Ok(Flat::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Flat, A::Error> {
        let mut map = FlatMap::with_capacity(access.size_hint().unwrap_or(0).min(64));
        while let Some((key, value)) = access.next_entry::<String, Flat>()? {
            map.insert(key, value);
        }
        Ok(Flat::Map(map))
    }
}

impl<'de> Deserialize<'de> for Flat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlatVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{Flat, FlatMap};

    #[test]
    fn decode_keeps_key_order() {
        let flat: Flat = serde_json::from_str(r#"{"z":1,"a":[true,null],"m":-2.5}"#).unwrap();
        let Flat::Map(map) = &flat else {
            panic!("expected a map, got {flat:?}");
        };

        assert_eq!(map.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(map.get("z"), Some(&Flat::Uint(1)));
        assert_eq!(
            map.get("a"),
            Some(&Flat::Seq(vec![Flat::Bool(true), Flat::Null]))
        );
        assert_eq!(map.get("m"), Some(&Flat::Float(-2.5)));
    }

    #[test]
    fn raw_fragments_are_embedded_verbatim() {
        let raw = serde_json::value::RawValue::from_string("{\"k\":[1,2]}".to_owned()).unwrap();
        let mut map = FlatMap::new();
        map.insert("inner", Flat::Raw(raw));
        map.insert("n", Flat::Int(-3));

        let text = serde_json::to_string(&Flat::Map(map)).unwrap();
        assert_eq!(text, r#"{"inner":{"k":[1,2]},"n":-3}"#);
    }
}
