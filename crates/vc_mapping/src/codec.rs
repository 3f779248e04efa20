//! JSON encoding of [`Flat`] values, backed by `serde_json`.
//!
//! The engine pre-encodes each record field and sequence element with
//! [`encode`]; the facade uses [`encode_to_vec`] and [`decode`] for whole
//! documents.

use serde_json::value::RawValue;

use crate::Flat;
use crate::error::CodecError;

/// Encodes a value into a fragment that can be embedded in a parent value.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Flat, codec};
///
/// let raw = codec::encode(&Flat::Seq(vec![Flat::Int(1), Flat::Null])).unwrap();
/// assert_eq!(raw.get(), "[1,null]");
/// ```
pub fn encode(flat: &Flat) -> Result<Box<RawValue>, CodecError> {
    serde_json::value::to_raw_value(flat).map_err(CodecError::Encode)
}

/// Encodes a value into JSON bytes.
pub fn encode_to_vec(flat: &Flat) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(flat).map_err(CodecError::Encode)
}

/// Encodes a value into a JSON string.
pub fn encode_to_string(flat: &Flat) -> Result<String, CodecError> {
    serde_json::to_string(flat).map_err(CodecError::Encode)
}

/// Decodes JSON bytes. Objects keep their key order.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Flat, codec};
///
/// let flat = codec::decode(br#"{"b":1,"a":2}"#).unwrap();
/// let keys: Vec<_> = flat.as_map().unwrap().keys().collect();
/// assert_eq!(keys, ["b", "a"]);
///
/// assert!(codec::decode(b"{").is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Flat, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

/// Decodes a fragment produced by [`encode`].
pub fn decode_raw(raw: &RawValue) -> Result<Flat, CodecError> {
    serde_json::from_str(raw.get()).map_err(CodecError::Decode)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{decode, decode_raw, encode, encode_to_vec};
    use crate::{Flat, FlatMap};

    #[test]
    fn fragment_round_trip() {
        let mut map = FlatMap::new();
        map.insert("name", Flat::from("w"));
        map.insert("tags", Flat::Seq(vec![Flat::from("a"), Flat::from("b")]));
        let flat = Flat::Map(map);

        let raw = encode(&flat).unwrap();
        assert_eq!(raw.get(), r#"{"name":"w","tags":["a","b"]}"#);
        assert_eq!(decode_raw(&raw).unwrap(), flat);
    }

    #[test]
    fn truncated_input_is_eof() {
        let err = decode(br#"{"x":"#).unwrap_err();
        assert!(err.is_eof());
        assert!(err.to_string().starts_with("failed to decode"));
    }

    #[test]
    fn wide_object_decodes_quickly() {
        const WIDTH: usize = 50_000;

        let mut json = String::from("{");
        for i in 0..WIDTH {
            json.push_str(&format!("\"k{i}\":{i},"));
        }
        json.push_str("\"k0\":-1}");

        let start = std::time::Instant::now();
        let flat = decode(json.as_bytes()).unwrap();
        let elapsed = start.elapsed();

        let map = flat.as_map().unwrap();
        assert_eq!(map.len(), WIDTH);
        assert_eq!(map.get("k0"), Some(&Flat::Int(-1)));
        assert_eq!(map.get("k49999"), Some(&Flat::Uint(49_999)));
        assert_eq!(map.keys().nth(1), Some("k1"));
        assert!(elapsed.as_secs() < 5, "decoding took {elapsed:?}");
    }

    #[test]
    fn non_finite_floats_encode_as_null() {
        assert_eq!(encode_to_vec(&Flat::Float(f64::NAN)).unwrap(), b"null");
    }
}
