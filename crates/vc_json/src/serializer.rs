use std::io::{Read, Write};

use vc_mapping::{Context, ContextArc, Flatten, Unflatten, codec};

use crate::JsonResult;

// -----------------------------------------------------------------------------
// JsonSerializer

/// Marshals values to JSON and back through a shared [`Context`].
///
/// Every call takes a read lock on the context for its duration, so
/// registrations made through [`context`](Self::context) are visible to
/// later calls.
///
/// # Examples
///
/// ```
/// use vc_json::JsonSerializer;
/// use vc_mapping::{Context, ContextArc, derive::Record};
///
/// #[derive(Record, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let serializer = JsonSerializer::new(ContextArc::new(Context::new()));
/// serializer
///     .context()
///     .write()
///     .register::<Point>()
///     .with_field("y", |f| f.rename("Y"));
///
/// let json = serializer.to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(json, r#"{"x":1,"Y":2}"#);
///
/// let point: Point = serializer.from_str(&json).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
#[derive(Clone, Debug)]
pub struct JsonSerializer {
    context: ContextArc,
}

impl Default for JsonSerializer {
    /// A serializer bound to [`ContextArc::global`].
    fn default() -> Self {
        Self::new(ContextArc::global().clone())
    }
}

impl JsonSerializer {
    #[inline]
    pub fn new(context: ContextArc) -> Self {
        Self { context }
    }

    /// Replaces the context used by later calls.
    #[inline]
    pub fn use_context(&mut self, context: ContextArc) {
        self.context = context;
    }

    #[inline]
    pub fn context(&self) -> &ContextArc {
        &self.context
    }

    /// Flattens `value` and encodes it into JSON bytes.
    pub fn to_vec(&self, value: &dyn Flatten) -> JsonResult<Vec<u8>> {
        to_vec_with(value, &self.context.read())
    }

    /// Like [`to_vec`](Self::to_vec), into a `String`.
    pub fn to_string(&self, value: &dyn Flatten) -> JsonResult<String> {
        let flat = vc_mapping::flatten(value, &self.context.read());
        let json = codec::encode_to_string(&flat)?;
        log::trace!("marshalled {} bytes", json.len());
        Ok(json)
    }

    /// Writes the JSON of `value` to `writer` and flushes it.
    pub fn to_writer<W: Write>(&self, mut writer: W, value: &dyn Flatten) -> JsonResult<()> {
        let bytes = self.to_vec(value)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Decodes JSON bytes and rebuilds a `T`.
    pub fn from_slice<T: Unflatten>(&self, bytes: &[u8]) -> JsonResult<T> {
        from_slice_with(bytes, &self.context.read())
    }

    pub fn from_str<T: Unflatten>(&self, json: &str) -> JsonResult<T> {
        self.from_slice(json.as_bytes())
    }

    /// Reads `reader` to its end and rebuilds a `T` from the JSON read.
    pub fn from_reader<T: Unflatten, R: Read>(&self, mut reader: R) -> JsonResult<T> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.from_slice(&bytes)
    }
}

// -----------------------------------------------------------------------------
// Explicit context

/// Flattens `value` with `context` and encodes it into JSON bytes.
///
/// Fields and elements that fail to encode are left out; only a failure
/// to encode the document itself is returned.
pub fn to_vec_with(value: &dyn Flatten, context: &Context) -> JsonResult<Vec<u8>> {
    let flat = vc_mapping::flatten(value, context);
    let bytes = codec::encode_to_vec(&flat)?;
    log::trace!("marshalled {} bytes", bytes.len());
    Ok(bytes)
}

/// Decodes JSON bytes and rebuilds a `T` with `context`.
///
/// Malformed JSON is an error. Well-formed JSON that does not match `T`
/// is not: mismatched positions take their zero values.
pub fn from_slice_with<T: Unflatten>(bytes: &[u8], context: &Context) -> JsonResult<T> {
    log::trace!("unmarshal `{}` from {} bytes", T::type_name(), bytes.len());
    let flat = codec::decode(bytes)?;
    Ok(vc_mapping::unflatten(&flat, context))
}
