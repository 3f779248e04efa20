use std::io::{Read, Write};
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard};

use vc_mapping::{ContextArc, Flatten, Unflatten};

use crate::{JsonResult, JsonSerializer};

// -----------------------------------------------------------------------------
// Default serializer

static DEFAULT: LazyLock<RwLock<JsonSerializer>> =
    LazyLock::new(|| RwLock::new(JsonSerializer::default()));

fn default_serializer() -> RwLockReadGuard<'static, JsonSerializer> {
    DEFAULT.read().unwrap_or_else(PoisonError::into_inner)
}

/// Binds the default serializer to another context.
///
/// Affects every later call of the free functions in this crate.
pub fn use_context(context: ContextArc) {
    DEFAULT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .use_context(context);
}

/// Returns the context of the default serializer.
pub fn context() -> ContextArc {
    default_serializer().context().clone()
}

pub fn to_vec(value: &dyn Flatten) -> JsonResult<Vec<u8>> {
    default_serializer().to_vec(value)
}

pub fn to_string(value: &dyn Flatten) -> JsonResult<String> {
    default_serializer().to_string(value)
}

pub fn to_writer<W: Write>(writer: W, value: &dyn Flatten) -> JsonResult<()> {
    default_serializer().to_writer(writer, value)
}

pub fn from_slice<T: Unflatten>(bytes: &[u8]) -> JsonResult<T> {
    default_serializer().from_slice(bytes)
}

pub fn from_str<T: Unflatten>(json: &str) -> JsonResult<T> {
    default_serializer().from_str(json)
}

pub fn from_reader<T: Unflatten, R: Read>(reader: R) -> JsonResult<T> {
    default_serializer().from_reader(reader)
}
