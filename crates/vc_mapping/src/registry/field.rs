use core::any::Any;
use core::marker::PhantomData;

use super::{FlattenTransform, UnflattenTransform};
use crate::Flat;

// -----------------------------------------------------------------------------
// Field

/// Customization of one field of a registered record type.
///
/// Created by [`MappingMut::field`](super::MappingMut::field) with the
/// declared name as its wire name and no transforms.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    wire_name: String,
    flatten: Option<FlattenTransform>,
    unflatten: Option<UnflattenTransform>,
}

impl Field {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            wire_name: name.to_owned(),
            flatten: None,
            unflatten: None,
        }
    }

    /// The declared name of the field.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The key used for the field on the wire.
    #[inline]
    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    #[inline]
    pub fn flatten_transform(&self) -> Option<&FlattenTransform> {
        self.flatten.as_ref()
    }

    #[inline]
    pub fn unflatten_transform(&self) -> Option<&UnflattenTransform> {
        self.unflatten.as_ref()
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// Builder for a [`Field`] of the record type `T`.
///
/// Every setter consumes and returns the builder so calls chain.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, Flat, derive::Record};
///
/// #[derive(Record)]
/// struct Temperature {
///     celsius: f64,
/// }
///
/// let mut context = Context::new();
/// let mut mapping = context.register::<Temperature>();
/// let field = mapping
///     .field("celsius")
///     .rename("c")
///     .on_flatten(|c: &f64| Flat::from(c.round()));
/// assert_eq!(field.wire_name(), "c");
/// ```
pub struct FieldMut<'a, T> {
    field: &'a mut Field,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> FieldMut<'a, T> {
    #[inline]
    pub(crate) fn new(field: &'a mut Field) -> Self {
        Self {
            field,
            _marker: PhantomData,
        }
    }

    /// Sets the key used for the field on the wire.
    pub fn rename(self, wire_name: impl Into<String>) -> Self {
        self.field.wire_name = wire_name.into();
        self
    }

    /// Replaces how the field is flattened.
    ///
    /// `M` must be the declared type of the field; a transform registered
    /// for another type is skipped at runtime with a warning.
    pub fn on_flatten<M: Any>(self, func: impl Fn(&M) -> Flat + Send + Sync + 'static) -> Self {
        self.field.flatten = Some(FlattenTransform::new(func));
        self
    }

    /// Replaces how the field is rebuilt.
    ///
    /// `M` must be the declared type of the field; a transform registered
    /// for another type is skipped at runtime with a warning.
    pub fn on_unflatten<M: Any>(self, func: impl Fn(&Flat) -> M + Send + Sync + 'static) -> Self {
        self.field.unflatten = Some(UnflattenTransform::new(func));
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.field.name
    }

    #[inline]
    pub fn wire_name(&self) -> &str {
        &self.field.wire_name
    }
}
