use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use vc_utils::hash::HashMap;

use super::{Field, FieldMut, FlattenTransform, UnflattenTransform};
use crate::Flat;
use crate::shape::{Shape, TypeShape};

// -----------------------------------------------------------------------------
// Mapping

/// Customizations of one registered type.
///
/// A whole-type transform, when present, takes the type out of structural
/// traversal: its flatten transform alone produces the flat value and its
/// unflatten transform alone consumes it. Field customizations only apply
/// to record types without such a transform.
#[derive(Clone)]
pub struct Mapping {
    type_id: TypeId,
    type_name: &'static str,
    shape: Shape,
    field_names: &'static [&'static str],
    flatten: Option<FlattenTransform>,
    unflatten: Option<UnflattenTransform>,
    fields: HashMap<&'static str, Field>,
}

impl Mapping {
    /// Creates an empty mapping for `T`.
    pub fn new<T: TypeShape>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: T::type_name(),
            shape: T::shape(),
            field_names: T::field_names(),
            flatten: None,
            unflatten: None,
            fields: HashMap::default(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn flatten_transform(&self) -> Option<&FlattenTransform> {
        self.flatten.as_ref()
    }

    #[inline]
    pub fn unflatten_transform(&self) -> Option<&UnflattenTransform> {
        self.unflatten.as_ref()
    }

    #[inline]
    pub fn has_flatten(&self) -> bool {
        self.flatten.is_some()
    }

    #[inline]
    pub fn has_unflatten(&self) -> bool {
        self.unflatten.is_some()
    }

    /// Returns the customization of a field, if one was created.
    ///
    /// Unlike [`MappingMut::field`] this never creates a [`Field`].
    #[inline]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterates over the customized fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.field_names
            .iter()
            .filter_map(|name| self.fields.get(name))
    }

    /// The number of customized fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    // # Panics
    // `name` is not a declared field of the mapped type.
    fn field_or_insert(&mut self, name: &str) -> &mut Field {
        let Some(&name) = self.field_names.iter().find(|&&declared| declared == name) else {
            if self.shape == Shape::Record {
                panic!(
                    "type `{}` has no field named `{name}`, declared fields are {:?}",
                    self.type_name, self.field_names,
                );
            } else {
                panic!(
                    "type `{}` is a {} and has no fields, requested `{name}`",
                    self.type_name, self.shape,
                );
            }
        };
        self.fields.entry(name).or_insert_with(|| Field::new(name))
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("type_name", &self.type_name)
            .field("shape", &self.shape)
            .field("flatten", &self.flatten)
            .field("unflatten", &self.unflatten)
            .field("fields", &self.fields().collect::<Vec<_>>())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// MappingMut

/// Typed builder for the [`Mapping`] of `T`, returned by
/// [`Context::register`](super::Context::register).
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, Flat, derive::Record};
///
/// #[derive(Record, Debug, PartialEq)]
/// struct Money {
///     dollars: u32,
///     cents: u32,
/// }
///
/// let mut context = Context::new();
/// context
///     .register::<Money>()
///     .on_flatten(|m: &Money| Flat::from(m.dollars * 100 + m.cents))
///     .on_unflatten(|flat: &Flat| {
///         let total = flat.as_u64().unwrap_or(0) as u32;
///         Money { dollars: total / 100, cents: total % 100 }
///     });
///
/// let flat = vc_mapping::flatten(&Money { dollars: 1, cents: 50 }, &context);
/// assert_eq!(flat, Flat::Uint(150));
///
/// let money: Money = vc_mapping::unflatten(&flat, &context);
/// assert_eq!(money, Money { dollars: 1, cents: 50 });
/// ```
pub struct MappingMut<'a, T> {
    mapping: &'a mut Mapping,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: TypeShape> MappingMut<'a, T> {
    #[inline]
    pub(crate) fn new(mapping: &'a mut Mapping) -> Self {
        debug_assert_eq!(mapping.type_id, TypeId::of::<T>());
        Self {
            mapping,
            _marker: PhantomData,
        }
    }

    /// Returns the builder of a field, creating its customization on first
    /// access. Later calls return the same field.
    ///
    /// # Panics
    ///
    /// Panics if `T` declares no field called `name`.
    pub fn field(&mut self, name: &str) -> FieldMut<'_, T> {
        FieldMut::new(self.mapping.field_or_insert(name))
    }

    /// Configures one field and returns the mapping builder, so several
    /// fields can be configured in one chain.
    ///
    /// # Panics
    ///
    /// Panics if `T` declares no field called `name`.
    pub fn with_field(
        mut self,
        name: &str,
        configure: impl FnOnce(FieldMut<'_, T>) -> FieldMut<'_, T>,
    ) -> Self {
        configure(self.field(name));
        self
    }

    /// Replaces how values of `T` are flattened.
    pub fn on_flatten(self, func: impl Fn(&T) -> Flat + Send + Sync + 'static) -> Self {
        self.mapping.flatten = Some(FlattenTransform::new(func));
        self
    }

    /// Replaces how values of `T` are rebuilt.
    pub fn on_unflatten(self, func: impl Fn(&Flat) -> T + Send + Sync + 'static) -> Self {
        self.mapping.unflatten = Some(UnflattenTransform::new(func));
        self
    }

    /// Read access to the mapping being configured.
    #[inline]
    pub fn as_mapping(&self) -> &Mapping {
        self.mapping
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Mapping;
    use crate::registry::Context;
    use crate::shape::{Shape, TypeShape};

    struct Pair;

    impl TypeShape for Pair {
        fn shape() -> Shape {
            Shape::Record
        }

        fn field_names() -> &'static [&'static str] {
            &["a", "b"]
        }
    }

    #[test]
    fn field_is_created_once() {
        let mut context = Context::new();
        let mut mapping = context.register::<Pair>();
        mapping.field("b").rename("B");
        assert_eq!(mapping.field("b").wire_name(), "B");
        assert_eq!(mapping.as_mapping().field_len(), 1);
    }

    #[test]
    fn lookup_does_not_create() {
        let mapping = Mapping::new::<Pair>();
        assert!(mapping.field_by_name("a").is_none());
        assert_eq!(mapping.field_len(), 0);
    }

    #[test]
    fn fields_follow_declaration_order() {
        let mut context = Context::new();
        context
            .register::<Pair>()
            .with_field("b", |f| f.rename("second"))
            .with_field("a", |f| f.rename("first"));

        let mapping = context.get_type::<Pair>().unwrap();
        let names: Vec<_> = mapping.fields().map(|f| f.wire_name()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    #[should_panic(expected = "has no field named `c`")]
    fn unknown_field_panics() {
        let mut context = Context::new();
        context.register::<Pair>().field("c");
    }

    #[test]
    #[should_panic(expected = "has no fields")]
    fn leaf_has_no_fields() {
        let mut context = Context::new();
        context.register::<u32>().field("x");
    }
}
