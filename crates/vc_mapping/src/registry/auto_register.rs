use super::Context;

// -----------------------------------------------------------------------------
// AutoRegistration

/// A registration function collected by [`submit_mapping!`](crate::submit_mapping).
pub struct AutoRegistration {
    register: fn(&mut Context),
}

impl AutoRegistration {
    #[inline]
    pub const fn new(register: fn(&mut Context)) -> Self {
        Self { register }
    }

    #[inline]
    pub fn apply(&self, context: &mut Context) {
        (self.register)(context);
    }
}

inventory::collect!(AutoRegistration);

/// Submits a registration function, applied to the global context when it
/// is first accessed and by [`Context::auto_register`].
///
/// Requires the `auto_register` feature.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, derive::Record};
///
/// #[derive(Record)]
/// struct Tag {
///     label: String,
/// }
///
/// fn register_tag(context: &mut Context) {
///     context.register::<Tag>().with_field("label", |f| f.rename("l"));
/// }
///
/// vc_mapping::submit_mapping!(register_tag);
///
/// fn main() {
///     let mut context = Context::new();
///     context.auto_register();
///     assert!(context.get_type::<Tag>().is_some());
/// }
/// ```
#[macro_export]
macro_rules! submit_mapping {
    ($register:expr) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::registry::AutoRegistration::new($register)
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Flat;
    use crate::registry::Context;

    struct Marker;

    impl crate::shape::TypeShape for Marker {
        fn shape() -> crate::shape::Shape {
            crate::shape::Shape::Leaf
        }
    }

    fn register_marker(context: &mut Context) {
        context.register::<Marker>().on_flatten(|_: &Marker| Flat::from("marker"));
    }

    crate::submit_mapping!(register_marker);

    #[test]
    fn submitted_registrations_apply() {
        let mut context = Context::new();
        assert!(context.auto_register() >= 1);
        assert!(context.get_type::<Marker>().unwrap().has_flatten());
    }
}
