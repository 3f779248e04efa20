use core::fmt;

// -----------------------------------------------------------------------------
// Shape

/// The structural kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Named fields, flattened to a map.
    Record,
    /// Ordered elements, flattened to a sequence.
    Sequence,
    /// A scalar passed to the codec as is.
    Leaf,
    /// A wrapper flattened as the value it holds, e.g. `Option<T>` or `Box<T>`.
    Transparent,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Record => "record",
            Shape::Sequence => "sequence",
            Shape::Leaf => "leaf",
            Shape::Transparent => "transparent",
        })
    }
}

// -----------------------------------------------------------------------------
// TypeShape

/// Static shape information of a type.
///
/// Registration uses it to name the type and to check the field names a
/// mapping customizes.
pub trait TypeShape: 'static {
    fn shape() -> Shape;

    /// A readable type name for log and panic messages.
    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The declared field names of a [`Shape::Record`], in declaration order.
    ///
    /// Empty for every other shape.
    fn field_names() -> &'static [&'static str] {
        &[]
    }
}
