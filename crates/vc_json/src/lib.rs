//! JSON entry points over the `vc_mapping` engine.
//!
//! Marshalling flattens a value with a [`Context`](vc_mapping::Context) and
//! encodes the result; unmarshalling decodes JSON and rebuilds the target
//! type. Only a failure of the codec on the whole document is an error.
//! Positions that fail inside the document are dropped on the way out and
//! take their zero values on the way in.
//!
//! The free functions go through a default [`JsonSerializer`] bound to
//! [`ContextArc::global`](vc_mapping::ContextArc::global) until
//! [`use_context`] swaps its context. [`to_vec_with`] and
//! [`from_slice_with`] take the context explicitly.
//!
//! # Example
//!
//! ```
//! use vc_mapping::{ContextArc, derive::Record};
//!
//! #[derive(Record, Debug, PartialEq)]
//! struct Tagged {
//!     tag: String,
//!     weight: u32,
//! }
//!
//! ContextArc::global()
//!     .write()
//!     .register::<Tagged>()
//!     .with_field("tag", |f| f.rename("t"));
//!
//! let value = Tagged { tag: "a".into(), weight: 3 };
//! let json = vc_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"t":"a","weight":3}"#);
//!
//! let back: Tagged = vc_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod global;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use error::{JsonError, JsonResult};
pub use global::{context, from_reader, from_slice, from_str, to_string, to_vec, to_writer, use_context};
pub use serializer::{JsonSerializer, from_slice_with, to_vec_with};

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use vc_mapping::derive::Record;
    use vc_mapping::{Context, ContextArc, Flat};

    use super::{JsonSerializer, from_slice_with, to_vec_with};

    #[derive(Record, Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Record, Debug, PartialEq)]
    struct Pair {
        a: String,
        b: String,
    }

    #[derive(Record, Debug, PartialEq)]
    struct Money {
        dollars: u32,
        cents: u32,
    }

    fn point_context() -> Context {
        let mut context = Context::new();
        context
            .register::<Point>()
            .with_field("x", |f| f.rename("X"))
            .with_field("y", |f| f.rename("Y"));
        context
    }

    #[test]
    fn renamed_point() {
        let context = point_context();
        let bytes = to_vec_with(&Point { x: 1, y: 2 }, &context).unwrap();
        assert_eq!(bytes, br#"{"X":1,"Y":2}"#);

        let point: Point = from_slice_with(br#"{"X":1,"Y":2}"#, &context).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn unregistered_pair() {
        let context = Context::new();
        let pair = Pair {
            a: "h".into(),
            b: "w".into(),
        };
        let bytes = to_vec_with(&pair, &context).unwrap();
        assert_eq!(bytes, br#"{"a":"h","b":"w"}"#);
        assert_eq!(from_slice_with::<Pair>(&bytes, &context).unwrap(), pair);
    }

    #[test]
    fn money_as_cents() {
        let mut context = Context::new();
        context
            .register::<Money>()
            .on_flatten(|m: &Money| Flat::from(m.dollars * 100 + m.cents))
            .on_unflatten(|flat: &Flat| {
                let total = flat.as_u64().unwrap_or(0) as u32;
                Money {
                    dollars: total / 100,
                    cents: total % 100,
                }
            });

        let money = Money {
            dollars: 1,
            cents: 50,
        };
        assert_eq!(to_vec_with(&money, &context).unwrap(), b"150");
        assert_eq!(from_slice_with::<Money>(b"150", &context).unwrap(), money);
    }

    #[test]
    fn sequence_of_points() {
        let context = point_context();
        let points = vec![
            Point { x: 1, y: 2 },
            Point { x: 3, y: 4 },
            Point { x: 5, y: 6 },
        ];

        let bytes = to_vec_with(&points, &context).unwrap();
        assert_eq!(bytes, br#"[{"X":1,"Y":2},{"X":3,"Y":4},{"X":5,"Y":6}]"#);
        assert_eq!(from_slice_with::<Vec<Point>>(&bytes, &context).unwrap(), points);
    }

    #[test]
    fn missing_key_is_zero() {
        let context = point_context();
        let point: Point = from_slice_with(br#"{"X":7}"#, &context).unwrap();
        assert_eq!(point, Point { x: 7, y: 0 });
    }

    #[test]
    fn malformed_input_is_an_error() {
        let context = Context::new();
        let err = from_slice_with::<Point>(br#"{"x":1,"#, &context).unwrap_err();
        assert!(err.is_eof());

        assert!(from_slice_with::<Point>(b"[1,]", &context).is_err());
    }

    #[test]
    fn streams() {
        let serializer = JsonSerializer::new(ContextArc::new(point_context()));

        let mut out = Vec::new();
        serializer.to_writer(&mut out, &Point { x: 4, y: 5 }).unwrap();
        assert_eq!(out, br#"{"X":4,"Y":5}"#);

        let point: Point = serializer.from_reader(Cursor::new(out)).unwrap();
        assert_eq!(point, Point { x: 4, y: 5 });
    }

    #[test]
    fn serializer_sees_later_registrations() {
        let mut serializer = JsonSerializer::new(ContextArc::default());
        assert_eq!(serializer.to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);

        serializer.use_context(ContextArc::new(point_context()));
        assert_eq!(serializer.to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"X":1,"Y":2}"#);

        serializer.context().write().remove::<Point>();
        assert_eq!(serializer.to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn default_serializer_can_switch_context() {
        #[derive(Record, Debug, PartialEq)]
        struct Scoped {
            value: u8,
        }

        let mut context = Context::new();
        context.register::<Scoped>().with_field("value", |f| f.rename("v"));
        let scoped = ContextArc::new(context);

        let previous = super::context();
        super::use_context(scoped.clone());
        assert!(super::context().ptr_eq(&scoped));

        let json = super::to_string(&Scoped { value: 9 }).unwrap();
        super::use_context(previous);

        assert_eq!(json, r#"{"v":9}"#);
        assert_eq!(super::to_string(&Scoped { value: 9 }).unwrap(), r#"{"value":9}"#);
    }
}
