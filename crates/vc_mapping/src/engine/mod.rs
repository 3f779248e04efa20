//! The flatten and unflatten engine.
//!
//! Both directions consult the [`Context`](crate::Context) they are handed
//! at every visited position and never reach for the global one.
//!
//! Traversal is lenient. A field or element that fails to encode is left
//! out of its parent, and a position that cannot be rebuilt takes the zero
//! value of its type. Neither aborts the surrounding traversal; both are
//! logged at `debug` level.
//!
//! With the `serde_json` codec every [`Flat`](crate::Flat) encodes, so
//! `flatten` never omits a position in practice; the branch only guards
//! against codec failures.

// -----------------------------------------------------------------------------
// Modules

mod flatten;
mod reader;
mod unflatten;

// -----------------------------------------------------------------------------
// Exports

pub use flatten::flatten;
pub use reader::RecordReader;
pub use unflatten::unflatten;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::derive::Record;
    use crate::registry::Context;
    use crate::{Flat, FlatMap, codec, flatten, unflatten};

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

    #[derive(Record, Debug, PartialEq)]
    struct Route {
        name: String,
        stops: Vec<Point>,
        note: Option<String>,
    }

    fn to_json(flat: &Flat) -> String {
        String::from_utf8(codec::encode_to_vec(flat).unwrap()).unwrap()
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
    fn renamed_fields_round_trip() {
        let context = point_context();
        let point = Point { x: 1, y: 2 };

        let flat = flatten(&point, &context);
        assert_eq!(to_json(&flat), r#"{"X":1,"Y":2}"#);

        let decoded = codec::decode(br#"{"X":1,"Y":2}"#).unwrap();
        assert_eq!(unflatten::<Point>(&decoded, &context), point);
        assert_eq!(unflatten::<Point>(&flat, &context), point);
    }

    #[test]
    fn unregistered_records_use_declared_names() {
        let context = Context::new();
        let pair = Pair {
            a: "h".into(),
            b: "w".into(),
        };

        let flat = flatten(&pair, &context);
        assert_eq!(to_json(&flat), r#"{"a":"h","b":"w"}"#);
        assert_eq!(unflatten::<Pair>(&flat, &context), pair);
    }

    #[test]
    fn whole_type_transform_round_trip() {
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
        let flat = flatten(&money, &context);
        assert_eq!(to_json(&flat), "150");
        assert_eq!(unflatten::<Money>(&Flat::Int(150), &context), money);
    }

    #[test]
    fn whole_type_transform_wins_over_fields() {
        let mut context = Context::new();
        context
            .register::<Point>()
            .with_field("x", |f| {
                f.on_flatten(|_: &i32| panic!("field transform must not run"))
            })
            .on_flatten(|p: &Point| Flat::from(format!("{},{}", p.x, p.y)));

        let flat = flatten(&Point { x: 3, y: 4 }, &context);
        assert_eq!(flat, Flat::from("3,4"));
    }

    #[test]
    fn sequences_keep_order() {
        let context = point_context();
        let points = vec![
            Point { x: 1, y: 2 },
            Point { x: 3, y: 4 },
            Point { x: 5, y: 6 },
        ];

        let flat = flatten(&points, &context);
        assert_eq!(
            to_json(&flat),
            r#"[{"X":1,"Y":2},{"X":3,"Y":4},{"X":5,"Y":6}]"#
        );

        let decoded = codec::decode(to_json(&flat).as_bytes()).unwrap();
        assert_eq!(unflatten::<Vec<Point>>(&decoded, &context), points);
    }

    #[test]
    fn missing_keys_take_zero() {
        let context = point_context();
        let decoded = codec::decode(br#"{"X":7}"#).unwrap();
        assert_eq!(unflatten::<Point>(&decoded, &context), Point { x: 7, y: 0 });
    }

    #[test]
    fn mismatched_entries_do_not_abort_the_record() {
        let context = Context::new();
        let decoded = codec::decode(br#"{"x":"seven","y":2}"#).unwrap();
        assert_eq!(unflatten::<Point>(&decoded, &context), Point { x: 0, y: 2 });

        assert_eq!(
            unflatten::<Point>(&Flat::from("not a record"), &context),
            Point { x: 0, y: 0 }
        );
    }

    #[test]
    fn field_transforms_are_applied() {
        let mut context = Context::new();
        context.register::<Pair>().with_field("b", |f| {
            f.rename("B")
                .on_flatten(|b: &String| Flat::from(b.to_uppercase()))
                .on_unflatten(|flat: &Flat| flat.as_str().unwrap_or("").to_lowercase())
        });

        let pair = Pair {
            a: "h".into(),
            b: "w".into(),
        };
        let flat = flatten(&pair, &context);
        assert_eq!(to_json(&flat), r#"{"a":"h","B":"W"}"#);
        assert_eq!(unflatten::<Pair>(&flat, &context), pair);
    }

    #[test]
    fn mistyped_field_transforms_are_skipped() {
        let mut context = Context::new();
        context.register::<Point>().with_field("x", |f| {
            f.on_flatten(|v: &u64| Flat::from(*v))
                .on_unflatten(|_: &Flat| 99_u64)
        });

        let point = Point { x: 1, y: 2 };
        let flat = flatten(&point, &context);
        assert_eq!(to_json(&flat), r#"{"x":1,"y":2}"#);
        assert_eq!(unflatten::<Point>(&flat, &context), point);
    }

    #[test]
    fn nested_records_and_options() {
        let context = point_context();
        let route = Route {
            name: "loop".into(),
            stops: vec![Point { x: 0, y: 1 }],
            note: None,
        };

        let flat = flatten(&route, &context);
        assert_eq!(
            to_json(&flat),
            r#"{"name":"loop","stops":[{"X":0,"Y":1}],"note":null}"#
        );
        assert_eq!(unflatten::<Route>(&flat, &context), route);

        let mut map = FlatMap::new();
        map.insert("note", Flat::from("scenic"));
        let partial: Route = unflatten(&Flat::Map(map), &context);
        assert_eq!(partial.note.as_deref(), Some("scenic"));
        assert!(partial.stops.is_empty());
    }

    #[test]
    fn contexts_do_not_leak() {
        let renamed = point_context();
        let plain = Context::new();
        let point = Point { x: 1, y: 2 };

        assert_eq!(to_json(&flatten(&point, &renamed)), r#"{"X":1,"Y":2}"#);
        assert_eq!(to_json(&flatten(&point, &plain)), r#"{"x":1,"y":2}"#);
    }
}
