use ruletree::{literal, property, CompareOp, Context, RuleEngine, RuleEngineBuilder, Value};

/// The classic cycle: green turns yellow, yellow turns red, red turns green.
fn build_engine() -> RuleEngine {
    RuleEngineBuilder::new()
        .property("get_trafficlight_color", "trafficlight_color", |color| {
            color.clone()
        })
        .action("set_color_to_yellow", "trafficlight", |_| "yellow".into())
        .action("set_color_to_red", "trafficlight", |_| "red".into())
        .action("set_color_to_green", "trafficlight", |_| "green".into())
        .rule("turn-yellow", "1", |r| {
            r.condition(
                property("get_trafficlight_color"),
                CompareOp::Eq,
                literal("green"),
            )
            .action("set_color_to_yellow")
        })
        .rule("turn-red", "1", |r| {
            r.condition(
                property("get_trafficlight_color"),
                CompareOp::Eq,
                literal("yellow"),
            )
            .action("set_color_to_red")
        })
        .rule("turn-green", "1", |r| {
            r.condition(
                property("get_trafficlight_color"),
                CompareOp::Eq,
                literal("red"),
            )
            .action("set_color_to_green")
        })
        .build()
        .unwrap()
}

fn light_ctx(color: &str) -> Context {
    Context::new()
        .set("trafficlight_color", color)
        .set("trafficlight", color)
}

const CYCLE: [&str; 3] = ["turn-yellow", "turn-red", "turn-green"];

#[test]
fn full_cycle_first_match() {
    let engine = build_engine();
    let mut color = "green".to_owned();
    let expected = ["yellow", "red", "green"];
    for next in expected {
        let outcome = engine
            .eval_first_match(&CYCLE, &light_ctx(&color))
            .unwrap();
        assert_eq!(outcome.fired().len(), 1);
        let Some(Value::String(new_color)) = outcome.get("trafficlight") else {
            panic!("expected a color result");
        };
        color = new_color.clone();
        assert_eq!(color, next);
    }
}

#[test]
fn unknown_color_matches_nothing() {
    let engine = build_engine();
    let outcome = engine
        .eval_first_match(&CYCLE, &light_ctx("purple"))
        .unwrap();
    assert!(outcome.is_empty());
    assert_eq!(outcome.get("trafficlight"), None);
}

#[test]
fn rule_order_decides_first_match() {
    let engine = build_engine();
    // Reordering the list does not change which rule matches green, since
    // the other guards are false.
    let outcome = engine
        .eval_first_match(&["turn-red", "turn-green", "turn-yellow"], &light_ctx("green"))
        .unwrap();
    assert_eq!(outcome.fired(), ["turn-yellow".to_owned()]);
}

#[test]
fn subset_of_rules() {
    let engine = build_engine();
    // Only turn-red is consulted; a green light stays untouched.
    let outcome = engine
        .eval_first_match(&["turn-red"], &light_ctx("green"))
        .unwrap();
    assert!(outcome.is_empty());
}

#[test]
fn eval_all_with_disjoint_guards_matches_once() {
    let engine = build_engine();
    let outcome = engine.eval_all(&CYCLE, &light_ctx("yellow")).unwrap();
    assert_eq!(outcome.fired(), ["turn-red".to_owned()]);
    assert_eq!(outcome.get("trafficlight"), Some(&"red".into()));
}

#[test]
fn eval_all_chains_shared_context_type() {
    // Two independent discounts applied in sequence to the same price.
    let engine = RuleEngineBuilder::new()
        .property("get_age", "customer_age", |v| v.clone())
        .property("get_total", "price", |v| v.clone())
        .action("senior_discount", "price", |price| match price {
            Value::Int(p) => Value::Int(p - p / 10),
            other => other.clone(),
        })
        .action("bulk_discount", "price", |price| match price {
            Value::Int(p) => Value::Int(p - 5),
            other => other.clone(),
        })
        .rule("senior", "1", |r| {
            r.condition(property("get_age"), CompareOp::Gte, literal(65_i64))
                .action("senior_discount")
        })
        .rule("bulk", "1", |r| {
            r.condition(property("get_total"), CompareOp::Gt, literal(50_i64))
                .action("bulk_discount")
        })
        .build()
        .unwrap();

    let ctx = Context::new()
        .set("customer_age", 70_i64)
        .set("price", 100_i64);
    let outcome = engine.eval_all(&["senior", "bulk"], &ctx).unwrap();
    // 100 -> 90 (senior) -> 85 (bulk, applied to the senior result).
    assert_eq!(outcome.get("price"), Some(&Value::Int(85)));
    assert_eq!(
        outcome.fired(),
        ["senior".to_owned(), "bulk".to_owned()]
    );

    // The bulk guard saw the start-of-call price of 100, not 90; with a
    // price of 55 the same holds even though the senior discount drops it
    // below the threshold.
    let ctx = Context::new()
        .set("customer_age", 70_i64)
        .set("price", 55_i64);
    let outcome = engine.eval_all(&["senior", "bulk"], &ctx).unwrap();
    assert_eq!(outcome.fired().len(), 2);
}

#[test]
fn compound_guard_over_two_properties() {
    let engine = RuleEngineBuilder::new()
        .property("get_color", "color", |v| v.clone())
        .property("is_rush_hour", "rush_hour", |v| v.clone())
        .action("extend_green", "light_timer", |v| match v {
            Value::Int(t) => Value::Int(t + 30),
            other => other.clone(),
        })
        .rule("extend", "1 AND 2", |r| {
            r.condition(property("get_color"), CompareOp::Eq, literal("green"))
                .condition(property("is_rush_hour"), CompareOp::Eq, literal(true))
                .action("extend_green")
        })
        .build()
        .unwrap();

    let ctx = Context::new()
        .set("color", "green")
        .set("rush_hour", true)
        .set("light_timer", 60_i64);
    let outcome = engine.eval_first_match(&["extend"], &ctx).unwrap();
    assert_eq!(outcome.get("light_timer"), Some(&Value::Int(90)));

    let ctx = Context::new()
        .set("color", "green")
        .set("rush_hour", false)
        .set("light_timer", 60_i64);
    assert!(engine.eval_first_match(&["extend"], &ctx).unwrap().is_empty());
}
