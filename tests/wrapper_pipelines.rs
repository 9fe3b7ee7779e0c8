mod common;
use common::{assert_visits, collect, collect_sorted, owned, visit_until};
use envvisit::{pairs, EnvVisitor, Error, KeyValueVisitor, MapVisitor, VisitError, Wrapper};
use pretty_assertions::assert_eq;

fn drop_underscored(k: &str, v: &str) -> Option<(String, String)> {
    if k.starts_with('_') {
        None
    } else {
        Some((k.to_string(), v.to_string()))
    }
}

fn uppercase_value(k: &str, v: &str) -> Option<(String, String)> {
    Some((k.to_string(), v.to_uppercase()))
}

#[test]
fn test_filter_underscored_keys() {
    let visitor = Wrapper::new(pairs!("A", "1", "_B", "2", "C", "3"), drop_underscored);
    assert_visits(&visitor, &[("A", "1"), ("C", "3")]);
}

#[test]
fn test_two_stage_pipeline() {
    let filtered = Wrapper::new(pairs!("a", "x", "_b", "y", "c", "z"), drop_underscored);
    let visitor = Wrapper::new(filtered, uppercase_value);
    assert_visits(&visitor, &[("a", "X"), ("c", "Z")]);
}

#[test]
fn test_method_chaining_matches_explicit_wrappers() {
    let visitor = pairs!("a", "x", "_b", "y", "c", "z")
        .filter(|k, _| !k.starts_with('_'))
        .map(|k, v| (k.to_string(), v.to_uppercase()));
    assert_visits(&visitor, &[("a", "X"), ("c", "Z")]);
}

#[test]
fn test_wrap_closure_renames_keys() {
    let visitor = EnvVisitor::new(["APP_PORT=8080", "APP_HOST=localhost", "OTHER=1"])
        .wrap(|k, v| k.strip_prefix("APP_").map(|rest| (rest.to_lowercase(), v.to_string())));
    assert_visits(&visitor, &[("port", "8080"), ("host", "localhost")]);
}

#[test]
fn test_drop_everything() {
    let visitor = pairs!("A", "1", "B", "2").filter(|_, _| false);
    assert_visits(&visitor, &[]);
}

#[test]
fn test_identity_wrapper_is_transparent() {
    let inner = pairs!("A", "1", "B", "2");
    let visitor = Wrapper::new(&inner, |k, v| Some((k.to_string(), v.to_string())));
    assert_eq!(collect(&visitor), collect(&inner));
    assert_eq!(visitor.inner(), &&inner);
}

#[test]
fn test_deep_chain() {
    let mut count = 0;
    let visitor = pairs!("n", "0")
        .map(|k, v| (k.to_string(), format!("{}+1", v)))
        .map(|k, v| (k.to_string(), format!("{}+1", v)))
        .map(|k, v| (k.to_string(), format!("{}+1", v)))
        .filter(|_, v| v.len() > 1);
    visitor
        .visit(|_, v| {
            count += 1;
            assert_eq!(v, "0+1+1+1");
            Ok::<_, ()>(())
        })
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_callback_failure_propagates_through_layers() {
    let visitor = pairs!("A", "1", "_skip", "x", "B", "2", "C", "3")
        .filter(|k, _| !k.starts_with('_'))
        .map(|k, v| (k.to_lowercase(), v.to_string()));
    let (seen, result) = visit_until(&visitor, "b");
    assert_eq!(seen, vec!["a", "b"]);
    assert_eq!(result, Err(VisitError::Callback("stopped at b".to_string())));
}

#[test]
fn test_skipped_pairs_do_not_reach_failing_callback() {
    let visitor = pairs!("_A", "1", "B", "2").filter(|k, _| !k.starts_with('_'));
    let (seen, result) = visit_until(&visitor, "_A");
    assert_eq!(seen, vec!["B"]);
    assert!(result.is_ok());
}

#[test]
fn test_source_error_propagates_through_layers() {
    let visitor = EnvVisitor::new(["A=1", "broken"])
        .map(|k, v| (k.to_string(), v.to_string()))
        .filter(|_, _| true);
    assert_eq!(
        visitor.collect_pairs(),
        Err(Error::MalformedPair { index: 1, entry: "broken".to_string(), separator: '=' })
    );
}

#[test]
fn test_wrapping_a_map_visitor() {
    let visitor: MapVisitor = [("keep", "1"), ("_drop", "2"), ("also", "3")].into_iter().collect();
    let wrapped = visitor.filter(|k, _| !k.starts_with('_'));
    assert_eq!(collect_sorted(&wrapped), owned(&[("also", "3"), ("keep", "1")]));
}

#[test]
fn test_into_inner_returns_source() {
    let wrapped = pairs!("A", "1").filter(|_, _| false);
    assert_visits(&wrapped.into_inner(), &[("A", "1")]);
}
