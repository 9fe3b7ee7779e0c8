#![allow(dead_code)]

use envvisit::{KeyValueVisitor, VisitError};

pub fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Visit everything and return the pairs in visit order.
pub fn collect<V: KeyValueVisitor>(visitor: &V) -> Vec<(String, String)> {
    visitor
        .collect_pairs()
        .unwrap_or_else(|e| panic!("traversal failed: {}", e))
}

/// Visit everything and return the pairs sorted, for sources without a defined order.
pub fn collect_sorted<V: KeyValueVisitor>(visitor: &V) -> Vec<(String, String)> {
    let mut pairs = collect(visitor);
    pairs.sort();
    pairs
}

pub fn assert_visits<V: KeyValueVisitor>(visitor: &V, expected: &[(&str, &str)]) {
    pretty_assertions::assert_eq!(collect(visitor), owned(expected));
}

/// Fail on the pair whose key is `stop_key`; return keys seen and the result.
pub fn visit_until<V: KeyValueVisitor>(visitor: &V, stop_key: &str) -> (Vec<String>, Result<(), VisitError<String>>) {
    let mut seen = Vec::new();
    let result = visitor.visit(|k, _| {
        seen.push(k.to_string());
        if k == stop_key {
            Err(format!("stopped at {}", k))
        } else {
            Ok(())
        }
    });
    (seen, result)
}
