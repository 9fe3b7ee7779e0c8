use std::collections::HashMap;
use std::convert::Infallible;

use crate::error::{Error, VisitError};
use crate::wrapper::{FilterPairs, MapPairs, Wrapper};

/// A push-style traversal over key/value pairs.
///
/// `visit` hands every pair to `f` in the visitor's order and stops at the
/// first `Err`, which comes back as [`VisitError::Callback`]. Visiting only
/// borrows the visitor, so the same visitor can be traversed again.
pub trait KeyValueVisitor {
    fn visit<E, F>(&self, f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>;

    /// Compose with a transform/filter stage, see [`Wrapper`].
    fn wrap<G>(self, mapper: G) -> Wrapper<Self, G>
    where
        Self: Sized,
        G: Fn(&str, &str) -> Option<(String, String)>,
    {
        Wrapper::new(self, mapper)
    }

    /// Keep only the pairs for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Wrapper<Self, FilterPairs<P>>
    where
        Self: Sized,
        P: Fn(&str, &str) -> bool,
    {
        Wrapper::with_mapper(self, FilterPairs(predicate))
    }

    /// Rewrite every pair.
    fn map<G>(self, mapper: G) -> Wrapper<Self, MapPairs<G>>
    where
        Self: Sized,
        G: Fn(&str, &str) -> (String, String),
    {
        Wrapper::with_mapper(self, MapPairs(mapper))
    }

    /// Owned copies of every pair, in visit order
    fn collect_pairs(&self) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::new();
        self.visit(|k, v| {
            pairs.push((k.to_owned(), v.to_owned()));
            Ok::<_, Infallible>(())
        })
        .map_err(VisitError::into_source)?;
        Ok(pairs)
    }

    /// Export to HashMap<String, String>; later duplicates win
    fn to_map(&self) -> Result<HashMap<String, String>, Error> {
        let mut map = HashMap::new();
        self.visit(|k, v| {
            map.insert(k.to_owned(), v.to_owned());
            Ok::<_, Infallible>(())
        })
        .map_err(VisitError::into_source)?;
        Ok(map)
    }
}

impl<V: KeyValueVisitor> KeyValueVisitor for &V {
    #[inline]
    fn visit<E, F>(&self, f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>,
    {
        (**self).visit(f)
    }
}
