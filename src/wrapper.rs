use crate::error::VisitError;
use crate::visitor::KeyValueVisitor;

/// A per-pair transform that may also drop the pair.
///
/// This is `(k, v) => Option<(k2, v2)>`: `None` skips the pair.
/// Implemented for every `Fn(&str, &str) -> Option<(String, String)>`.
pub trait PairMapper {
    fn map_pair(&self, key: &str, value: &str) -> Option<(String, String)>;
}

impl<G> PairMapper for G
where
    G: Fn(&str, &str) -> Option<(String, String)>,
{
    #[inline]
    fn map_pair(&self, key: &str, value: &str) -> Option<(String, String)> {
        self(key, value)
    }
}

/// Mapper behind [`KeyValueVisitor::filter`].
#[derive(Debug, Clone, Copy)]
pub struct FilterPairs<P>(pub(crate) P);

impl<P> PairMapper for FilterPairs<P>
where
    P: Fn(&str, &str) -> bool,
{
    #[inline]
    fn map_pair(&self, key: &str, value: &str) -> Option<(String, String)> {
        (self.0)(key, value).then(|| (key.to_owned(), value.to_owned()))
    }
}

/// Mapper behind [`KeyValueVisitor::map`].
#[derive(Debug, Clone, Copy)]
pub struct MapPairs<G>(pub(crate) G);

impl<G> PairMapper for MapPairs<G>
where
    G: Fn(&str, &str) -> (String, String),
{
    #[inline]
    fn map_pair(&self, key: &str, value: &str) -> Option<(String, String)> {
        Some((self.0)(key, value))
    }
}

/// A visitor built from another visitor plus a transform/filter stage.
///
/// Every pair the inner visitor produces goes through the mapper first;
/// dropped pairs are not failures and the traversal carries on. Since a
/// `Wrapper` is itself a [`KeyValueVisitor`], stages chain without building
/// intermediate collections.
///
/// ```
/// use envvisit::{KeyValueVisitor, PairsVisitor, Wrapper};
///
/// let visitor = Wrapper::new(PairsVisitor::new(["A", "1", "_B", "2"]), |k, v| {
///     (!k.starts_with('_')).then(|| (k.to_owned(), v.to_owned()))
/// });
/// assert_eq!(visitor.collect_pairs().unwrap(), vec![("A".to_owned(), "1".to_owned())]);
/// ```
#[derive(Debug, Clone)]
pub struct Wrapper<V, M> {
    inner: V,
    mapper: M,
}

impl<V, G> Wrapper<V, G>
where
    V: KeyValueVisitor,
    G: Fn(&str, &str) -> Option<(String, String)>,
{
    pub fn new(inner: V, mapper: G) -> Self {
        Self { inner, mapper }
    }
}

impl<V, M> Wrapper<V, M> {
    pub(crate) fn with_mapper(inner: V, mapper: M) -> Self {
        Self { inner, mapper }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, M> KeyValueVisitor for Wrapper<V, M>
where
    V: KeyValueVisitor,
    M: PairMapper,
{
    fn visit<E, F>(&self, mut f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>,
    {
        self.inner.visit(|k, v| match self.mapper.map_pair(k, v) {
            Some((kk, vv)) => f(kk.as_str(), vv.as_str()),
            None => {
                tracing::trace!(key = k, "wrapper dropped pair");
                Ok(())
            }
        })
    }
}
