use std::collections::HashMap;

use crate::error::VisitError;
use crate::visitor::KeyValueVisitor;

/// Visits every entry of a map exactly once.
///
/// Iteration order is whatever the map yields and is not guaranteed.
/// Use [`PairsVisitor`](crate::PairsVisitor) when order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapVisitor {
    map: HashMap<String, String>,
}

impl MapVisitor {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.map
    }
}

impl From<HashMap<String, String>> for MapVisitor {
    fn from(map: HashMap<String, String>) -> Self {
        Self::new(map)
    }
}

impl<K, V> FromIterator<(K, V)> for MapVisitor
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl KeyValueVisitor for MapVisitor {
    fn visit<E, F>(&self, mut f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>,
    {
        for (k, v) in &self.map {
            f(k, v).map_err(VisitError::Callback)?;
        }
        Ok(())
    }
}
