use crate::error::VisitError;
use crate::visitor::KeyValueVisitor;

/// Visits an explicit flat list of alternating keys and values.
///
/// Even positions are keys, odd positions are values. Unlike
/// [`MapVisitor`](crate::MapVisitor) the pair order is the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairsVisitor {
    xs: Vec<String>,
}

impl PairsVisitor {
    /// # Panics
    ///
    /// Panics if `xs` has an odd number of elements.
    pub fn new<I, S>(xs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let xs: Vec<String> = xs.into_iter().map(Into::into).collect();
        assert!(xs.len() % 2 == 0, "PairsVisitor was given an odd number of arguments");
        Self { xs }
    }

    /// Number of pairs, not strings
    pub fn len(&self) -> usize {
        self.xs.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl KeyValueVisitor for PairsVisitor {
    fn visit<E, F>(&self, mut f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>,
    {
        for pair in self.xs.chunks_exact(2) {
            f(&pair[0], &pair[1]).map_err(VisitError::Callback)?;
        }
        Ok(())
    }
}

/// Build a [`PairsVisitor`] from alternating key and value expressions.
///
/// ```
/// use envvisit::{pairs, KeyValueVisitor};
///
/// let visitor = pairs!("A", "1", "B", "2");
/// assert_eq!(visitor.collect_pairs().unwrap()[1], ("B".to_owned(), "2".to_owned()));
/// ```
#[macro_export]
macro_rules! pairs {
    () => {
        $crate::PairsVisitor::default()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::PairsVisitor::new([$(::std::string::String::from($x)),+])
    };
}
