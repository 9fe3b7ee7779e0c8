use crate::env::environ;
use crate::error::VisitError;
use crate::parser::Splitter;
use crate::types::{MalformedPolicy, ParseOptions};
use crate::visitor::KeyValueVisitor;

/// Visits raw `KEY=VALUE` strings in the order given.
///
/// Each entry is split at its first `=`, so `"A=b=c"` is visited as
/// `("A", "b=c")`. An entry with no `=` fails the traversal with
/// [`Error::MalformedPair`](crate::Error::MalformedPair) once it is reached,
/// unless [`skip_malformed`](EnvVisitor::skip_malformed) is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVisitor {
    pairs: Vec<String>,
    options: ParseOptions,
}

impl EnvVisitor {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
            options: ParseOptions::default(),
        }
    }

    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        Self::new(environ())
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Split on `separator` instead of `=`
    pub fn separator(mut self, separator: char) -> Self {
        self.options.separator = separator;
        self
    }

    /// Drop entries without a separator instead of failing
    pub fn skip_malformed(mut self) -> Self {
        self.options.on_malformed = MalformedPolicy::Skip;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn raw_pairs(&self) -> &[String] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl KeyValueVisitor for EnvVisitor {
    fn visit<E, F>(&self, f: F) -> Result<(), VisitError<E>>
    where
        F: FnMut(&str, &str) -> Result<(), E>,
    {
        visit_env_with_options(&self.pairs, self.options, f)
    }
}

/// Visit raw `KEY=VALUE` strings without building a visitor first.
///
/// ```
/// let mut seen = Vec::new();
/// envvisit::visit_env(&["PATH=/usr/bin", "HOME=/root"], |k, v| {
///     seen.push(format!("{k}:{v}"));
///     Ok::<_, std::convert::Infallible>(())
/// })
/// .unwrap();
/// assert_eq!(seen, ["PATH:/usr/bin", "HOME:/root"]);
/// ```
pub fn visit_env<S, E, F>(pairs: &[S], f: F) -> Result<(), VisitError<E>>
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> Result<(), E>,
{
    visit_env_with_options(pairs, ParseOptions::default(), f)
}

pub fn visit_env_with_options<S, E, F>(pairs: &[S], options: ParseOptions, mut f: F) -> Result<(), VisitError<E>>
where
    S: AsRef<str>,
    F: FnMut(&str, &str) -> Result<(), E>,
{
    let splitter = Splitter::new(options);
    for (index, entry) in pairs.iter().enumerate() {
        if let Some((k, v)) = splitter.split(index, entry.as_ref())? {
            f(k, v).map_err(VisitError::Callback)?;
        }
    }
    Ok(())
}
