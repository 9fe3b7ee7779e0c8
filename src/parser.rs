use crate::error::Error;
use crate::types::ParseOptions;

/// Split a raw entry at the first separator.
///
/// Everything after the first separator belongs to the value, so
/// `"A=b=c"` is `("A", "b=c")`. Returns `None` when there is no separator.
#[inline]
pub fn split_pair(entry: &str, separator: char) -> Option<(&str, &str)> {
    entry.split_once(separator)
}

pub(crate) struct Splitter {
    options: ParseOptions,
}

impl Splitter {
    #[inline(always)]
    pub(crate) fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// `Ok(None)` means the entry was malformed and the options say to skip it.
    pub(crate) fn split<'a>(&self, index: usize, entry: &'a str) -> Result<Option<(&'a str, &'a str)>, Error> {
        if let Some(pair) = split_pair(entry, self.options.separator) {
            return Ok(Some(pair));
        }

        if self.options.skips_malformed() {
            tracing::debug!(index, entry, "skipping entry without separator");
            return Ok(None);
        }

        tracing::debug!(index, entry, "rejecting entry without separator");
        Err(Error::MalformedPair {
            index,
            entry: entry.to_owned(),
            separator: self.options.separator,
        })
    }
}
