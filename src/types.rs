// ==================================================================================
//  Configuration
// ==================================================================================

/// What to do with a raw entry that has no separator in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the traversal with [`Error::MalformedPair`](crate::Error::MalformedPair)
    #[default]
    Error,
    /// Drop the entry and keep going
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub separator: char,
    pub on_malformed: MalformedPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: '=',
            on_malformed: MalformedPolicy::Error,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            on_malformed: MalformedPolicy::Skip,
            ..Self::default()
        }
    }

    #[inline]
    pub fn skips_malformed(&self) -> bool {
        self.on_malformed == MalformedPolicy::Skip
    }
}
