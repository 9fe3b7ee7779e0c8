use std::collections::HashMap;

use crate::error::Error;
use crate::parser::Splitter;
use crate::types::ParseOptions;

/// The current process environment as raw `KEY=VALUE` strings.
///
/// Order is whatever the platform reports. Non-UTF-8 keys or values are
/// converted lossily.
pub fn environ() -> Vec<String> {
    let pairs: Vec<String> = std::env::vars_os()
        .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
        .collect();
    tracing::debug!(count = pairs.len(), "captured process environment");
    pairs
}

/// The current process environment as a map.
pub fn env_map() -> Result<HashMap<String, String>, Error> {
    env_map_from(environ().as_slice())
}

/// Build a map from raw `KEY=VALUE` strings, splitting at the first `=`.
///
/// Later entries overwrite earlier ones with the same key. An entry without
/// `=` is reported as [`Error::MalformedPair`].
pub fn env_map_from<S: AsRef<str>>(pairs: &[S]) -> Result<HashMap<String, String>, Error> {
    env_map_with_options(pairs, ParseOptions::default())
}

pub fn env_map_with_options<S: AsRef<str>>(
    pairs: &[S],
    options: ParseOptions,
) -> Result<HashMap<String, String>, Error> {
    let splitter = Splitter::new(options);
    let mut map = HashMap::with_capacity(pairs.len());
    for (index, entry) in pairs.iter().enumerate() {
        if let Some((k, v)) = splitter.split(index, entry.as_ref())? {
            map.insert(k.to_owned(), v.to_owned());
        }
    }
    Ok(map)
}
