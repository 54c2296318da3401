//! Element Keys
//!
//! A key is `alias` or `alias.qualifier`, where the alias may itself contain
//! dots. Which split applies depends on the aliases registered in a map: the
//! longest registered prefix wins.

use crate::constants::KEY_SEPARATOR;

/// Value Object: an element key split against a concrete element map
///
/// ## Example
///
/// ```rust
/// use ioc_domain::ElementKey;
///
/// let registered = ["Translator", "Translator.fr"];
/// let key = ElementKey::resolve("Translator.en", |alias| registered.contains(&alias)).unwrap();
/// assert_eq!(key.alias(), "Translator");
/// assert_eq!(key.qualifier(), Some("en"));
///
/// let key = ElementKey::resolve("Translator.fr", |alias| registered.contains(&alias)).unwrap();
/// assert_eq!(key.alias(), "Translator.fr");
/// assert_eq!(key.qualifier(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementKey {
    key: String,
    alias: String,
    qualifier: Option<String>,
}

impl ElementKey {
    /// Split `key` on the longest alias accepted by `is_registered`
    ///
    /// Returns `None` when no prefix of the key is registered.
    pub fn resolve<F>(key: &str, mut is_registered: F) -> Option<Self>
    where
        F: FnMut(&str) -> bool,
    {
        let alias = alias_candidates(key).find(|candidate| is_registered(candidate))?;
        Some(Self {
            key: key.to_string(),
            alias: alias.to_string(),
            qualifier: qualifier_of(key, alias).map(str::to_string),
        })
    }

    /// The full key as requested
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The registered alias the key matched
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Remainder of the key after `alias.`, if any
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }
}

/// Prefixes of `key` on part boundaries, longest first
///
/// `"a.b.c"` yields `"a.b.c"`, `"a.b"`, `"a"`.
pub fn alias_candidates(key: &str) -> AliasCandidates<'_> {
    AliasCandidates {
        remaining: Some(key),
    }
}

/// Iterator returned by [`alias_candidates`]
#[derive(Debug, Clone)]
pub struct AliasCandidates<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for AliasCandidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.remaining?;
        self.remaining = current
            .rfind(KEY_SEPARATOR)
            .map(|position| &current[..position]);
        Some(current)
    }
}

/// Qualifier carried by `key` once `alias` has been matched
pub fn qualifier_of<'a>(key: &'a str, alias: &str) -> Option<&'a str> {
    key.strip_prefix(alias)?.strip_prefix(KEY_SEPARATOR)
}
