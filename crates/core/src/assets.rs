//! Stylesheet and script URL lists.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered list of asset URLs with empty entries removed.
///
/// Deserializes from a single string, `null`, or an array mixing strings and
/// `null`s. Empty strings and `null`s are dropped while the remaining
/// entries keep their relative order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssetList(Vec<String>);

impl AssetList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from possibly-missing entries, keeping only non-empty ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .flatten()
                .map(Into::<String>::into)
                .filter(|url| !url.is_empty())
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AssetList {
    fn from(url: &str) -> Self {
        Self::from_entries([Some(url)])
    }
}

impl From<String> for AssetList {
    fn from(url: String) -> Self {
        Self::from_entries([Some(url)])
    }
}

impl<S: Into<String>> FromIterator<S> for AssetList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(Some))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAssets {
    Many(Vec<Option<String>>),
    One(Option<String>),
}

impl<'de> Deserialize<'de> for AssetList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAssets::deserialize(deserializer)? {
            RawAssets::Many(entries) => Self::from_entries(entries),
            RawAssets::One(entry) => Self::from_entries([entry]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &AssetList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_single_string() {
        let list: AssetList = serde_json::from_str(r#""/app.css""#).unwrap();
        assert_eq!(urls(&list), vec!["/app.css"]);
    }

    #[test]
    fn test_null_is_empty() {
        let list: AssetList = serde_json::from_str("null").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_array_is_empty() {
        let list: AssetList = serde_json::from_str("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_string_is_empty() {
        let list: AssetList = serde_json::from_str(r#""""#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_array_drops_falsy_entries_and_keeps_order() {
        let list: AssetList =
            serde_json::from_str(r#"["a.css", null, "", "b.css"]"#).unwrap();
        assert_eq!(urls(&list), vec!["a.css", "b.css"]);
    }

    #[test]
    fn test_rejects_numbers() {
        let result: Result<AssetList, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_entries() {
        let list = AssetList::from_entries([Some("a.js"), None, Some(""), Some("b.js")]);
        assert_eq!(urls(&list), vec!["a.js", "b.js"]);
    }

    #[test]
    fn test_collect_filters_empty() {
        let list: AssetList = ["x.js", "", "y.js"].into_iter().collect();
        assert_eq!(list.len(), 2);
    }
}
