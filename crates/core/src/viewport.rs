//! Viewport meta content serialization.

use heck::ToKebabCase;

use crate::mapping::Mapping;

/// Serialize viewport options as `key=value` pairs joined by `,`.
///
/// Keys are converted from camel case to hyphen case, so `initialScale`
/// becomes `initial-scale`. An empty mapping yields an empty string.
pub fn viewport_content(options: &Mapping<String>) -> String {
    options
        .iter()
        .map(|(key, value)| format!("{}={}", key.to_kebab_case(), value))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_viewport() {
        let options = Mapping::new()
            .with("width", "device-width".to_string())
            .with("initialScale", "1.0".to_string());
        assert_eq!(
            viewport_content(&options),
            "width=device-width,initial-scale=1.0"
        );
    }

    #[test]
    fn test_multi_word_keys() {
        let options = Mapping::new()
            .with("maximumScale", "2".to_string())
            .with("userScalable", "no".to_string());
        assert_eq!(
            viewport_content(&options),
            "maximum-scale=2,user-scalable=no"
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(viewport_content(&Mapping::new()), "");
    }

    #[test]
    fn test_follows_mapping_order() {
        let options = Mapping::new()
            .with("initialScale", "1".to_string())
            .with("width", "320".to_string());
        assert_eq!(viewport_content(&options), "initial-scale=1,width=320");
    }
}
