use std::path::Path;

use super::{IconIdentity, Variation};

/// Split a filename into base name and variation.
///
/// Suffixes are anchored to the end of the stem and checked in
/// [`Variation::SUFFIXED`] order, so `adobe-brandx.svg` stays a default
/// variation named `adobe-brandx`.
pub fn parse_identity(file_name: &str) -> IconIdentity {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    for variation in Variation::SUFFIXED {
        let Some(suffix) = variation.suffix() else {
            continue;
        };
        if let Some(base) = stem.strip_suffix(suffix) {
            return IconIdentity {
                base_name: base.to_string(),
                variation,
            };
        }
    }

    IconIdentity {
        base_name: stem.to_string(),
        variation: Variation::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(file_name: &str) -> (String, Variation) {
        let id = parse_identity(file_name);
        (id.base_name, id.variation)
    }

    #[test]
    fn test_each_suffix_is_recognized() {
        assert_eq!(parsed("openai-color.svg"), ("openai".into(), Variation::Color));
        assert_eq!(parsed("openai-text.svg"), ("openai".into(), Variation::Text));
        assert_eq!(parsed("openai-brand.svg"), ("openai".into(), Variation::Brand));
        assert_eq!(parsed("openai-mono.svg"), ("openai".into(), Variation::Mono));
    }

    #[test]
    fn test_no_suffix_is_default() {
        assert_eq!(parsed("openai.svg"), ("openai".into(), Variation::Default));
        assert_eq!(
            parsed("google-cloud.svg"),
            ("google-cloud".into(), Variation::Default)
        );
    }

    #[test]
    fn test_suffix_must_be_anchored() {
        assert_eq!(
            parsed("adobe-brandx.svg"),
            ("adobe-brandx".into(), Variation::Default)
        );
        assert_eq!(
            parsed("color-picker.svg"),
            ("color-picker".into(), Variation::Default)
        );
        assert_eq!(parsed("adobecolor.svg"), ("adobecolor".into(), Variation::Default));
    }

    #[test]
    fn test_only_last_suffix_is_stripped() {
        assert_eq!(
            parsed("notion-text-color.svg"),
            ("notion-text".into(), Variation::Color)
        );
    }

    #[test]
    fn test_bare_suffix_leaves_empty_base() {
        assert_eq!(parsed("-color.svg"), ("".into(), Variation::Color));
        assert_eq!(parsed("-mono.svg"), ("".into(), Variation::Mono));
    }

    #[test]
    fn test_uppercase_extension() {
        assert_eq!(parsed("Figma-mono.SVG"), ("Figma".into(), Variation::Mono));
    }
}
