/// A formatting run inside block text.
///
/// Bold and italic nest (their inner content is re-scanned), strikethrough
/// and link text stay flat. Link targets are classified external/internal at
/// render time via [`is_external_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(Vec<InlineSpan>),
    Italic(Vec<InlineSpan>),
    Strikethrough(String),
    Link { text: String, url: String },
}

/// External links (`http`-prefixed) open in a new tab and carry a trailing
/// icon; everything else is treated as an internal site path.
pub fn is_external_url(url: &str) -> bool {
    url.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_targets_are_external() {
        assert!(is_external_url("http://dæmi.is"));
        assert!(is_external_url("https://dæmi.is/grein"));
        assert!(!is_external_url("/thjonusta/seo"));
        assert!(!is_external_url("mailto:stefna@stefna.is"));
    }
}
