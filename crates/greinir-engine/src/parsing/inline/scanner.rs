use std::sync::OnceLock;

use regex::Regex;

use super::types::InlineSpan;

/// The six competing inline patterns, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    Bold,
    BoldUnderscore,
    Italic,
    ItalicUnderscore,
    Strikethrough,
    Link,
}

/// One pattern occurrence inside the unconsumed remainder.
struct InlineMatch {
    start: usize,
    end: usize,
    kind: PatternKind,
    inner: String,
    url: Option<String>,
}

impl InlineMatch {
    fn into_span(self) -> InlineSpan {
        match self.kind {
            // Bold and italic inner content is re-scanned so nested
            // emphasis composes.
            PatternKind::Bold | PatternKind::BoldUnderscore => {
                InlineSpan::Bold(format_inline(&self.inner))
            }
            PatternKind::Italic | PatternKind::ItalicUnderscore => {
                InlineSpan::Italic(format_inline(&self.inner))
            }
            PatternKind::Strikethrough => InlineSpan::Strikethrough(self.inner),
            PatternKind::Link => InlineSpan::Link {
                text: self.inner,
                url: self.url.unwrap_or_default(),
            },
        }
    }
}

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold regex"))
}

fn bold_underscore_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__(.+?)__").expect("invalid bold-underscore regex"))
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("invalid italic regex"))
}

fn italic_underscore_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_([^_]+)_").expect("invalid italic-underscore regex"))
}

fn strikethrough_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"~~(.+?)~~").expect("invalid strikethrough regex"))
}

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("invalid link regex"))
}

/// Formats block text into a flat run of inline spans.
///
/// Repeatedly takes the earliest-starting match among the six patterns
/// (ties broken by the [`PatternKind`] order), emitting the plain text in
/// front of it, then the typed span, until no pattern matches the remainder.
/// Earliest-match-wins keeps emission strictly left to right; a later,
/// shorter pattern can never jump the queue over an earlier one.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(m) = earliest_match(rest) else {
            spans.push(InlineSpan::Text(rest.to_string()));
            break;
        };
        if m.start > 0 {
            spans.push(InlineSpan::Text(rest[..m.start].to_string()));
        }
        let end = m.end;
        spans.push(m.into_span());
        rest = &rest[end..];
    }

    spans
}

fn earliest_match(text: &str) -> Option<InlineMatch> {
    let candidates = [
        find_simple(text, bold_regex(), PatternKind::Bold),
        find_simple(text, bold_underscore_regex(), PatternKind::BoldUnderscore),
        find_italic(text, italic_regex(), PatternKind::Italic, b'*'),
        find_italic(
            text,
            italic_underscore_regex(),
            PatternKind::ItalicUnderscore,
            b'_',
        ),
        find_simple(text, strikethrough_regex(), PatternKind::Strikethrough),
        find_link(text),
    ];

    let mut best: Option<InlineMatch> = None;
    for candidate in candidates.into_iter().flatten() {
        // Strict `<` keeps the earlier pattern in evaluation order on ties.
        if best.as_ref().is_none_or(|b| candidate.start < b.start) {
            best = Some(candidate);
        }
    }
    best
}

fn find_simple(text: &str, re: &Regex, kind: PatternKind) -> Option<InlineMatch> {
    let caps = re.captures(text)?;
    let full = caps.get(0)?;
    Some(InlineMatch {
        start: full.start(),
        end: full.end(),
        kind,
        inner: caps[1].to_string(),
        url: None,
    })
}

/// Single-delimiter emphasis must not sit next to a second delimiter, or it
/// would swallow half of a bold run.
fn find_italic(text: &str, re: &Regex, kind: PatternKind, delimiter: u8) -> Option<InlineMatch> {
    let bytes = text.as_bytes();
    for caps in re.captures_iter(text) {
        let full = caps.get(0)?;
        let before_ok = full.start() == 0 || bytes[full.start() - 1] != delimiter;
        let after_ok = full.end() == bytes.len() || bytes[full.end()] != delimiter;
        if before_ok && after_ok {
            return Some(InlineMatch {
                start: full.start(),
                end: full.end(),
                kind,
                inner: caps[1].to_string(),
                url: None,
            });
        }
    }
    None
}

fn find_link(text: &str) -> Option<InlineMatch> {
    let caps = link_regex().captures(text)?;
    let full = caps.get(0)?;
    Some(InlineMatch {
        start: full.start(),
        end: full.end(),
        kind: PatternKind::Link,
        inner: caps[1].to_string(),
        url: Some(caps[2].to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    #[test]
    fn plain_text_yields_a_single_node() {
        assert_eq!(
            format_inline("engin sérstök tákn hér"),
            vec![text("engin sérstök tákn hér")]
        );
    }

    #[test]
    fn bold_with_both_delimiters() {
        assert_eq!(
            format_inline("**feitletrað**"),
            vec![InlineSpan::Bold(vec![text("feitletrað")])]
        );
        assert_eq!(
            format_inline("__feitletrað__"),
            vec![InlineSpan::Bold(vec![text("feitletrað")])]
        );
    }

    #[test]
    fn italic_does_not_split_bold_runs() {
        assert_eq!(
            format_inline("**feit**"),
            vec![InlineSpan::Bold(vec![text("feit")])]
        );
        assert_eq!(
            format_inline("__feit__"),
            vec![InlineSpan::Bold(vec![text("feit")])]
        );
    }

    #[test]
    fn earliest_match_wins_left_to_right() {
        assert_eq!(
            format_inline("*a* and **b**"),
            vec![
                InlineSpan::Italic(vec![text("a")]),
                text(" and "),
                InlineSpan::Bold(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn nested_emphasis_composes() {
        assert_eq!(
            format_inline("**feit *skáletruð* orð**"),
            vec![InlineSpan::Bold(vec![
                text("feit "),
                InlineSpan::Italic(vec![text("skáletruð")]),
                text(" orð"),
            ])]
        );
    }

    #[test]
    fn strikethrough_is_flat() {
        assert_eq!(
            format_inline("var ~~ódýrt~~ dýrt"),
            vec![
                text("var "),
                InlineSpan::Strikethrough("ódýrt".to_string()),
                text(" dýrt"),
            ]
        );
    }

    #[test]
    fn link_captures_text_and_url() {
        assert_eq!(
            format_inline("sjá [verðskrá](/verd) okkar"),
            vec![
                text("sjá "),
                InlineSpan::Link {
                    text: "verðskrá".to_string(),
                    url: "/verd".to_string(),
                },
                text(" okkar"),
            ]
        );
    }

    #[test]
    fn unclosed_delimiters_stay_plain_text() {
        assert_eq!(format_inline("**hálfopið"), vec![text("**hálfopið")]);
        assert_eq!(format_inline("[texti](án endis"), vec![text("[texti](án endis")]);
    }

    #[test]
    fn mixed_spans_emit_in_document_order() {
        let spans = format_inline("Sjá [vefinn](https://stefna.is) og **meira** þar");
        assert_eq!(
            spans,
            vec![
                text("Sjá "),
                InlineSpan::Link {
                    text: "vefinn".to_string(),
                    url: "https://stefna.is".to_string(),
                },
                text(" og "),
                InlineSpan::Bold(vec![text("meira")]),
                text(" þar"),
            ]
        );
    }

    #[test]
    fn snake_case_inside_words_is_italicized_by_the_dialect() {
        // Known dialect quirk: single underscores between words still match.
        assert_eq!(
            format_inline("a_b_c"),
            vec![text("a"), InlineSpan::Italic(vec![text("b")]), text("c")]
        );
    }
}
