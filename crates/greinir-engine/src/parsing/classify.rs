use std::sync::OnceLock;

use regex::Regex;

use crate::models::block::CalloutKind;
use crate::parsing::slug::slugify;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently of
/// surrounding context. The builder then decides how the line combines with
/// the block currently being accumulated (a list marker line, for example,
/// is absorbed into an open callout rather than starting a list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Line content with the trailing newline stripped, otherwise untouched.
    /// Fenced code accumulates this form verbatim.
    pub raw: String,
    pub kind: LineKind,
}

/// What a line looks like on its own, in rule order: heading before callout
/// marker, callout before fence, and so on down to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading { level: u8, text: String, id: String },
    CalloutStart { kind: CalloutKind, text: String },
    /// A triple-backtick line; opens or closes a code block.
    Fence,
    Quote { text: String },
    Image {
        url: String,
        alt: String,
        caption: Option<String>,
    },
    /// `![`-prefixed but not matching the image pattern. Emits no block.
    MalformedImage,
    ListItem { text: String },
    Text,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r#"^!\[([^\]]*)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)$"#)
            .expect("invalid image line regex")
    })
}

fn callout_label_regex() -> &'static Regex {
    static LABEL_REGEX: OnceLock<Regex> = OnceLock::new();
    // A bold label like `**Pro tip:**` right after the marker glyph is
    // presentation sugar in the source text and is discarded.
    LABEL_REGEX.get_or_init(|| Regex::new(r"^\*\*[^*]*:\*\*\s*").expect("invalid label regex"))
}

/// Classifies individual lines of the blog dialect.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies one line. First matching rule wins; the rule order is part
    /// of the dialect contract.
    pub fn classify(&self, raw_line: &str) -> LineClass {
        let raw = raw_line.trim_end_matches(['\r', '\n']);
        let line = raw.trim();

        let kind = if line.is_empty() {
            LineKind::Blank
        } else if line.starts_with('#') {
            classify_heading(line)
        } else if let Some(kind) = callout_marker(line) {
            classify_callout(kind, line)
        } else if line.starts_with("```") {
            LineKind::Fence
        } else if let Some(rest) = line.strip_prefix('>') {
            LineKind::Quote {
                text: rest.strip_prefix(' ').unwrap_or(rest).to_string(),
            }
        } else if line.starts_with("![") {
            classify_image(line)
        } else if let Some(item) = list_item(line) {
            LineKind::ListItem { text: item }
        } else {
            LineKind::Text
        };

        LineClass {
            raw: raw.to_string(),
            kind,
        }
    }
}

fn classify_heading(line: &str) -> LineKind {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    let text = line.trim_start_matches('#').trim().to_string();
    LineKind::Heading {
        // The dialect only uses ## to ####, but the level is deliberately
        // not clamped; anything past u8 range saturates.
        level: u8::try_from(hashes).unwrap_or(u8::MAX),
        id: slugify(&text),
        text,
    }
}

fn callout_marker(line: &str) -> Option<CalloutKind> {
    CalloutKind::ALL
        .into_iter()
        .find(|kind| line.starts_with(kind.glyph()))
}

fn classify_callout(kind: CalloutKind, line: &str) -> LineKind {
    let after_marker = line[kind.glyph().len()..].trim_start();
    let text = callout_label_regex()
        .replace(after_marker, "")
        .trim()
        .to_string();
    LineKind::CalloutStart { kind, text }
}

fn classify_image(line: &str) -> LineKind {
    match image_regex().captures(line) {
        Some(caps) => LineKind::Image {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
            caption: caps.get(3).map(|m| m.as_str().to_string()),
        },
        // Malformed image syntax is silently dropped rather than demoted to
        // a paragraph; the authoring dialect is internal and forgiving.
        None => LineKind::MalformedImage,
    }
}

fn list_item(line: &str) -> Option<String> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::to_string)
}
