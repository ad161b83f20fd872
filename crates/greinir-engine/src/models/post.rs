use relative_path::RelativePathBuf;
use serde::Deserialize;

use crate::models::block::ParsedDocument;
use crate::parsing::{parse_document, slug::slugify};

/// Front-matter delimiter. Posts may open with a TOML header fenced by
/// `+++` lines; everything after the closing fence is the post body.
const FRONT_MATTER_FENCE: &str = "+++";

/// Metadata from the optional TOML front matter of a post.
///
/// All fields are optional: a bare `.md` file with no header is a valid
/// post. Dates are ISO `YYYY-MM-DD` strings and sort lexically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One blog post: its identity under the content root, metadata and raw
/// body. Parsing to blocks happens on demand via [`Post::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub relative_path: RelativePathBuf,
    pub meta: PostMeta,
    pub body: String,
}

impl Post {
    /// Builds a post from raw file content. Never fails: missing front
    /// matter means default metadata, malformed front matter is logged and
    /// skipped, and the title falls back to the file stem.
    pub fn from_source(relative_path: RelativePathBuf, source: &str) -> Self {
        let (header, body) = split_front_matter(source);
        let meta = match header {
            None => PostMeta::default(),
            Some(header) => match toml::from_str(header) {
                Ok(meta) => meta,
                Err(e) => {
                    log::warn!("ignoring malformed front matter in {relative_path}: {e}");
                    PostMeta::default()
                }
            },
        };

        Self {
            relative_path,
            meta,
            body: body.to_string(),
        }
    }

    /// Display title: front-matter title, or the file stem.
    pub fn title(&self) -> String {
        match &self.meta.title {
            Some(title) => title.clone(),
            None => self
                .relative_path
                .file_stem()
                .unwrap_or("untitled")
                .to_string(),
        }
    }

    /// URL slug for the post, derived from the display title.
    pub fn slug(&self) -> String {
        slugify(&self.title())
    }

    pub fn parse(&self) -> ParsedDocument {
        parse_document(&self.body)
    }
}

/// Splits `+++`-fenced front matter from the body. Returns the header
/// content (without fences) and the remaining body.
fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source.strip_prefix(FRONT_MATTER_FENCE) else {
        return (None, source);
    };
    let Some(rest) = rest.strip_prefix('\n') else {
        return (None, source);
    };
    match rest.split_once("\n+++") {
        Some((header, body)) => {
            let body = body.strip_prefix('\n').unwrap_or(body);
            (Some(header), body)
        }
        // Unclosed header: treat the whole file as body.
        None => (None, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(source: &str) -> Post {
        Post::from_source(RelativePathBuf::from("blogg/seo-grunnur.md"), source)
    }

    #[test]
    fn front_matter_is_parsed_and_stripped_from_body() {
        let p = post("+++\ntitle = \"SEO grunnur\"\ndate = \"2026-03-01\"\ntags = [\"seo\"]\n+++\n## Inngangur\n");
        assert_eq!(p.meta.title.as_deref(), Some("SEO grunnur"));
        assert_eq!(p.meta.date.as_deref(), Some("2026-03-01"));
        assert_eq!(p.meta.tags, vec!["seo".to_string()]);
        assert_eq!(p.body, "## Inngangur\n");
        assert_eq!(p.title(), "SEO grunnur");
        assert_eq!(p.slug(), "seo-grunnur");
    }

    #[test]
    fn missing_front_matter_defaults_and_uses_file_stem() {
        let p = post("Bara texti.");
        assert_eq!(p.meta, PostMeta::default());
        assert_eq!(p.body, "Bara texti.");
        assert_eq!(p.title(), "seo-grunnur");
    }

    #[test]
    fn malformed_front_matter_degrades_to_defaults() {
        let p = post("+++\ntitle = not quoted\n+++\nefni\n");
        assert_eq!(p.meta, PostMeta::default());
        assert_eq!(p.body, "efni\n");
    }

    #[test]
    fn unclosed_front_matter_is_treated_as_body() {
        let source = "+++\ntitle = \"hálfopið\"\nefni\n";
        let p = post(source);
        assert_eq!(p.meta, PostMeta::default());
        assert_eq!(p.body, source);
    }

    #[test]
    fn parse_delegates_to_the_document_parser() {
        let p = post("+++\ntitle = \"Grein\"\n+++\n## Kafli\ntexti\n");
        let doc = p.parse();
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.toc.len(), 1);
    }
}
