pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::block::{Block, CalloutKind, ParsedDocument, TocEntry};
pub use models::post::{Post, PostMeta};
pub use parsing::inline::{InlineSpan, format_inline, is_external_url};
pub use parsing::parse_document;
pub use parsing::slug::slugify;
