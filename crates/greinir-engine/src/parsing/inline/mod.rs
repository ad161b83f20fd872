mod scanner;
mod types;

pub use scanner::format_inline;
pub use types::{InlineSpan, is_external_url};
