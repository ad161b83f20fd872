use dioxus::prelude::*;
use greinir_engine::Block;

use crate::ui::components::{
    callout::CalloutBox, code_block::CodeBlockView, heading::Heading, image_figure::ImageFigure,
    list::BulletList, paragraph::Paragraph, quote::QuoteBlock,
};

/// Maps one parsed block to its visual unit. Total over the block union;
/// the parser cannot produce anything unhandled here.
#[component]
pub fn BlockView(block: Block) -> Element {
    match block {
        Block::Heading { level, text, id } => rsx! {
            Heading { level, text, id }
        },
        Block::Paragraph { text } => rsx! {
            Paragraph { text }
        },
        Block::List { items } => rsx! {
            BulletList { items }
        },
        Block::Quote { text } => rsx! {
            QuoteBlock { text }
        },
        Block::CodeBlock { code } => rsx! {
            CodeBlockView { code }
        },
        Block::Image { url, alt, caption } => rsx! {
            ImageFigure { url, alt, caption }
        },
        Block::Callout { kind, text } => rsx! {
            CalloutBox { kind, text }
        },
    }
}
