use dioxus::prelude::*;
use greinir_engine::CalloutKind;

use crate::ui::components::inline_text::InlineText;

struct CalloutPresentation {
    background: &'static str,
    border: &'static str,
    glyph: &'static str,
}

/// Fixed kind → presentation table, resolved at compile time. The parser
/// only produces these four kinds; Info doubles as the neutral styling any
/// future kind would fall back to.
fn presentation(kind: CalloutKind) -> CalloutPresentation {
    match kind {
        CalloutKind::Tip => CalloutPresentation {
            background: "#fffbe6",
            border: "#f5c518",
            glyph: "💡",
        },
        CalloutKind::Warning => CalloutPresentation {
            background: "#fff1f0",
            border: "#e5484d",
            glyph: "⚠️",
        },
        CalloutKind::Action => CalloutPresentation {
            background: "#eef7ee",
            border: "#46a758",
            glyph: "🎯",
        },
        CalloutKind::Info => CalloutPresentation {
            background: "#eff4fb",
            border: "#3b82c4",
            glyph: "ℹ️",
        },
    }
}

#[component]
pub fn CalloutBox(kind: CalloutKind, text: String) -> Element {
    let look = presentation(kind);

    rsx! {
        div {
            class: "callout",
            style: "background: {look.background}; border-left: 4px solid {look.border};",
            span { class: "callout-glyph", "{look.glyph}" }
            div { class: "callout-body",
                InlineText { text }
            }
        }
    }
}
