use dioxus::prelude::*;

use crate::ui::components::inline_text::InlineText;

#[component]
pub fn Paragraph(text: String) -> Element {
    rsx! {
        p { class: "paragraph",
            InlineText { text }
        }
    }
}
