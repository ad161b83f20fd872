use dioxus::prelude::*;

use crate::ui::components::inline_text::InlineText;

/// Unordered list; each item runs through the inline formatter.
#[component]
pub fn BulletList(items: Vec<String>) -> Element {
    rsx! {
        ul { class: "bullet-list",
            for item in items {
                li {
                    InlineText { text: item }
                }
            }
        }
    }
}
