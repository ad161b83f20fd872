use dioxus::prelude::*;

/// Quote text renders verbatim; no inline formatting inside quotes.
#[component]
pub fn QuoteBlock(text: String) -> Element {
    rsx! {
        blockquote { class: "quote-block", "{text}" }
    }
}
