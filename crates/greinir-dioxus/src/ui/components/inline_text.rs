use dioxus::prelude::*;
use greinir_engine::{InlineSpan, format_inline, is_external_url};

/// Runs block text through the inline formatter and renders the resulting
/// span run. Used by paragraphs, list items and callout bodies.
#[component]
pub fn InlineText(text: String) -> Element {
    let spans = format_inline(&text);
    render_spans(&spans)
}

fn render_spans(spans: &[InlineSpan]) -> Element {
    rsx! {
        for span in spans {
            {render_span(span)}
        }
    }
}

fn render_span(span: &InlineSpan) -> Element {
    match span {
        InlineSpan::Text(text) => rsx! {
            span { "{text}" }
        },
        InlineSpan::Bold(children) => rsx! {
            strong { {render_spans(children)} }
        },
        InlineSpan::Italic(children) => rsx! {
            em { {render_spans(children)} }
        },
        InlineSpan::Strikethrough(text) => rsx! {
            del { "{text}" }
        },
        InlineSpan::Link { text, url } => {
            if is_external_url(url) {
                rsx! {
                    a {
                        class: "external-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{text}"
                        span { class: "external-link-icon", " ↗" }
                    }
                }
            } else {
                rsx! {
                    a { class: "internal-link", href: "{url}", "{text}" }
                }
            }
        }
    }
}
