use dioxus::prelude::*;

/// Section heading annotated with its slug id, the anchor the table of
/// contents scroll-links to. Heading text renders verbatim.
#[component]
pub fn Heading(level: u8, text: String, id: String) -> Element {
    let class_name = format!("heading level-{level}");

    match level {
        2 => rsx! { h2 { id: "{id}", class: "{class_name}", "{text}" } },
        3 => rsx! { h3 { id: "{id}", class: "{class_name}", "{text}" } },
        // The dialect stops at ####; anything deeper renders as h4 too.
        _ => rsx! { h4 { id: "{id}", class: "{class_name}", "{text}" } },
    }
}
