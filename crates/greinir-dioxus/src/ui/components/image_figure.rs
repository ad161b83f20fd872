use dioxus::prelude::*;

/// Figure with optional caption. Clicking the image toggles a zoomed view;
/// the flag is local to this figure.
#[component]
pub fn ImageFigure(url: String, alt: String, caption: Option<String>) -> Element {
    let mut zoomed = use_signal(|| false);
    let class_name = if zoomed() {
        "image-figure zoomed"
    } else {
        "image-figure"
    };

    rsx! {
        figure { class: "{class_name}",
            img {
                src: "{url}",
                alt: "{alt}",
                onclick: move |_| zoomed.set(!zoomed()),
            }
            if let Some(text) = caption {
                figcaption { "{text}" }
            }
        }
    }
}
