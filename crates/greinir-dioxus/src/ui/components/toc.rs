use dioxus::prelude::*;
use greinir_engine::TocEntry;

/// Side navigation over the level-2/3 headings. Each entry scroll-links to
/// its heading anchor by slug id.
#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        nav { class: "toc",
            h2 { "Efnisyfirlit" }
            ul {
                for entry in entries {
                    li { class: "toc-level-{entry.level}",
                        a { href: "#{entry.id}", "{entry.title}" }
                    }
                }
            }
        }
    }
}
