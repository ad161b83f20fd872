use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use greinir_engine::{ParsedDocument, io};

use crate::ui::components::{PostList, PostView, TableOfContents};
use crate::ui::sheet::{ContactSheet, LogSender, SheetContext, SheetState, SharedSender};

const BLOG_CSS: &str = include_str!("../assets/blog.css");

#[component]
pub fn App(content_path: PathBuf) -> Element {
    let posts = use_signal(move || match io::load_posts(&content_path) {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Error loading posts: {e}");
            Vec::new()
        }
    });
    let mut selected = use_signal(|| None::<usize>);
    let mut document = use_signal(|| None::<ParsedDocument>);
    let mut sheet = SheetState::provide();
    use_context_provider::<SharedSender>(|| Arc::new(LogSender));

    let selected_title = selected().and_then(|i| posts.read().get(i).map(|p| p.title()));
    let selected_slug = selected().and_then(|i| posts.read().get(i).map(|p| p.slug()));

    rsx! {
        style { {BLOG_CSS} }
        div { class: "app-container",
            div { class: "sidebar",
                h2 { "Greinar" }
                PostList {
                    posts: posts(),
                    selected: selected(),
                    on_select: move |index: usize| {
                        let parsed = posts.read().get(index).map(|post| post.parse());
                        if let Some(parsed) = parsed {
                            *document.write() = Some(parsed);
                            selected.set(Some(index));
                        }
                    },
                }
            }
            div { class: "main-content",
                if let (Some(title), Some(doc)) = (selected_title, document.read().as_ref()) {
                    div { class: "post-header",
                        h1 { "{title}" }
                        button {
                            class: "contact-button",
                            onclick: move |_| {
                                let context = match &selected_slug {
                                    Some(slug) => SheetContext::Post { slug: slug.clone() },
                                    None => SheetContext::General,
                                };
                                sheet.open_for(context);
                            },
                            "Hafðu samband"
                        }
                    }
                    div { class: "content-layout",
                        PostView { document: doc.clone() }
                        TableOfContents { entries: doc.toc.clone() }
                    }
                } else {
                    div { class: "welcome",
                        h1 { "greinir" }
                        p { "Veldu grein úr listanum til að lesa hana" }
                        button {
                            class: "contact-button",
                            onclick: move |_| sheet.open_for(SheetContext::General),
                            "Hafðu samband"
                        }
                    }
                }
            }
            ContactSheet {}
        }
    }
}
