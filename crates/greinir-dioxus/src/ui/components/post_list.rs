use dioxus::prelude::*;
use greinir_engine::Post;

/// Sidebar list of posts, newest first as loaded.
#[component]
pub fn PostList(posts: Vec<Post>, selected: Option<usize>, on_select: Callback<usize>) -> Element {
    rsx! {
        ul { class: "post-list",
            for (index, post) in posts.into_iter().enumerate() {
                PostListItem {
                    post,
                    index,
                    selected: selected == Some(index),
                    on_select,
                }
            }
        }
    }
}

#[component]
fn PostListItem(post: Post, index: usize, selected: bool, on_select: Callback<usize>) -> Element {
    let class_name = if selected {
        "post-item selected"
    } else {
        "post-item"
    };
    let title = post.title();
    let date = post.meta.date.clone();

    rsx! {
        li { class: "{class_name}", onclick: move |_| on_select.call(index),
            div { class: "post-title", "{title}" }
            if let Some(date) = date {
                div { class: "post-date", "{date}" }
            }
        }
    }
}
