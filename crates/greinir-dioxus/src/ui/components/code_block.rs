use dioxus::document;
use dioxus::prelude::*;

/// Monospace code unit with a copy-to-clipboard affordance.
///
/// The "copied" flag is local to this block; copying is only ever triggered
/// by explicit user invocation and a failure is logged once, not retried.
#[component]
pub fn CodeBlockView(code: String) -> Element {
    let mut copied = use_signal(|| false);
    let code_for_copy = code.clone();

    rsx! {
        div { class: "code-block",
            button {
                class: "copy-button",
                onclick: move |_| {
                    let code = code_for_copy.clone();
                    spawn(async move {
                        let eval = document::eval(
                            r#"const code = await dioxus.recv();
                               try { await navigator.clipboard.writeText(code); } catch (err) { console.error("clipboard", err); }"#,
                        );
                        match eval.send(code) {
                            Ok(()) => copied.set(true),
                            Err(e) => log::warn!("failed to copy code block: {e}"),
                        }
                    });
                },
                if copied() { "Afritað ✓" } else { "Afrita kóða" }
            }
            pre {
                code { "{code}" }
            }
        }
    }
}
