use dioxus::prelude::*;
use greinir_engine::ParsedDocument;

use crate::ui::components::block::BlockView;

/// The rendered post body: one visual unit per block, in document order.
#[component]
pub fn PostView(document: ParsedDocument) -> Element {
    rsx! {
        article { class: "post-view",
            for block in document.blocks {
                BlockView { block }
            }
        }
    }
}
