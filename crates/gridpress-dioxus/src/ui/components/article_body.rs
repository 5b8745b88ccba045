use crate::ui::components::{BlockFrame, BlockView, InsertMenu};
use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::{Cmd, Document, registry};

/// Renders an article body block by block, in document order.
///
/// Each block renders independently of its neighbors (no cross-block state),
/// keyed by its stable id so reorders reuse existing nodes.
#[component]
pub fn ArticleBody(
    document: Document,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    rsx! {
        div {
            class: "article-body",
            for block in document
                .blocks()
                .iter()
                .filter(|b| registry::lookup(&b.kind()).is_some())
            {
                BlockFrame {
                    key: "{block.id}",
                    block: block.clone(),
                    mode,
                    on_command,
                    BlockView {
                        block: block.clone(),
                        mode,
                        refdata: refdata.clone(),
                        on_command,
                        on_navigate,
                    }
                }
            }
            if mode.is_edit() {
                InsertMenu { on_command }
            }
        }
    }
}
