use crate::ui::context::RenderMode;
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::TableAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, TablePatch};
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn Table(
    id: BlockId,
    attrs: TableAttrs,
    mode: RenderMode,
    on_command: Callback<Cmd>,
) -> Element {
    let header = attrs.header.clone();
    let rows = attrs.rows.clone();

    let rendered = rsx! {
        table {
            class: "table-grid",
            if !header.is_empty() {
                thead {
                    tr {
                        for (index, cell) in header.iter().enumerate() {
                            th { key: "{index}", "{cell}" }
                        }
                    }
                }
            }
            tbody {
                for (row_index, row) in rows.iter().enumerate() {
                    tr {
                        key: "{row_index}",
                        for (cell_index, cell) in row.iter().enumerate() {
                            td { key: "{cell_index}", "{cell}" }
                        }
                    }
                }
            }
        }
    };

    if !mode.is_edit() {
        return rsx! {
            div {
                class: "table-block",
                if !attrs.title.is_empty() {
                    h3 { class: "table-title", "{attrs.title}" }
                }
                {rendered}
            }
        };
    }

    rsx! {
        div {
            class: "table-block",
            input {
                class: "table-title-input",
                placeholder: "Table title",
                value: "{attrs.title}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::Table(TablePatch {
                            title: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            {rendered}
        }
    }
}
