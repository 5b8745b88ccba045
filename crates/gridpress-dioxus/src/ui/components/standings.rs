use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::{StandingsAttrs, StandingsTable};
use gridpress_engine::blocks::patch::{BlockPatch, StandingsPatch};
use gridpress_engine::{BlockId, Cmd};

/// A standings line computed from the reference data.
struct StandingRow {
    name: String,
    detail: String,
    points: f32,
}

fn compute_rows(attrs: &StandingsAttrs, refdata: &RefData) -> Vec<StandingRow> {
    let lookup = refdata.get();
    let mut rows: Vec<StandingRow> = match attrs.table {
        StandingsTable::Drivers => lookup
            .drivers()
            .iter()
            .map(|driver| StandingRow {
                name: driver.name.clone(),
                detail: lookup
                    .team(&driver.team_id)
                    .map(|team| team.name.clone())
                    .unwrap_or_else(|| driver.team_id.0.clone()),
                points: driver.points,
            })
            .collect(),
        StandingsTable::Constructors => lookup
            .teams()
            .iter()
            .map(|team| StandingRow {
                name: team.name.clone(),
                detail: team.base.clone(),
                points: team.points,
            })
            .collect(),
    };
    // Ties break on name so the ordering stays stable across renders.
    rows.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    if attrs.row_limit > 0 {
        rows.truncate(attrs.row_limit as usize);
    }
    rows
}

#[component]
pub fn Standings(
    id: BlockId,
    attrs: StandingsAttrs,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    let rows = compute_rows(&attrs, &refdata);
    let title = match attrs.table {
        StandingsTable::Drivers => "Drivers' Championship",
        StandingsTable::Constructors => "Constructors' Championship",
    };

    let table = if rows.is_empty() {
        rsx! {
            div { class: "block-placeholder", "Standings not available" }
        }
    } else {
        rsx! {
            div {
                class: "standings",
                h3 {
                    class: "standings-title",
                    onclick: move |_| {
                        if !mode.is_edit() {
                            on_navigate.call(NavTarget::Standings);
                        }
                    },
                    "{title}"
                }
                table {
                    class: "standings-rows",
                    tbody {
                        for (position, row) in rows.iter().enumerate().map(|(i, r)| (i + 1, r)) {
                            tr {
                                key: "{row.name}",
                                td { class: "standings-position", "{position}" }
                                td { class: "standings-name", "{row.name}" }
                                td { class: "standings-detail", "{row.detail}" }
                                td { class: "standings-points", "{row.points}" }
                            }
                        }
                    }
                }
            }
        }
    };

    if !mode.is_edit() {
        return table;
    }

    let table_tag = match attrs.table {
        StandingsTable::Drivers => "drivers",
        StandingsTable::Constructors => "constructors",
    };

    rsx! {
        div {
            class: "standings-editor",
            select {
                class: "standings-table-select",
                value: "{table_tag}",
                onchange: move |event: Event<FormData>| {
                    if let Some(table) = StandingsTable::from_tag(&event.value()) {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Standings(StandingsPatch {
                                table: Some(table),
                                ..Default::default()
                            }),
                        });
                    }
                },
                option { value: "drivers", "Drivers" }
                option { value: "constructors", "Constructors" }
            }
            input {
                class: "row-limit-input",
                r#type: "number",
                min: "0",
                value: "{attrs.row_limit}",
                oninput: move |event: Event<FormData>| {
                    if let Ok(limit) = event.value().parse::<u32>() {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::Standings(StandingsPatch {
                                row_limit: Some(limit),
                                ..Default::default()
                            }),
                        });
                    }
                }
            }
            {table}
        }
    }
}
