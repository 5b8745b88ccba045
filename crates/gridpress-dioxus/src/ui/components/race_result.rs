use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::RaceResultAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, RaceResultPatch};
use gridpress_engine::models::refdata::{RaceId, SessionKind};
use gridpress_engine::{BlockId, Cmd};

const SESSIONS: &[SessionKind] = &[
    SessionKind::Practice,
    SessionKind::Qualifying,
    SessionKind::Sprint,
    SessionKind::Race,
];

fn session_tag(session: SessionKind) -> &'static str {
    match session {
        SessionKind::Practice => "practice",
        SessionKind::Qualifying => "qualifying",
        SessionKind::Sprint => "sprint",
        SessionKind::Race => "race",
    }
}

#[component]
pub fn RaceResult(
    id: BlockId,
    attrs: RaceResultAttrs,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    let race_id = RaceId(attrs.id.clone());
    let lookup = refdata.get();
    let race = lookup.race(&race_id).cloned();
    let result = lookup.session_result(&race_id, attrs.session).cloned();

    let table = match (&race, &result) {
        (Some(race), Some(result)) => {
            let shown: Vec<_> = if attrs.row_limit == 0 {
                result.rows.iter().collect()
            } else {
                result.rows.iter().take(attrs.row_limit as usize).collect()
            };
            let session_label = attrs.session.label();
            rsx! {
                div {
                    class: "race-result",
                    h3 {
                        class: "race-result-title",
                        onclick: move |_| {
                            if !mode.is_edit() {
                                on_navigate.call(NavTarget::Calendar);
                            }
                        },
                        "{race.name} — {session_label}"
                    }
                    span { class: "race-result-circuit", "{race.circuit}, {race.country}" }
                    table {
                        class: "race-result-rows",
                        thead {
                            tr {
                                th { "Pos" }
                                th { "Driver" }
                                th { "Gap" }
                                th { "Pts" }
                            }
                        }
                        tbody {
                            for row in shown {
                                tr {
                                    key: "{row.position}",
                                    td { "{row.position}" }
                                    td {
                                        {
                                            lookup
                                                .driver(&row.driver_id)
                                                .map(|d| d.name.clone())
                                                .unwrap_or_else(|| row.driver_id.0.clone())
                                        }
                                    }
                                    td { "{row.gap}" }
                                    td { "{row.points}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        _ => rsx! {
            div { class: "block-placeholder", "Result not available" }
        },
    };

    if !mode.is_edit() {
        return table;
    }

    let session_value = session_tag(attrs.session);

    rsx! {
        div {
            class: "race-result-editor",
            input {
                class: "race-id-input",
                placeholder: "Race id",
                value: "{attrs.id}",
                oninput: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::RaceResult(RaceResultPatch {
                            id: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                }
            }
            select {
                class: "session-select",
                value: "{session_value}",
                onchange: move |event: Event<FormData>| {
                    if let Some(session) = SessionKind::from_tag(&event.value()) {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::RaceResult(RaceResultPatch {
                                session: Some(session),
                                ..Default::default()
                            }),
                        });
                    }
                },
                for (tag, label) in SESSIONS.iter().map(|s| (session_tag(*s), s.label())) {
                    option { key: "{tag}", value: "{tag}", "{label}" }
                }
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
                            patch: BlockPatch::RaceResult(RaceResultPatch {
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
