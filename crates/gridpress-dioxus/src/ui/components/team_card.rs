use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::TeamCardAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, TeamCardPatch};
use gridpress_engine::models::refdata::TeamId;
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn TeamCard(
    id: BlockId,
    attrs: TeamCardAttrs,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    let team_id = TeamId(attrs.id.clone());
    let lookup = refdata.get();
    let team = lookup.team(&team_id).cloned();

    let card = match &team {
        None => rsx! {
            div { class: "block-placeholder", "Team not found" }
        },
        Some(team) => {
            let mut drivers: Vec<String> = lookup
                .drivers()
                .iter()
                .filter(|d| d.team_id == team.id)
                .map(|d| d.name.clone())
                .collect();
            drivers.sort();
            let nav_id = team.id.clone();
            rsx! {
                div {
                    class: "team-card",
                    onclick: move |_| {
                        if !mode.is_edit() {
                            on_navigate.call(NavTarget::Team(nav_id.clone()));
                        }
                    },
                    h3 { class: "team-name", "{team.name}" }
                    span { class: "team-base", "{team.base}" }
                    span { class: "team-principal", "{team.principal}" }
                    span { class: "team-points", "{team.points} pts" }
                    if attrs.show_drivers && !drivers.is_empty() {
                        ul {
                            class: "team-drivers",
                            for name in drivers {
                                li { key: "{name}", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    };

    if !mode.is_edit() {
        return card;
    }

    let teams = {
        let mut all: Vec<_> = lookup
            .teams()
            .iter()
            .map(|t| (t.id.0.clone(), t.name.clone()))
            .collect();
        all.sort_by(|a, b| a.1.cmp(&b.1));
        all
    };

    rsx! {
        div {
            class: "team-card-editor",
            select {
                class: "team-select",
                value: "{attrs.id}",
                onchange: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::TeamCard(TeamCardPatch {
                            id: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                },
                option { value: "", "Pick a team" }
                for (team_id, name) in teams {
                    option { key: "{team_id}", value: "{team_id}", "{name}" }
                }
            }
            label {
                class: "team-drivers-toggle",
                input {
                    r#type: "checkbox",
                    checked: attrs.show_drivers,
                    onchange: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::TeamCard(TeamCardPatch {
                                show_drivers: Some(event.checked()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                "Show drivers"
            }
            {card}
        }
    }
}
