use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::blocks::kinds::DriverCardAttrs;
use gridpress_engine::blocks::patch::{BlockPatch, DriverCardPatch};
use gridpress_engine::models::refdata::DriverId;
use gridpress_engine::{BlockId, Cmd};

#[component]
pub fn DriverCard(
    id: BlockId,
    attrs: DriverCardAttrs,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    let driver_id = DriverId(attrs.id.clone());
    let lookup = refdata.get();
    let driver = lookup.driver(&driver_id).cloned();

    // Same placeholder in both modes so the layouts agree.
    let card = match &driver {
        None => rsx! {
            div { class: "block-placeholder", "Driver not found" }
        },
        Some(driver) => {
            let team_name = lookup
                .team(&driver.team_id)
                .map(|team| team.name.clone())
                .unwrap_or_else(|| driver.team_id.0.clone());
            let nav_id = driver.id.clone();
            rsx! {
                div {
                    class: "driver-card",
                    onclick: move |_| {
                        if !mode.is_edit() {
                            on_navigate.call(NavTarget::Driver(nav_id.clone()));
                        }
                    },
                    span { class: "driver-number", "{driver.number}" }
                    div {
                        class: "driver-identity",
                        h3 { class: "driver-name", "{driver.name}" }
                        span { class: "driver-team", "{team_name}" }
                        span { class: "driver-country", "{driver.country}" }
                    }
                    if attrs.show_stats {
                        dl {
                            class: "driver-stats",
                            dt { "Points" }
                            dd { "{driver.points}" }
                            dt { "Wins" }
                            dd { "{driver.wins}" }
                            dt { "Podiums" }
                            dd { "{driver.podiums}" }
                        }
                    }
                }
            }
        }
    };

    if !mode.is_edit() {
        return card;
    }

    let drivers = {
        let mut all: Vec<_> = lookup
            .drivers()
            .iter()
            .map(|d| (d.id.0.clone(), d.name.clone()))
            .collect();
        all.sort_by(|a, b| a.1.cmp(&b.1));
        all
    };

    rsx! {
        div {
            class: "driver-card-editor",
            select {
                class: "driver-select",
                value: "{attrs.id}",
                onchange: move |event: Event<FormData>| {
                    on_command.call(Cmd::UpdateBlock {
                        id,
                        patch: BlockPatch::DriverCard(DriverCardPatch {
                            id: Some(event.value()),
                            ..Default::default()
                        }),
                    });
                },
                option { value: "", "Pick a driver" }
                for (driver_id, name) in drivers {
                    option { key: "{driver_id}", value: "{driver_id}", "{name}" }
                }
            }
            label {
                class: "driver-stats-toggle",
                input {
                    r#type: "checkbox",
                    checked: attrs.show_stats,
                    onchange: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateBlock {
                            id,
                            patch: BlockPatch::DriverCard(DriverCardPatch {
                                show_stats: Some(event.checked()),
                                ..Default::default()
                            }),
                        });
                    }
                }
                "Show stats"
            }
            {card}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use gridpress_engine::models::refdata::{Driver, ReferenceStore};

    #[component]
    fn Harness(driver_id: String, refdata: RefData, mode: RenderMode) -> Element {
        rsx! {
            DriverCard {
                id: BlockId::new(),
                attrs: DriverCardAttrs {
                    id: driver_id,
                    ..Default::default()
                },
                mode,
                refdata,
                on_command: Callback::new(|_| {}),
                on_navigate: Callback::new(|_| {}),
            }
        }
    }

    fn card_html(driver_id: &str, refdata: RefData, mode: RenderMode) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                driver_id: driver_id.to_string(),
                refdata,
                mode,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    fn store_with_verstappen() -> ReferenceStore {
        let mut store = ReferenceStore::new();
        store.add_driver(Driver {
            id: "verstappen".into(),
            name: "Max Verstappen".to_string(),
            number: 1,
            team_id: "red-bull".into(),
            country: "Netherlands".to_string(),
            points: 255.0,
            wins: 6,
            podiums: 10,
        });
        store
    }

    #[test]
    fn resolved_driver_renders_name_and_stats() {
        let refdata = RefData::new(store_with_verstappen());
        let html = card_html("verstappen", refdata, RenderMode::Publish);
        assert!(html.contains("Max Verstappen"));
        assert!(html.contains("Netherlands"));
        assert!(!html.contains("Driver not found"));
    }

    #[test]
    fn dangling_reference_shows_the_same_placeholder_in_both_modes() {
        let refdata = RefData::new(store_with_verstappen());
        let edit = card_html("fangio", refdata.clone(), RenderMode::Edit);
        let publish = card_html("fangio", refdata, RenderMode::Publish);
        assert!(edit.contains("Driver not found"));
        assert!(publish.contains("Driver not found"));
    }
}
