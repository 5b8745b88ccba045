use crate::ui::components::{
    divider::Divider, driver_card::DriverCard, gallery::Gallery, heading::Heading, image::Image,
    list::List, paragraph::Paragraph, quote::Quote, race_result::RaceResult, slider::Slider,
    standings::Standings, table::Table, team_card::TeamCard,
};
use crate::ui::context::{NavTarget, RefData, RenderMode};
use dioxus::prelude::*;
use gridpress_engine::{Block, BlockAttributes, Cmd};

/// Single dispatch point from a block instance to its type's component.
///
/// The match is exhaustive over the attribute union; unknown types render
/// nothing so documents from newer builds degrade gracefully instead of
/// erroring.
#[component]
pub fn BlockView(
    block: Block,
    mode: RenderMode,
    refdata: RefData,
    on_command: Callback<Cmd>,
    on_navigate: Callback<NavTarget>,
) -> Element {
    let id = block.id;
    match block.attrs {
        BlockAttributes::Paragraph(attrs) => rsx! {
            Paragraph { id, attrs, mode, on_command }
        },
        BlockAttributes::Heading(attrs) => rsx! {
            Heading { id, attrs, mode, on_command }
        },
        BlockAttributes::List(attrs) => rsx! {
            List { id, attrs, mode, on_command }
        },
        BlockAttributes::Quote(attrs) => rsx! {
            Quote { id, attrs, mode, on_command }
        },
        BlockAttributes::Image(attrs) => rsx! {
            Image { id, attrs, mode, on_command }
        },
        BlockAttributes::Gallery(attrs) => rsx! {
            Gallery { id, attrs, mode, on_command }
        },
        BlockAttributes::Slider(attrs) => rsx! {
            Slider { id, attrs, mode, on_command }
        },
        BlockAttributes::Table(attrs) => rsx! {
            Table { id, attrs, mode, on_command }
        },
        BlockAttributes::Divider(_) => rsx! {
            Divider {}
        },
        BlockAttributes::DriverCard(attrs) => rsx! {
            DriverCard { id, attrs, mode, refdata, on_command, on_navigate }
        },
        BlockAttributes::TeamCard(attrs) => rsx! {
            TeamCard { id, attrs, mode, refdata, on_command, on_navigate }
        },
        BlockAttributes::RaceResult(attrs) => rsx! {
            RaceResult { id, attrs, mode, refdata, on_command, on_navigate }
        },
        BlockAttributes::Standings(attrs) => rsx! {
            Standings { id, attrs, mode, refdata, on_command, on_navigate }
        },
        BlockAttributes::Unknown { .. } => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use gridpress_engine::blocks::patch::{BlockPatch, HeadingPatch, QuotePatch};
    use gridpress_engine::{BlockKind, Document};

    #[component]
    fn Harness(block: Block, mode: RenderMode) -> Element {
        rsx! {
            BlockView {
                block,
                mode,
                refdata: RefData::empty(),
                on_command: Callback::new(|_| {}),
                on_navigate: Callback::new(|_| {}),
            }
        }
    }

    fn view_html(block: Block, mode: RenderMode) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block, mode });
        dom.rebuild_in_place();
        render(&dom)
    }

    fn heading_block(text: &str) -> Block {
        let mut doc = Document::new();
        let id = doc.insert(&BlockKind::Heading, None).unwrap();
        doc.update(
            id,
            &BlockPatch::Heading(HeadingPatch {
                content: Some(text.to_string()),
                ..Default::default()
            }),
        );
        doc.get(id).unwrap().clone()
    }

    #[test]
    fn both_modes_render_the_same_content() {
        let block = heading_block("Qualifying report");
        let edit = view_html(block.clone(), RenderMode::Edit);
        let publish = view_html(block, RenderMode::Publish);
        assert!(edit.contains("Qualifying report"));
        assert!(publish.contains("Qualifying report"));
    }

    #[test]
    fn publish_mode_has_no_inputs() {
        let mut doc = Document::new();
        let id = doc.insert(&BlockKind::Quote, None).unwrap();
        doc.update(
            id,
            &BlockPatch::Quote(QuotePatch {
                content: Some("Flat out through Ascari".to_string()),
                ..Default::default()
            }),
        );
        let block = doc.get(id).unwrap().clone();

        let publish = view_html(block.clone(), RenderMode::Publish);
        assert!(publish.contains("Flat out through Ascari"));
        assert!(!publish.contains("<textarea"));
        assert!(!publish.contains("<input"));

        let edit = view_html(block, RenderMode::Edit);
        assert!(edit.contains("<textarea"));
    }

    #[test]
    fn unknown_kinds_render_nothing() {
        let json = r#"{
            "clientId": "1f0e94d2-58a1-4b65-8c3e-6a315f0a2bfb",
            "type": "custom/poll",
            "attributes": {"question": "Who wins?"}
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let html = view_html(block, RenderMode::Publish);
        assert!(!html.contains("Who wins?"));
    }
}
