//! Integration tests for the editing contract: ordering invariants, merge
//! semantics, and the full authoring walkthrough.

use pretty_assertions::assert_eq;
use std::collections::HashSet;

use gridpress_engine::blocks::kinds::TextAlign;
use gridpress_engine::blocks::patch::{BlockPatch, HeadingPatch};
use gridpress_engine::layout::{Alignment, BlockSize};
use gridpress_engine::{BlockAttributes, BlockId, BlockKind, Cmd, Direction, Document};

#[test]
fn authoring_walkthrough() {
    let mut doc = Document::new();

    // empty document + heading insert -> one block with the heading defaults
    let heading = doc.insert(&BlockKind::Heading, None).unwrap();
    assert_eq!(doc.len(), 1);
    let BlockAttributes::Heading(attrs) = &doc.get(heading).unwrap().attrs else {
        panic!("expected heading attributes");
    };
    assert_eq!(attrs.content, "");
    assert_eq!(attrs.level, 2);
    assert_eq!(attrs.text_align, TextAlign::Left);
    assert_eq!(attrs.block_size, Some(BlockSize::Full));
    assert_eq!(attrs.align, Some(Alignment::Center));

    // update merges into stored attributes
    let patch = BlockPatch::Heading(HeadingPatch {
        content: Some("HELLO".to_string()),
        ..Default::default()
    });
    assert!(doc.update(heading, &patch));

    // insert at index 0 shifts the heading down
    let paragraph = doc.insert(&BlockKind::Paragraph, Some(0)).unwrap();
    assert_eq!(doc.index_of(paragraph), Some(0));
    assert_eq!(doc.index_of(heading), Some(1));

    // moving the heading up swaps them back
    assert!(doc.move_block(heading, Direction::Up));
    assert_eq!(doc.index_of(heading), Some(0));
    assert_eq!(doc.index_of(paragraph), Some(1));

    // removing the paragraph leaves exactly the edited heading
    assert!(doc.remove(paragraph));
    assert_eq!(doc.len(), 1);
    let BlockAttributes::Heading(attrs) = &doc.get(heading).unwrap().attrs else {
        panic!("expected heading attributes");
    };
    assert_eq!(attrs.content, "HELLO");
}

#[test]
fn order_invariants_hold_across_mixed_operations() {
    let mut doc = Document::new();
    let mut inserted: Vec<BlockId> = Vec::new();
    let mut removes = 0usize;

    for kind in [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::Quote,
        BlockKind::DriverCard,
        BlockKind::Table,
    ] {
        inserted.push(doc.insert(&kind, None).unwrap());
    }

    doc.move_block(inserted[3], Direction::Up);
    doc.move_block(inserted[0], Direction::Down);
    if doc.remove(inserted[2]) {
        removes += 1;
    }
    inserted.push(doc.insert(&BlockKind::Slider, Some(1)).unwrap());
    doc.move_block(inserted[5], Direction::Down); // boundary, no-op

    assert_eq!(doc.len(), inserted.len() - removes);

    let ids: Vec<BlockId> = doc.blocks().iter().map(|b| b.id).collect();
    let unique: HashSet<BlockId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate block ids in document");
    for id in &ids {
        assert!(inserted.contains(id), "block {id} appeared from nowhere");
    }
}

#[test]
fn every_registered_kind_inserts_with_its_defaults() {
    let mut doc = Document::new();
    for reg in gridpress_engine::registry::all() {
        let id = doc.insert(&reg.kind, None).unwrap();
        let block = doc.get(id).unwrap();
        assert_eq!(block.kind(), reg.kind);
        assert_eq!(block.attrs, (reg.defaults)());
    }
    assert_eq!(doc.len(), gridpress_engine::registry::all().len());
}

#[test]
fn command_layer_matches_direct_operations() {
    let mut direct = Document::new();
    let mut via_cmd = Document::new();

    let a = direct.insert(&BlockKind::Quote, None).unwrap();
    direct.move_block(a, Direction::Up);

    let patch = via_cmd
        .apply(Cmd::InsertBlock {
            kind: BlockKind::Quote,
            at: None,
        })
        .unwrap();
    let b = patch.touched.unwrap();
    via_cmd
        .apply(Cmd::MoveBlock {
            id: b,
            direction: Direction::Up,
        })
        .unwrap();

    assert_eq!(direct.get(a).unwrap().attrs, via_cmd.get(b).unwrap().attrs);
    assert_eq!(direct.len(), via_cmd.len());
}
