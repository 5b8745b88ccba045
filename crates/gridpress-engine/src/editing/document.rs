//! The ordered block sequence behind one article body.
//!
//! All mutation runs synchronously on the caller's thread; operations are
//! atomic with respect to the sequence and never interleave. Operations
//! addressing an id that no longer exists are silent no-ops (the authoring
//! surface can race user-triggered removal), with one exception: inserting
//! an unregistered kind fails, because no default attributes exist to seed
//! the new instance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blocks::patch::BlockPatch;
use crate::blocks::{Block, BlockId, BlockKind, registry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no registered block type for tag `{0}`")]
    UnregisteredKind(String),
}

/// Direction for [`Document::move_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// An article body: the ordered sequence of blocks.
///
/// Sequence order is the only ordering signal; there is no position field.
/// Serializes transparently as the plain block list (the version counter is
/// an in-memory change-detection aid, not part of the wire format).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
    #[serde(skip)]
    version: u64,
}

/// Two documents are equal when their block sequences are; the version
/// counter is in-memory bookkeeping and does not take part.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Version counter, incremented on every effective mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Read-only lookup by id. No side effects; `None` for unknown ids.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Current position of a block in the sequence.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Create a block of `kind` seeded with its registered defaults and a
    /// fresh id, inserted at `at` (clamped to the sequence bounds) or
    /// appended. No existing block is affected.
    pub fn insert(&mut self, kind: &BlockKind, at: Option<usize>) -> Result<BlockId, EditError> {
        let reg = registry::lookup(kind)
            .ok_or_else(|| EditError::UnregisteredKind(kind.tag().to_string()))?;
        let block = Block::new((reg.defaults)());
        let id = block.id;
        let index = at.unwrap_or(self.blocks.len()).min(self.blocks.len());
        self.blocks.insert(index, block);
        self.version += 1;
        Ok(id)
    }

    /// Shallow-merge a typed patch into the target block's attributes.
    /// Returns `false` (and changes nothing) for an unknown id or a patch of
    /// the wrong kind. Never alters type or position.
    pub fn update(&mut self, id: BlockId, patch: &BlockPatch) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        let applied = patch.apply_to(&mut block.attrs);
        if applied {
            self.version += 1;
        }
        applied
    }

    /// Delete the block, closing the gap in the sequence. Returns `false`
    /// for an unknown id.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks.remove(index);
        self.version += 1;
        true
    }

    /// Swap the block with its immediate neighbor. Moving the first block up
    /// or the last block down is a no-op: no wrap, no error.
    pub fn move_block(&mut self, id: BlockId, direction: Direction) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let neighbor = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.blocks.len() => index + 1,
            _ => return false,
        };
        self.blocks.swap(index, neighbor);
        self.version += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockAttributes;
    use crate::blocks::kinds::HeadingAttrs;
    use crate::blocks::patch::{HeadingPatch, ParagraphPatch};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_seeds_registered_defaults() {
        let mut doc = Document::new();
        let id = doc.insert(&BlockKind::Heading, None).unwrap();
        let block = doc.get(id).unwrap();
        assert_eq!(
            block.attrs,
            BlockAttributes::Heading(HeadingAttrs::default())
        );
    }

    #[test]
    fn insert_of_unregistered_kind_fails() {
        let mut doc = Document::new();
        let kind = BlockKind::Unknown("custom/poll".to_string());
        assert_eq!(
            doc.insert(&kind, None),
            Err(EditError::UnregisteredKind("custom/poll".to_string()))
        );
        assert!(doc.is_empty());
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn insert_index_is_clamped() {
        let mut doc = Document::new();
        let first = doc.insert(&BlockKind::Paragraph, None).unwrap();
        let far = doc.insert(&BlockKind::Heading, Some(99)).unwrap();
        let front = doc.insert(&BlockKind::Quote, Some(0)).unwrap();
        let order: Vec<BlockId> = doc.blocks().iter().map(|b| b.id).collect();
        assert_eq!(order, vec![front, first, far]);
    }

    #[test]
    fn update_merges_and_reports_no_ops() {
        let mut doc = Document::new();
        let id = doc.insert(&BlockKind::Heading, None).unwrap();

        let patch = BlockPatch::Heading(HeadingPatch {
            content: Some("HELLO".to_string()),
            ..Default::default()
        });
        assert!(doc.update(id, &patch));

        // unknown id and mismatched patch both no-op
        assert!(!doc.update(BlockId::new(), &patch));
        let wrong = BlockPatch::Paragraph(ParagraphPatch::default());
        assert!(!doc.update(id, &wrong));

        let BlockAttributes::Heading(attrs) = &doc.get(id).unwrap().attrs else {
            panic!("kind changed");
        };
        assert_eq!(attrs.content, "HELLO");
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut doc = Document::new();
        let a = doc.insert(&BlockKind::Paragraph, None).unwrap();
        let b = doc.insert(&BlockKind::Heading, None).unwrap();
        let c = doc.insert(&BlockKind::Quote, None).unwrap();

        assert!(doc.remove(b));
        assert!(!doc.remove(b));
        let order: Vec<BlockId> = doc.blocks().iter().map(|bl| bl.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn move_at_boundaries_is_a_no_op() {
        let mut doc = Document::new();
        let a = doc.insert(&BlockKind::Paragraph, None).unwrap();
        let b = doc.insert(&BlockKind::Heading, None).unwrap();
        let before = doc.clone();

        assert!(!doc.move_block(a, Direction::Up));
        assert!(!doc.move_block(b, Direction::Down));
        assert_eq!(doc, before);

        assert!(doc.move_block(b, Direction::Up));
        let order: Vec<BlockId> = doc.blocks().iter().map(|bl| bl.id).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn version_increments_only_on_effective_mutation() {
        let mut doc = Document::new();
        let id = doc.insert(&BlockKind::Paragraph, None).unwrap();
        let v = doc.version();
        doc.move_block(id, Direction::Up);
        doc.remove(BlockId::new());
        assert_eq!(doc.version(), v);
        doc.remove(id);
        assert_eq!(doc.version(), v + 1);
    }
}
