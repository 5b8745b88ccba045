//! Command layer over the document operations.
//!
//! The authoring surface mutates the document only through [`Cmd`] values
//! handed to [`Document::apply`], which reports what happened as a
//! [`Patch`]. This keeps the mutation contract an explicit parameter of the
//! UI rather than ambient state.

use crate::blocks::patch::BlockPatch;
use crate::blocks::{BlockId, BlockKind};

use super::document::{Direction, Document, EditError};

/// One authoring operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    InsertBlock {
        kind: BlockKind,
        /// Target index, clamped to the sequence bounds; `None` appends.
        at: Option<usize>,
    },
    UpdateBlock {
        id: BlockId,
        patch: BlockPatch,
    },
    RemoveBlock {
        id: BlockId,
    },
    MoveBlock {
        id: BlockId,
        direction: Direction,
    },
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// The block the command affected; `None` when the command was a silent
    /// no-op (unknown id, boundary move, mismatched patch).
    pub touched: Option<BlockId>,
    /// Document version after the command.
    pub version: u64,
}

impl Document {
    /// Apply one command. Only [`Cmd::InsertBlock`] of an unregistered kind
    /// is an error; every other miss degrades to a no-op `Patch`.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let touched = match cmd {
            Cmd::InsertBlock { kind, at } => Some(self.insert(&kind, at)?),
            Cmd::UpdateBlock { id, patch } => self.update(id, &patch).then_some(id),
            Cmd::RemoveBlock { id } => self.remove(id).then_some(id),
            Cmd::MoveBlock { id, direction } => self.move_block(id, direction).then_some(id),
        };
        Ok(Patch {
            touched,
            version: self.version(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_reports_touched_block() {
        let mut doc = Document::new();
        let patch = doc
            .apply(Cmd::InsertBlock {
                kind: BlockKind::Paragraph,
                at: None,
            })
            .unwrap();
        let id = patch.touched.expect("insert touches the new block");
        assert_eq!(doc.index_of(id), Some(0));

        let no_op = doc
            .apply(Cmd::MoveBlock {
                id,
                direction: Direction::Up,
            })
            .unwrap();
        assert_eq!(no_op.touched, None);
        assert_eq!(no_op.version, patch.version);
    }

    #[test]
    fn apply_surfaces_unregistered_insert() {
        let mut doc = Document::new();
        let err = doc
            .apply(Cmd::InsertBlock {
                kind: BlockKind::Unknown("f1/pit-wall".to_string()),
                at: None,
            })
            .unwrap_err();
        assert_eq!(err, EditError::UnregisteredKind("f1/pit-wall".to_string()));
    }
}
