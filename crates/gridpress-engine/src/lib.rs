pub mod blocks;
pub mod editing;
pub mod io;
pub mod layout;
pub mod models;

// Re-export key types for easier usage
pub use blocks::{Block, BlockAttributes, BlockId, BlockKind, patch::BlockPatch, registry};
pub use editing::{Cmd, Direction, Document, EditError, Patch};
pub use layout::{AlignDirective, LayoutProfile, ResolvedLayout, WidthClass, resolve};
pub use models::{Article, ReferenceLookup, ReferenceStore};
