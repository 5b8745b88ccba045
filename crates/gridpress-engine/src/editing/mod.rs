//! Document model and mutation contract.
//!
//! [`document::Document`] owns the ordered block sequence and the direct
//! operations (insert/update/remove/move); [`commands::Cmd`] is the explicit
//! command set the authoring surface speaks. Everything here is synchronous
//! and single-threaded: one authoring session exclusively owns its document,
//! so commands can never interleave and no locking exists.

pub mod commands;
pub mod document;

pub use commands::{Cmd, Patch};
pub use document::{Direction, Document, EditError};
