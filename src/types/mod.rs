//! Core data types for the red-black tree
//!
//! ## Types
//!
//! - [`Color`]: Red or Black
//! - [`Dir`]: Left or Right child slot
//! - [`NodeHandle`]: Tree-scoped, generation-checked node reference
//! - [`ExportSlot`] / [`NodeView`]: Breadth-first export items
//! - [`SlotRecord`]: SSZ encoding of one export slot
//! - [`TreeError`] / [`InvariantError`]: Error enums

mod color;
mod error;
mod handle;
mod slot;

// Re-export all types at module level
pub use color::{Color, Dir};
pub use error::{InvariantError, TreeError};
pub use handle::NodeHandle;
pub use slot::{ExportSlot, NodeView, SlotRecord};
