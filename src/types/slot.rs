//! Export records handed to an external layout/rendering layer.
//!
//! ## SSZ Serialization
//!
//! [`SlotRecord`] derives `SimpleSerialize` from ssz_rs so the export of a
//! tree has one canonical byte encoding. In SSZ:
//! - Basic types (u64, u8, bool): direct little-endian encoding
//! - Fixed-size containers: concatenated fields
//!
//! The state root of a tree is the SHA-256 of these encodings in export order.

use ssz_rs::prelude::*;

use crate::types::Color;

/// Read-only view of one materialized node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView {
    pub key: i64,
    pub color: Color,
    /// Distance from the root (root = 0)
    pub depth: usize,
    pub has_left: bool,
    pub has_right: bool,
}

/// One position in the breadth-first export.
///
/// Every absent child is reported as `Nil`, so a renderer can place
/// fixed-size leaf placeholders without re-deriving the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSlot {
    Node(NodeView),
    Nil { depth: usize },
}

impl ExportSlot {
    /// Depth of this slot below the root
    pub fn depth(&self) -> usize {
        match self {
            ExportSlot::Node(view) => view.depth,
            ExportSlot::Nil { depth } => *depth,
        }
    }

    /// NIL sentinels are always black
    pub fn color(&self) -> Color {
        match self {
            ExportSlot::Node(view) => view.color,
            ExportSlot::Nil { .. } => Color::Black,
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, ExportSlot::Nil { .. })
    }

    /// Key of a materialized node, `None` for a sentinel
    pub fn key(&self) -> Option<i64> {
        match self {
            ExportSlot::Node(view) => Some(view.key),
            ExportSlot::Nil { .. } => None,
        }
    }
}

/// Fixed-size SSZ container for one export slot.
///
/// ## SSZ Layout
///
/// - Total size: 20 bytes (8+1+8+1+1+1)
/// - `key_raw` is the two's-complement bit pattern of the `i64` key
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SlotRecord {
    /// Key bits (0 for NIL)
    pub key_raw: u64,

    /// Color as u8 (0=Red, 1=Black)
    pub color_raw: u8,

    /// Depth below the root
    pub depth: u64,

    pub has_left: bool,

    pub has_right: bool,

    pub is_nil: bool,
}

impl From<&ExportSlot> for SlotRecord {
    fn from(slot: &ExportSlot) -> Self {
        match slot {
            ExportSlot::Node(view) => Self {
                key_raw: view.key as u64,
                color_raw: view.color.to_u8(),
                depth: view.depth as u64,
                has_left: view.has_left,
                has_right: view.has_right,
                is_nil: false,
            },
            ExportSlot::Nil { depth } => Self {
                key_raw: 0,
                color_raw: Color::Black.to_u8(),
                depth: *depth as u64,
                has_left: false,
                has_right: false,
                is_nil: true,
            },
        }
    }
}

impl SlotRecord {
    /// Recover the signed key
    pub fn key(&self) -> i64 {
        self.key_raw as i64
    }

    /// Get the color
    pub fn color(&self) -> Color {
        Color::from_u8(self.color_raw).unwrap_or(Color::Black)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
