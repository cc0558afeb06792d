//! Move records: what happened, in which order, and how to take it back.
//!
//! Every successful mutation produces one `MoveRecord`. The variant set
//! is a closed union - there is no string tag to mistype and no variant
//! outside these five. Each record carries the pre-move board snapshot,
//! which is the whole undo story: restoring the snapshot reverses the
//! move exactly, run moves and stock recycles included.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::stacks::board::BoardSnapshot;
use crate::stacks::stack::StackId;

/// The mutation a record describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// One card moved between piles.
    CardMove {
        card: CardId,
        from: StackId,
        to: StackId,
    },

    /// A run of cards moved between tableau columns as a block.
    ///
    /// Runs are at most 13 cards, so they stay inline.
    MultiCardMove {
        cards: SmallVec<[CardId; 13]>,
        from: StackId,
        to: StackId,
    },

    /// A draw: cards moved from stock top to waste, now face-up.
    /// In drawn order - the last entry is the new waste top.
    StockToWaste { cards: SmallVec<[CardId; 3]> },

    /// A recycle: the whole waste returned to the stock face-down.
    /// In the stock's restored bottom-to-top order.
    WasteToStock { cards: Vec<CardId> },

    /// A face-down tableau top turned face-up.
    CardFlip { card: CardId, stack: StackId },
}

/// One entry in the move history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Monotonically increasing within a game; not reused after undo.
    pub sequence: u32,

    /// What happened.
    pub kind: MoveKind,

    /// The board position immediately before the move.
    pub before: BoardSnapshot,
}

impl MoveRecord {
    /// Create a record.
    #[must_use]
    pub fn new(sequence: u32, kind: MoveKind, before: BoardSnapshot) -> Self {
        Self {
            sequence,
            kind,
            before,
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveKind::CardMove { card, from, to } => {
                write!(f, "move {card} {from} -> {to}")
            }
            MoveKind::MultiCardMove { cards, from, to } => {
                write!(f, "move {} cards {from} -> {to}", cards.len())
            }
            MoveKind::StockToWaste { cards } => {
                write!(f, "draw {} from stock", cards.len())
            }
            MoveKind::WasteToStock { cards } => {
                write!(f, "recycle {} to stock", cards.len())
            }
            MoveKind::CardFlip { card, stack } => {
                write!(f, "flip {card} on {stack}")
            }
        }
    }
}
