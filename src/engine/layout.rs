//! Persisted card-layout interchange format.
//!
//! The persistence collaborator stores and reloads games as ordered
//! `{suit, rank, face_up}` lists per pile: stock, waste, the four
//! foundations, the seven tableau columns. This module produces and
//! consumes that shape and offers a compact binary codec on top of the
//! serde representation.
//!
//! Decoding foreign data is fallible by design: malformed bytes or a
//! layout that is not a permutation of the 52-card set come back as
//! `None`, never a panic.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, Rank, Suit};
use crate::stacks::board::Board;
use crate::stacks::stack::{StackId, FOUNDATION_COUNT, TABLEAU_COUNT};

/// One card as persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl From<Card> for CardLayout {
    fn from(card: Card) -> Self {
        CardLayout {
            suit: card.suit(),
            rank: card.rank(),
            face_up: card.is_face_up(),
        }
    }
}

impl From<CardLayout> for Card {
    fn from(layout: CardLayout) -> Self {
        let id = CardId::new(layout.suit, layout.rank);
        if layout.face_up {
            Card::face_up(id)
        } else {
            Card::face_down(id)
        }
    }
}

/// A complete persisted position, piles bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLayout {
    pub stock: Vec<CardLayout>,
    pub waste: Vec<CardLayout>,
    pub foundations: [Vec<CardLayout>; FOUNDATION_COUNT],
    pub tableaus: [Vec<CardLayout>; TABLEAU_COUNT],
}

impl GameLayout {
    /// Capture the current board position.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        let pile = |id: StackId| -> Vec<CardLayout> {
            board
                .stack(id)
                .cards()
                .iter()
                .map(|&c| CardLayout::from(c))
                .collect()
        };

        GameLayout {
            stock: pile(StackId::stock()),
            waste: pile(StackId::waste()),
            foundations: std::array::from_fn(|i| pile(StackId::foundation(i as u8))),
            tableaus: std::array::from_fn(|i| pile(StackId::tableau(i as u8))),
        }
    }

    /// Rebuild a board from this layout.
    ///
    /// Returns `None` unless the layout holds the 52-card set with each
    /// card exactly once.
    #[must_use]
    pub fn to_board(&self) -> Option<Board> {
        let mut board = Board::new();
        let mut seen = [false; crate::core::card::DECK_SIZE as usize];

        let mut fill = |board: &mut Board, id: StackId, cards: &[CardLayout]| -> Option<()> {
            for &layout in cards {
                let card = Card::from(layout);
                let idx = card.id().index() as usize;
                if seen[idx] {
                    return None;
                }
                seen[idx] = true;
                board.place(card, id);
            }
            Some(())
        };

        fill(&mut board, StackId::stock(), &self.stock)?;
        fill(&mut board, StackId::waste(), &self.waste)?;
        for (i, pile) in self.foundations.iter().enumerate() {
            fill(&mut board, StackId::foundation(i as u8), pile)?;
        }
        for (i, pile) in self.tableaus.iter().enumerate() {
            fill(&mut board, StackId::tableau(i as u8), pile)?;
        }

        board.is_full_deck().then_some(board)
    }

    /// Encode to the compact binary form.
    #[must_use]
    pub fn encode(&self) -> Option<Vec<u8>> {
        bincode::serialize(self).ok()
    }

    /// Decode from the compact binary form.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        bincode::deserialize(bytes).ok()
    }
}
