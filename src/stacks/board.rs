//! The board: all thirteen piles plus the card-location index.
//!
//! The board owns the pile collection exclusively. Every movement goes
//! through the primitives here (`transfer_card`, `transfer_run`,
//! `flip_top`, the draw helpers), which keep the location index and the
//! one-pile-per-card invariant in lockstep with the pile contents.
//!
//! The location index is the only back-reference from a card to its
//! pile: lookup only, never ownership.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, DECK_SIZE};
use super::stack::{Stack, StackId, StackKind, STACK_COUNT, TABLEAU_COUNT};

/// A captured board position.
///
/// Persistent vectors make capture structural sharing rather than a deep
/// copy; move records hold one of these per move for undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Pile contents in board order (stock, waste, foundations, tableaus).
    piles: Vector<Vector<Card>>,
}

/// All thirteen piles and the card-location index.
#[derive(Clone, Debug)]
pub struct Board {
    stacks: Vec<Stack>,
    /// Card -> owning pile. Lookup only; the piles own placement.
    locations: FxHashMap<CardId, StackId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no cards dealt).
    #[must_use]
    pub fn new() -> Self {
        Board {
            stacks: StackId::all().iter().map(|&id| Stack::new(id)).collect(),
            locations: FxHashMap::default(),
        }
    }

    /// Deal a new game from a shuffled 52-card deck.
    ///
    /// Cards are taken from the front of `deck`. Tableau columns 0..7
    /// receive 1..=7 cards each, only the last card of each column
    /// face-up; the remaining 24 cards go to the stock face-down, the
    /// last of them on top. Any previous position is discarded.
    ///
    /// Panics if `deck` is not a permutation of the 52-card set.
    pub fn deal(&mut self, deck: &[Card]) {
        assert_eq!(deck.len(), DECK_SIZE as usize, "deal requires 52 cards");
        let mut seen = [false; DECK_SIZE as usize];
        for card in deck {
            let idx = card.id().index() as usize;
            assert!(!seen[idx], "duplicate card in deck: {}", card.id());
            seen[idx] = true;
        }

        for stack in &mut self.stacks {
            *stack = Stack::new(stack.id());
        }
        self.locations.clear();

        let mut next = deck.iter().map(|c| c.id());
        for col in 0..TABLEAU_COUNT as u8 {
            let id = StackId::tableau(col);
            for depth in 0..=col {
                let card_id = next.next().expect("deck exhausted during deal");
                let face_up = depth == col;
                let card = if face_up {
                    Card::face_up(card_id)
                } else {
                    Card::face_down(card_id)
                };
                self.place(card, id);
            }
        }
        for card_id in next {
            self.place(Card::face_down(card_id), StackId::stock());
        }
    }

    // === Pile access ===

    /// The pile with the given identity.
    #[must_use]
    pub fn stack(&self, id: StackId) -> &Stack {
        &self.stacks[id.ordinal()]
    }

    pub(crate) fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        &mut self.stacks[id.ordinal()]
    }

    /// All piles in board order (stock, waste, foundations, tableaus).
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// The four foundation piles in slot order.
    pub fn foundations(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(|s| s.kind() == StackKind::Foundation)
    }

    /// The seven tableau columns in slot order.
    pub fn tableaus(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(|s| s.kind() == StackKind::Tableau)
    }

    // === Card lookup ===

    /// The pile currently holding `card`, if any card is dealt.
    #[must_use]
    pub fn location_of(&self, card: CardId) -> Option<StackId> {
        self.locations.get(&card).copied()
    }

    /// The card with the given identity, with its current face state.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<Card> {
        let stack = self.stack(self.location_of(id)?);
        let index = stack.index_of(id)?;
        Some(stack.cards()[index])
    }

    /// Total cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Cards currently on foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations().map(Stack::len).sum()
    }

    /// True when the board holds the full 52-card set, each card once.
    #[must_use]
    pub fn is_full_deck(&self) -> bool {
        if self.locations.len() != DECK_SIZE as usize {
            return false;
        }
        let mut seen = [false; DECK_SIZE as usize];
        for stack in &self.stacks {
            for card in stack.cards() {
                let idx = card.id().index() as usize;
                if seen[idx] {
                    return false;
                }
                seen[idx] = true;
            }
        }
        seen.iter().all(|&b| b)
    }

    // === Movement primitives ===

    /// Add a card that is not yet on the board.
    ///
    /// Panics if the card is already placed somewhere.
    pub(crate) fn place(&mut self, card: Card, to: StackId) {
        let previous = self.locations.insert(card.id(), to);
        assert!(
            previous.is_none(),
            "card {} already on the board",
            card.id()
        );
        self.stack_mut(to).push(card);
    }

    /// Move one card between piles, preserving its face state.
    ///
    /// Panics if the card is not in `from` - rule-level checks happen
    /// before this point, so a miss is index drift.
    pub(crate) fn transfer_card(&mut self, card: CardId, from: StackId, to: StackId) {
        let moved = self
            .stack_mut(from)
            .remove(card)
            .unwrap_or_else(|| panic!("card {card} not in {from}"));
        self.locations.insert(card, to);
        self.stack_mut(to).push(moved);
    }

    /// Move the tail of `from` starting at `start_index` onto `to`,
    /// preserving order and face states.
    pub(crate) fn transfer_run(&mut self, from: StackId, start_index: usize, to: StackId) {
        let run = self.stack_mut(from).split_off(start_index);
        for card in run {
            self.locations.insert(card.id(), to);
            self.stack_mut(to).push(card);
        }
    }

    /// Remove and return the top card of a pile.
    pub(crate) fn pop_top(&mut self, from: StackId) -> Option<Card> {
        let card = self.stack_mut(from).pop_top()?;
        self.locations.remove(&card.id());
        Some(card)
    }

    /// Set the face state of a pile's top card.
    ///
    /// Returns the card identity, or `None` on an empty pile.
    pub(crate) fn flip_top(&mut self, stack: StackId, face_up: bool) -> Option<CardId> {
        let pile = self.stack_mut(stack);
        let index = pile.len().checked_sub(1)?;
        pile.set_face_up(index, face_up);
        Some(pile.cards()[index].id())
    }

    // === Snapshots ===

    /// Capture the current position.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            piles: self
                .stacks
                .iter()
                .map(|s| s.cards().iter().copied().collect())
                .collect(),
        }
    }

    /// Restore a previously captured position.
    ///
    /// Panics if the snapshot does not have one pile per board pile.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        assert_eq!(
            snapshot.piles.len(),
            STACK_COUNT,
            "snapshot pile count mismatch"
        );
        self.locations.clear();
        for (ordinal, pile) in snapshot.piles.iter().enumerate() {
            let id = StackId::all()[ordinal];
            let stack = &mut self.stacks[ordinal];
            *stack = Stack::new(id);
            for card in pile {
                stack.push(*card);
                self.locations.insert(card.id(), id);
            }
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stack in &self.stacks {
            writeln!(f, "{stack}")?;
        }
        Ok(())
    }
}
