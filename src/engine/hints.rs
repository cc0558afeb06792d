//! Hint enumeration, best-move ranking, and block detection.
//!
//! Everything here is a pure read of the board. Enumeration order is
//! fixed and documented because tie-breaking depends on it: given the
//! same position, `find_hints` and `suggest_best_move` always return the
//! same answer.
//!
//! Enumeration order:
//! 1. top cards accepted by a foundation, piles in board order,
//!    foundations 0..4 per card;
//! 2. the waste top onto each accepting tableau, columns 0..7;
//! 3. tableau tops onto other tableaus, source-major;
//! 4. face-down tableau tops eligible to flip.

use serde::{Deserialize, Serialize};

use crate::core::card::{CardId, Rank};
use crate::stacks::board::Board;
use crate::stacks::stack::{StackId, StackKind};

/// A single playable suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// Move a pile's top card onto a foundation.
    ToFoundation {
        card: CardId,
        from: StackId,
        foundation: StackId,
    },

    /// Move the waste top onto a tableau column.
    WasteToTableau { card: CardId, to: StackId },

    /// Move a tableau top onto another tableau column.
    TableauToTableau {
        card: CardId,
        from: StackId,
        to: StackId,
    },

    /// Turn a face-down tableau top face-up.
    Flip { card: CardId, stack: StackId },
}

impl Hint {
    /// The card this hint is about.
    #[must_use]
    pub fn card(&self) -> CardId {
        match *self {
            Hint::ToFoundation { card, .. }
            | Hint::WasteToTableau { card, .. }
            | Hint::TableauToTableau { card, .. }
            | Hint::Flip { card, .. } => card,
        }
    }
}

/// The single move the engine would play next, classified.
///
/// `DrawStock` and `RecycleWaste` appear only when no placement or flip
/// hint exists; a `None` from [`suggest_best_move`] means truly blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestMove {
    /// A move onto a foundation.
    Foundation(Hint),
    /// A face-down top card to turn over.
    Flip(Hint),
    /// A move into an empty tableau column.
    EmptyColumn(Hint),
    /// A tableau move that exposes a face-down card underneath.
    Unblocking(Hint),
    /// Any other tableau move.
    Tableau(Hint),
    /// Nothing to place: draw from the stock.
    DrawStock,
    /// Nothing to place and the stock is empty: recycle the waste.
    RecycleWaste,
}

impl BestMove {
    /// The underlying hint, when this is a placement or flip.
    #[must_use]
    pub fn hint(&self) -> Option<&Hint> {
        match self {
            BestMove::Foundation(h)
            | BestMove::Flip(h)
            | BestMove::EmptyColumn(h)
            | BestMove::Unblocking(h)
            | BestMove::Tableau(h) => Some(h),
            BestMove::DrawStock | BestMove::RecycleWaste => None,
        }
    }
}

/// Enumerate every hint in the fixed order above.
#[must_use]
pub fn find_hints(board: &Board) -> Vec<Hint> {
    let mut hints = Vec::new();

    // 1. Foundation destinations for any face-up top card.
    for stack in board.stacks() {
        let Some(&top) = stack.top_card() else { continue };
        if !top.is_face_up() {
            continue;
        }
        for foundation in board.foundations() {
            if foundation.id() != stack.id() && foundation.can_accept(top) {
                hints.push(Hint::ToFoundation {
                    card: top.id(),
                    from: stack.id(),
                    foundation: foundation.id(),
                });
            }
        }
    }

    // 2. Waste top to tableau.
    if let Some(&waste_top) = board.stack(StackId::waste()).top_card() {
        for tableau in board.tableaus() {
            if tableau.can_accept(waste_top) {
                hints.push(Hint::WasteToTableau {
                    card: waste_top.id(),
                    to: tableau.id(),
                });
            }
        }
    }

    // 3. Tableau top to other tableau.
    for source in board.tableaus() {
        let Some(&top) = source.top_card() else { continue };
        if !top.is_face_up() {
            continue;
        }
        for dest in board.tableaus() {
            if dest.id() != source.id() && dest.can_accept(top) {
                hints.push(Hint::TableauToTableau {
                    card: top.id(),
                    from: source.id(),
                    to: dest.id(),
                });
            }
        }
    }

    // 4. Face-down tableau tops.
    for tableau in board.tableaus() {
        if let Some(&top) = tableau.top_card() {
            if !top.is_face_up() {
                hints.push(Hint::Flip {
                    card: top.id(),
                    stack: tableau.id(),
                });
            }
        }
    }

    hints
}

/// Face-down tableau top cards eligible to flip.
#[must_use]
pub fn find_cards_to_flip(board: &Board) -> Vec<(CardId, StackId)> {
    board
        .tableaus()
        .filter_map(|t| {
            let top = t.top_card()?;
            (!top.is_face_up()).then(|| (top.id(), t.id()))
        })
        .collect()
}

/// Every (card, source, foundation) triple playable right now.
///
/// One sweep's worth of auto-complete work: face-up top cards of
/// non-foundation piles that some foundation accepts, in board order.
#[must_use]
pub fn find_foundation_moves(board: &Board) -> Vec<(CardId, StackId, StackId)> {
    let mut moves = Vec::new();
    for stack in board.stacks() {
        if stack.kind() == StackKind::Foundation {
            continue;
        }
        let Some(&top) = stack.top_card() else { continue };
        if !top.is_face_up() {
            continue;
        }
        for foundation in board.foundations() {
            if foundation.can_accept(top) {
                moves.push((top.id(), stack.id(), foundation.id()));
            }
        }
    }
    moves
}

/// Pick the single best move, or `None` when truly blocked.
///
/// Priority: foundation (Aces and Twos first) > flips > moves into an
/// empty column > tableau moves exposing a face-down card > any other
/// tableau move. With no hints at all, drawing beats recycling beats
/// giving up. Ties fall back to enumeration order.
#[must_use]
pub fn suggest_best_move(board: &Board) -> Option<BestMove> {
    let hints = find_hints(board);

    if hints.is_empty() {
        if !board.stack(StackId::stock()).is_empty() {
            return Some(BestMove::DrawStock);
        }
        if !board.stack(StackId::waste()).is_empty() {
            return Some(BestMove::RecycleWaste);
        }
        return None;
    }

    // 1. Foundation moves; low cards clear blockers, so they go first.
    let foundation_hints = hints
        .iter()
        .filter(|h| matches!(h, Hint::ToFoundation { .. }));
    if let Some(&hint) = foundation_hints
        .clone()
        .find(|h| h.card().rank() <= Rank::TWO)
        .or_else(|| foundation_hints.clone().next())
    {
        return Some(BestMove::Foundation(hint));
    }

    // 2. Flips drive progress by unblocking face-down cards.
    if let Some(&hint) = hints.iter().find(|h| matches!(h, Hint::Flip { .. })) {
        return Some(BestMove::Flip(hint));
    }

    // 3. Moves into an empty column free up King placement.
    if let Some(&hint) = hints.iter().find(|h| match h {
        Hint::WasteToTableau { to, .. } | Hint::TableauToTableau { to, .. } => {
            board.stack(*to).is_empty()
        }
        _ => false,
    }) {
        return Some(BestMove::EmptyColumn(hint));
    }

    // 4. Tableau moves whose source exposes a face-down card.
    if let Some(&hint) = hints.iter().find(|h| match h {
        Hint::TableauToTableau { card, from, .. } => exposes_face_down(board, *card, *from),
        _ => false,
    }) {
        return Some(BestMove::Unblocking(hint));
    }

    // 5. Anything else that lands on a tableau.
    if let Some(&hint) = hints.iter().find(|h| {
        matches!(
            h,
            Hint::WasteToTableau { .. } | Hint::TableauToTableau { .. }
        )
    }) {
        return Some(BestMove::Tableau(hint));
    }

    // Only flips remain, already handled; unreachable in practice but
    // the enumeration above is the source of truth.
    None
}

/// Would moving `card` (and the run above it) off `from` leave a
/// face-down card on top?
fn exposes_face_down(board: &Board, card: CardId, from: StackId) -> bool {
    let stack = board.stack(from);
    let Some(index) = stack.index_of(card) else {
        return false;
    };
    index > 0 && !stack.cards()[index - 1].is_face_up()
}

/// True iff there are no hints and no cards left to draw or recycle.
///
/// Read-only: the engine reports a block and leaves resolution to the
/// controller.
#[must_use]
pub fn is_game_blocked(board: &Board) -> bool {
    board.stack(StackId::stock()).is_empty()
        && board.stack(StackId::waste()).is_empty()
        && find_hints(board).is_empty()
}
