//! Legality checks for single-card and run moves.
//!
//! Validation is pure: it reads the board and the `RuleContext` the
//! controller passes in, and returns a plain bool. Illegal requests are
//! ordinary outcomes here, not errors - the engine's no-throw rule for
//! rule violations starts at this layer.

use crate::core::card::CardId;
use crate::core::config::RuleContext;
use crate::stacks::board::Board;
use crate::stacks::stack::{StackId, StackKind};

/// May `card` move from `from` onto `to` right now?
///
/// Fails when the game is not in the playing phase, when the card is not
/// actually in `from`, when it is face-down, or when the destination is
/// not a direct move target (waste and stock reject all direct moves).
/// Otherwise the destination's kind-specific acceptance rule decides.
#[must_use]
pub fn validate_move(
    board: &Board,
    ctx: &RuleContext,
    card: CardId,
    from: StackId,
    to: StackId,
) -> bool {
    if !ctx.phase.is_playing() {
        return false;
    }
    if board.location_of(card) != Some(from) {
        return false;
    }
    let Some(moving) = board.card(card) else {
        return false;
    };
    if !moving.is_face_up() {
        return false;
    }
    match to.kind() {
        StackKind::Foundation | StackKind::Tableau => board.stack(to).can_accept(moving),
        StackKind::Waste | StackKind::Stock => false,
    }
}

/// May the run `cards` move from `from` onto `to` as a block?
///
/// Legal only from a tableau column, only when `cards` is exactly a
/// contiguous face-up alternating-descending tail segment of `from`, and
/// only when the run's first card individually satisfies
/// [`validate_move`] against `to`.
#[must_use]
pub fn validate_run_move(
    board: &Board,
    ctx: &RuleContext,
    cards: &[CardId],
    from: StackId,
    to: StackId,
) -> bool {
    if cards.is_empty() || from.kind() != StackKind::Tableau {
        return false;
    }

    let stack = board.stack(from);
    let Some(start) = stack.index_of(cards[0]) else {
        return false;
    };

    // The claimed run must match the pile's own maximal run at that
    // position, card for card.
    let run = stack.sequence_from(start);
    if run.len() < cards.len() {
        return false;
    }
    if !run
        .iter()
        .zip(cards)
        .all(|(on_pile, claimed)| on_pile.id() == *claimed)
    {
        return false;
    }
    if !run.iter().take(cards.len()).all(|c| c.is_face_up()) {
        return false;
    }

    validate_move(board, ctx, cards[0], from, to)
}
