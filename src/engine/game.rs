//! The engine command surface.
//!
//! `GameEngine` owns the board and the move history and exposes the
//! commands a controller issues: deal, move, run move, draw/recycle,
//! hint, auto-complete, flip, undo, and the blocked/complete queries.
//! Every command runs to completion synchronously; every failure is a
//! `false`/`None`/empty result, never a panic.
//!
//! Single-card moves only lift a pile's top card and run moves only lift
//! a tail that reaches the top - anything else would leave cards
//! floating. Both record a move and capture the pre-move position, so
//! undo is a snapshot restore.

use smallvec::SmallVec;

use crate::core::card::{shuffled_deck, Card, CardId};
use crate::core::config::{EngineConfig, RuleContext};
use crate::moves::history::MoveHistory;
use crate::moves::record::{MoveKind, MoveRecord};
use crate::rules::validator::{validate_move, validate_run_move};
use crate::stacks::board::Board;
use crate::stacks::stack::{StackId, StackKind};
use super::hints::{self, BestMove, Hint};
use super::layout::GameLayout;

/// What a draw command did.
///
/// A closed union so callers can tell a draw from a recycle without
/// inspecting pile sizes: `Drawn` moved cards stock to waste, `Recycled`
/// returned the whole waste to the stock, `Empty` touched nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cards drawn to the waste, in drawn order (last entry on top).
    Drawn(Vec<CardId>),
    /// Waste recycled into the stock, in restored stock order.
    Recycled(Vec<CardId>),
    /// Both piles empty, or the game is not in the playing phase.
    Empty,
}

impl DrawOutcome {
    /// The cards that moved, in either direction.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        match self {
            DrawOutcome::Drawn(cards) | DrawOutcome::Recycled(cards) => cards,
            DrawOutcome::Empty => &[],
        }
    }

    /// The cards drawn to the waste; empty for a recycle or a no-op.
    #[must_use]
    pub fn drawn(&self) -> &[CardId] {
        match self {
            DrawOutcome::Drawn(cards) => cards,
            _ => &[],
        }
    }

    /// Did nothing move?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, DrawOutcome::Empty)
    }
}

/// The rule engine: board, history, configuration.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    history: MoveHistory,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameEngine {
    /// Create an engine with no cards dealt.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            history: MoveHistory::new(config.history_capacity),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read access to the board for collaborators (rendering, game-info).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move history.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    // === Dealing ===

    /// Deal a new game from an externally shuffled 52-card deck.
    ///
    /// Clears any previous position and the move history. Panics if the
    /// deck is not a permutation of the 52-card set.
    pub fn deal(&mut self, deck: &[Card]) {
        self.board.deal(deck);
        self.history.clear();
    }

    /// Shuffle a fresh deck with the given seed and deal it.
    pub fn new_game(&mut self, seed: u64) {
        self.deal(&shuffled_deck(seed));
    }

    // === Moves ===

    /// Move a single card onto a foundation or tableau.
    ///
    /// The card must be the top of `from`; cards buried under a run move
    /// with [`GameEngine::move_run`]. Returns whether the move happened.
    pub fn move_card(&mut self, ctx: &RuleContext, card: CardId, from: StackId, to: StackId) -> bool {
        if !validate_move(&self.board, ctx, card, from, to) {
            return false;
        }
        if self.board.stack(from).top_card().map(|c| c.id()) != Some(card) {
            return false;
        }

        let before = self.board.snapshot();
        self.board.transfer_card(card, from, to);
        self.history
            .record_move(MoveKind::CardMove { card, from, to }, before);
        true
    }

    /// Move a run of cards between tableau columns as a block.
    ///
    /// `cards` must be a valid run forming the complete tail of `from`
    /// (first entry deepest). Returns whether the move happened.
    pub fn move_run(&mut self, ctx: &RuleContext, cards: &[CardId], from: StackId, to: StackId) -> bool {
        if !validate_run_move(&self.board, ctx, cards, from, to) {
            return false;
        }
        let source = self.board.stack(from);
        let Some(start) = source.index_of(cards[0]) else {
            return false;
        };
        // The run must reach the top; a shorter prefix of the maximal
        // run validates but cannot be lifted out from under the rest.
        if start + cards.len() != source.len() {
            return false;
        }

        let before = self.board.snapshot();
        self.board.transfer_run(from, start, to);
        self.history.record_move(
            MoveKind::MultiCardMove {
                cards: SmallVec::from_slice(cards),
                from,
                to,
            },
            before,
        );
        true
    }

    // === Draw / recycle ===

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// A draw moves up to `draw_count` cards from the stock top onto the
    /// waste, face-up, last drawn on top. A recycle returns the whole
    /// waste to the stock face-down, restoring the stock's pre-draw
    /// order. `DrawOutcome::Empty` means both piles were empty or the
    /// game is not in the playing phase.
    pub fn draw_from_stock(&mut self, ctx: &RuleContext) -> DrawOutcome {
        if !ctx.phase.is_playing() {
            return DrawOutcome::Empty;
        }

        let stock = StackId::stock();
        let waste = StackId::waste();

        if !self.board.stack(stock).is_empty() {
            let before = self.board.snapshot();
            let mut drawn: SmallVec<[CardId; 3]> = SmallVec::new();
            for _ in 0..self.config.draw_count.cards() {
                let Some(card) = self.board.pop_top(stock) else { break };
                self.board.place(card.turned_up(), waste);
                drawn.push(card.id());
            }
            let result = drawn.to_vec();
            self.history
                .record_move(MoveKind::StockToWaste { cards: drawn }, before);
            return DrawOutcome::Drawn(result);
        }

        if !self.board.stack(waste).is_empty() {
            let before = self.board.snapshot();
            let mut recycled = Vec::with_capacity(self.board.stack(waste).len());
            // Popping the waste and pushing onto the stock reverses the
            // pile, which is exactly the pre-draw stock order.
            while let Some(card) = self.board.pop_top(waste) {
                self.board.place(card.turned_down(), stock);
                recycled.push(card.id());
            }
            self.history.record_move(
                MoveKind::WasteToStock {
                    cards: recycled.clone(),
                },
                before,
            );
            return DrawOutcome::Recycled(recycled);
        }

        DrawOutcome::Empty
    }

    // === Hints ===

    /// Every hint in the current position, in fixed enumeration order.
    #[must_use]
    pub fn hints(&self) -> Vec<Hint> {
        hints::find_hints(&self.board)
    }

    /// The single best move, or `None` when the game is truly blocked.
    #[must_use]
    pub fn request_hint(&self) -> Option<BestMove> {
        hints::suggest_best_move(&self.board)
    }

    // === Auto-complete ===

    /// One auto-complete sweep: play every currently legal foundation
    /// move once. Returns whether at least one card moved.
    ///
    /// A single sweep can unlock further moves (the card under a played
    /// one becomes the new top), so callers loop until this returns
    /// false, or use [`GameEngine::auto_complete_all`].
    pub fn auto_complete(&mut self, ctx: &RuleContext) -> bool {
        if !ctx.phase.is_playing() {
            return false;
        }

        let mut moved_any = false;
        for (card, from, foundation) in hints::find_foundation_moves(&self.board) {
            // Earlier moves in the sweep can invalidate later pairs
            // (both black aces match the same empty foundation), so each
            // pair is re-checked at execution time.
            if self.move_card(ctx, card, from, foundation) {
                moved_any = true;
            }
        }
        moved_any
    }

    /// Run auto-complete sweeps to fixpoint.
    pub fn auto_complete_all(&mut self, ctx: &RuleContext) -> bool {
        let mut moved_any = false;
        while self.auto_complete(ctx) {
            moved_any = true;
        }
        moved_any
    }

    // === Flips ===

    /// Face-down tableau top cards eligible to flip.
    #[must_use]
    pub fn flippable_cards(&self) -> Vec<(CardId, StackId)> {
        hints::find_cards_to_flip(&self.board)
    }

    /// Turn a face-down tableau top face-up.
    ///
    /// Safe to call with anything: returns false without touching the
    /// board unless `card` is a tableau pile's current face-down top.
    pub fn flip_card(&mut self, ctx: &RuleContext, card: CardId) -> bool {
        if !ctx.phase.is_playing() {
            return false;
        }
        let Some(stack_id) = self.board.location_of(card) else {
            return false;
        };
        if stack_id.kind() != StackKind::Tableau {
            return false;
        }
        let stack = self.board.stack(stack_id);
        let is_face_down_top = stack
            .top_card()
            .is_some_and(|top| top.id() == card && !top.is_face_up());
        if !is_face_down_top {
            return false;
        }

        let before = self.board.snapshot();
        self.board.flip_top(stack_id, true);
        self.history
            .record_move(MoveKind::CardFlip { card, stack: stack_id }, before);
        true
    }

    // === Undo ===

    /// Is there a move to undo?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Undo the most recent move.
    ///
    /// Restores the board to the record's pre-move position and returns
    /// the record, or `None` with an untouched board when the history is
    /// empty.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.undo_last_move()?;
        self.board.restore(&record.before);
        Some(record)
    }

    // === Layout interchange ===

    /// The current position in the persisted layout shape.
    #[must_use]
    pub fn layout(&self) -> GameLayout {
        GameLayout::capture(&self.board)
    }

    /// Restore a persisted position.
    ///
    /// Clears the move history. Returns false and leaves the engine
    /// untouched when the layout is not a full 52-card position.
    pub fn load_layout(&mut self, layout: &GameLayout) -> bool {
        match layout.to_board() {
            Some(board) => {
                self.board = board;
                self.history.clear();
                true
            }
            None => false,
        }
    }

    // === Queries ===

    /// True iff no hints exist and both stock and waste are empty.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        hints::is_game_blocked(&self.board)
    }

    /// True iff all 52 cards sit on foundations.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.foundation_count() == crate::core::card::DECK_SIZE as usize
    }

    /// Cards currently on foundations, for the external game-info view.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.board.foundation_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{standard_deck, Rank, Suit};
    use crate::core::config::{DrawCount, GamePhase};

    fn id(suit: Suit, rank: u8) -> CardId {
        CardId::new(suit, Rank::new(rank))
    }

    /// A deck arranged so the deal is fully known: tableau columns take
    /// the first 28 cards in order, stock the rest.
    fn engine_with_standard_deal(config: EngineConfig) -> GameEngine {
        let mut engine = GameEngine::new(config);
        engine.deal(&standard_deck());
        engine
    }

    #[test]
    fn test_deal_clears_history() {
        let mut engine = GameEngine::default();
        engine.new_game(42);
        let ctx = RuleContext::playing();
        engine.draw_from_stock(&ctx);
        assert!(engine.can_undo());

        engine.new_game(43);
        assert!(!engine.can_undo());
        assert!(engine.board().is_full_deck());
    }

    #[test]
    fn test_move_card_records_and_validates() {
        // Standard-order deck: tableau 0 = [AH]; waste empty.
        let mut engine = engine_with_standard_deal(EngineConfig::default());
        let ctx = RuleContext::playing();

        // AH (tableau 0 top, face-up) to a foundation.
        assert!(engine.move_card(
            &ctx,
            id(Suit::Hearts, 1),
            StackId::tableau(0),
            StackId::foundation(0),
        ));
        assert_eq!(engine.foundation_count(), 1);
        assert_eq!(engine.history().len(), 1);

        // Same command again: the card is no longer in tableau 0.
        assert!(!engine.move_card(
            &ctx,
            id(Suit::Hearts, 1),
            StackId::tableau(0),
            StackId::foundation(0),
        ));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_move_card_rejects_buried_card() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        // Hand-build: tableau 0 = 9H 8S, tableau 1 = TS. 9H validates
        // onto TS by rank/color but is buried under 8S.
        engine.board.place(Card::face_up(id(Suit::Hearts, 9)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 8)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 10)), StackId::tableau(1));

        assert!(!engine.move_card(
            &ctx,
            id(Suit::Hearts, 9),
            StackId::tableau(0),
            StackId::tableau(1),
        ));
        assert_eq!(engine.board().stack(StackId::tableau(0)).len(), 2);
    }

    #[test]
    fn test_move_run_moves_block() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        engine.board.place(Card::face_down(id(Suit::Clubs, 2)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Hearts, 9)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 8)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Diamonds, 7)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 10)), StackId::tableau(1));

        let run = [id(Suit::Hearts, 9), id(Suit::Spades, 8), id(Suit::Diamonds, 7)];
        assert!(engine.move_run(&ctx, &run, StackId::tableau(0), StackId::tableau(1)));

        let dest: Vec<u8> = engine
            .board()
            .stack(StackId::tableau(1))
            .cards()
            .iter()
            .map(|c| c.rank().number())
            .collect();
        assert_eq!(dest, vec![10, 9, 8, 7]);
        // The face-down 2C is now tableau 0's top, ready to flip.
        assert_eq!(
            engine.flippable_cards(),
            vec![(id(Suit::Clubs, 2), StackId::tableau(0))]
        );
    }

    #[test]
    fn test_move_run_rejects_partial_tail() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        engine.board.place(Card::face_up(id(Suit::Hearts, 9)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 8)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Diamonds, 7)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 10)), StackId::tableau(1));

        // 9H 8S validate as a run and the head fits TS, but 7D would be
        // left floating.
        let partial = [id(Suit::Hearts, 9), id(Suit::Spades, 8)];
        assert!(!engine.move_run(&ctx, &partial, StackId::tableau(0), StackId::tableau(1)));
    }

    #[test]
    fn test_draw_count_sequence_three() {
        let mut engine = GameEngine::new(
            EngineConfig::new()
                .with_draw_count(DrawCount::Three)
                .with_history_capacity(100),
        );
        let ctx = RuleContext::playing();
        // Five stock cards, hand-placed.
        for rank in 3..=7 {
            engine
                .board
                .place(Card::face_down(id(Suit::Clubs, rank)), StackId::stock());
        }

        assert_eq!(engine.draw_from_stock(&ctx).drawn().len(), 3);
        assert_eq!(engine.draw_from_stock(&ctx).drawn().len(), 2);
        // Stock is now empty; the next call draws nothing and recycles
        // all five instead.
        let third = engine.draw_from_stock(&ctx);
        assert_eq!(third.drawn().len(), 0);
        assert!(matches!(third, DrawOutcome::Recycled(ref cards) if cards.len() == 5));
        assert_eq!(engine.board().stack(StackId::stock()).len(), 5);
        assert_eq!(engine.board().stack(StackId::waste()).len(), 0);
    }

    #[test]
    fn test_draw_flips_face_up_and_orders_waste() {
        let mut engine = GameEngine::new(
            EngineConfig::new().with_draw_count(DrawCount::Three),
        );
        let ctx = RuleContext::playing();
        // Stock bottom-to-top: 3C 4C 5C, so a draw takes 5C, 4C, 3C.
        for rank in 3..=5 {
            engine
                .board
                .place(Card::face_down(id(Suit::Clubs, rank)), StackId::stock());
        }

        let drawn = engine.draw_from_stock(&ctx);
        assert_eq!(
            drawn,
            DrawOutcome::Drawn(vec![id(Suit::Clubs, 5), id(Suit::Clubs, 4), id(Suit::Clubs, 3)])
        );

        let waste = engine.board().stack(StackId::waste());
        assert!(waste.cards().iter().all(|c| c.is_face_up()));
        // Last drawn is the waste top.
        assert_eq!(waste.top_card().unwrap().id(), id(Suit::Clubs, 3));
    }

    #[test]
    fn test_recycle_restores_stock_order() {
        let mut engine = GameEngine::new(
            EngineConfig::new().with_draw_count(DrawCount::Three),
        );
        let ctx = RuleContext::playing();
        for rank in 3..=7 {
            engine
                .board
                .place(Card::face_down(id(Suit::Clubs, rank)), StackId::stock());
        }
        let original: Vec<CardId> = engine
            .board()
            .stack(StackId::stock())
            .cards()
            .iter()
            .map(|c| c.id())
            .collect();

        engine.draw_from_stock(&ctx);
        engine.draw_from_stock(&ctx);
        engine.draw_from_stock(&ctx); // recycle

        let restored: Vec<CardId> = engine
            .board()
            .stack(StackId::stock())
            .cards()
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(restored, original);
        assert!(engine
            .board()
            .stack(StackId::stock())
            .cards()
            .iter()
            .all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_draw_on_empty_both_is_noop() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();

        assert!(engine.draw_from_stock(&ctx).is_empty());
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_commands_rejected_outside_playing_phase() {
        let mut engine = engine_with_standard_deal(EngineConfig::default());
        let paused = RuleContext::with_phase(GamePhase::Paused);

        assert!(!engine.move_card(
            &paused,
            id(Suit::Hearts, 1),
            StackId::tableau(0),
            StackId::foundation(0),
        ));
        assert!(engine.draw_from_stock(&paused).is_empty());
        assert!(!engine.auto_complete(&paused));
        assert!(!engine.flip_card(&paused, id(Suit::Hearts, 1)));
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_flip_card() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        engine.board.place(Card::face_down(id(Suit::Clubs, 5)), StackId::tableau(0));
        engine.board.place(Card::face_down(id(Suit::Clubs, 9)), StackId::tableau(1));
        engine.board.place(Card::face_up(id(Suit::Hearts, 4)), StackId::tableau(1));

        // Face-down top: flips.
        assert!(engine.flip_card(&ctx, id(Suit::Clubs, 5)));
        assert!(engine
            .board()
            .stack(StackId::tableau(0))
            .top_card()
            .unwrap()
            .is_face_up());

        // Already face-up: no-op.
        assert!(!engine.flip_card(&ctx, id(Suit::Clubs, 5)));
        // Buried face-down card: no-op.
        assert!(!engine.flip_card(&ctx, id(Suit::Clubs, 9)));
        // Undealt card: no-op.
        assert!(!engine.flip_card(&ctx, id(Suit::Spades, 12)));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_auto_complete_single_sweep() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        // Tableau 0 bottom-to-top: 2H, AH. Pairs are collected before
        // executing, so the 2H exposed mid-sweep waits for the next one.
        engine.board.place(Card::face_up(id(Suit::Hearts, 2)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Hearts, 1)), StackId::tableau(0));

        // First sweep: only the ace is a legal pair at collection time.
        assert!(engine.auto_complete(&ctx));
        assert_eq!(engine.foundation_count(), 1);

        // Second sweep picks up the newly exposed two.
        assert!(engine.auto_complete(&ctx));
        assert_eq!(engine.foundation_count(), 2);

        assert!(!engine.auto_complete(&ctx));
    }

    #[test]
    fn test_auto_complete_competing_aces() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        engine.board.place(Card::face_up(id(Suit::Hearts, 1)), StackId::tableau(0));
        engine.board.place(Card::face_up(id(Suit::Spades, 1)), StackId::tableau(1));

        // Both aces match all four empty foundations at collection time;
        // re-validation at execution time keeps them on separate piles.
        assert!(engine.auto_complete(&ctx));
        assert_eq!(engine.foundation_count(), 2);
        let occupied: Vec<usize> = engine
            .board()
            .foundations()
            .map(|f| f.len())
            .collect();
        assert_eq!(occupied.iter().sum::<usize>(), 2);
        assert_eq!(occupied.iter().filter(|&&n| n == 1).count(), 2);
    }

    #[test]
    fn test_auto_complete_all_runs_to_fixpoint() {
        let mut engine = GameEngine::default();
        let ctx = RuleContext::playing();
        // A full hearts suit stacked ace-on-top in one column completes
        // only through repeated sweeps.
        for rank in (1..=13).rev() {
            engine
                .board
                .place(Card::face_up(id(Suit::Hearts, rank)), StackId::tableau(0));
        }

        assert!(engine.auto_complete_all(&ctx));
        assert_eq!(engine.foundation_count(), 13);
        assert!(engine.board().stack(StackId::tableau(0)).is_empty());
    }

    #[test]
    fn test_undo_restores_position() {
        let mut engine = engine_with_standard_deal(EngineConfig::default());
        let ctx = RuleContext::playing();
        let before = engine.board().snapshot();

        assert!(engine.move_card(
            &ctx,
            id(Suit::Hearts, 1),
            StackId::tableau(0),
            StackId::foundation(0),
        ));
        let record = engine.undo().expect("one move to undo");

        assert!(matches!(record.kind, MoveKind::CardMove { .. }));
        assert_eq!(engine.board().snapshot(), before);
        assert_eq!(engine.foundation_count(), 0);
        assert!(engine.undo().is_none());
    }

    #[test]
    fn test_undo_reverses_draw_and_recycle() {
        let mut engine = GameEngine::new(
            EngineConfig::new().with_draw_count(DrawCount::Three),
        );
        let ctx = RuleContext::playing();
        for rank in 3..=5 {
            engine
                .board
                .place(Card::face_down(id(Suit::Clubs, rank)), StackId::stock());
        }

        let before_draw = engine.board().snapshot();
        engine.draw_from_stock(&ctx); // draw all three
        let before_recycle = engine.board().snapshot();
        engine.draw_from_stock(&ctx); // recycle

        let record = engine.undo().unwrap();
        assert!(matches!(record.kind, MoveKind::WasteToStock { .. }));
        assert_eq!(engine.board().snapshot(), before_recycle);

        let record = engine.undo().unwrap();
        assert!(matches!(record.kind, MoveKind::StockToWaste { .. }));
        assert_eq!(engine.board().snapshot(), before_draw);
    }

    #[test]
    fn test_completion() {
        let mut engine = GameEngine::default();
        assert!(!engine.is_complete());

        // Stack every suit onto its foundation directly.
        for (slot, suit) in Suit::ALL.iter().enumerate() {
            for rank in 1..=13 {
                engine.board.place(
                    Card::face_up(id(*suit, rank)),
                    StackId::foundation(slot as u8),
                );
            }
        }
        assert!(engine.is_complete());
        assert_eq!(engine.foundation_count(), 52);
    }

    #[test]
    fn test_blocked_query_matches_hint_engine() {
        let engine = GameEngine::default();
        // Empty board: blocked by definition.
        assert!(engine.is_blocked());

        let mut engine = GameEngine::default();
        engine.new_game(42);
        // Fresh deal: stock has 24 cards, never blocked.
        assert!(!engine.is_blocked());
    }
}
