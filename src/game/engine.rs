//! The game state machine.
//!
//! `Game` owns the two players, the stock, the in-progress trick, and the
//! round history, and drives the flow
//! registration -> dealing -> tricks -> replenishment -> victory.
//!
//! The engine is a plain value: no globals, no ambient randomness, no I/O.
//! Several independent games can live in one process. Every operation
//! returns a typed `Result`; nothing here panics on caller input.
//!
//! ## Example
//!
//! ```
//! use toucan::core::GameRng;
//! use toucan::game::Game;
//! use toucan::core::PlayerSlot;
//! use toucan::rules::Declaration;
//!
//! let mut game = Game::new();
//! game.register_player(PlayerSlot::One, "alice").unwrap();
//! game.register_player(PlayerSlot::Two, "bob").unwrap();
//!
//! let summary = game.start_round(GameRng::new(42)).unwrap();
//! assert_eq!(summary.hand_sizes, [7, 7]);
//! assert_eq!(summary.stock_size, 38);
//!
//! game.play_leader([0, 1], Declaration::High).unwrap();
//! game.play_follower([0, 1]).unwrap();
//! let outcome = game.resolve_trick().unwrap();
//! assert_eq!(outcome.next_leader, outcome.winner);
//! ```

use im::Vector;
use tracing::{debug, trace};

use crate::core::{GameError, GameRng, Player, PlayerSlot};
use crate::game::snapshot::{
    ChallengeOutcome, FollowerMove, LeaderMove, PlayerDraw, PlayerSnapshot, Registration,
    ReplenishSummary, RoundSummary, StateSnapshot, TrickOutcome, TrickRecord, VictoryClaim,
};
use crate::rules::{adjudicate, resolve, Declaration, TrickState, TrickWinner};
use crate::zones::{Deck, Stock};

/// Cards dealt to each player at the start of a round.
pub const CARDS_PER_HAND: usize = 7;

/// Cards each player draws from the stock after a resolved trick.
pub const REPLENISH_COUNT: usize = 2;

/// A complete two-player game.
#[derive(Clone, Debug)]
pub struct Game {
    players: [Player; 2],
    stock: Stock,
    /// Designated leader of the current or next trick.
    leader: Option<PlayerSlot>,
    trick: TrickState,
    history: Vector<TrickRecord>,
    claim: Option<PlayerSlot>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with two unregistered slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: [Player::new(PlayerSlot::One), Player::new(PlayerSlot::Two)],
            stock: Stock::new(),
            leader: None,
            trick: TrickState::Idle,
            history: Vector::new(),
            claim: None,
        }
    }

    // === Accessors ===

    /// A player by slot.
    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Registered slots in deal order.
    pub fn active_slots(&self) -> impl Iterator<Item = PlayerSlot> + '_ {
        PlayerSlot::ALL
            .into_iter()
            .filter(|&slot| self.player(slot).registered)
    }

    /// Cards left in the stock.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.stock.len()
    }

    /// Designated leader of the current or next trick.
    #[must_use]
    pub fn current_leader(&self) -> Option<PlayerSlot> {
        self.leader
    }

    /// Resolved tricks this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TrickRecord> {
        &self.history
    }

    fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    // === Registration ===

    /// Register a username into a slot.
    ///
    /// Re-registering an occupied slot leaves it untouched and reports the
    /// existing username inside `AlreadyRegistered`.
    pub fn register_player(
        &mut self,
        slot: PlayerSlot,
        username: &str,
    ) -> Result<Registration, GameError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GameError::EmptyUsername);
        }

        let player = self.player_mut(slot);
        if player.registered {
            return Err(GameError::AlreadyRegistered {
                slot,
                username: player.username.clone().unwrap_or_default(),
            });
        }

        player.username = Some(username.to_string());
        player.registered = true;
        debug!(%slot, username, "player registered");

        Ok(Registration {
            slot,
            username: username.to_string(),
        })
    }

    // === Dealing ===

    /// Start a new round: fresh deck, injected shuffle, deal.
    ///
    /// Resets trick state, history, and any standing claim.
    pub fn start_round(&mut self, mut rng: GameRng) -> Result<RoundSummary, GameError> {
        let mut deck = Deck::fresh();
        deck.shuffle(&mut rng);
        self.deal_round(deck)
    }

    /// Deal an already-shuffled deck: 7 cards each, remainder to the stock.
    ///
    /// Fails with `NoActivePlayers` or `InsufficientCards` leaving all state
    /// unchanged. Slot One is dealt before slot Two; the first active slot
    /// leads the opening trick.
    pub fn deal_round(&mut self, mut deck: Deck) -> Result<RoundSummary, GameError> {
        let active: Vec<PlayerSlot> = self.active_slots().collect();
        if active.is_empty() {
            return Err(GameError::NoActivePlayers);
        }

        let needed = CARDS_PER_HAND * active.len();
        if deck.len() < needed {
            return Err(GameError::InsufficientCards {
                needed,
                available: deck.len(),
            });
        }

        self.trick = TrickState::Idle;
        self.history = Vector::new();
        self.claim = None;

        for &slot in &active {
            let hand = &mut self.player_mut(slot).hand;
            hand.clear();
            for _ in 0..CARDS_PER_HAND {
                if let Some(card) = deck.draw() {
                    hand.add(card);
                }
            }
        }

        self.stock.set_cards(deck.into_cards());
        self.leader = Some(active[0]);

        let summary = RoundSummary {
            hand_sizes: [self.hand_size(PlayerSlot::One), self.hand_size(PlayerSlot::Two)],
            stock_size: self.stock.len(),
            leader: active[0],
        };
        debug!(stock = summary.stock_size, leader = %summary.leader, "round dealt");
        Ok(summary)
    }

    fn hand_size(&self, slot: PlayerSlot) -> usize {
        self.player(slot).hand.len()
    }

    // === Trick play ===

    /// The leader plays two cards by hand index and declares High or Low.
    pub fn play_leader(
        &mut self,
        indices: [usize; 2],
        declaration: Declaration,
    ) -> Result<LeaderMove, GameError> {
        if self.trick != TrickState::Idle {
            return Err(GameError::TrickInProgress);
        }
        let leader = self.leader.ok_or(GameError::NoLeader)?;

        let have = self.hand_size(leader);
        if have < 2 {
            return Err(GameError::NotEnoughCards { slot: leader, have });
        }

        let removed = self.player_mut(leader).hand.remove_many(&indices)?;
        let pair = (removed[0], removed[1]);

        self.trick = TrickState::LeaderPlayed {
            leader,
            pair,
            declaration,
        };
        trace!(%leader, %declaration, "leader played");

        Ok(LeaderMove {
            leader,
            pair,
            declaration,
        })
    }

    /// The follower answers with two cards by hand index.
    ///
    /// Requires both players registered and a leader move pending.
    pub fn play_follower(&mut self, indices: [usize; 2]) -> Result<FollowerMove, GameError> {
        let (leader, pair, declaration) = match &self.trick {
            TrickState::LeaderPlayed {
                leader,
                pair,
                declaration,
            } => (*leader, *pair, *declaration),
            _ => return Err(GameError::RolesNotSet),
        };

        if self.active_slots().count() < 2 {
            return Err(GameError::RolesNotSet);
        }
        let follower = leader.other();

        let have = self.hand_size(follower);
        if have < 2 {
            return Err(GameError::NotEnoughCards { slot: follower, have });
        }

        let removed = self.player_mut(follower).hand.remove_many(&indices)?;
        let follower_pair = (removed[0], removed[1]);

        self.trick = TrickState::FollowerPlayed {
            leader,
            pair,
            declaration,
            follower,
            follower_pair,
        };
        trace!(%follower, "follower played");

        Ok(FollowerMove {
            follower,
            pair: follower_pair,
        })
    }

    /// Resolve the completed trick.
    ///
    /// The winner becomes the next trick's leader; all four played cards
    /// leave circulation, retained only in the history record.
    pub fn resolve_trick(&mut self) -> Result<TrickOutcome, GameError> {
        let TrickState::FollowerPlayed {
            leader,
            pair,
            declaration,
            follower,
            follower_pair,
        } = self.trick
        else {
            return Err(GameError::TrickIncomplete);
        };

        let resolution = resolve(pair, declaration, follower_pair);
        let winner = match resolution.winner {
            TrickWinner::Leader => leader,
            TrickWinner::Follower => follower,
        };

        self.history.push_back(TrickRecord {
            leader,
            follower,
            leader_pair: pair,
            follower_pair,
            declaration,
            winner,
            pattern_matched: resolution.pattern_matched,
        });
        self.trick = TrickState::Idle;
        self.leader = Some(winner);
        debug!(%winner, pattern_matched = resolution.pattern_matched, "trick resolved");

        Ok(TrickOutcome {
            winner,
            next_leader: winner,
            resolution,
        })
    }

    // === Replenishment ===

    /// Each registered player draws up to two cards from the stock.
    ///
    /// Slot One draws before slot Two; a short or empty stock silently
    /// reduces the draw.
    pub fn replenish_hands(&mut self) -> ReplenishSummary {
        let active: Vec<PlayerSlot> = self.active_slots().collect();
        let mut draws = Vec::with_capacity(active.len());

        for slot in active {
            let drawn = self.stock.draw(REPLENISH_COUNT);
            let hand = &mut self.player_mut(slot).hand;
            for &card in &drawn {
                hand.add(card);
            }
            trace!(%slot, count = drawn.len(), "replenished");
            draws.push(PlayerDraw {
                slot,
                cards: drawn.into_vec(),
            });
        }

        ReplenishSummary {
            draws,
            stock_size: self.stock.len(),
        }
    }

    // === Victory ===

    /// Claim victory; valid iff the claimant holds at least 27 cards.
    ///
    /// Read-only over hands; a valid claim is recorded for challenges.
    pub fn claim_victory(&mut self, slot: PlayerSlot) -> Result<VictoryClaim, GameError> {
        let hand_size = adjudicate(slot, self.hand_size(slot))?;
        self.claim = Some(slot);
        debug!(claimant = %slot, hand_size, "victory claimed");
        Ok(VictoryClaim {
            claimant: slot,
            hand_size,
        })
    }

    /// Challenge the standing claim.
    ///
    /// A challenger with at least 27 cards supersedes the claimant as
    /// winner; otherwise the claim stands and `InsufficientHandSize` is
    /// returned.
    pub fn challenge_victory(&mut self, slot: PlayerSlot) -> Result<ChallengeOutcome, GameError> {
        let claimant = self.claim.ok_or(GameError::NoActiveClaim)?;
        let hand_size = adjudicate(slot, self.hand_size(slot))?;
        self.claim = Some(slot);
        debug!(challenger = %slot, %claimant, "challenge succeeded");
        Ok(ChallengeOutcome {
            winner: slot,
            superseded_claimant: claimant,
            hand_size,
        })
    }

    // === Inspection ===

    /// Complete read-only view of the game.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        let player_snapshot = |slot: PlayerSlot| {
            let player = self.player(slot);
            PlayerSnapshot {
                slot,
                username: player.username.clone(),
                registered: player.registered,
                hand: player.hand.iter().collect(),
            }
        };

        StateSnapshot {
            players: [player_snapshot(PlayerSlot::One), player_snapshot(PlayerSlot::Two)],
            stock_size: self.stock.len(),
            leader: self.leader,
            trick: self.trick,
            history: self.history.clone(),
            claim: self.claim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, ErrorKind};

    fn registered_game() -> Game {
        let mut game = Game::new();
        game.register_player(PlayerSlot::One, "alice").unwrap();
        game.register_player(PlayerSlot::Two, "bob").unwrap();
        game
    }

    fn dealt_game(seed: u64) -> Game {
        let mut game = registered_game();
        game.start_round(GameRng::new(seed)).unwrap();
        game
    }

    #[test]
    fn test_register_empty_username() {
        let mut game = Game::new();
        assert_eq!(
            game.register_player(PlayerSlot::One, "   "),
            Err(GameError::EmptyUsername)
        );
        assert!(!game.player(PlayerSlot::One).registered);
    }

    #[test]
    fn test_register_idempotence() {
        let mut game = Game::new();
        game.register_player(PlayerSlot::One, "alice").unwrap();

        let err = game.register_player(PlayerSlot::One, "mallory").unwrap_err();
        assert_eq!(
            err,
            GameError::AlreadyRegistered {
                slot: PlayerSlot::One,
                username: "alice".to_string(),
            }
        );
        assert_eq!(game.player(PlayerSlot::One).username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_start_round_requires_players() {
        let mut game = Game::new();
        let err = game.start_round(GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::NoActivePlayers);
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn test_start_round_deals_seven_each() {
        let game = dealt_game(42);
        assert_eq!(game.player(PlayerSlot::One).hand.len(), 7);
        assert_eq!(game.player(PlayerSlot::Two).hand.len(), 7);
        assert_eq!(game.stock_size(), 38);
        assert_eq!(game.current_leader(), Some(PlayerSlot::One));
    }

    #[test]
    fn test_start_round_single_player() {
        let mut game = Game::new();
        game.register_player(PlayerSlot::Two, "bob").unwrap();
        let summary = game.start_round(GameRng::new(42)).unwrap();
        assert_eq!(summary.hand_sizes, [0, 7]);
        assert_eq!(summary.stock_size, 45);
        assert_eq!(summary.leader, PlayerSlot::Two);
    }

    #[test]
    fn test_deal_round_insufficient_cards() {
        let mut game = registered_game();

        // 13 cards left: two players need 14.
        let mut deck = Deck::fresh();
        for _ in 0..39 {
            deck.draw();
        }
        let err = game.deal_round(deck).unwrap_err();
        assert_eq!(err, GameError::InsufficientCards { needed: 14, available: 13 });

        // Nothing was dealt.
        assert!(game.player(PlayerSlot::One).hand.is_empty());
        assert_eq!(game.stock_size(), 0);
        assert_eq!(game.current_leader(), None);
    }

    #[test]
    fn test_deal_round_exactly_enough() {
        let mut game = registered_game();

        let mut deck = Deck::fresh();
        for _ in 0..38 {
            deck.draw();
        }
        let summary = game.deal_round(deck).unwrap();
        assert_eq!(summary.hand_sizes, [7, 7]);
        assert_eq!(summary.stock_size, 0);
    }

    #[test]
    fn test_play_leader_requires_deal() {
        let mut game = registered_game();
        let err = game.play_leader([0, 1], Declaration::High).unwrap_err();
        assert_eq!(err, GameError::NoLeader);
    }

    #[test]
    fn test_play_leader_validates_selection() {
        let mut game = dealt_game(42);

        let err = game.play_leader([0, 0], Declaration::High).unwrap_err();
        assert_eq!(err, GameError::DuplicateSelection { index: 0 });

        let err = game.play_leader([0, 9], Declaration::High).unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 9, hand_size: 7 });

        // Failed selections never touched the hand.
        assert_eq!(game.player(PlayerSlot::One).hand.len(), 7);
    }

    #[test]
    fn test_play_leader_removes_pair_in_selection_order() {
        let mut game = dealt_game(42);
        let first = game.player(PlayerSlot::One).hand.get(3).unwrap();
        let second = game.player(PlayerSlot::One).hand.get(1).unwrap();

        let mv = game.play_leader([3, 1], Declaration::Low).unwrap();
        assert_eq!(mv.pair, (first, second));
        assert_eq!(game.player(PlayerSlot::One).hand.len(), 5);
    }

    #[test]
    fn test_play_leader_twice_is_rejected() {
        let mut game = dealt_game(42);
        game.play_leader([0, 1], Declaration::High).unwrap();
        let err = game.play_leader([0, 1], Declaration::High).unwrap_err();
        assert_eq!(err, GameError::TrickInProgress);
    }

    #[test]
    fn test_play_follower_requires_leader_move() {
        let mut game = dealt_game(42);
        let err = game.play_follower([0, 1]).unwrap_err();
        assert_eq!(err, GameError::RolesNotSet);
    }

    #[test]
    fn test_play_follower_requires_both_players() {
        let mut game = Game::new();
        game.register_player(PlayerSlot::One, "alice").unwrap();
        game.start_round(GameRng::new(42)).unwrap();
        game.play_leader([0, 1], Declaration::High).unwrap();

        let err = game.play_follower([0, 1]).unwrap_err();
        assert_eq!(err, GameError::RolesNotSet);
    }

    #[test]
    fn test_resolve_requires_complete_trick() {
        let mut game = dealt_game(42);
        assert_eq!(game.resolve_trick().unwrap_err(), GameError::TrickIncomplete);

        game.play_leader([0, 1], Declaration::High).unwrap();
        assert_eq!(game.resolve_trick().unwrap_err(), GameError::TrickIncomplete);
    }

    #[test]
    fn test_full_trick_appends_history_and_rotates_leader() {
        let mut game = dealt_game(42);
        game.play_leader([0, 1], Declaration::High).unwrap();
        game.play_follower([0, 1]).unwrap();
        let outcome = game.resolve_trick().unwrap();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_leader(), Some(outcome.winner));
        assert_eq!(game.snapshot().trick, TrickState::Idle);

        let record = &game.history()[0];
        assert_eq!(record.winner, outcome.winner);
        assert_eq!(record.leader, PlayerSlot::One);
        assert_eq!(record.follower, PlayerSlot::Two);
    }

    #[test]
    fn test_replenish_draws_two_each() {
        let mut game = dealt_game(42);
        game.play_leader([0, 1], Declaration::High).unwrap();
        game.play_follower([0, 1]).unwrap();
        game.resolve_trick().unwrap();

        let summary = game.replenish_hands();
        assert_eq!(summary.draws.len(), 2);
        assert_eq!(summary.draws[0].slot, PlayerSlot::One);
        assert_eq!(summary.draws[0].cards.len(), 2);
        assert_eq!(summary.draws[1].cards.len(), 2);
        assert_eq!(summary.stock_size, 34);
        assert_eq!(game.player(PlayerSlot::One).hand.len(), 7);
    }

    #[test]
    fn test_replenish_with_empty_stock_is_silent() {
        let mut game = registered_game();
        let mut deck = Deck::fresh();
        for _ in 0..38 {
            deck.draw();
        }
        game.deal_round(deck).unwrap();

        let summary = game.replenish_hands();
        assert!(summary.draws.iter().all(|d| d.cards.is_empty()));
        assert_eq!(summary.stock_size, 0);
    }

    #[test]
    fn test_claim_boundary() {
        let mut game = registered_game();
        for card in Deck::fresh().into_cards().into_iter().take(26) {
            game.player_mut(PlayerSlot::One).hand.add(card);
        }

        let err = game.claim_victory(PlayerSlot::One).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientHandSize {
                slot: PlayerSlot::One,
                have: 26,
                needed: 27,
            }
        );
        assert_eq!(game.snapshot().claim, None);

        game.player_mut(PlayerSlot::One)
            .hand
            .add(Card::new(crate::core::Suit::Spades, crate::core::Rank::Ace));
        let claim = game.claim_victory(PlayerSlot::One).unwrap();
        assert_eq!(claim.hand_size, 27);
        assert_eq!(game.snapshot().claim, Some(PlayerSlot::One));
    }

    #[test]
    fn test_claim_is_read_only() {
        let mut game = registered_game();
        for card in Deck::fresh().into_cards().into_iter().take(27) {
            game.player_mut(PlayerSlot::One).hand.add(card);
        }
        game.claim_victory(PlayerSlot::One).unwrap();
        assert_eq!(game.player(PlayerSlot::One).hand.len(), 27);
    }

    #[test]
    fn test_challenge_requires_claim() {
        let mut game = registered_game();
        assert_eq!(
            game.challenge_victory(PlayerSlot::Two).unwrap_err(),
            GameError::NoActiveClaim
        );
    }

    #[test]
    fn test_challenge_supersedes_claimant() {
        let mut game = registered_game();
        let cards = Deck::fresh().into_cards();
        for &card in &cards[..27] {
            game.player_mut(PlayerSlot::One).hand.add(card);
        }
        for &card in &cards[27..52] {
            game.player_mut(PlayerSlot::Two).hand.add(card);
        }
        game.claim_victory(PlayerSlot::One).unwrap();

        // 25 cards: challenge fails, claim stands.
        let err = game.challenge_victory(PlayerSlot::Two).unwrap_err();
        assert!(matches!(err, GameError::InsufficientHandSize { .. }));
        assert_eq!(game.snapshot().claim, Some(PlayerSlot::One));

        game.player_mut(PlayerSlot::Two).hand.add(cards[0]);
        game.player_mut(PlayerSlot::Two).hand.add(cards[1]);
        let outcome = game.challenge_victory(PlayerSlot::Two).unwrap();
        assert_eq!(outcome.winner, PlayerSlot::Two);
        assert_eq!(outcome.superseded_claimant, PlayerSlot::One);
        assert_eq!(game.snapshot().claim, Some(PlayerSlot::Two));
    }

    #[test]
    fn test_new_round_clears_claim_and_history() {
        let mut game = dealt_game(42);
        game.play_leader([0, 1], Declaration::High).unwrap();
        game.play_follower([0, 1]).unwrap();
        game.resolve_trick().unwrap();
        assert_eq!(game.history().len(), 1);

        game.start_round(GameRng::new(43)).unwrap();
        assert_eq!(game.history().len(), 0);
        assert_eq!(game.snapshot().claim, None);
        assert_eq!(game.snapshot().trick, TrickState::Idle);
    }
}
