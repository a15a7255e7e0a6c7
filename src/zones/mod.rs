//! Card containers: the deck, per-player hands, and the stock.
//!
//! Together with the trick history these account for every dealt card; the
//! conservation tests in `tests/round_tests.rs` lean on that.

pub mod deck;
pub mod hand;
pub mod stock;

pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
pub use stock::{Drawn, Stock};
