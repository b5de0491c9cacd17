//! Round state types.

use serde::{Deserialize, Serialize};

/// State of a round.
///
/// Serializes snake_case (`"player_bust"` etc.) for the API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    /// No cards dealt yet; a bet may be placed and a hand dealt.
    #[default]
    Idle,
    /// The player may hit or stand.
    Playing,
    /// The player busted; the round is settled as a loss. Terminal.
    PlayerBust,
    /// The dealer is playing out their hand. Transient: `stand` resolves
    /// this to `RoundEnd` within the same call.
    DealerPlaying,
    /// The round is settled. Terminal.
    RoundEnd,
}

impl RoundStatus {
    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PlayerBust | Self::RoundEnd)
    }
}

/// A requested round transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "bet")]
pub enum Action {
    /// Place a bet, deducting it from the chip balance immediately.
    PlaceBet(usize),
    /// Deal two cards to the player and one to the dealer.
    Deal,
    /// Draw one card for the player.
    Hit,
    /// Stop drawing; the dealer plays out and the round settles.
    Stand,
    /// Clear the round back to [`RoundStatus::Idle`].
    Reset,
}
