//! Rules configuration.
//!
//! Games are configured in two steps:
//! - `RulesOptions`: raw, deserializable parameters (integers may be out of range)
//! - `RulesConfig`: the validated, immutable result of `RulesConfig::new`
//!
//! The engine only ever reads a `RulesConfig`, so every rules function can
//! rely on `pits_per_side > 0` and a seed total that fits in `u32`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Capture variant applied when the last seed lands in an own pit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureRule {
    /// Landing in a previously empty own pit captures the mirror pit.
    #[default]
    Kalah,
    /// No captures.
    None,
}

/// Unvalidated rules parameters.
///
/// Defaults describe standard Kalah: six pits of four seeds, extra turn on a
/// store landing, end-of-game sweep, Kalah captures, no moves from empty pits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesOptions {
    pub pits_per_side: i64,
    pub seeds_per_pit: i64,
    pub extra_turn_on_store: bool,
    pub sweep_on_game_end: bool,
    pub capture_rule: CaptureRule,
    pub allow_move_from_empty: bool,
}

impl Default for RulesOptions {
    fn default() -> Self {
        Self {
            pits_per_side: 6,
            seeds_per_pit: 4,
            extra_turn_on_store: true,
            sweep_on_game_end: true,
            capture_rule: CaptureRule::Kalah,
            allow_move_from_empty: false,
        }
    }
}

impl RulesOptions {
    /// Standard Kalah options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pits on each side.
    #[must_use]
    pub fn with_pits_per_side(mut self, pits: i64) -> Self {
        self.pits_per_side = pits;
        self
    }

    /// Set the number of seeds initially placed in each pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: i64) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Enable or disable the extra turn on an own-store landing.
    #[must_use]
    pub fn with_extra_turn(mut self, enabled: bool) -> Self {
        self.extra_turn_on_store = enabled;
        self
    }

    /// Enable or disable the end-of-game sweep.
    #[must_use]
    pub fn with_sweep(mut self, enabled: bool) -> Self {
        self.sweep_on_game_end = enabled;
        self
    }

    /// Set the capture rule.
    #[must_use]
    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.capture_rule = rule;
        self
    }

    /// Allow sowing from empty pits (a zero-seed no-op move).
    #[must_use]
    pub fn with_moves_from_empty(mut self, allowed: bool) -> Self {
        self.allow_move_from_empty = allowed;
        self
    }

    /// Validate into an immutable `RulesConfig`.
    pub fn build(self) -> Result<RulesConfig, ConfigError> {
        RulesConfig::new(self)
    }
}

/// Validated, immutable game parameters.
///
/// Fields are private; construct with `RulesConfig::new` or
/// `RulesOptions::build`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RulesConfig {
    pits_per_side: usize,
    seeds_per_pit: u32,
    extra_turn_on_store: bool,
    sweep_on_game_end: bool,
    capture_rule: CaptureRule,
    allow_move_from_empty: bool,
}

impl RulesConfig {
    /// Largest accepted `pits_per_side`.
    pub const MAX_PITS_PER_SIDE: i64 = 1024;

    /// Validate options.
    ///
    /// Fails when `pits_per_side` is not in `1..=MAX_PITS_PER_SIDE`,
    /// `seeds_per_pit < 0`, or the total seed count `2 * pits * seeds` does
    /// not fit in `u32`.
    pub fn new(options: RulesOptions) -> Result<Self, ConfigError> {
        if options.pits_per_side <= 0 {
            return Err(ConfigError::NonPositivePits(options.pits_per_side));
        }
        if options.pits_per_side > Self::MAX_PITS_PER_SIDE {
            return Err(ConfigError::TooManyPits {
                pits_per_side: options.pits_per_side,
                max: Self::MAX_PITS_PER_SIDE,
            });
        }
        if options.seeds_per_pit < 0 {
            return Err(ConfigError::NegativeSeeds(options.seeds_per_pit));
        }

        let overflow = || ConfigError::SeedOverflow {
            pits_per_side: options.pits_per_side,
            seeds_per_pit: options.seeds_per_pit,
        };
        let total = options
            .pits_per_side
            .checked_mul(options.seeds_per_pit)
            .and_then(|t| t.checked_mul(2))
            .ok_or_else(overflow)?;
        if total > i64::from(u32::MAX) {
            return Err(overflow());
        }

        Ok(Self {
            pits_per_side: usize::try_from(options.pits_per_side).map_err(|_| overflow())?,
            seeds_per_pit: u32::try_from(options.seeds_per_pit).map_err(|_| overflow())?,
            extra_turn_on_store: options.extra_turn_on_store,
            sweep_on_game_end: options.sweep_on_game_end,
            capture_rule: options.capture_rule,
            allow_move_from_empty: options.allow_move_from_empty,
        })
    }

    /// Standard six-pit, four-seed Kalah.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pits_per_side: 6,
            seeds_per_pit: 4,
            extra_turn_on_store: true,
            sweep_on_game_end: true,
            capture_rule: CaptureRule::Kalah,
            allow_move_from_empty: false,
        }
    }

    #[must_use]
    pub const fn pits_per_side(&self) -> usize {
        self.pits_per_side
    }

    #[must_use]
    pub const fn seeds_per_pit(&self) -> u32 {
        self.seeds_per_pit
    }

    #[must_use]
    pub const fn extra_turn_on_store(&self) -> bool {
        self.extra_turn_on_store
    }

    #[must_use]
    pub const fn sweep_on_game_end(&self) -> bool {
        self.sweep_on_game_end
    }

    #[must_use]
    pub const fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    #[must_use]
    pub const fn allow_move_from_empty(&self) -> bool {
        self.allow_move_from_empty
    }

    /// Seeds on the board for a standard opening: `2 * pits * seeds`.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        let total = 2 * self.pits_per_side as u64 * u64::from(self.seeds_per_pit);
        // Bounded by validation in `new`.
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    /// Length of one sowing lap: own pits, own store, opponent pits.
    #[must_use]
    pub const fn cycle_len(&self) -> usize {
        2 * self.pits_per_side + 1
    }

    /// Back to editable options.
    #[must_use]
    pub fn to_options(&self) -> RulesOptions {
        RulesOptions {
            pits_per_side: self.pits_per_side as i64,
            seeds_per_pit: i64::from(self.seeds_per_pit),
            extra_turn_on_store: self.extra_turn_on_store,
            sweep_on_game_end: self.sweep_on_game_end,
            capture_rule: self.capture_rule,
            allow_move_from_empty: self.allow_move_from_empty,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RulesOptions> for RulesConfig {
    type Error = ConfigError;

    fn try_from(options: RulesOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl<'de> Deserialize<'de> for RulesConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let options = RulesOptions::deserialize(deserializer)?;
        Self::new(options).map_err(serde::de::Error::custom)
    }
}
