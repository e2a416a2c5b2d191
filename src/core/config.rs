//! Game configuration types.
//!
//! The board geometry is fixed; what a session may change is:
//! - `Alphabet`: the 18 symbols dealt onto the board
//! - `Pacing`: how long informational messages stay on screen
//! - the RNG seed (clock-seeded when absent)

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::board::{Symbol, PAIR_COUNT};
use super::rng::GameRng;

/// Symbols used when no alphabet is configured.
pub const DEFAULT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQR";

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected {expected} symbols, found {found}")]
    WrongSymbolCount { expected: usize, found: usize },

    #[error("symbol '{0}' appears more than once")]
    DuplicateSymbol(char),

    #[error("whitespace cannot be used as a symbol")]
    WhitespaceSymbol,
}

/// The 18 distinct symbols a board is dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet from exactly 18 distinct, non-whitespace characters.
    pub fn new(chars: &str) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();
        let mut symbols = Vec::with_capacity(PAIR_COUNT);

        for c in chars.chars() {
            if c.is_whitespace() {
                return Err(ConfigError::WhitespaceSymbol);
            }
            if !seen.insert(c) {
                return Err(ConfigError::DuplicateSymbol(c));
            }
            symbols.push(Symbol(c));
        }

        if symbols.len() != PAIR_COUNT {
            return Err(ConfigError::WrongSymbolCount {
                expected: PAIR_COUNT,
                found: symbols.len(),
            });
        }

        Ok(Self { symbols })
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = ConfigError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        let chars: String = symbols.iter().map(|s| s.0).collect();
        Alphabet::new(&chars)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.chars().map(Symbol).collect(),
        }
    }
}

/// Pauses inserted for readability. None of them affect game semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// How long error and result banners stay up.
    pub message: Duration,

    /// How long a mismatched pair stays face up.
    pub reveal: Duration,

    /// Delay between dots of the loading animation.
    pub loading_tick: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            message: Duration::from_secs(2),
            reveal: Duration::from_secs(2),
            loading_tick: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    /// No pauses at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            message: Duration::ZERO,
            reveal: Duration::ZERO,
            loading_tick: Duration::ZERO,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols dealt onto the board.
    pub alphabet: Alphabet,

    /// Shuffle seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,

    /// Readability pauses.
    pub pacing: Pacing,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Create the shuffle RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_clock(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.symbols().len(), PAIR_COUNT);
        assert_eq!(alphabet.symbols()[0], Symbol('A'));
        assert_eq!(alphabet.symbols()[17], Symbol('R'));
        assert_eq!(Alphabet::new(DEFAULT_SYMBOLS), Ok(alphabet));
    }

    #[test]
    fn test_alphabet_wrong_count() {
        assert_eq!(
            Alphabet::new("ABC"),
            Err(ConfigError::WrongSymbolCount { expected: 18, found: 3 })
        );
    }

    #[test]
    fn test_alphabet_duplicate() {
        assert_eq!(
            Alphabet::new("ABCDEFGHIJKLMNOPQA"),
            Err(ConfigError::DuplicateSymbol('A'))
        );
    }

    #[test]
    fn test_alphabet_whitespace() {
        assert_eq!(
            Alphabet::new("ABCDEFGH JKLMNOPQR"),
            Err(ConfigError::WhitespaceSymbol)
        );
    }

    #[test]
    fn test_alphabet_unicode() {
        let alphabet = Alphabet::new("♠♣♥♦★☆●○■□▲△◆◇♪♫☀☂").unwrap();
        assert_eq!(alphabet.symbols()[0], Symbol('♠'));
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_seed(11)
            .with_pacing(Pacing::instant());

        assert_eq!(config.seed, Some(11));
        assert_eq!(config.pacing.message, Duration::ZERO);
        assert_eq!(config.rng().seed(), 11);
    }

    #[test]
    fn test_default_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.message, Duration::from_secs(2));
        assert_eq!(pacing.loading_tick, Duration::from_millis(500));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(3));
        assert_eq!(back.alphabet, config.alphabet);
        assert_eq!(back.pacing, config.pacing);
    }

    #[test]
    fn test_alphabet_deserialize_validates() {
        let json = serde_json::to_string(&Alphabet::default()).unwrap();
        assert_eq!(serde_json::from_str::<Alphabet>(&json).unwrap(), Alphabet::default());

        assert!(serde_json::from_str::<Alphabet>(r#"["A","B"]"#).is_err());
        let duplicated = json.replacen("\"B\"", "\"A\"", 1);
        assert!(serde_json::from_str::<Alphabet>(&duplicated).is_err());
    }
}
