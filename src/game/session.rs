//! Game mode selection and the immutable per-session settings derived from it.

use crate::config::RulesConfig;

/// Difficulty variants picked on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Easy,
    Normal,
    Hard,
    Samurai,
    /// Developer mode: fully stocked kit and a fat purse.
    Test,
}

impl Mode {
    /// Map a normalized welcome-screen token to a mode. Anything unrecognized is Normal.
    pub fn from_token(token: &str) -> Self {
        match token {
            "e" => Mode::Easy,
            "h" => Mode::Hard,
            "s" => Mode::Samurai,
            "test" => Mode::Test,
            _ => Mode::Normal,
        }
    }
}

/// Settings shared by every town and the shop for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub mode: Mode,
    pub starting_gold: u32,
    pub kit_capacity: usize,
    pub markdown: f64,
    pub toughness: f64,
    pub sword_enabled: bool,
    pub easy: bool,
}

impl Session {
    pub fn from_mode(mode: Mode, rules: &RulesConfig) -> Self {
        let hard = mode == Mode::Hard;
        Session {
            mode,
            starting_gold: match mode {
                Mode::Easy => rules.easy_starting_gold,
                Mode::Test => rules.test_starting_gold,
                _ => rules.starting_gold,
            },
            kit_capacity: if mode == Mode::Samurai {
                rules.samurai_kit_capacity
            } else {
                rules.kit_capacity
            },
            markdown: if hard { rules.hard_markdown } else { rules.markdown },
            toughness: if hard { rules.hard_toughness } else { rules.toughness },
            sword_enabled: mode == Mode::Samurai,
            easy: mode == Mode::Easy,
        }
    }

    pub fn stocks_test_kit(&self) -> bool {
        self.mode == Mode::Test
    }
}
