use serde::{Deserialize, Serialize};

/// Number of slots in a decoded position: 24 points plus the two bars.
pub const NUM_SLOTS: usize = 26;

/// Checkers each side starts with.
pub const CHECKERS_PER_SIDE: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeOwner {
    Center,
    X,
    O,
}

impl CubeOwner {
    /// The owning player, or `None` for a centred cube.
    pub fn player(self) -> Option<Player> {
        match self {
            CubeOwner::Center => None,
            CubeOwner::X => Some(Player::X),
            CubeOwner::O => Some(Player::O),
        }
    }
}

/// A single slot: index 0 and 25 are the bars, 1..=24 the points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub checker_count: u32,
    /// `None` iff `checker_count == 0`.
    pub owner: Option<Player>,
}

impl Point {
    pub const EMPTY: Point = Point {
        checker_count: 0,
        owner: None,
    };

    pub fn is_bar(index: usize) -> bool {
        index == 0 || index == NUM_SLOTS - 1
    }
}

/// A fully decoded XGID. Built once by `xgid::parse_xgid` and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub points: [Point; NUM_SLOTS],
    pub borne_off_x: i32,
    pub borne_off_o: i32,
    pub turn: Player,
    pub die1: u8,
    pub die2: u8,
    pub cube_owner: CubeOwner,
    pub cube_value: u64,
    pub score_x: u32,
    pub score_o: u32,
    pub match_length: u32,
    pub jacoby: bool,
    pub beaver: bool,
    pub crawford: bool, // same rules bit as jacoby, read in match context
    pub pip_count_x: u32,
    pub pip_count_o: u32,
    /// The encoded line as it appeared in the input.
    pub xgid: String,
}

impl Position {
    pub fn borne_off(&self, player: Player) -> i32 {
        match player {
            Player::X => self.borne_off_x,
            Player::O => self.borne_off_o,
        }
    }

    pub fn pip_count(&self, player: Player) -> u32 {
        match player {
            Player::X => self.pip_count_x,
            Player::O => self.pip_count_o,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.score_x,
            Player::O => self.score_o,
        }
    }

    pub fn is_money_game(&self) -> bool {
        self.match_length == 0
    }

    /// Both dice, or `None` when no roll is recorded.
    pub fn dice(&self) -> Option<(u8, u8)> {
        if self.die1 == 0 && self.die2 == 0 {
            None
        } else {
            Some((self.die1, self.die2))
        }
    }
}
