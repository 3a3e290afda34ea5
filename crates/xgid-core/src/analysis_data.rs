use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Equity loss below which a move counts as good.
const THRESHOLD_GOOD: f64 = 0.02;
/// Equity loss below which a move counts as an error rather than a blunder.
const THRESHOLD_ERROR: f64 = 0.08;

/// Win / gammon / backgammon chances, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub win: f64,
    pub gammon: f64,
    pub backgammon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveQuality {
    Good,
    Error,
    Blunder,
}

impl MoveQuality {
    pub fn from_equity_diff(equity_diff: f64) -> MoveQuality {
        let loss = equity_diff.abs();
        if loss < THRESHOLD_GOOD {
            MoveQuality::Good
        } else if loss < THRESHOLD_ERROR {
            MoveQuality::Error
        } else {
            MoveQuality::Blunder
        }
    }
}

/// One ranked candidate from a move analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveData {
    pub rank: u32,
    #[serde(rename = "move")]
    pub notation: String,
    pub analysis_level: String, // "Book", "3-ply", "XG Roller++", ...
    pub equity: f64,
    pub equity_diff: f64, // 0 for the best move
    pub player_stats: Option<PlayerStats>,
    pub opponent_stats: Option<PlayerStats>,
}

impl MoveData {
    pub fn quality(&self) -> MoveQuality {
        MoveQuality::from_equity_diff(self.equity_diff)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveAnalysis {
    pub moves: Vec<MoveData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubelessEquities {
    pub no_double: f64,
    pub double: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CubeAction {
    NoDouble,
    DoubleTake,
    DoubleBeaver,
    DoublePass,
}

impl CubeAction {
    pub const ALL: [CubeAction; 4] = [
        CubeAction::NoDouble,
        CubeAction::DoubleTake,
        CubeAction::DoubleBeaver,
        CubeAction::DoublePass,
    ];

    /// Label XG prints in front of the cubeful equity.
    pub fn label(self) -> &'static str {
        match self {
            CubeAction::NoDouble => "No double:",
            CubeAction::DoubleTake => "Double/Take:",
            CubeAction::DoubleBeaver => "Double/Beaver:",
            CubeAction::DoublePass => "Double/Pass:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubefulEquity {
    pub equity: f64,
    /// Difference from the best action, when printed.
    pub diff: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeAnalysis {
    pub player_winning: Option<PlayerStats>,
    pub opponent_winning: Option<PlayerStats>,
    pub cubeless_equities: Option<CubelessEquities>,
    /// Only the actions XG printed.
    pub cubeful_equities: BTreeMap<CubeAction, CubefulEquity>,
    pub best_action: Option<String>,
}

impl CubeAnalysis {
    pub fn cubeful(&self, action: CubeAction) -> Option<&CubefulEquity> {
        self.cubeful_equities.get(&action)
    }
}

/// Parsed engine output. A document carries at most one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisData {
    Move(MoveAnalysis),
    Cube(CubeAnalysis),
}
