//! eXtreme Gammon analysis text: locating it inside a block, telling move
//! rankings from cube reports, and parsing either into `AnalysisData`.
//! Absent or unrecognised analysis is `None`, never an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::analysis_data::{
    AnalysisData, CubeAction, CubeAnalysis, CubefulEquity, CubelessEquities, MoveAnalysis,
    MoveData, PlayerStats,
};
use crate::xgid::XGID_PREFIX;

const WINNING_CHANCES_MARKER: &str = "Player Winning Chances:";
const ROLLOUT_HEADER: &str = "Analyzed in XG Roller+";
const VERSION_FOOTER: &str = "eXtreme Gammon Version:";

static ANALYSIS_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid analysis start regex"));

static RANKED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid ranked line regex"));

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.").expect("valid numbered line regex"));

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.+?)\s+eq:([+-]\d+\.\d+)(?:\s+\(([+-]\d+\.\d+)\))?")
        .expect("valid move regex")
});

static PLAYER_RE: LazyLock<Regex> = LazyLock::new(|| stats_regex("Player:"));
static OPPONENT_RE: LazyLock<Regex> = LazyLock::new(|| stats_regex("Opponent:"));
static PLAYER_WINNING_RE: LazyLock<Regex> = LazyLock::new(|| stats_regex("Player Winning Chances:"));
static OPPONENT_WINNING_RE: LazyLock<Regex> =
    LazyLock::new(|| stats_regex("Opponent Winning Chances:"));

static BLOCK_PLAYER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{2,}Player:").expect("valid block player regex"));
static BLOCK_OPPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{2,}Opponent:").expect("valid block opponent regex"));

static CUBELESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Cubeless Equities:\s+No Double=([+-]\d+\.\d+),\s+Double=([+-]\d+\.\d+)")
        .expect("valid cubeless regex")
});

static CUBEFUL_RES: LazyLock<Vec<(CubeAction, Regex)>> = LazyLock::new(|| {
    CubeAction::ALL
        .iter()
        .map(|&action| {
            let pattern = format!(
                r"{}\s+([+-]\d+\.\d+)(?:\s+\(([+-]\d+\.\d+)\))?",
                regex::escape(action.label())
            );
            (action, Regex::new(&pattern).expect("valid cubeful regex"))
        })
        .collect()
});

static BEST_ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Best Cube action:\s+(.+)").expect("valid best action regex"));

fn stats_regex(label: &str) -> Regex {
    let pattern = format!(
        r"{}\s+([\d.]+)%\s+\(G:([\d.]+)%\s+B:([\d.]+)%\)",
        regex::escape(label)
    );
    Regex::new(&pattern).expect("valid stats regex")
}

/// Lines with the byte offset each one starts at.
fn line_spans(text: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    text.split('\n')
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            (start, line)
        })
        .collect()
}

fn is_analysis_start(trimmed: &str) -> bool {
    ANALYSIS_START_RE.is_match(trimmed) || trimmed.contains(WINNING_CHANCES_MARKER)
}

/// Find the analysis that follows the XGID line (and the board diagram).
///
/// Returns everything from the first ranked-move or winning-chances line to
/// the end of `content`, or `None` when there is no XGID line or no analysis.
pub fn extract_analysis_text(content: &str) -> Option<&str> {
    let lines = line_spans(content);
    let xgid_index = lines
        .iter()
        .position(|(_, line)| line.trim().starts_with(XGID_PREFIX))?;

    let start = lines[xgid_index + 1..]
        .iter()
        .find(|(_, line)| is_analysis_start(line.trim()))
        .map(|&(start, _)| start);

    if start.is_none() {
        debug!("No analysis text after XGID line");
    }
    start.map(|start| &content[start..])
}

/// Classify and parse analysis text.
pub fn parse_analysis(text: &str) -> Option<AnalysisData> {
    if text.is_empty() {
        return None;
    }

    if text.contains(WINNING_CHANCES_MARKER) {
        Some(AnalysisData::Cube(parse_cube_analysis(text)))
    } else if RANKED_LINE_RE.is_match(text) {
        Some(AnalysisData::Move(parse_move_analysis(text)))
    } else {
        debug!("Analysis text matches neither move nor cube format");
        None
    }
}

fn captured_f64(caps: &Captures, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

fn parse_stats(re: &Regex, line: &str) -> Option<PlayerStats> {
    let caps = re.captures(line)?;
    Some(PlayerStats {
        win: captured_f64(&caps, 1)?,
        gammon: captured_f64(&caps, 2)?,
        backgammon: captured_f64(&caps, 3)?,
    })
}

/// A token that starts the move itself rather than the analysis level.
fn looks_like_move(token: &str) -> bool {
    token.contains('/') || token.contains('(') || token.starts_with(|c: char| c.is_ascii_digit())
}

/// Split "XG Roller++ Bar/23 13/8" into ("XG Roller++", "Bar/23 13/8").
///
/// The first token is always part of the level, so "4-ply 24/18" keeps
/// "4-ply" as its level.
fn split_level_and_move(remainder: &str) -> (String, String) {
    let parts: Vec<&str> = remainder.split_whitespace().collect();
    let move_start = parts
        .iter()
        .skip(1)
        .position(|part| looks_like_move(part))
        .map_or(1, |i| i + 1)
        .min(parts.len());
    (parts[..move_start].join(" "), parts[move_start..].join(" "))
}

fn parse_move_analysis(text: &str) -> MoveAnalysis {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut moves = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = MOVE_RE.captures(line) else {
            continue;
        };
        let (Some(rank), Some(equity)) = (
            caps[1].parse::<u32>().ok(),
            captured_f64(&caps, 3),
        ) else {
            continue;
        };

        let (analysis_level, notation) = split_level_and_move(&caps[2]);
        let player_stats = lines.get(i + 1).and_then(|l| parse_stats(&PLAYER_RE, l));
        let opponent_stats = lines.get(i + 2).and_then(|l| parse_stats(&OPPONENT_RE, l));

        moves.push(MoveData {
            rank,
            notation,
            analysis_level,
            equity,
            equity_diff: captured_f64(&caps, 4).unwrap_or(0.0),
            player_stats,
            opponent_stats,
        });
    }

    debug!(moves = moves.len(), "Parsed move analysis");
    MoveAnalysis { moves }
}

fn parse_cube_analysis(text: &str) -> CubeAnalysis {
    let mut analysis = CubeAnalysis::default();

    for line in text.lines().map(str::trim) {
        if let Some(stats) = parse_stats(&PLAYER_WINNING_RE, line) {
            analysis.player_winning = Some(stats);
        }
        if let Some(stats) = parse_stats(&OPPONENT_WINNING_RE, line) {
            analysis.opponent_winning = Some(stats);
        }

        if let Some(caps) = CUBELESS_RE.captures(line) {
            if let (Some(no_double), Some(double)) = (captured_f64(&caps, 1), captured_f64(&caps, 2)) {
                analysis.cubeless_equities = Some(CubelessEquities { no_double, double });
            }
        }

        for (action, re) in CUBEFUL_RES.iter() {
            let Some(caps) = re.captures(line) else {
                continue;
            };
            if let Some(equity) = captured_f64(&caps, 1) {
                analysis.cubeful_equities.insert(
                    *action,
                    CubefulEquity {
                        equity,
                        diff: captured_f64(&caps, 2),
                    },
                );
            }
        }

        if let Some(caps) = BEST_ACTION_RE.captures(line) {
            analysis.best_action = Some(caps[1].trim().to_string());
        }
    }

    debug!(
        cubeful = analysis.cubeful_equities.len(),
        best_action = ?analysis.best_action,
        "Parsed cube analysis"
    );
    analysis
}

/// Split raw XG output into per-move blocks.
///
/// A block is a numbered line through the indented `Player:`/`Opponent:`
/// pair that follows it. Without any such block, the rollout section from
/// "Analyzed in XG Roller+" up to the version footer is returned instead.
pub fn extract_move_blocks(text: &str) -> Vec<&str> {
    let lines = line_spans(text);
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !NUMBERED_RE.is_match(lines[i].1) {
            i += 1;
            continue;
        }

        let start = lines[i].0;
        let mut j = i + 1;
        let mut end = None;
        while j < lines.len() && !NUMBERED_RE.is_match(lines[j].1) {
            let opponent_follows = lines
                .get(j + 1)
                .is_some_and(|(_, next)| BLOCK_OPPONENT_RE.is_match(next));
            if BLOCK_PLAYER_RE.is_match(lines[j].1) && opponent_follows {
                end = Some(j + 1);
                break;
            }
            j += 1;
        }

        match end {
            Some(e) => {
                let (line_start, line) = lines[e];
                blocks.push(text[start..line_start + line.len()].trim());
                i = e + 1;
            }
            None => i = j,
        }
    }

    if blocks.is_empty() {
        if let Some(section) = rollout_section(text, &lines) {
            blocks.push(section);
        }
    }
    blocks
}

fn rollout_section<'a>(text: &'a str, lines: &[(usize, &str)]) -> Option<&'a str> {
    let header = text.find(ROLLOUT_HEADER)?;
    let (footer, _) = lines
        .iter()
        .find(|(start, line)| *start > header && line.trim_start().starts_with(VERSION_FOOTER))?;
    Some(text[header..*footer].trim())
}
