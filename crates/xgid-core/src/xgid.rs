//! XGID (eXtreme Gammon ID) field parser.
//!
//! `[XGID=]points:cube:cubeOwner:turn:dice:scoreX:scoreO:rules:matchLength`
//!
//! Validation happens once here; the occupancy decoder and the derived
//! counts only ever see a string that passed the structural checks.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::board::{CubeOwner, Player, Position};
use crate::error::FormatError;
use crate::points;

pub const XGID_PREFIX: &str = "XGID=";

/// Fields every XGID must carry (a tenth, max cube, is tolerated and ignored).
const MIN_FIELDS: usize = 9;

/// Cube value reported for a centred cube, whatever the exponent field says.
const CENTERED_CUBE_VALUE: u64 = 64;

static SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:XGID=)?[a-zA-Z\-]+:[0-9]+:-?[0-9]+:-?[0-9]+:").expect("valid XGID shape regex")
});

/// Parse an XGID into a `Position`.
///
/// `input` may be a bare XGID or a whole block body: the first line starting
/// with `XGID=` is used, otherwise the first non-blank line.
pub fn parse_xgid(input: &str) -> Result<Position, FormatError> {
    let line = select_line(input).ok_or(FormatError::Empty)?;

    if !SHAPE_RE.is_match(line) {
        return Err(FormatError::Pattern);
    }

    let parts: Vec<&str> = line
        .strip_prefix(XGID_PREFIX)
        .unwrap_or(line)
        .split(':')
        .collect();
    if parts.len() < MIN_FIELDS {
        return Err(FormatError::FieldCount { found: parts.len() });
    }

    let cube_exponent: u32 = parse_field("cube value", parts[1])?;
    let cube_owner = match parse_field::<i32>("cube owner", parts[2])? {
        0 => CubeOwner::Center,
        1 => CubeOwner::X,
        _ => CubeOwner::O,
    };
    let cube_value = match cube_owner {
        CubeOwner::Center => CENTERED_CUBE_VALUE,
        _ => 2u64
            .checked_pow(cube_exponent)
            .ok_or_else(|| FormatError::InvalidField {
                field: "cube value",
                value: parts[1].to_string(),
            })?,
    };

    let turn = match parse_field::<i32>("turn", parts[3])? {
        -1 => Player::O,
        _ => Player::X,
    };

    // Dice: "00" to roll, "D"/"B"/"R" for double/beaver/raccoon, else the roll
    let (die1, die2) = parse_dice(parts[4]);

    let score_x: u32 = parse_field("score X", parts[5])?;
    let score_o: u32 = parse_field("score O", parts[6])?;
    let rules: i32 = parse_field("rules", parts[7])?;
    let match_length: u32 = parse_field("match length", parts[8])?;

    let jacoby = rules % 2 == 1;
    let beaver = rules % 4 == 1;
    // The jacoby bit doubles as the crawford flag in match play
    let crawford = match_length > 0 && jacoby;

    let points = points::decode_points(parts[0]);

    let position = Position {
        borne_off_x: points::borne_off(&points, Player::X),
        borne_off_o: points::borne_off(&points, Player::O),
        pip_count_x: points::pip_count(&points, Player::X),
        pip_count_o: points::pip_count(&points, Player::O),
        points,
        turn,
        die1,
        die2,
        cube_owner,
        cube_value,
        score_x,
        score_o,
        match_length,
        jacoby,
        beaver,
        crawford,
        xgid: line.to_string(),
    };

    debug!(
        xgid = %position.xgid,
        pip_x = position.pip_count_x,
        pip_o = position.pip_count_o,
        "Decoded XGID"
    );

    Ok(position)
}

/// Same as `parse_xgid`, with a missing input reported as `FormatError::Empty`.
pub fn parse_xgid_opt(input: Option<&str>) -> Result<Position, FormatError> {
    parse_xgid(input.unwrap_or_default())
}

impl FromStr for Position {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_xgid(s)
    }
}

fn select_line(input: &str) -> Option<&str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(XGID_PREFIX))
        .or_else(|| input.lines().map(str::trim).find(|line| !line.is_empty()))
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormatError> {
    value.trim().parse().map_err(|_| FormatError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Each character is one die; anything that is not a digit reads as 0.
fn parse_dice(field: &str) -> (u8, u8) {
    let mut digits = field
        .chars()
        .map(|c| c.to_digit(10).map_or(0, |d| d as u8));
    let die1 = digits.next().unwrap_or(0);
    let die2 = digits.next().unwrap_or(0);
    (die1, die2)
}
