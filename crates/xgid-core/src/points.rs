//! Occupancy decoder for the first XGID field.
//! One character per point: `a`-`z` are 1-26 checkers for O, `A`-`Z` the same
//! for X, anything else (normally `-`) is an empty point.

use tracing::warn;

use crate::board::{Player, Point, CHECKERS_PER_SIDE, NUM_SLOTS};

/// Distance to bear off from either bar.
const BAR_DISTANCE: u32 = 25;

fn char_to_point(c: char) -> Point {
    match c {
        'a'..='z' => Point {
            checker_count: c as u32 - 'a' as u32 + 1,
            owner: Some(Player::O),
        },
        'A'..='Z' => Point {
            checker_count: c as u32 - 'A' as u32 + 1,
            owner: Some(Player::X),
        },
        _ => Point::EMPTY,
    }
}

/// Decode an occupancy string into the 26 slots.
///
/// The encoded characters are reversed, so for a full 26-character field slot
/// `i` holds character `25 - i`. Short strings are padded with empty slots;
/// slots past the bars are dropped.
pub fn decode_points(occupancy: &str) -> [Point; NUM_SLOTS] {
    let mut points = [Point::EMPTY; NUM_SLOTS];
    let decoded: Vec<Point> = occupancy.chars().map(char_to_point).rev().collect();

    if decoded.len() > NUM_SLOTS {
        warn!(
            len = decoded.len(),
            "occupancy longer than {NUM_SLOTS} slots, extra slots ignored"
        );
    }

    for (slot, point) in points.iter_mut().zip(decoded) {
        *slot = point;
    }
    points
}

/// Checkers `player` still has on the board, bars included.
pub fn checkers_on_board(points: &[Point], player: Player) -> u32 {
    points
        .iter()
        .filter(|p| p.owner == Some(player))
        .map(|p| p.checker_count)
        .sum()
}

/// `15 - checkers on board`. Not clamped: an over-full encoding goes negative.
pub fn borne_off(points: &[Point], player: Player) -> i32 {
    CHECKERS_PER_SIDE - checkers_on_board(points, player) as i32
}

/// Pips `player` needs to bear off every checker.
///
/// Slot `i` holds encoded character `25 - i`, which is X's point `25 - i` and
/// O's point `i`, so those are the distances home. Either bar counts 25.
pub fn pip_count(points: &[Point], player: Player) -> u32 {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.owner == Some(player) && p.checker_count > 0)
        .map(|(i, p)| {
            let distance = if Point::is_bar(i) {
                BAR_DISTANCE
            } else {
                match player {
                    Player::X => BAR_DISTANCE - i as u32,
                    Player::O => i as u32,
                }
            };
            distance * p.checker_count
        })
        .sum()
}
