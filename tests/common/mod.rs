//! Block bodies as XG exports them: XGID line, board diagram, analysis.

#![allow(dead_code)]

pub const MOVE_BLOCK: &str = r#"XGID=aa----E-C---eE---c-e----AA:0:0:1:52:0:0:3:0:10
X:Player 1   O:Player 2

Score is X:0 O:0. Unlimited Game, Jacoby Beaver
 +13-14-15-16-17-18------19-20-21-22-23-24-+
 | X           O    |   | O              X |
 | X           O    |   | O                |
 | X           O    |   | O                |
 | X                |   | O                |
 | X                | X | O                |
 |                  |BAR|                  |
 | O                | O | X                |
 | O                |   | X                |
 | O           X    |   | X                |
 | O           X    |   | X                |
 | O           X    |   | X              O |
 +12-11-10--9--8--7-------6--5--4--3--2--1-+
Pip count  X: 168  O: 168 X-O: 0-0
Cube: 1
X to play 52

    1. Book¹       Bar/20 13/11                 eq:+0.095
      Player:   52.09% (G:13.91% B:0.59%)
      Opponent: 47.91% (G:11.60% B:0.51%)
      Confidence: ±0.002 (+0.093..+0.097) - [100.0%]

    2. XG Roller++ Bar/23 13/8                  eq:+0.085 (-0.010)
      Player:   51.73% (G:13.47% B:0.49%)
      Opponent: 48.27% (G:11.24% B:0.44%)"#;

pub const CUBE_BLOCK: &str = r#"XGID=-b----E-C---eE---c-e----B-:0:0:1:00:0:0:3:0:10
X:Player 1   O:Player 2

Score is X:0 O:0. Unlimited Game, Jacoby Beaver
 +13-14-15-16-17-18------19-20-21-22-23-24-+
 | X           O    |   | O              X |
 | X           O    |   | O              X |
 | X           O    |   | O                |
 | X                |   | O                |
 | X                |   | O                |
 |                  |BAR|                  |
 | O                |   | X                |
 | O                |   | X                |
 | O           X    |   | X                |
 | O           X    |   | X              O |
 | O           X    |   | X              O |
 +12-11-10--9--8--7-------6--5--4--3--2--1-+
Pip count  X: 167  O: 167 X-O: 0-0
Cube: 1
X on roll, cube action

Analyzed in XG Roller+
Player Winning Chances:   52.63% (G:14.77% B:0.69%)
Opponent Winning Chances: 47.37% (G:11.99% B:0.51%)

Cubeless Equities: No Double=+0.082, Double=+0.159

Cubeful Equities:
       No double:     +0.119
       Double/Beaver: -0.361 (-0.480)
       Double/Pass:   +1.000 (+0.881)

Best Cube action: No double / Beaver

eXtreme Gammon Version: 2.19.211.pre-release"#;

pub const BARE_BLOCK: &str = r#"XGID=aa----E-C---eE---c-e----AA:0:0:1:52:0:0:3:0:10
X:Player 1   O:Player 2

Score is X:0 O:0. Unlimited Game, Jacoby Beaver"#;

/// A block body after the locator has cut away the XGID line and diagram.
pub fn analysis_of(block: &str) -> &str {
    xgid_core::extract_analysis_text(block).expect("fixture carries analysis")
}
