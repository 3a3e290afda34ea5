//! Decoding of eXtreme Gammon position IDs (XGID) and of the analysis text
//! XG exports next to them.

pub mod analysis;
pub mod analysis_data;
pub mod block;
pub mod board;
pub mod error;
pub mod points;
pub mod xgid;

pub use analysis::{extract_analysis_text, extract_move_blocks, parse_analysis};
pub use analysis_data::AnalysisData;
pub use block::{process_block, BlockOutcome};
pub use board::{CubeOwner, Player, Point, Position};
pub use error::FormatError;
pub use xgid::{parse_xgid, parse_xgid_opt};
