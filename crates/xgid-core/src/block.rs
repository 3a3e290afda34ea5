//! Processing of a whole `xgid` code block: the position, any analysis that
//! follows it, or what the host should show when the XGID is malformed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::{extract_analysis_text, parse_analysis};
use crate::analysis_data::AnalysisData;
use crate::board::Position;
use crate::xgid::parse_xgid;

/// Everything the renderer needs for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    pub position: Position,
    pub analysis: Option<AnalysisData>,
}

/// Shown inline instead of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDisplay {
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockOutcome {
    Board(Box<RenderedBlock>),
    Error(ErrorDisplay),
}

impl BlockOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, BlockOutcome::Error(_))
    }
}

pub fn process_block(source: &str) -> BlockOutcome {
    let position = match parse_xgid(source) {
        Ok(position) => position,
        Err(e) => {
            warn!(error = %e, "Failed to parse XGID block");
            return BlockOutcome::Error(ErrorDisplay {
                source: source.to_string(),
                message: e.to_string(),
            });
        }
    };

    let analysis = extract_analysis_text(source).and_then(parse_analysis);
    BlockOutcome::Board(Box::new(RenderedBlock { position, analysis }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keeps_source() {
        let outcome = process_block("not an xgid");
        assert_eq!(
            outcome,
            BlockOutcome::Error(ErrorDisplay {
                source: "not an xgid".to_string(),
                message: "Invalid XGID format: does not match expected pattern [XGID=]<points>:<cube>:<cube owner>:<turn>:<dice>:<score X>:<score O>:<rules>:<match length>".to_string(),
            })
        );
        assert!(outcome.is_error());
    }

    #[test]
    fn test_board_without_analysis() {
        match process_block("XGID=-b----E-C---eE---c-e----B-:0:0:1:00:0:0:0:0:10") {
            BlockOutcome::Board(block) => assert!(block.analysis.is_none()),
            BlockOutcome::Error(e) => panic!("unexpected error: {}", e.message),
        }
    }

    #[test]
    fn test_outcome_kind_tag() {
        let json = serde_json::to_value(process_block("")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Invalid XGID: input must be a non-empty string");
    }
}
