//! End-to-end tests for `xgid` code blocks: XGID line, board diagram and
//! analysis in one body.

mod common;

use common::{BARE_BLOCK, CUBE_BLOCK, MOVE_BLOCK};
use xgid_core::block::{ErrorDisplay, RenderedBlock};
use xgid_core::{process_block, AnalysisData, BlockOutcome, CubeOwner, Player};

fn rendered(outcome: BlockOutcome) -> RenderedBlock {
    match outcome {
        BlockOutcome::Board(block) => *block,
        BlockOutcome::Error(e) => panic!("unexpected error display: {}", e.message),
    }
}

#[test]
fn test_move_block() {
    let block = rendered(process_block(MOVE_BLOCK));
    assert_eq!(block.position.turn, Player::X);
    assert_eq!((block.position.die1, block.position.die2), (5, 2));
    assert_eq!(block.position.cube_owner, CubeOwner::Center);
    assert_eq!(block.position.pip_count_x, 168);
    assert_eq!(block.position.pip_count_o, 168);

    let Some(AnalysisData::Move(analysis)) = block.analysis else {
        panic!("expected move analysis");
    };
    assert_eq!(analysis.moves.len(), 2);
    assert_eq!(analysis.moves[0].notation, "Bar/20 13/11");
}

#[test]
fn test_cube_block() {
    let block = rendered(process_block(CUBE_BLOCK));
    assert_eq!(block.position.pip_count_x, 167);
    assert!(block.position.jacoby);

    let Some(AnalysisData::Cube(cube)) = block.analysis else {
        panic!("expected cube analysis");
    };
    assert_eq!(cube.best_action.as_deref(), Some("No double / Beaver"));
}

#[test]
fn test_block_without_analysis() {
    let block = rendered(process_block(BARE_BLOCK));
    assert_eq!(block.analysis, None);
    assert_eq!(block.position.borne_off_x, 0);
}

#[test]
fn test_malformed_block_shows_error() {
    let source = "XGID=not:a:valid:id";
    let outcome = process_block(source);
    assert_eq!(
        outcome,
        BlockOutcome::Error(ErrorDisplay {
            source: source.to_string(),
            message: xgid_core::FormatError::Pattern.to_string(),
        })
    );
}

#[test]
fn test_block_json_shape() {
    let json = serde_json::to_value(process_block(MOVE_BLOCK)).unwrap();
    assert_eq!(json["kind"], "board");
    assert_eq!(json["position"]["turn"], "X");
    assert_eq!(json["position"]["cubeOwner"], "Center");
    assert_eq!(json["position"]["cubeValue"], 64);
    assert_eq!(json["position"]["points"].as_array().unwrap().len(), 26);
    assert_eq!(json["position"]["points"][1]["checkerCount"], 1);
    assert_eq!(json["position"]["points"][1]["owner"], "X");
    assert_eq!(json["position"]["points"][25]["owner"], "O");
    assert_eq!(json["analysis"]["type"], "move");
    assert_eq!(json["analysis"]["moves"][1]["equityDiff"], -0.01);
}
