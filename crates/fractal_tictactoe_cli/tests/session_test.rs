//! Tests for the text play loop.

use fractal_tictactoe::Owner;
use fractal_tictactoe_cli::{FractalConfig, Session};

fn run(config: FractalConfig, input: &str) -> (Owner, String) {
    let mut output = Vec::new();
    let outcome = {
        let mut session = Session::new(config, input.as_bytes(), &mut output).expect("Session starts");
        session.run().expect("Session runs")
    };
    (outcome, String::from_utf8(output).expect("UTF-8 output"))
}

fn depth(depth: usize) -> FractalConfig {
    FractalConfig {
        depth,
        ..FractalConfig::default()
    }
}

#[test]
fn test_depth_one_game_announces_winner() {
    let (outcome, output) = run(depth(1), "0\n1\n3\n4\n6\n");
    assert_eq!(outcome, Owner::PlayerOne);
    assert!(output.contains("Player 1 has won!"));
}

#[test]
fn test_illegal_move_is_reported_and_game_continues() {
    let (outcome, output) = run(depth(2), "4 0\n5 5\n0 8\nquit\n");
    assert_eq!(outcome, Owner::None);
    assert!(output.contains("Illegal move: Move must be played inside 0"));
    assert!(output.contains("Player 1 to move (inside 8)"));
}

#[test]
fn test_resolved_sub_board_is_reported() {
    // Player one takes the top row of sub-board 4 while player two answers
    // in sub-boards 0 to 2, each bouncing straight back to 4.
    let script = "4 0\n0 4\n4 1\n1 4\n4 2\nquit\n";
    let (_, output) = run(depth(2), script);
    assert!(output.contains("Sub-board 4 (Center) won by Player 1"));
    assert!(output.contains("X|X|X"));
}

#[test]
fn test_status_as_json() {
    let config = FractalConfig {
        json: true,
        ..depth(2)
    };
    let (_, output) = run(config, "4 0\nstatus\n");
    let line = output
        .lines()
        .find_map(|l| l.split_once("> ").map(|(_, rest)| rest).filter(|r| r.starts_with('{')))
        .expect("JSON status line");
    let status: serde_json::Value = serde_json::from_str(line).expect("Valid JSON");
    assert_eq!(status["to_move"], "Two");
    assert_eq!(status["legal_moves"], 9);
}

#[test]
fn test_zero_depth_is_rejected() {
    let mut output = Vec::new();
    let result = Session::new(depth(0), "".as_bytes(), &mut output);
    let err = result.err().expect("Depth 0 refused");
    assert!(format!("{:#}", err).contains("Depth must be at least 1"));
}

#[test]
fn test_moves_lists_forced_cells() {
    let (_, output) = run(depth(2), "4 0\nmoves\nquit\n");
    assert!(output.contains("9 legal move(s): 00 01 02 03 04 05 06 07 08"));
}
