//! Tests for the match controller state machine.

use tictactoe_match::{
    Board, Mark, MatchController, MatchPhase, Player, Position, TurnOutcome, rules,
};

/// Plays `(row, col)` moves, returning the last outcome.
fn play(game: &mut MatchController, moves: &[(usize, usize)]) -> TurnOutcome {
    let mut last = None;
    for &(row, col) in moves {
        last = Some(game.play_turn_at(row, col).expect("Valid coordinates"));
    }
    last.expect("At least one move")
}

fn marked(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| !board.is_empty(*pos))
        .collect()
}

#[test]
fn test_scenario_a_top_row_win() {
    let mut game = MatchController::new();
    // X: (0,0) (0,1) (0,2), O: (1,0) (1,1)
    let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    match outcome {
        TurnOutcome::Win { winner, line } => {
            assert_eq!(*winner.mark(), Mark::X);
            assert_eq!(winner.name(), "Player 1");
            assert_eq!(line, [Position::TopLeft, Position::TopCenter, Position::TopRight]);
        }
        other => panic!("Expected win, got {other:?}"),
    }
    assert!(game.is_over());
    assert_eq!(game.phase(), MatchPhase::Over);
}

#[test]
fn test_scenario_b_tie() {
    let mut game = MatchController::new();
    // X: (0,0) (0,1) (1,2) (2,0) (2,1); O: (0,2) (1,0) (1,1) (2,2)
    let moves = [
        (0, 0),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (1, 1),
        (2, 0),
        (2, 2),
        (2, 1),
    ];
    let (last, earlier) = moves.split_last().unwrap();
    for &(row, col) in earlier {
        let outcome = game.play_turn_at(row, col).unwrap();
        assert!(matches!(outcome, TurnOutcome::Continue { .. }), "{outcome:?}");
    }

    assert_eq!(game.play_turn_at(last.0, last.1), Ok(TurnOutcome::Tie));
    assert!(game.is_over());
    assert!(game.board().is_full());

    // Every cell is taken, but the finished match reports that first.
    let board = game.board().clone();
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert_eq!(game.play_turn(pos), TurnOutcome::AlreadyOver);
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.phase(), MatchPhase::Over);
}

#[test]
fn test_scenario_c_moves_after_win_are_ignored() {
    let mut game = MatchController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let board = game.board().clone();
    let active = game.active_player().clone();

    for (row, col) in [(2, 2), (2, 0), (0, 0)] {
        assert_eq!(game.play_turn_at(row, col), Ok(TurnOutcome::AlreadyOver));
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.active_player(), &active);
}

#[test]
fn test_scenario_d_configure_then_restart() {
    let mut game = MatchController::new();
    play(&mut game, &[(1, 1), (0, 0), (2, 2)]);

    game.configure_players(Some("Alice"), Some("Bob"));
    game.restart();

    assert_eq!(game.active_player(), &Player::new("Alice", Mark::X));
    assert!(Position::ALL.iter().all(|pos| game.board().is_empty(*pos)));
}

#[test]
fn test_win_on_last_cell_is_not_tie() {
    let mut game = MatchController::new();
    // Final X at (2,2) fills the board and completes the main diagonal.
    // X O X / O X O / O X X
    let outcome = play(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(game.board().is_full());
    match outcome {
        TurnOutcome::Win { winner, .. } => assert_eq!(*winner.mark(), Mark::X),
        other => panic!("Expected win, got {other:?}"),
    }
}

#[test]
fn test_taken_cell_never_mutates() {
    let mut game = MatchController::with_players("Alice", "Bob");
    play(&mut game, &[(0, 0), (1, 1)]);
    let before = game.clone();

    for (row, col) in [(0, 0), (1, 1)] {
        assert_eq!(
            game.play_turn_at(row, col).unwrap(),
            TurnOutcome::CellTaken(Position::from_row_col(row, col).unwrap())
        );
    }
    assert_eq!(game, before);
    assert_eq!(game.active_player().name(), "Alice");
}

#[test]
fn test_only_targeted_cells_are_marked() {
    let mut game = MatchController::new();
    let mut targeted = Vec::new();
    for pos in [Position::Center, Position::TopRight, Position::BottomLeft, Position::MiddleLeft] {
        game.play_turn(pos);
        targeted.push(pos);
        let mut expected = targeted.clone();
        expected.sort_by_key(|p| p.index());
        assert_eq!(marked(game.board()), expected);
    }
}

#[test]
fn test_restart_from_any_state() {
    let mut game = MatchController::with_players("Alice", "Bob");

    // Mid-match, with O to move
    game.play_turn(Position::Center);
    game.restart();
    assert!(marked(game.board()).is_empty());
    assert_eq!(game.active_player().name(), "Alice");
    assert_eq!(game.phase(), MatchPhase::AwaitingMove);

    // After a win
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    game.restart();
    assert!(marked(game.board()).is_empty());
    assert_eq!(game.active_player().name(), "Alice");
    assert!(!game.is_over());
    assert!(matches!(
        game.play_turn(Position::Center),
        TurnOutcome::Continue { .. }
    ));
}

#[test]
fn test_configure_reopens_finished_match() {
    let mut game = MatchController::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    game.configure_players(Some("Carol"), Some("Dave"));

    assert!(!game.is_over());
    // Board is kept, so only empty cells can be played.
    assert_eq!(
        game.play_turn(Position::TopLeft),
        TurnOutcome::CellTaken(Position::TopLeft)
    );

    // X's top row is still on the board and now belongs to Carol.
    assert_eq!(
        game.play_turn(Position::BottomRight),
        TurnOutcome::Win {
            winner: Player::new("Carol", Mark::X),
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert!(game.is_over());
}

#[test]
fn test_configure_mid_match_keeps_turn_order() {
    let mut game = MatchController::new();
    play(&mut game, &[(0, 0), (1, 1)]);
    game.configure_players(Some("Carol"), Some("Dave"));

    assert_eq!(
        game.play_turn(Position::BottomRight),
        TurnOutcome::Continue {
            next: Player::new("Dave", Mark::O)
        }
    );
}

#[test]
fn test_kept_line_is_credited_to_its_mark() {
    let mut game = MatchController::new();
    // O completes the middle row.
    let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert!(matches!(outcome, TurnOutcome::Win { ref winner, .. } if *winner.mark() == Mark::O));

    // New names without a restart: X moves first onto the old board.
    game.configure_players(Some("Carol"), Some("Dave"));
    let outcome = game.play_turn(Position::BottomLeft);

    assert_eq!(
        outcome,
        TurnOutcome::Win {
            winner: Player::new("Dave", Mark::O),
            line: [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        }
    );
    assert_eq!(
        game.board().cell(Position::BottomLeft).mark(),
        Some(Mark::X)
    );
}

#[test]
fn test_exactly_eight_lines() {
    assert_eq!(rules::LINES.len(), 8);
    let mut lines = rules::LINES.to_vec();
    lines.sort_by_key(|line| line.map(Position::index));
    lines.dedup();
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_outcome_serializes() {
    let outcome = TurnOutcome::Continue {
        next: Player::new("Bob", Mark::O),
    };
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Continue": { "next": { "name": "Bob", "mark": "O" } } })
    );
}
