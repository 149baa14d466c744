//! Tests for the match controller: turns, outcomes and scoring.

use tictactoe_core::{InvalidMove, Mark, Match, MatchState, MoveOutcome};

/// Plays `moves` in order, asserting none are rejected, returning the last outcome.
fn play_all(game: &mut Match, moves: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &pos in moves {
        let outcome = game.play(pos);
        assert!(
            !matches!(outcome, MoveOutcome::Rejected(_)),
            "move {pos} rejected: {outcome:?}"
        );
        last = Some(outcome);
    }
    last.expect("at least one move")
}

/// X takes the top row while O plays 3 and 4.
const X_WINS: [usize; 5] = [0, 3, 1, 4, 2];

/// Ends with [X,O,X, X,X,O, O,X,O].
const DRAW: [usize; 9] = [0, 1, 2, 5, 3, 6, 4, 8, 7];

#[test]
fn test_turns_alternate() {
    let mut game = Match::new();
    assert_eq!(game.current_player(), game.player1());

    assert_eq!(game.play(4), MoveOutcome::NextTurn(Mark::O));
    assert_eq!(game.current_player(), game.player2());

    assert_eq!(game.play(0), MoveOutcome::NextTurn(Mark::X));
    assert_eq!(game.current_player(), game.player1());
}

#[test]
fn test_out_of_range_move_is_rejected() {
    let mut game = Match::new();
    assert_eq!(game.play(9), MoveOutcome::Rejected(InvalidMove::OutOfRange(9)));
    assert_eq!(game.state(), MatchState::AwaitingMove(Mark::X));
    assert_eq!(game.board().mark_count(), 0);
}

#[test]
fn test_win_increments_only_winner_score() {
    let mut game = Match::new();
    assert_eq!(play_all(&mut game, &X_WINS), MoveOutcome::Won(Mark::X));

    assert_eq!(game.state(), MatchState::Won(Mark::X));
    assert_eq!(game.score(Mark::X), 1);
    assert_eq!(game.score(Mark::O), 0);
    assert!(!game.is_accepting_moves());
}

#[test]
fn test_second_player_can_win() {
    let mut game = Match::new();
    // O takes the middle column.
    let outcome = play_all(&mut game, &[0, 1, 2, 4, 3, 7]);
    assert_eq!(outcome, MoveOutcome::Won(Mark::O));
    assert_eq!(game.score(Mark::O), 1);
    assert_eq!(game.score(Mark::X), 0);
}

#[test]
fn test_winning_last_move_is_a_win_not_a_draw() {
    let mut game = Match::new();
    // X's ninth mark fills the board and completes the left column.
    let outcome = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 8, 6]);

    assert_eq!(outcome, MoveOutcome::Won(Mark::X));
    assert_eq!(game.state(), MatchState::Won(Mark::X));
    assert_eq!(game.scores().score(Mark::X), 1);
    assert_eq!(game.scores().score(Mark::O), 0);
    assert!(game.board().is_full());
}

#[test]
fn test_draw_leaves_scores_untouched() {
    let mut game = Match::new();
    assert_eq!(play_all(&mut game, &DRAW), MoveOutcome::Draw);

    assert_eq!(game.state(), MatchState::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.score(Mark::X), 0);
    assert_eq!(game.score(Mark::O), 0);
}

#[test]
fn test_moves_after_round_end_are_rejected() {
    let mut game = Match::new();
    play_all(&mut game, &X_WINS);
    let board = game.board().clone();

    assert_eq!(game.play(8), MoveOutcome::Rejected(InvalidMove::RoundOver));
    assert_eq!(game.board(), &board);
    assert_eq!(game.score(Mark::X), 1);
}

#[test]
fn test_reset_restores_empty_board_and_first_player() {
    let mut game = Match::new();
    game.play(4);
    assert_eq!(game.current_player().mark(), Mark::O);

    game.reset();
    assert!(game.board().cells().iter().all(|cell| cell.is_empty()));
    assert_eq!(game.current_player().mark(), Mark::X);
    assert_eq!(game.state(), MatchState::AwaitingMove(Mark::X));
}

#[test]
fn test_scores_persist_across_rounds() {
    let mut game = Match::new();
    play_all(&mut game, &X_WINS);
    game.reset();
    assert!(game.is_accepting_moves());
    play_all(&mut game, &X_WINS);

    assert_eq!(game.score(Mark::X), 2);
    assert_eq!(game.score(Mark::O), 0);
}

#[test]
fn test_reset_scores_zeroes_both_and_keeps_board() {
    let mut game = Match::new();
    play_all(&mut game, &X_WINS);
    game.reset();
    play_all(&mut game, &[0, 1, 2, 4, 3, 7]);
    game.reset();
    game.play(4);

    game.reset_scores();
    assert_eq!(game.score(Mark::X), 0);
    assert_eq!(game.score(Mark::O), 0);
    assert_eq!(game.board().mark_count(), 1);
    assert_eq!(game.current_player().mark(), Mark::O);
}
