//! Move engine integration tests.
//!
//! These tests drive `MoveEngine` through full games and random operation
//! sequences, checking the board invariants after every step.

use hanoi_engine::core::{Board, GameStatus, Move, PegId};
use hanoi_engine::rules::MoveEngine;
use proptest::prelude::*;

const SOLUTION_3: [(u8, u8); 7] = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

fn peg(i: u8) -> PegId {
    PegId::new(i)
}

/// Optimal solution for `n` disks from `from` to `to`.
fn solve(n: u32, from: u8, to: u8, via: u8, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    solve(n - 1, from, via, to, out);
    out.push(Move::from((from, to)));
    solve(n - 1, via, to, from, out);
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Test that initialize loads the left peg largest-first.
#[test]
fn test_initialize_layout() {
    let engine = MoveEngine::new(3);
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.pegs, [vec![3, 2, 1], vec![], vec![]]);
    assert_eq!(snapshot.move_count, 0);
    assert!(!snapshot.finished);
}

/// Test the canonical 7-move solution for 3 disks.
#[test]
fn test_canonical_three_disk_win() {
    let mut engine = MoveEngine::new(3);

    for (i, &(s, d)) in SOLUTION_3.iter().enumerate() {
        assert!(engine.apply_move(peg(s), peg(d)), "move {} ({} -> {}) rejected", i + 1, s, d);
        if i + 1 < SOLUTION_3.len() {
            assert!(!engine.check_win());
        }
    }

    assert!(engine.check_win());
    assert_eq!(engine.status(), GameStatus::Finished);
    assert_eq!(engine.snapshot().pegs, [vec![], vec![], vec![3, 2, 1]]);
    assert_eq!(engine.session().move_count(), 7);
}

/// Test that placing a larger disk on a smaller one is rejected.
#[test]
fn test_illegal_move_rejected() {
    let mut engine = MoveEngine::new(3);

    assert!(engine.apply_move(peg(0), peg(1)));
    let before = engine.snapshot();

    assert!(!engine.apply_move(peg(0), peg(1)));
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.session().history().len(), 1);
}

/// Test that undo reopens a finished game.
#[test]
fn test_undo_past_win() {
    let mut engine = MoveEngine::new(3);
    for (s, d) in SOLUTION_3 {
        assert!(engine.apply_move(peg(s), peg(d)));
    }
    assert!(engine.check_win());
    assert!(!engine.apply_move(peg(2), peg(0)));

    assert!(engine.undo_last());
    assert!(!engine.session().is_finished());
    assert_eq!(engine.session().move_count(), 6);
    assert!(!engine.check_win());
    assert_eq!(engine.snapshot().pegs, [vec![1], vec![], vec![3, 2]]);

    // Play resumes and the win can be reached again.
    assert!(engine.apply_move(peg(0), peg(2)));
    assert!(engine.check_win());
}

/// Test undo on a fresh session.
#[test]
fn test_undo_empty_history() {
    let mut engine = MoveEngine::new(3);

    assert!(!engine.undo_last());
    assert_eq!(engine.session().move_count(), 0);
    assert_eq!(engine.snapshot().pegs, [vec![3, 2, 1], vec![], vec![]]);
}

/// Test that initialize reopens a finished game as a fresh puzzle.
#[test]
fn test_initialize_after_win() {
    let mut engine = MoveEngine::new(3);
    for mv in SOLUTION_3 {
        assert!(engine.apply(Move::from(mv)));
    }
    assert!(engine.check_win());
    assert_eq!(engine.status(), GameStatus::Finished);
    assert!(!engine.apply_move(peg(2), peg(0)));

    engine.initialize(3);

    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(!engine.session().is_finished());
    assert!(engine.session().history().is_empty());
    assert_eq!(engine.session().move_count(), 0);
    assert_eq!(engine.snapshot().pegs, [vec![3, 2, 1], vec![], vec![]]);
    assert!(engine.apply_move(peg(0), peg(2)));
}

/// Test that a move after an undo discards the undone move.
#[test]
fn test_no_redo_after_undo() {
    let mut engine = MoveEngine::new(3);

    assert!(engine.apply_move(peg(0), peg(2)));
    assert!(engine.apply_move(peg(0), peg(1)));
    assert!(engine.undo_last());
    assert!(engine.apply_move(peg(2), peg(1)));

    let history: Vec<_> = engine.session().history().iter().map(|r| r.as_move()).collect();
    assert_eq!(history, vec![Move::from((0, 2)), Move::from((2, 1))]);
    assert_eq!(engine.session().move_count(), 2);
}

/// Test that out-of-range pegs behave like any illegal move.
#[test]
fn test_out_of_range_pegs() {
    let mut engine = MoveEngine::new(3);
    let before = engine.session().clone();

    assert!(!engine.is_legal_move(peg(3), peg(0)));
    assert!(!engine.is_legal_move(peg(0), peg(3)));
    assert!(!engine.apply_move(peg(200), peg(1)));
    assert_eq!(engine.session(), &before);
}

/// Test that independent engines do not share state.
#[test]
fn test_independent_engines() {
    let mut a = MoveEngine::new(3);
    let b = MoveEngine::new(3);

    assert!(a.apply_move(peg(0), peg(2)));
    assert_eq!(a.session().move_count(), 1);
    assert_eq!(b.session().move_count(), 0);
}

/// Test optimal solutions for every playable size.
#[test]
fn test_optimal_solutions_win() {
    for n in 3..=10 {
        let mut engine = MoveEngine::new(n);
        let mut moves = Vec::new();
        solve(n, 0, 2, 1, &mut moves);

        for mv in moves {
            assert!(engine.apply(mv));
        }
        assert!(engine.check_win(), "{} disks not solved", n);
        assert_eq!(u64::from(engine.session().move_count()), hanoi_engine::minimum_moves(n));
    }
}

// =============================================================================
// Property Tests
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Move(u8, u8),
    Undo,
    CheckWin,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..4, 0u8..4).prop_map(|(s, d)| Op::Move(s, d)),
        2 => Just(Op::Undo),
        1 => Just(Op::CheckWin),
    ]
}

proptest! {
    /// Board stays a strictly ordered permutation of 1..=n through any sequence.
    #[test]
    fn prop_board_invariants_hold(n in 3u32..=7, ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = MoveEngine::new(n);
        prop_assert!(engine.session().board().is_well_formed(n));

        for op in ops {
            match op {
                Op::Move(s, d) => { engine.apply_move(peg(s), peg(d)); }
                Op::Undo => { engine.undo_last(); }
                Op::CheckWin => { engine.check_win(); }
            }
            prop_assert!(engine.session().board().is_well_formed(n));
            prop_assert_eq!(engine.session().history().len(), engine.session().move_count() as usize);
        }
    }

    /// Self-moves are illegal on every non-empty peg in every reachable state.
    #[test]
    fn prop_self_move_illegal(n in 3u32..=6, ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut engine = MoveEngine::new(n);
        for op in ops {
            match op {
                Op::Move(s, d) => { engine.apply_move(peg(s), peg(d)); }
                Op::Undo => { engine.undo_last(); }
                Op::CheckWin => { engine.check_win(); }
            }
            for p in PegId::all() {
                if engine.session().board().height(p) > 0 {
                    prop_assert!(!engine.is_legal_move(p, p));
                }
            }
        }
    }

    /// Applying a legal move then undoing it restores the session.
    #[test]
    fn prop_apply_then_undo_is_identity(
        n in 3u32..=6,
        setup in prop::collection::vec((0u8..3, 0u8..3), 0..60),
        last in (0u8..3, 0u8..3),
    ) {
        let mut engine = MoveEngine::new(n);
        for (s, d) in setup {
            engine.apply_move(peg(s), peg(d));
        }

        let before = engine.session().clone();
        let (s, d) = last;
        if engine.apply_move(peg(s), peg(d)) {
            prop_assert!(engine.undo_last());
            prop_assert_eq!(engine.session().board(), before.board());
            prop_assert_eq!(engine.session().move_count(), before.move_count());
            prop_assert_eq!(engine.session().is_finished(), before.is_finished());
        } else {
            prop_assert_eq!(engine.session(), &before);
        }
    }

    /// The legality predicate matches the documented rule.
    #[test]
    fn prop_legality_matches_rule(
        n in 3u32..=6,
        setup in prop::collection::vec((0u8..3, 0u8..3), 0..60),
        s in 0u8..5,
        d in 0u8..5,
    ) {
        let mut engine = MoveEngine::new(n);
        for (a, b) in setup {
            engine.apply_move(peg(a), peg(b));
        }

        let board: &Board = engine.session().board();
        let expected = s < 3
            && d < 3
            && match (board.top(peg(s)), board.top(peg(d))) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(top), Some(onto)) => top < onto,
            };
        prop_assert_eq!(engine.is_legal_move(peg(s), peg(d)), expected);
    }
}
