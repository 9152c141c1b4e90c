//! Move search and computer opponent integration tests.

use lineup::{
    ComputerOpponent, DiscKind, DiscStock, GameConfig, GameRng, Move, MoveEngine, MoveSearch,
    Player,
};

/// A 6x7 engine with ordinary discs at the given `(row, col, owner)` cells
/// and player one to move.
fn position(discs: &[(usize, usize, Player)], stock_p1: DiscStock) -> MoveEngine {
    let mut engine = MoveEngine::new(6, 7);
    let mut owners = engine.owners();
    for &(row, col, player) in discs {
        owners[row][col] = Some(player);
    }
    let kinds = engine.kinds();
    engine
        .restore_state(
            &owners,
            &kinds,
            Player::One,
            stock_p1,
            DiscStock::new(10, 2, 2),
        )
        .unwrap();
    engine
}

// =============================================================================
// FindWinningMove
// =============================================================================

#[test]
fn test_single_winning_move_found_without_mutation() {
    let mut engine = position(
        &[
            (0, 0, Player::One),
            (1, 0, Player::One),
            (2, 0, Player::One),
            (0, 1, Player::Two),
            (0, 2, Player::Two),
            (0, 4, Player::Two),
        ],
        DiscStock::new(10, 0, 0),
    );
    let before = engine.clone();

    let found = MoveSearch::find_winning_move(&mut engine);

    assert_eq!(found, Some(Move::new(0, DiscKind::Ordinary)));
    assert_eq!(engine, before);
}

#[test]
fn test_winning_move_needs_magnetic_pull() {
    let mut engine = position(
        &[
            (0, 0, Player::Two),
            (0, 1, Player::Two),
            (0, 2, Player::Two),
            (1, 0, Player::One),
            (1, 1, Player::One),
            (1, 2, Player::One),
            (0, 3, Player::One),
            (1, 3, Player::Two),
            (2, 3, Player::Two),
        ],
        DiscStock::new(10, 2, 2),
    );
    let before = engine.clone();

    assert!(!MoveSearch::try_move_wins(&mut engine, 3, DiscKind::Ordinary));
    assert_eq!(
        MoveSearch::find_winning_move(&mut engine),
        Some(Move::new(3, DiscKind::Magnetic))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_winning_move_needs_boring_clear() {
    let mut engine = position(
        &[
            (0, 0, Player::One),
            (0, 1, Player::One),
            (0, 2, Player::One),
            (0, 3, Player::Two),
            (1, 3, Player::Two),
        ],
        DiscStock::new(10, 0, 1),
    );
    let before = engine.clone();

    assert_eq!(
        MoveSearch::find_winning_move(&mut engine),
        Some(Move::new(3, DiscKind::Boring))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_move_that_also_wins_for_opponent_is_not_a_win() {
    // A magnetic swap in column 3 completes a line for each player.
    let mut engine = position(
        &[
            // Player two holds row 3 in columns 0..3 waiting for (3, 3).
            (0, 0, Player::One),
            (1, 0, Player::One),
            (2, 0, Player::Two),
            (3, 0, Player::Two),
            (0, 1, Player::One),
            (1, 1, Player::Two),
            (2, 1, Player::One),
            (3, 1, Player::Two),
            (0, 2, Player::Two),
            (1, 2, Player::One),
            (2, 2, Player::One),
            (3, 2, Player::Two),
            // Column 3: P1 ordinary at 0, P2 at 1 and 2.
            (0, 3, Player::One),
            (1, 3, Player::Two),
            (2, 3, Player::Two),
            // Player one holds row 1 in columns 4..6.
            (0, 4, Player::Two),
            (1, 4, Player::One),
            (0, 5, Player::Two),
            (1, 5, Player::One),
            (0, 6, Player::Two),
            (1, 6, Player::One),
        ],
        DiscStock::new(0, 1, 0),
    );

    // The magnetic disc lands at (3, 3), swaps with (1, 3), and completes
    // player one's row 1 while pushing player two's disc up into row 3.
    assert!(!MoveSearch::try_move_wins(&mut engine, 3, DiscKind::Magnetic));

    let snapshot = engine.snapshot();
    let row = engine.drop_disc(3, DiscKind::Magnetic).unwrap();
    let changed = engine.apply_disc_effect(row, 3);
    let wins = engine.win_check(&changed);
    engine.rollback(snapshot);

    assert!(wins.mover_won && wins.opponent_won);
}

#[test]
fn test_no_winning_move_on_open_board() {
    let mut engine = MoveEngine::new(6, 7);
    engine.play_move(3, DiscKind::Ordinary).unwrap();
    let before = engine.clone();

    assert_eq!(MoveSearch::find_winning_move(&mut engine), None);
    assert_eq!(engine, before);
}

// =============================================================================
// RandomMove
// =============================================================================

#[test]
fn test_random_move_respects_stock_and_full_columns() {
    let mut engine = MoveEngine::new(6, 7);
    for _ in 0..6 {
        engine.play_move(0, DiscKind::Ordinary).unwrap();
    }
    let mut engine = {
        let (owners, kinds) = (engine.owners(), engine.kinds());
        engine
            .restore_state(
                &owners,
                &kinds,
                Player::One,
                DiscStock::new(0, 1, 0),
                DiscStock::default(),
            )
            .unwrap();
        engine
    };

    let mut rng = GameRng::new(17);
    for _ in 0..50 {
        let mv = MoveSearch::random_move(&engine, &mut rng).unwrap();
        assert_ne!(mv.col, 0);
        assert_eq!(mv.kind, DiscKind::Magnetic);
    }

    engine.switch_turn();
    assert_eq!(MoveSearch::random_move(&engine, &mut rng), None);
}

// =============================================================================
// ComputerOpponent
// =============================================================================

#[test]
fn test_computer_games_terminate() {
    // 9x9 and 7x9 have an odd cell count, so stocks run out before the
    // board fills.
    for (rows, cols) in [(6, 7), (9, 9), (7, 9)] {
        for seed in 0..20 {
            let config = GameConfig::new(rows, cols).with_seed(seed);
            let mut engine = MoveEngine::with_config(&config).unwrap();
            let mut bot = ComputerOpponent::from_config(&config);

            let mut turns = 0;
            while !engine.status().is_terminal() {
                let report = bot.take_turn(&mut engine).unwrap();
                assert!(
                    report.is_some(),
                    "{rows}x{cols} seed {seed}: no legal move in a running game"
                );
                assert_eq!(report.map(|r| r.status), Some(engine.status()));
                turns += 1;
                assert!(engine.grid().is_settled());
                assert!(turns < 1000, "{rows}x{cols} seed {seed} did not end");
            }
            assert!(engine.status().is_terminal());
        }
    }
}

#[test]
fn test_computer_takes_immediate_win() {
    let mut engine = position(
        &[
            (0, 0, Player::One),
            (1, 0, Player::One),
            (2, 0, Player::One),
        ],
        DiscStock::new(10, 2, 2),
    );

    let mut bot = ComputerOpponent::new(5);
    assert_eq!(
        bot.choose_move(&mut engine),
        Some(Move::new(0, DiscKind::Ordinary))
    );
}
