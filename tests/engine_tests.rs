//! Engine integration tests: full games through the public API.

use rust_2048::{Direction, EngineError, Game, GameConfig, Status, TileSource};

/// Always picks the first empty cell and always spawns a 2.
struct FirstCell;

impl TileSource for FirstCell {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }

    fn chance(&mut self, _probability: f64) -> bool {
        false
    }
}

fn game_from(rows: &[[u32; 4]; 4]) -> Game<FirstCell> {
    Game::builder()
        .initial_state(rows)
        .tile_source(FirstCell)
        .build()
        .unwrap()
}

// =============================================================================
// Reference Examples
// =============================================================================

#[test]
fn test_merge_pair_left() {
    let mut game = game_from(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    game.start().unwrap();

    assert!(game.move_tiles(Direction::Left).unwrap());
    assert_eq!(game.state()[0], vec![4, 0, 0, 0]);
    assert_eq!(game.score(), 4);
}

#[test]
fn test_distinct_row_does_not_move_left() {
    let mut game = game_from(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    game.start().unwrap();

    assert!(!game.move_tiles(Direction::Left).unwrap());
    assert_eq!(game.state()[0], vec![2, 4, 8, 16]);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_stuck_board_loses() {
    let mut game = game_from(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    game.start().unwrap();
    assert_eq!(game.check_game_over(), Status::Lose);
    assert!(game.status().is_terminal());
}

#[test]
fn test_win_tile_anywhere_wins() {
    for (r, c) in [(0, 0), (1, 3), (3, 2)] {
        let mut rows = [[0u32; 4]; 4];
        rows[r][c] = 2048;
        let mut game = game_from(&rows);
        game.start().unwrap();
        assert_eq!(game.check_game_over(), Status::Win);
    }
}

#[test]
fn test_restart_then_start_gives_two_tiles() {
    let mut game = Game::builder().seed(5).build().unwrap();
    game.start().unwrap();
    game.restart();
    assert_eq!(game.status(), Status::Idle);

    game.start().unwrap();
    assert_eq!(game.board().tile_count(), 2);
    for &v in game.board().cells() {
        assert!(v == 0 || v == 2 || v == 4);
    }
}

// =============================================================================
// Status Machine
// =============================================================================

#[test]
fn test_status_lifecycle() {
    let mut game = game_from(&[[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    assert_eq!(game.status(), Status::Idle);

    game.start().unwrap();
    assert_eq!(game.status(), Status::Playing);

    let report = game.play_turn(Direction::Left).unwrap();
    assert!(report.moved);
    assert_eq!(report.score_delta, 2048);
    assert_eq!(report.status, Status::Win);

    // terminal: further turns are ignored
    let report = game.play_turn(Direction::Right).unwrap();
    assert!(!report.moved);
    assert_eq!(game.status(), Status::Win);

    game.restart();
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_turn_spawn_keeps_game_alive() {
    let mut game = game_from(&[[2, 2, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]]);
    game.start().unwrap();

    let report = game.play_turn(Direction::Left).unwrap();
    assert!(report.moved);
    assert_eq!(report.spawned, Some((0, 3)));
    assert_eq!(game.state()[0], vec![4, 8, 16, 2]);
    // column 0 now reads 4, 4 so a move remains
    assert_eq!(report.status, Status::Playing);
}

#[test]
fn test_turn_into_loss() {
    // left merges the 2s, the spawn fills the last gap, nothing can merge
    let mut game = game_from(&[[2, 2, 8, 32], [8, 16, 4, 8], [4, 32, 8, 16], [8, 4, 16, 32]]);
    game.start().unwrap();

    let report = game.play_turn(Direction::Left).unwrap();
    assert!(report.moved);
    assert_eq!(report.score_delta, 4);
    assert_eq!(game.state()[0], vec![4, 8, 32, 2]);
    assert_eq!(report.status, Status::Lose);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_win_beats_simultaneous_loss() {
    let mut game = game_from(&[[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    game.start().unwrap();
    assert!(game.has_no_moves());
    assert!(game.has_win_tile());
    assert_eq!(game.check_game_over(), Status::Win);
}

#[test]
fn test_custom_win_tile() {
    let mut game = Game::builder()
        .config(GameConfig::default().with_win_tile(64))
        .initial_state(&[[32u32, 32, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
        .tile_source(FirstCell)
        .build()
        .unwrap();
    game.start().unwrap();

    let report = game.play_turn(Direction::Right).unwrap();
    assert_eq!(report.status, Status::Win);
}

// =============================================================================
// Restart Asymmetry
// =============================================================================

#[test]
fn test_restart_with_tiles_blanks_board() {
    let rows = [[0, 0, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut game = game_from(&rows);
    game.start().unwrap();

    game.restart();
    assert!(game.board().is_blank());
}

#[test]
fn test_restart_of_blank_board_restores_initial_state() {
    let rows = [[0, 0, 0, 0], [0, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
    let mut game = game_from(&rows);
    game.start().unwrap();

    game.restart();
    game.restart();
    assert_eq!(game.state()[1], vec![0, 8, 0, 0]);
    assert_eq!(game.board().tile_count(), 1);
    assert_eq!(game.status(), Status::Idle);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_with_initial_state_validates() {
    assert!(Game::with_initial_state(&[[0u32; 4]; 4]).is_ok());

    let err = Game::with_initial_state(&[[0u32; 5]; 5]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidBoardState(_)));

    let err = Game::with_initial_state(&[vec![2u32, 0, 0, 0], vec![0, 0, 0]]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidBoardState(_)));

    let err = Game::with_initial_state(&[[6u32, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidBoardState(_)));
}

#[test]
fn test_state_is_a_copy() {
    let mut game = game_from(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let mut snapshot = game.state();
    snapshot[0][0] = 1024;

    assert_eq!(game.board().get(0, 0), 2);
    game.start().unwrap();
    assert_ne!(game.state(), snapshot);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_seeded_games_replay_identically() {
    let play = |seed: u64| {
        let mut game = Game::builder().seed(seed).build().unwrap();
        game.start().unwrap();
        let mut reports = Vec::new();
        for dir in Direction::ALL.iter().cycle().take(200) {
            reports.push(game.play_turn(*dir).unwrap());
            if game.status() != Status::Playing {
                break;
            }
        }
        (game.state(), game.score(), reports)
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_rng_state_resumes_sequence() {
    let mut game = Game::builder().seed(11).build().unwrap();
    game.start().unwrap();
    let saved = game.rng_state();
    assert_eq!(saved.seed, 11);

    let mut a = rust_2048::GameRng::from_state(&saved);
    let mut b = rust_2048::GameRng::from_state(&saved);
    assert_eq!(a.pick_index(16), b.pick_index(16));
}

#[test]
fn test_full_game_keeps_invariants() {
    let mut game = Game::builder().seed(31337).build().unwrap();
    game.start().unwrap();

    let mut last_score = 0;
    let mut turns = 0;
    while game.status() == Status::Playing && turns < 5_000 {
        let legal = game.legal_moves();
        let Some(&dir) = legal.first() else {
            break;
        };
        let report = game.play_turn(dir).unwrap();
        assert!(report.moved);
        assert!(game.score() >= last_score);
        last_score = game.score();

        for &v in game.board().cells() {
            assert!(v == 0 || (v >= 2 && v.is_power_of_two()));
        }
        turns += 1;
    }

    assert!(turns > 0);
    assert_ne!(game.status(), Status::Idle);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_turn_report_json() {
    let mut game = game_from(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    game.start().unwrap();
    let report = game.play_turn(Direction::Left).unwrap();

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["moved"], true);
    assert_eq!(json["score_delta"], 4);
    assert_eq!(json["status"], "playing");

    let board_json = serde_json::to_string(game.board()).unwrap();
    assert_eq!(board_json, "[[4,2,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]");
}

// =============================================================================
// Configuration Files
// =============================================================================

fn config_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join(name)
}

#[test]
fn test_classic_config_matches_default() {
    let config = GameConfig::from_toml(config_path("classic.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_big_strict_config_plays() {
    let config = GameConfig::from_toml(config_path("big-strict.toml")).unwrap();
    assert_eq!(config.size, 6);
    assert!(config.strict);

    let mut game = Game::builder().config(config).seed(3).build().unwrap();
    assert!(game.play_turn(Direction::Left).is_err());

    game.start().unwrap();
    assert_eq!(game.board().size(), 6);
    assert_eq!(game.board().tile_count(), 2);
    assert!(game.start().is_err());
}
