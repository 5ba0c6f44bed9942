//! Engine behaviour: lifecycle, scoring, spawning, win/lose signalling

use tui_2048::core::{BoardError, EventLog, Game, GameConfig, GameEvent};
use tui_2048::types::{Direction, GameStatus, Tile};

fn seeded(rows: Vec<Vec<Tile>>) -> Game {
    Game::with_config(GameConfig::default().with_seed(2024).with_initial_grid(rows)).unwrap()
}

fn non_zero(game: &Game) -> usize {
    game.board().cells().iter().filter(|&&v| v != 0).count()
}

fn checkerboard() -> Vec<Vec<Tile>> {
    vec![
        vec![2, 4, 8, 16],
        vec![16, 8, 4, 2],
        vec![2, 4, 8, 16],
        vec![16, 8, 4, 2],
    ]
}

#[test]
fn test_start_places_two_tiles() {
    for seed in 0..50 {
        let mut game = Game::with_config(GameConfig::default().with_seed(seed)).unwrap();
        assert_eq!(game.status(), GameStatus::Idle);
        game.start();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(non_zero(&game), 2, "seed {seed}");
        assert!(game
            .board()
            .cells()
            .iter()
            .all(|&v| v == 0 || v == 2 || v == 4));
        assert_eq!(game.score(), 0);
    }
}

#[test]
fn test_from_grid_validation() {
    assert_eq!(
        Game::from_grid(vec![vec![2, 0, 0], vec![0, 0, 0]]).unwrap_err(),
        BoardError::NotSquare {
            row: 0,
            len: 3,
            size: 2
        }
    );
    assert_eq!(
        Game::from_grid(vec![vec![2]]).unwrap_err(),
        BoardError::TooSmall { size: 1 }
    );
    assert_eq!(
        Game::from_grid(vec![vec![2, 0], vec![0, 12]]).unwrap_err(),
        BoardError::InvalidTile {
            row: 1,
            col: 1,
            value: 12
        }
    );
    assert!(Game::from_grid(checkerboard()).is_ok());
}

#[test]
fn test_concrete_row_scenario() {
    let mut game = seeded(vec![
        vec![2, 2, 4, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let outcome = game.move_tiles(Direction::Left);

    assert_eq!(outcome.score_gained, 4);
    assert_eq!(game.score(), 4);
    let row = &game.state()[0];
    assert_eq!(row[..2].to_vec(), vec![4, 4]);
}

#[test]
fn test_no_op_moves_never_score_or_spawn() {
    let compacted = vec![
        vec![2, 4, 8, 16],
        vec![4, 8, 16, 32],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ];
    let mut game = seeded(compacted.clone());
    for _ in 0..5 {
        for dir in [Direction::Left, Direction::Up] {
            let outcome = game.move_tiles(dir);
            assert!(!outcome.moved);
            assert_eq!(outcome.spawned, None);
            assert_eq!(outcome.score_gained, 0);
        }
    }
    assert_eq!(game.state(), compacted);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_largest_tile_pair_is_dead_not_overflowed() {
    let top = 1 << 31;
    let mut game = seeded(vec![vec![top, top], vec![0, 0]]);

    let outcome = game.move_tiles(Direction::Left);
    assert!(!outcome.moved);
    assert_eq!(outcome.score_gained, 0);
    assert_eq!(game.state(), vec![vec![top, top], vec![0, 0]]);

    // Two 2^30 tiles still merge into the largest tile.
    let mut game = Game::with_config(
        GameConfig::default()
            .with_seed(2024)
            .with_win_tile(top)
            .with_initial_grid(vec![vec![1 << 30, 1 << 30], vec![0, 0]]),
    )
    .unwrap();
    let outcome = game.move_tiles(Direction::Left);
    assert_eq!(outcome.score_gained, top);
    assert_eq!(game.state()[0][0], top);
    assert_eq!(game.status(), GameStatus::Win);
}

#[test]
fn test_oversized_board_is_rejected() {
    assert_eq!(
        Game::with_config(GameConfig::default().with_size(10_000)).unwrap_err(),
        BoardError::TooLarge { size: 10_000 }
    );
}

#[test]
fn test_score_delta_matches_merged_values() {
    let mut game = seeded(vec![
        vec![2, 2, 4, 4],
        vec![8, 8, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let before = game.score();
    let outcome = game.move_tiles(Direction::Left);
    assert_eq!(outcome.score_gained, 4 + 8 + 16);
    assert_eq!(game.score() - before, outcome.score_gained);
    assert_eq!(outcome.merges, 3);
}

#[test]
fn test_spawn_lands_on_previously_empty_cell() {
    let mut game = Game::with_config(GameConfig::default().with_seed(77)).unwrap();
    game.start();

    for i in 0..200 {
        let dir = Direction::ALL[i % 4];
        let mut slid = game.board().clone();
        slid.slide(dir);

        let outcome = game.move_tiles(dir);
        if game.status() == GameStatus::Lose {
            break;
        }
        match outcome.spawned {
            Some(tile) => {
                assert!(outcome.moved);
                assert!(tile.value == 2 || tile.value == 4);
                assert_eq!(slid.get(tile.row, tile.col), Some(0));
                let before = slid.cells().iter().filter(|&&v| v != 0).count();
                assert_eq!(non_zero(&game), before + 1);
            }
            None => assert!(!outcome.moved),
        }
    }
}

#[test]
fn test_score_never_decreases() {
    let mut game = Game::with_config(GameConfig::default().with_seed(5)).unwrap();
    game.start();

    let mut last = 0;
    for i in 0..500 {
        game.move_tiles(Direction::ALL[(i * 7 + i / 3) % 4]);
        assert!(game.score() >= last);
        last = game.score();
    }
}

#[test]
fn test_loss_freezes_board_and_score() {
    let mut game = seeded(checkerboard());
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    let outcome = game.move_tiles(Direction::Left);
    assert_eq!(outcome.status, GameStatus::Lose);
    assert_eq!(game.state(), checkerboard());
    assert_eq!(game.score(), 0);

    for dir in Direction::ALL {
        game.move_tiles(dir);
    }
    assert_eq!(game.status(), GameStatus::Lose);
    // Aborted moves send neither board nor score, and lose fires once.
    assert_eq!(log.drain(), vec![GameEvent::Status(GameStatus::Lose)]);
}

#[test]
fn test_win_fires_once_across_moves() {
    let mut game = seeded(vec![
        vec![1024, 0, 0, 0],
        vec![0, 1024, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    assert_eq!(game.move_tiles(Direction::Left).status, GameStatus::Playing);
    assert_eq!(game.move_tiles(Direction::Up).status, GameStatus::Win);
    assert_eq!(game.max_tile(), 2048);

    for dir in Direction::ALL {
        game.move_tiles(dir);
    }
    assert_eq!(game.status(), GameStatus::Win);
    assert_eq!(log.statuses(), vec![GameStatus::Win]);
}

#[test]
fn test_preplaced_win_tile_is_detected_on_next_move() {
    let mut game = seeded(vec![
        vec![2048, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let outcome = game.move_tiles(Direction::Left);
    assert!(!outcome.moved);
    assert_eq!(game.status(), GameStatus::Win);
}

#[test]
fn test_restart_from_terminal_states() {
    let mut lost = seeded(checkerboard());
    lost.move_tiles(Direction::Up);
    assert_eq!(lost.status(), GameStatus::Lose);
    lost.restart();
    assert_eq!(lost.status(), GameStatus::Playing);
    assert_eq!(lost.score(), 0);
    assert_eq!(non_zero(&lost), 2);

    let mut won = seeded(vec![vec![1024, 1024], vec![0, 0]]);
    won.move_tiles(Direction::Right);
    assert_eq!(won.status(), GameStatus::Win);
    won.restart();
    assert_eq!(won.status(), GameStatus::Playing);
    assert_eq!(won.size(), 2);
    assert_eq!(non_zero(&won), 2);
}

#[test]
fn test_observers_see_every_mutation() {
    let mut game = Game::with_config(GameConfig::default().with_seed(11)).unwrap();
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    game.start();
    let events = log.drain();
    assert_eq!(events[0], GameEvent::Score(0));
    assert_eq!(events[1], GameEvent::Board(game.board().cells().to_vec()));

    game.move_tiles(Direction::Left);
    assert_eq!(log.drain().len(), 2);

    game.restart();
    let events = log.drain();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], GameEvent::Board(game.board().cells().to_vec()));
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let mut game = Game::with_config(GameConfig::default().with_seed(31337)).unwrap();
        game.start();
        for i in 0..100 {
            game.move_tiles(Direction::ALL[i % 4]);
        }
        game.snapshot()
    };
    assert_eq!(play(), play());
}
