//! Board tests - moves, spawning, and access contracts

use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{Board, Traversals};
use tui_2048::types::{Cell, Direction, Pos};

/// Board of the given size with every cell cleared
fn blank(height: usize, width: usize, seed: u64) -> Board {
    let mut board = Board::new(height, width, seed);
    for row in 0..height {
        for col in 0..width {
            board.set_tile(row, col, 0);
        }
    }
    board
}

fn load(board: &mut Board, rows: &[&[Cell]]) {
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            board.set_tile(row, col, value);
        }
    }
}

/// Assert the board equals `expected` apart from exactly one spawned tile
/// sitting on a cell that `expected` leaves empty.
fn assert_moved_with_spawn(board: &Board, expected: &[&[Cell]]) {
    let mut spawned = Vec::new();
    for (row, values) in expected.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let actual = board.get_tile(row, col);
            if actual == value {
                continue;
            }
            assert_eq!(value, 0, "cell ({}, {}) was {} expected {}", row, col, actual, value);
            assert!(actual == 2 || actual == 4, "spawned {} at ({}, {})", actual, row, col);
            spawned.push((row, col));
        }
    }
    assert_eq!(spawned.len(), 1, "expected exactly one spawn, board:\n{}", board);
}

#[test]
fn test_board_dimensions() {
    let board = Board::new(3, 6, 1);
    assert_eq!(board.height(), 3);
    assert_eq!(board.width(), 6);
    assert_eq!(board.cells().len(), 18);
}

#[test]
fn test_dimensions_survive_reset_and_moves() {
    let mut board = Board::new(5, 2, 11);
    for dir in Direction::ALL {
        board.make_move(dir);
        board.reset();
        assert_eq!(board.height(), 5);
        assert_eq!(board.width(), 2);
    }
}

#[test]
fn test_new_board_has_two_tiles() {
    for seed in 0..20 {
        let board = Board::new(4, 4, seed);
        let tiles: Vec<Cell> = board.cells().iter().copied().filter(|&c| c != 0).collect();
        assert_eq!(tiles.len(), 2, "seed {}", seed);
        assert!(tiles.iter().all(|&t| t == 2 || t == 4));
    }
}

#[test]
fn test_reset_on_tiny_board() {
    // A single cell can hold only one of the two starting tiles
    let board = Board::new(1, 1, 3);
    assert_eq!(board.count_empty(), 0);
}

#[test]
fn test_set_and_get() {
    let mut board = blank(4, 4, 1);
    board.set_tile(2, 3, 128);
    assert_eq!(board.get_tile(2, 3), 128);
    board.set_tile(2, 3, 0);
    assert_eq!(board.get_tile(2, 3), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_tile_row_out_of_range() {
    let board = Board::new(4, 4, 1);
    board.get_tile(4, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_tile_col_out_of_range() {
    let board = Board::new(4, 4, 1);
    board.get_tile(0, 4);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_tile_out_of_range() {
    let mut board = Board::new(2, 3, 1);
    board.set_tile(0, 3, 2);
}

#[test]
#[should_panic(expected = "board dimensions must be positive")]
fn test_zero_height_panics() {
    let _ = Board::new(0, 4, 1);
}

#[test]
fn test_move_left() {
    let mut board = blank(4, 4, 21);
    load(
        &mut board,
        &[&[2, 2, 2, 2], &[0, 4, 0, 4], &[8, 0, 0, 0], &[2, 4, 8, 16]],
    );
    board.make_move(Direction::Left);
    assert_moved_with_spawn(
        &board,
        &[&[4, 4, 0, 0], &[8, 0, 0, 0], &[8, 0, 0, 0], &[2, 4, 8, 16]],
    );
}

#[test]
fn test_move_right() {
    let mut board = blank(4, 4, 22);
    load(
        &mut board,
        &[&[2, 2, 2, 0], &[0, 0, 0, 0], &[4, 0, 0, 4], &[0, 0, 0, 0]],
    );
    board.make_move(Direction::Right);
    assert_moved_with_spawn(
        &board,
        &[&[0, 0, 2, 4], &[0, 0, 0, 0], &[0, 0, 0, 8], &[0, 0, 0, 0]],
    );
}

#[test]
fn test_move_up() {
    let mut board = blank(4, 4, 23);
    load(
        &mut board,
        &[&[2, 0, 0, 0], &[2, 0, 4, 0], &[2, 0, 0, 0], &[0, 8, 4, 0]],
    );
    board.make_move(Direction::Up);
    assert_moved_with_spawn(
        &board,
        &[&[4, 8, 8, 0], &[2, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    );
}

#[test]
fn test_move_down() {
    let mut board = blank(4, 4, 24);
    load(
        &mut board,
        &[&[2, 0, 0, 16], &[2, 0, 0, 0], &[2, 0, 0, 0], &[0, 0, 0, 0]],
    );
    board.make_move(Direction::Down);
    assert_moved_with_spawn(
        &board,
        &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[2, 0, 0, 0], &[4, 0, 0, 16]],
    );
}

#[test]
fn test_move_on_rectangular_board() {
    let mut board = blank(2, 5, 25);
    load(&mut board, &[&[2, 0, 2, 0, 4], &[0, 0, 0, 0, 0]]);
    board.make_move(Direction::Right);
    assert_moved_with_spawn(&board, &[&[0, 0, 0, 4, 4], &[0, 0, 0, 0, 0]]);
}

#[test]
fn test_blocked_move_spawns_nothing() {
    let mut board = blank(4, 4, 26);
    load(
        &mut board,
        &[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 2]],
    );
    let before = board.cells().to_vec();
    for dir in Direction::ALL {
        board.make_move(dir);
        assert_eq!(board.cells(), &before[..], "{:?} changed a blocked board", dir);
    }
    assert!(board.is_game_over());
}

#[test]
fn test_partial_block_spawns_nothing() {
    // Everything already packed to the left, no pairs
    let mut board = blank(3, 3, 27);
    load(&mut board, &[&[2, 4, 0], &[8, 0, 0], &[0, 0, 0]]);
    let before = board.cells().to_vec();
    board.make_move(Direction::Left);
    assert_eq!(board.cells(), &before[..]);
    assert_eq!(board.count_empty(), 6);
}

#[test]
fn test_new_tile_full_board_is_noop() {
    let mut board = blank(2, 2, 28);
    load(&mut board, &[&[2, 4], &[8, 16]]);
    board.new_tile();
    assert_eq!(board.cells(), &[2, 4, 8, 16]);
}

#[test]
fn test_new_tile_fills_only_empty_cell() {
    let mut board = blank(2, 2, 29);
    load(&mut board, &[&[2, 4], &[0, 16]]);
    board.new_tile();
    assert!(matches!(board.get_tile(1, 0), 2 | 4));
    assert_eq!(board.get_tile(0, 0), 2);
    assert_eq!(board.get_tile(0, 1), 4);
    assert_eq!(board.get_tile(1, 1), 16);
}

#[test]
fn test_spawn_distribution() {
    let mut board = blank(4, 4, 2048);
    let trials = 20_000;
    let mut fours = 0;
    let mut hits = vec![0usize; 16];

    for _ in 0..trials {
        board.new_tile();
        let idx = board
            .cells()
            .iter()
            .position(|&c| c != 0)
            .expect("one tile spawned");
        match board.cells()[idx] {
            4 => fours += 1,
            2 => {}
            other => panic!("unexpected spawn value {}", other),
        }
        hits[idx] += 1;
        board.set_tile(idx / 4, idx % 4, 0);
    }

    let ratio = fours as f64 / trials as f64;
    assert!((0.08..0.12).contains(&ratio), "four ratio {}", ratio);
    // Uniform over 16 cells: 1250 expected each
    assert!(hits.iter().all(|&h| h > 1000 && h < 1500), "{:?}", hits);
}

#[test]
fn test_same_seed_same_game() {
    let moves = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    let mut a = Board::new(4, 4, 77);
    let mut b = Board::with_rng(4, 4, StdRng::seed_from_u64(77));
    assert_eq!(a.cells(), b.cells());

    for _ in 0..50 {
        for dir in moves {
            a.make_move(dir);
            b.make_move(dir);
            assert_eq!(a.cells(), b.cells());
        }
    }
}

#[test]
fn test_traversal_partitions_board() {
    for (height, width) in [(1, 1), (1, 5), (5, 1), (4, 4), (3, 7), (6, 2)] {
        let traversals = Traversals::new(height, width);
        let mut all: Vec<Pos> = (0..height)
            .flat_map(|r| (0..width).map(move |c| (r, c)))
            .collect();
        all.sort();

        for dir in Direction::ALL {
            let mut visited: Vec<Pos> = traversals.lines(dir).flatten().collect();
            assert_eq!(visited.len(), height * width, "{:?} {}x{}", dir, height, width);
            visited.sort();
            assert_eq!(visited, all, "{:?} {}x{}", dir, height, width);
        }
    }
}

#[test]
fn test_lines_start_on_leading_edge() {
    let mut board = blank(2, 3, 30);
    load(&mut board, &[&[1, 2, 3], &[4, 5, 6]]);
    assert_eq!(board.lines(Direction::Left), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(board.lines(Direction::Right), vec![vec![3, 2, 1], vec![6, 5, 4]]);
    assert_eq!(board.lines(Direction::Up), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    assert_eq!(board.lines(Direction::Down), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
}

#[test]
fn test_display_rows_and_spaces() {
    let mut board = blank(3, 2, 31);
    load(&mut board, &[&[2, 0], &[0, 1024], &[4, 8]]);
    assert_eq!(format!("{}", board), "2 0\n0 1024\n4 8");
}
