//! Headless 2048 trace runner (default binary).
//!
//! Builds a seeded board from the environment (see [`config`]), applies the
//! moves given on the command line, and prints the board after every step.
//!
//! ```text
//! TWENTY48_SEED=7 tui-2048 left up uurrd
//! ```
//!
//! Moves are full names (`up`, `down`, `left`, `right`) or runs of initials.
//! Logging is controlled by `RUST_LOG` (default: info).

mod config;

use anyhow::{bail, Result};
use flexi_logger::Logger;
use log::info;

use tui_2048::core::Board;
use tui_2048::types::Direction;

use config::{TraceConfig, TraceFormat};

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let config = TraceConfig::from_env()?;
    let moves = parse_moves(std::env::args().skip(1))?;
    info!(
        "{}x{} board, seed {}, {} moves",
        config.height,
        config.width,
        config.seed,
        moves.len()
    );

    run(&config, &moves)
}

/// Expand command-line tokens into directions.
///
/// Every token is validated before the first move is applied.
fn parse_moves<I, S>(args: I) -> Result<Vec<Direction>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut moves = Vec::new();
    for arg in args {
        let token = arg.as_ref();
        if let Some(dir) = Direction::from_str(token) {
            moves.push(dir);
            continue;
        }
        for (i, ch) in token.char_indices() {
            match Direction::from_str(&token[i..i + ch.len_utf8()]) {
                Some(dir) => moves.push(dir),
                None => bail!("unknown move {:?} in {:?}", ch, token),
            }
        }
    }
    Ok(moves)
}

fn run(config: &TraceConfig, moves: &[Direction]) -> Result<()> {
    let mut board = Board::new(config.height, config.width, config.seed);
    emit(config.format, None, &board)?;

    for &dir in moves {
        board.make_move(dir);
        emit(config.format, Some(dir), &board)?;
        if board.is_game_over() {
            info!("no moves left, highest tile {}", board.highest_tile());
            break;
        }
    }
    Ok(())
}

fn emit(format: TraceFormat, dir: Option<Direction>, board: &Board) -> Result<()> {
    match format {
        TraceFormat::Text => {
            match dir {
                Some(dir) => println!("> {}", dir.as_str()),
                None => println!("> start"),
            }
            println!("{}\n", board);
        }
        TraceFormat::Json => {
            println!("{}", serde_json::to_string(&board.snapshot())?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names() {
        let moves = parse_moves(["up", "Left", "DOWN", "right"]).unwrap();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_parse_initial_runs() {
        let moves = parse_moves(["uuL", "r"]).unwrap();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Up,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse_moves(["up", "ux"]).unwrap_err();
        assert!(err.to_string().contains("unknown move"));
    }

    #[test]
    fn test_parse_empty() {
        let moves = parse_moves(Vec::<String>::new()).unwrap();
        assert!(moves.is_empty());
    }
}
