//! Play command - hot-seat game in the terminal
//!
//! Both players share the keyboard; each turn reads a house number from
//! stdin and feeds it to the same engine the server uses.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use mancala_core::{apply_move, Board, BoardId, GameConfig, GameError, Player, Turn};

#[derive(Args)]
pub struct PlayArgs {
    /// Stones seeded into each house on a fresh board
    #[arg(long, default_value_t = 6)]
    pub stones_per_house: u32,

    /// Playable houses per side
    #[arg(long, default_value_t = 6)]
    pub houses: usize,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let config = GameConfig {
        houses: args.houses,
        stones_per_house: args.stones_per_house,
    };
    let mut board = Board::new(BoardId(0), &config);
    let stdin = io::stdin();

    loop {
        print_board(&board);

        let player = match board.turn {
            Turn::Finished => break,
            Turn::Player(p) => p,
        };

        print!("{} sows house: ", player);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: abandon the game
            return Ok(());
        }
        let house = match line.trim().parse::<usize>() {
            Ok(house) => house,
            Err(_) => {
                println!("enter a house number 1..{}", board.houses());
                continue;
            }
        };

        match apply_move(&board, player, house) {
            Ok(next) => board = next,
            Err(err @ (GameError::EmptyHouse { .. } | GameError::InvalidHouse { .. })) => {
                println!("{}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    print_score(&board);
    Ok(())
}

/// Print the board the way it sits on a table: TOP's houses run right to
/// left into TOP's store, BOTTOM's run left to right into BOTTOM's store.
fn print_board(board: &Board) {
    let houses = board.houses();
    let top = board.half(Player::Top);
    let bottom = board.half(Player::Bottom);

    let top_row: Vec<String> = (0..houses).rev().map(|i| format!("{:2}", top[i])).collect();
    let bottom_row: Vec<String> = (0..houses).map(|i| format!("{:2}", bottom[i])).collect();

    println!();
    println!("   TOP    [{:2}]  {}", top[houses], top_row.join(" "));
    println!("   BOTTOM        {}  [{:2}]", bottom_row.join(" "), bottom[houses]);
    println!();
}

fn print_score(board: &Board) {
    let top = board.store(Player::Top);
    let bottom = board.store(Player::Bottom);
    println!("game over: TOP {} / BOTTOM {}", top, bottom);
    match top.cmp(&bottom) {
        std::cmp::Ordering::Greater => println!("TOP wins"),
        std::cmp::Ordering::Less => println!("BOTTOM wins"),
        std::cmp::Ordering::Equal => println!("draw"),
    }
}
