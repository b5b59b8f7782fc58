use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::game::Game;
use connect4_minimax::position::{GameState, Rejected, Side};
use connect4_minimax::WIDTH;

mod display;

fn main() -> Result<()> {
    // diagnostics go to stderr so they don't tear the board
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("You are player 1 (red), the AI is player 2 (yellow).");

    loop {
        play_game(&stdin)?;

        if !ask(&stdin, "Play again? y/n: ")? {
            break;
        }
    }
    Ok(())
}

fn play_game(stdin: &Stdin) -> Result<()> {
    let mut game = Game::new();

    // game loop
    loop {
        display::draw(game.position())?;

        match game.state() {
            GameState::InProgress => match game.position().to_move() {
                // AI player
                Side::Computer => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);

                    let best_move = game.play_computer()?;

                    spinner.finish_and_clear();
                    println!("Best move: {}", best_move + 1);
                }

                // human player
                Side::Human => {
                    print!("Move input > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    // end of input abandons the game
                    if stdin.read_line(&mut input_str)? == 0 {
                        return Ok(());
                    }

                    let column_one_indexed = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column @ 1..=WIDTH) => column,
                        Ok(column) => {
                            println!(
                                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                                column, WIDTH
                            );
                            continue;
                        }
                    };

                    match game.play_human(column_one_indexed - 1) {
                        Ok(_) => {}
                        Err(Rejected::ColumnFull { .. }) => {
                            println!("Invalid move, column {} full", column_one_indexed);
                        }
                        Err(err) => println!("{}", err),
                    }
                }
            },

            // end states
            GameState::Won(Side::Human) => {
                println!("Player 1 wins!");
                break;
            }
            GameState::Won(Side::Computer) => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

fn ask(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            // end of input
            None => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
