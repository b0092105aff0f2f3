use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use clap::Parser;

use toroid_life::shell::{self, Command, Controller, DEFAULT_SIZE, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use toroid_life::Board;

#[derive(Parser, Debug)]
#[command(name = "toroid_life")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal grid, drawn in the terminal")]
#[command(
    after_help = "While running, type a command and press enter: restart, pause, resume, toggle, quit, or a speed from 1 to 10."
)]
struct Cli {
    /// Number of rows and columns
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Random seed for a reproducible starting grid
    #[arg(long)]
    seed: Option<u64>,

    /// Generations per second
    #[arg(long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u32).range((MIN_SPEED as i64)..=(MAX_SPEED as i64)))]
    speed: u32,

    /// Stop after showing this generation
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print frames one after another instead of redrawing in place
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut board = Board::new(cli.size, cli.seed)?;
    let mut controller = Controller::new(cli.speed);
    let commands = spawn_command_reader();
    log::info!("Starting {:?} at speed {}", board, controller.speed());

    let stdout = io::stdout();
    loop {
        for command in commands.try_iter() {
            controller.apply(command);
        }
        if controller.should_quit() {
            break;
        }

        if let Some(frame) = controller.tick(&mut board) {
            shell::draw(&mut stdout.lock(), &frame, !cli.no_clear)?;

            if cli.generations.is_some_and(|limit| frame.generation >= limit) {
                break;
            }
        }

        thread::sleep(controller.delay());
    }

    log::info!("Stopped at generation {} with {} cells alive", board.generation(), board.alive_count());
    Ok(())
}

/// Reads commands from stdin on a separate thread so the loop never blocks on input.
fn spawn_command_reader() -> Receiver<Command> {
    let (command_tx, command_rx) = mpsc::channel();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if command_tx.send(command).is_err() {
                        break;
                    }
                }
                Err(err) => log::warn!("{err}"),
            }
        }
    });

    command_rx
}
