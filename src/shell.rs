//! Control state for a display loop that drives a [`Board`].
//!
//! The loop alternates between showing the board, stepping it and sleeping
//! for [`Controller::delay`]. User actions arrive as [`Command`]s between
//! generations.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;

use crate::board::{Board, Snapshot};
use crate::error::UnknownCommand;
use crate::rules::Cell;

pub const DEFAULT_SIZE: usize = 100;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 10;
pub const DEFAULT_SPEED: u32 = 5;
/// How long a paused loop sleeps before checking for commands again
pub const PAUSED_POLL: Duration = Duration::from_millis(500);

// Moves the cursor home and clears the screen before a frame
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Commands sent from the user to the display loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-randomize the board before the next frame
    Restart,
    Pause,
    Resume,
    TogglePause,
    /// Generations per second, 1 (slow) to 10 (fast)
    SetSpeed(u32),
    Quit,
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "r" | "restart" | "reset" => Command::Restart,
            "p" | "pause" => Command::Pause,
            "resume" | "play" => Command::Resume,
            "t" | "toggle" => Command::TogglePause,
            "q" | "quit" | "exit" => Command::Quit,
            other => match other.parse::<u32>() {
                Ok(speed) => Command::SetSpeed(speed),
                Err(_) => return Err(UnknownCommand(s.trim().to_string())),
            },
        };
        Ok(command)
    }
}

/// Everything a display needs to draw one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cells: Snapshot,
    pub alive: usize,
    pub generation: u64,
}

impl Frame {
    pub fn capture(board: &Board) -> Self {
        Self {
            cells: board.snapshot(),
            alive: board.alive_count(),
            generation: board.generation(),
        }
    }

    /// Whether the cells form a non-empty square matrix
    pub fn is_square(&self) -> bool {
        let rows = self.cells.len();
        rows > 0 && self.cells.iter().all(|row| row.len() == rows)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alive: {}", self.alive)?;
        writeln!(f, "Generation: {}", self.generation)?;
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|&alive| Cell::from(alive).glyph())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Write `frame` to `out`, optionally clearing the terminal first.
///
/// A frame whose cells are not a non-empty square matrix is logged and
/// skipped; returns whether anything was drawn.
pub fn draw<W: Write>(out: &mut W, frame: &Frame, clear: bool) -> io::Result<bool> {
    if !frame.is_square() {
        log::error!(
            "Skipping malformed frame for generation {}: {} rows, not a square grid",
            frame.generation,
            frame.cells.len()
        );
        return Ok(false);
    }
    if clear {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    write!(out, "{frame}")?;
    out.flush()?;
    Ok(true)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    paused: bool,
    restart_requested: bool,
    speed: u32,
    quit: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl Controller {
    pub fn new(speed: u32) -> Self {
        Self {
            paused: false,
            restart_requested: false,
            speed: clamp_speed(speed),
            quit: false,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Restart => self.restart_requested = true,
            Command::Pause => self.paused = true,
            Command::Resume => self.paused = false,
            Command::TogglePause => self.paused = !self.paused,
            Command::SetSpeed(speed) => self.speed = clamp_speed(speed),
            Command::Quit => self.quit = true,
        }
        log::info!("Applied {command:?}: paused={}, speed={}", self.paused, self.speed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Sleep between two ticks
    pub fn delay(&self) -> Duration {
        if self.paused {
            PAUSED_POLL
        } else {
            Duration::from_millis(1000 / u64::from(self.speed))
        }
    }

    /// Run one iteration of the display loop against `board`.
    ///
    /// A pending restart re-randomizes the board and returns its first frame
    /// without stepping, even while paused. Otherwise a running controller
    /// returns the current frame and then advances the board one generation.
    /// A paused controller leaves the board alone and returns `None`.
    pub fn tick(&mut self, board: &mut Board) -> Option<Frame> {
        if self.restart_requested {
            board.restart();
            self.restart_requested = false;
            return Some(Frame::capture(board));
        }
        if self.paused {
            return None;
        }
        let frame = Frame::capture(board);
        board.step();
        Some(frame)
    }
}

fn clamp_speed(speed: u32) -> u32 {
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    if clamped != speed {
        log::warn!("Speed {speed} out of range {MIN_SPEED}-{MAX_SPEED}, using {clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("r".parse::<Command>(), Ok(Command::Restart));
        assert_eq!(" Pause ".parse::<Command>(), Ok(Command::Pause));
        assert_eq!("resume".parse::<Command>(), Ok(Command::Resume));
        assert_eq!("t".parse::<Command>(), Ok(Command::TogglePause));
        assert_eq!("7".parse::<Command>(), Ok(Command::SetSpeed(7)));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(UnknownCommand("jump".to_string()))
        );
    }

    #[test]
    fn speed_is_clamped() {
        let mut controller = Controller::new(0);
        assert_eq!(controller.speed(), MIN_SPEED);
        controller.apply(Command::SetSpeed(42));
        assert_eq!(controller.speed(), MAX_SPEED);
    }

    #[test]
    fn delay_follows_speed_and_pause() {
        let mut controller = Controller::default();
        assert_eq!(controller.delay(), Duration::from_millis(200));
        controller.apply(Command::SetSpeed(10));
        assert_eq!(controller.delay(), Duration::from_millis(100));
        controller.apply(Command::TogglePause);
        assert_eq!(controller.delay(), PAUSED_POLL);
    }

    #[test]
    fn running_tick_shows_then_steps() {
        let mut board = Board::with_seed(10, 7).unwrap();
        let before = Frame::capture(&board);
        let mut controller = Controller::default();

        let frame = controller.tick(&mut board).unwrap();
        assert_eq!(frame, before);
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn paused_tick_leaves_board_alone() {
        let mut board = Board::with_seed(10, 7).unwrap();
        let mut controller = Controller::default();
        controller.apply(Command::Pause);

        assert!(controller.tick(&mut board).is_none());
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn restart_applies_once_even_when_paused() {
        let mut board = Board::with_seed(10, 7).unwrap();
        let mut controller = Controller::default();
        controller.tick(&mut board);
        controller.tick(&mut board);
        assert_eq!(board.generation(), 3);

        controller.apply(Command::Pause);
        controller.apply(Command::Restart);
        let frame = controller.tick(&mut board).unwrap();
        assert_eq!(frame.generation, 1);
        assert_eq!(board.generation(), 1);
        assert!(controller.tick(&mut board).is_none());
    }

    #[test]
    fn frame_rendering_and_shape() {
        let board = Board::from_state(&[[true, false], [false, false]], None).unwrap();
        let frame = Frame::capture(&board);
        assert!(frame.is_square());
        assert_eq!(frame.to_string(), "Alive: 1\nGeneration: 1\nO \n  \n");

        let ragged = Frame { cells: vec![vec![true], vec![]], alive: 1, generation: 1 };
        assert!(!ragged.is_square());
        let empty = Frame { cells: Vec::new(), alive: 0, generation: 1 };
        assert!(!empty.is_square());
    }

    #[test]
    fn frame_rows_match_board_text() {
        let board = Board::with_seed(7, 31).unwrap();
        let text = Frame::capture(&board).to_string();
        let rows: String = text.lines().skip(2).map(|line| format!("{line}\n")).collect();
        assert_eq!(rows, board.to_string());
    }

    #[test]
    fn draw_writes_square_frames() {
        let board = Board::from_state(&[[false, true], [false, false]], None).unwrap();
        let frame = Frame::capture(&board);

        let mut out = Vec::<u8>::new();
        assert!(draw(&mut out, &frame, false).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), frame.to_string());

        let mut out = Vec::<u8>::new();
        assert!(draw(&mut out, &frame, true).unwrap());
        assert!(out.starts_with(CLEAR_SCREEN.as_bytes()));
    }

    #[test]
    fn draw_skips_malformed_frames() {
        let ragged = Frame { cells: vec![vec![true, false], vec![true]], alive: 2, generation: 4 };
        let empty = Frame { cells: Vec::new(), alive: 0, generation: 1 };

        for frame in [ragged, empty] {
            let mut out = Vec::<u8>::new();
            assert!(!draw(&mut out, &frame, true).unwrap());
            assert!(out.is_empty());
        }
    }
}
