use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Difficulty;

/// Canonical movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Raw event delivered by an input source.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Key(KeyCode),
    Quit,
}

impl InputEvent {
    /// Converts a terminal event, keeping only key presses.
    ///
    /// `Esc` and `Ctrl+C` are the quit signal; `Q` selects hard difficulty.
    #[must_use]
    pub fn from_terminal(event: Event) -> Option<Self> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return None;
        };

        if kind != KeyEventKind::Press {
            return None;
        }

        match code {
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            other => Some(Self::Key(other)),
        }
    }
}

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Intent {
    Steer(Direction),
    Pause,
    SelectDifficulty(Difficulty),
    /// Any key without a dedicated meaning. Still starts or restarts a game.
    Other,
}

impl Intent {
    #[must_use]
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Self::Steer(Direction::Up),
            KeyCode::Down => Self::Steer(Direction::Down),
            KeyCode::Left => Self::Steer(Direction::Left),
            KeyCode::Right => Self::Steer(Direction::Right),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Self::Steer(Direction::Up),
                's' => Self::Steer(Direction::Down),
                'a' => Self::Steer(Direction::Left),
                'd' => Self::Steer(Direction::Right),
                'p' => Self::Pause,
                'e' => Self::SelectDifficulty(Difficulty::Easy),
                'r' => Self::SelectDifficulty(Difficulty::Regular),
                'q' => Self::SelectDifficulty(Difficulty::Hard),
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// Source of raw input events, polled once per phase block of a frame.
pub trait InputSource {
    /// Returns the first pending event and discards the rest of the batch.
    fn poll_first(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Non-blocking crossterm event source.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_first(&mut self) -> io::Result<Option<InputEvent>> {
        let mut first = None;

        while event::poll(Duration::ZERO)? {
            let next = InputEvent::from_terminal(event::read()?);
            if first.is_none() {
                first = next;
            }
        }

        Ok(first)
    }
}

/// Replays prepared batches, one per poll. Used by tests and simulations.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a batch; only its first event will be observed.
    pub fn push_batch(&mut self, batch: impl IntoIterator<Item = InputEvent>) {
        self.batches.push_back(batch.into_iter().collect());
    }

    /// Queues a single key press as its own batch.
    pub fn push_key(&mut self, code: KeyCode) {
        self.push_batch([InputEvent::Key(code)]);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_first(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self
            .batches
            .pop_front()
            .and_then(|batch| batch.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{
        direction_change_is_valid, Direction, InputEvent, InputSource, Intent, ScriptedInput,
    };
    use crate::config::Difficulty;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(
            Intent::from_key(KeyCode::Char('w')),
            Intent::Steer(Direction::Up)
        );
        assert_eq!(
            Intent::from_key(KeyCode::Char('D')),
            Intent::Steer(Direction::Right)
        );
        assert_eq!(
            Intent::from_key(KeyCode::Left),
            Intent::Steer(Direction::Left)
        );
        assert_eq!(Intent::from_key(KeyCode::Char('p')), Intent::Pause);
        assert_eq!(
            Intent::from_key(KeyCode::Char('q')),
            Intent::SelectDifficulty(Difficulty::Hard)
        );
        assert_eq!(
            Intent::from_key(KeyCode::Char('e')),
            Intent::SelectDifficulty(Difficulty::Easy)
        );
        assert_eq!(Intent::from_key(KeyCode::Enter), Intent::Other);
        assert_eq!(Intent::from_key(KeyCode::Char('x')), Intent::Other);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        assert_eq!(InputEvent::from_terminal(esc), Some(InputEvent::Quit));
        assert_eq!(InputEvent::from_terminal(ctrl_c), Some(InputEvent::Quit));
        assert_eq!(
            InputEvent::from_terminal(plain_c),
            Some(InputEvent::Key(KeyCode::Char('c')))
        );
    }

    #[test]
    fn key_releases_and_non_key_events_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(InputEvent::from_terminal(Event::Key(release)), None);
        assert_eq!(InputEvent::from_terminal(Event::Resize(80, 24)), None);
    }

    #[test]
    fn scripted_input_yields_first_event_of_each_batch() {
        let mut input = ScriptedInput::new();
        input.push_batch([
            InputEvent::Key(KeyCode::Char('a')),
            InputEvent::Key(KeyCode::Char('d')),
        ]);
        input.push_key(KeyCode::Char('p'));

        assert_eq!(
            input.poll_first().expect("scripted poll"),
            Some(InputEvent::Key(KeyCode::Char('a')))
        );
        assert_eq!(
            input.poll_first().expect("scripted poll"),
            Some(InputEvent::Key(KeyCode::Char('p')))
        );
        assert_eq!(input.poll_first().expect("scripted poll"), None);
    }
}
