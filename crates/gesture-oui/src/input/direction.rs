//! Cardinal swipe directions

use std::fmt;

/// Direction of a classified hand swipe.
///
/// `Neutral` is the detector's idle state and never appears in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Neutral,
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Single-letter code recorded in gesture patterns
    pub fn code(self) -> Option<char> {
        match self {
            Direction::Neutral => None,
            Direction::Up => Some('U'),
            Direction::Down => Some('D'),
            Direction::Right => Some('R'),
            Direction::Left => Some('L'),
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'R' => Some(Direction::Right),
            'L' => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Neutral => "neutral",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }

    /// Capitalised name for on-screen text
    pub fn label(self) -> &'static str {
        match self {
            Direction::Neutral => "Neutral",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Right => "Right",
            Direction::Left => "Left",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Direction::Neutral
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for dir in [Direction::Up, Direction::Down, Direction::Right, Direction::Left] {
            let code = dir.code().unwrap();
            assert_eq!(Direction::from_code(code), Some(dir));
        }
        assert_eq!(Direction::Neutral.code(), None);
        assert_eq!(Direction::from_code('X'), None);
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(Direction::Left.label(), "Left");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
