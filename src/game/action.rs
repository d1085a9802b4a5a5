use std::fmt;

/// Relative turn requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnRequest {
    /// Pitch towards the current up-reference
    Up,
    /// Pitch away from the current up-reference
    Down,
    /// Yaw left about the up-reference
    Left,
    /// Yaw right about the up-reference
    Right,
}

impl TurnRequest {
    /// Returns true for the two requests that can break orthogonality
    pub fn is_pitch(&self) -> bool {
        matches!(self, TurnRequest::Up | TurnRequest::Down)
    }

    /// Parses the single-letter form used by turn scripts (`U`, `D`, `L`, `R`)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(TurnRequest::Up),
            'D' => Some(TurnRequest::Down),
            'L' => Some(TurnRequest::Left),
            'R' => Some(TurnRequest::Right),
            _ => None,
        }
    }
}

impl fmt::Display for TurnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnRequest::Up => "turn-up",
            TurnRequest::Down => "turn-down",
            TurnRequest::Left => "turn-left",
            TurnRequest::Right => "turn-right",
        };
        f.write_str(name)
    }
}
