use twenty48_core::Direction;

pub const HELP: &str = "w/a/s/d or up/left/down/right to move, u undo, r restart, k keep playing, q quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Restart,
    KeepPlaying,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        Some(match input.as_str() {
            "w" => Self::Move(Direction::Up),
            "a" => Self::Move(Direction::Left),
            "s" => Self::Move(Direction::Down),
            "d" => Self::Move(Direction::Right),
            "u" | "undo" => Self::Undo,
            "r" | "restart" => Self::Restart,
            "k" | "keep" => Self::KeepPlaying,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Move(other.parse().ok()?),
        })
    }
}
