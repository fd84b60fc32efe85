use pokebot_common::BridgeError;
use std::str::FromStr;

/// Game Boy buttons the control server accepts as actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    A,
    B,
    Start,
    Select,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Start,
        Button::Select,
    ];

    /// Action name sent to the control server; doubles as the command name.
    pub fn action(self) -> &'static str {
        match self {
            Button::Left => "l",
            Button::Right => "r",
            Button::Up => "u",
            Button::Down => "d",
            Button::A => "a",
            Button::B => "b",
            Button::Start => "start",
            Button::Select => "select",
        }
    }
}

impl FromStr for Button {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::ALL
            .into_iter()
            .find(|b| b.action() == s)
            .ok_or_else(|| BridgeError::Validation(format!("unknown button: {s:?}")))
    }
}
