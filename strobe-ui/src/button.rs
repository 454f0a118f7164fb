//! Front-panel buttons

/// Physical button, reported once per press-and-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    SelectA,
    SelectB,
}

impl Button {
    /// All buttons, in wiring order
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::SelectA,
        Button::SelectB,
    ];

    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
            Button::SelectA => "SELECT_A",
            Button::SelectB => "SELECT_B",
        }
    }
}
