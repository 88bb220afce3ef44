/// User preferences that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    /// Icon of the theme toggle: it shows the theme you would switch to.
    pub fn theme_icon(self) -> &'static str {
        if self.dark_mode {
            "☀️"
        } else {
            "🌙"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuState::Closed => "☰",
            MenuState::Open => "✖",
        }
    }
}
