/// Which pane receives keyboard input when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Pattern,
    Table,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Pattern => Focus::Table,
            Focus::Table => Focus::Pattern,
        }
    }
}

/// Outcome of the last action, shown above the footer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Empty,
    Info(String),
    Success(String),
    Error(String),
}
