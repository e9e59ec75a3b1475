pub mod keyboard;
pub mod swipe;
pub mod wheel;

/// A request to move through the deck, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    JumpTo(usize),
    First,
    Last,
}

/// Everything an input source can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Intent),
    ToggleFullscreen,
    /// Leave fullscreen. Only produced while fullscreen is active.
    ExitFullscreen,
    ToggleHelp,
    ToggleMedia,
    Quit,
}

impl From<Intent> for Command {
    fn from(intent: Intent) -> Self {
        Command::Navigate(intent)
    }
}
