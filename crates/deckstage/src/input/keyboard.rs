use eframe::egui::Key;

use super::{Command, Intent};

/// Keys inspected every frame, in the order they are checked.
pub const BOUND_KEYS: [Key; 14] = [
    Key::ArrowRight,
    Key::ArrowDown,
    Key::Space,
    Key::PageDown,
    Key::ArrowLeft,
    Key::ArrowUp,
    Key::PageUp,
    Key::Home,
    Key::End,
    Key::F,
    Key::Escape,
    Key::H,
    Key::Enter,
    Key::Q,
];

/// Map a pressed key to a command.
///
/// egui reports letter keys without case, so `F` covers both `f` and `F`.
/// Escape only means something while the window is fullscreen.
pub fn command_for(key: Key, fullscreen: bool) -> Option<Command> {
    let command = match key {
        Key::ArrowRight | Key::ArrowDown | Key::Space | Key::PageDown => {
            Command::Navigate(Intent::Advance)
        }
        Key::ArrowLeft | Key::ArrowUp | Key::PageUp => Command::Navigate(Intent::Retreat),
        Key::Home => Command::Navigate(Intent::First),
        Key::End => Command::Navigate(Intent::Last),
        Key::F => Command::ToggleFullscreen,
        Key::Escape if fullscreen => Command::ExitFullscreen,
        Key::H => Command::ToggleHelp,
        Key::Enter => Command::ToggleMedia,
        Key::Q => Command::Quit,
        _ => return None,
    };
    Some(command)
}
