//! Taskbar command box: parses one line of input into a typed desktop command.
//!
//! Rejected input carries the hint shown to the user as its `Display` text.

use thiserror::Error;

/// Window opened by `help`.
pub const COMMANDS_WINDOW_KEY: &str = "window-commands";
/// Window opened by `winver`.
pub const WINVER_WINDOW_KEY: &str = "window-winver";
/// Pill icon used for windows opened from the command box.
pub const OPENED_WINDOW_ICON: &str = "assets/opened_sparkle.png";

pub const IPCONFIG_MESSAGE: &str = "IPv4 Address . . . . . . . . : 127.0.0.1   (nice)";

/// Colour accents selectable with `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAccent {
    Pink,
    Purple,
    Aqua,
}

impl ThemeAccent {
    pub const ALL: [Self; 3] = [Self::Pink, Self::Purple, Self::Aqua];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "pink" => Some(Self::Pink),
            "purple" => Some(Self::Purple),
            "aqua" => Some(Self::Aqua),
            _ => None,
        }
    }

    /// Class applied to the document root.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pink => "theme-pink",
            Self::Purple => "theme-purple",
            Self::Aqua => "theme-aqua",
        }
    }
}

/// Decorative page effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxKind {
    /// `dir`: icons jiggle.
    Jiggle,
    /// `tree`: ASCII tree overlay.
    Tree,
    /// `ping`: expanding ripple.
    Ripple,
    Sparkles,
    Hearts,
    Bubbles,
    /// Pointer sparkle trail.
    Trail,
}

impl FxKind {
    fn from_start_mode(mode: &str) -> Option<Self> {
        match mode {
            "sparkles" => Some(Self::Sparkles),
            "hearts" => Some(Self::Hearts),
            "bubbles" => Some(Self::Bubbles),
            "trail" => Some(Self::Trail),
            _ => None,
        }
    }

    /// Body class the host toggles while the effect runs.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Jiggle => "jiggle",
            Self::Tree => "fx-tree",
            Self::Ripple => "fx-ripple",
            Self::Sparkles => "fx-sparkles",
            Self::Hearts => "fx-hearts",
            Self::Bubbles => "fx-bubbles",
            Self::Trail => "fx-trail",
        }
    }

    /// How long the host keeps the effect class applied.
    pub fn duration_ms(self) -> i32 {
        match self {
            Self::Jiggle => 1_500,
            Self::Tree => 2_200,
            Self::Ripple => 1_500,
            Self::Sparkles | Self::Hearts | Self::Bubbles => 2_500,
            Self::Trail => 8_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopCommand {
    /// Open the window identified by its layout key.
    OpenWindow {
        key: &'static str,
        label: &'static str,
    },
    /// Remove every transient overlay and toast.
    Clear,
    Fx(FxKind),
    Toast(&'static str),
    /// Minimize every open window.
    MinimizeAll,
    SetAccent(ThemeAccent),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command. Type \"help\"")]
    Unknown,
    #[error("Try: start sparkles | hearts | bubbles | trail")]
    StartUsage,
    #[error("Did you mean: taskkill /f")]
    TaskkillUsage,
    #[error("Try: color pink | purple | aqua")]
    ColorUsage,
}

impl DesktopCommand {
    /// Parses a command line. Only the first two whitespace-separated words are read.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let mut words = raw.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next().unwrap_or_default().to_ascii_lowercase();

        match verb.as_str() {
            "help" => Ok(Self::OpenWindow {
                key: COMMANDS_WINDOW_KEY,
                label: "Commands.txt",
            }),
            "winver" => Ok(Self::OpenWindow {
                key: WINVER_WINDOW_KEY,
                label: "About This Site",
            }),
            "cls" => Ok(Self::Clear),
            "dir" => Ok(Self::Fx(FxKind::Jiggle)),
            "tree" => Ok(Self::Fx(FxKind::Tree)),
            "ping" => Ok(Self::Fx(FxKind::Ripple)),
            "ipconfig" => Ok(Self::Toast(IPCONFIG_MESSAGE)),
            "start" => FxKind::from_start_mode(&arg)
                .map(Self::Fx)
                .ok_or(CommandError::StartUsage),
            "taskkill" if arg == "/f" => Ok(Self::MinimizeAll),
            "taskkill" => Err(CommandError::TaskkillUsage),
            "color" => ThemeAccent::parse(&arg)
                .map(Self::SetAccent)
                .ok_or(CommandError::ColorUsage),
            _ => Err(CommandError::Unknown),
        }
    }
}
