use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Alias table for application matching: normalized name -> alternate search
/// term. Supplied by the caller per call and never mutated.
pub type AliasMap = HashMap<String, String>;

/// Whether a lifecycle operation had an effect. Absence of a match is a
/// common outcome, not an error, so it is reported as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Acted,
    NoOp,
}

impl Outcome {
    pub fn acted(self) -> bool {
        matches!(self, Outcome::Acted)
    }
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Parse a button from a string. Embedders use this to convert raw tool
    /// input before calling the normalized pass-throughs.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(MouseButton::Left),
            "right" => Some(MouseButton::Right),
            "middle" | "center" => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Control,
    Alt,
    Shift,
    Meta, // Windows key / Command key
}

impl Modifier {
    /// Parse a modifier from a string. Embedders use this to convert raw
    /// tool input before calling the normalized pass-throughs.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifier::Control),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "meta" | "win" | "cmd" | "command" => Some(Modifier::Meta),
            _ => None,
        }
    }
}

/// A quit accelerator: one modifier held while one key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifier: Modifier,
    pub key: &'static str,
}

/// Screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Bounding rectangle of the active application window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Text and cursor position reported by the focused editor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorState {
    pub text: String,
    pub cursor: u32,
    /// End of the selection, when the editor reports one.
    #[serde(default)]
    pub cursor_end: Option<u32>,
}

/// Captured output of a completed external command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Fields resolved from a shortcut file by the shortcut-resolution
/// collaborator.
#[derive(Debug, Clone)]
pub struct ShortcutTarget {
    pub target: PathBuf,
    pub args: Option<String>,
    pub working_dir: Option<PathBuf>,
}
