use anyhow::Result;
use async_trait::async_trait;

use super::types::{EditorState, Modifier, MouseButton, Point, WindowBounds};

/// Native automation primitive layer, implemented per platform by the
/// embedder. This crate never synthesizes input or walks accessibility trees
/// itself; it drives an implementation of this trait.
///
/// Every method is a single suspending call. Errors are propagated to the
/// caller unmodified and never retried.
#[async_trait]
pub trait AutomationPrimitives: Send + Sync {
    /// Click a mouse button at the current pointer position, `count` times.
    async fn click(&self, button: MouseButton, count: u32) -> Result<()>;

    /// Press an accessibility button identified by its label, `count` times.
    async fn click_button(&self, label: &str, count: u32) -> Result<()>;

    /// Press and hold a mouse button
    async fn mouse_down(&self, button: MouseButton) -> Result<()>;

    /// Release a mouse button
    async fn mouse_up(&self, button: MouseButton) -> Result<()>;

    /// Move the pointer to absolute screen coordinates
    async fn set_mouse_location(&self, x: i32, y: i32) -> Result<()>;

    async fn get_mouse_location(&self) -> Result<Point>;

    /// Press a key with the given modifiers held, `count` times.
    async fn press_key(&self, key: &str, modifiers: &[Modifier], count: u32) -> Result<()>;

    /// Type a single line of text. Implementations are not required to
    /// interpret embedded newlines; see the input module for how multi-line
    /// text is decomposed before reaching this call.
    async fn type_text(&self, text: &str) -> Result<()>;

    /// Name of the application that currently holds focus
    async fn get_active_application(&self) -> Result<String>;

    /// Display names of all currently running applications. Queried fresh on
    /// every call; the running set is volatile and never cached.
    async fn get_running_applications(&self) -> Result<Vec<String>>;

    /// Bring an application to the foreground, by path or display name.
    /// Completion of this call is the only acknowledgement of the focus
    /// change the driver relies on.
    async fn focus_application(&self, application: &str) -> Result<()>;

    /// Text and cursor state of the focused editor
    async fn get_editor_state(&self) -> Result<EditorState>;

    /// Replace the focused editor's text and selection
    async fn set_editor_state(&self, text: &str, cursor: u32, cursor_end: u32) -> Result<()>;

    /// Labels of clickable buttons in the active window
    async fn get_clickable_buttons(&self) -> Result<Vec<String>>;

    async fn get_active_application_window_bounds(&self) -> Result<WindowBounds>;
}
