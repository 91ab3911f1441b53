//! Recording fake of the primitive layer, shared by the module tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

use super::primitives::AutomationPrimitives;
use super::types::{EditorState, Modifier, MouseButton, Point, WindowBounds};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Click { button: MouseButton, count: u32 },
    ClickButton { label: String, count: u32 },
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    SetMouseLocation { x: i32, y: i32 },
    PressKey { key: String, modifiers: Vec<Modifier>, count: u32 },
    TypeText(String),
    FocusApplication(String),
    SetEditorState { text: String, cursor: u32, cursor_end: u32 },
}

#[derive(Default)]
pub struct FakePrimitives {
    running: Vec<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakePrimitives {
    pub fn with_running(applications: &[&str]) -> Self {
        Self {
            running: applications.iter().map(|s| s.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AutomationPrimitives for FakePrimitives {
    async fn click(&self, button: MouseButton, count: u32) -> Result<()> {
        self.record(Call::Click { button, count });
        Ok(())
    }

    async fn click_button(&self, label: &str, count: u32) -> Result<()> {
        self.record(Call::ClickButton {
            label: label.to_string(),
            count,
        });
        Ok(())
    }

    async fn mouse_down(&self, button: MouseButton) -> Result<()> {
        self.record(Call::MouseDown(button));
        Ok(())
    }

    async fn mouse_up(&self, button: MouseButton) -> Result<()> {
        self.record(Call::MouseUp(button));
        Ok(())
    }

    async fn set_mouse_location(&self, x: i32, y: i32) -> Result<()> {
        self.record(Call::SetMouseLocation { x, y });
        Ok(())
    }

    async fn get_mouse_location(&self) -> Result<Point> {
        Ok(Point::default())
    }

    async fn press_key(&self, key: &str, modifiers: &[Modifier], count: u32) -> Result<()> {
        self.record(Call::PressKey {
            key: key.to_string(),
            modifiers: modifiers.to_vec(),
            count,
        });
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<()> {
        self.record(Call::TypeText(text.to_string()));
        Ok(())
    }

    async fn get_active_application(&self) -> Result<String> {
        Ok(self.running.first().cloned().unwrap_or_default())
    }

    async fn get_running_applications(&self) -> Result<Vec<String>> {
        Ok(self.running.clone())
    }

    async fn focus_application(&self, application: &str) -> Result<()> {
        self.record(Call::FocusApplication(application.to_string()));
        Ok(())
    }

    async fn get_editor_state(&self) -> Result<EditorState> {
        Ok(EditorState::default())
    }

    async fn set_editor_state(&self, text: &str, cursor: u32, cursor_end: u32) -> Result<()> {
        self.record(Call::SetEditorState {
            text: text.to_string(),
            cursor,
            cursor_end,
        });
        Ok(())
    }

    async fn get_clickable_buttons(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn get_active_application_window_bounds(&self) -> Result<WindowBounds> {
        Ok(WindowBounds::default())
    }
}
