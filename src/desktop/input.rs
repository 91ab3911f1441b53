//! Parameter normalization for primitive-facing calls.
//!
//! Every raw user-facing argument is defaulted, clamped, or decomposed here
//! before it reaches the primitive layer: buttons default to left, repeat
//! counts default to 1 (and short-circuit to a no-op below 1), coordinates
//! clamp at 0, and multi-line text is split into per-line submissions.

use crate::error::Result;

use super::primitives::AutomationPrimitives;
use super::types::{Modifier, MouseButton, Outcome};

/// A missing count means one repetition; a count below 1 means the whole
/// operation is skipped without touching the primitive layer.
fn effective_count(count: Option<i64>) -> Option<u32> {
    match count {
        None => Some(1),
        Some(c) if c < 1 => None,
        Some(c) => Some(c.min(i64::from(u32::MAX)) as u32),
    }
}

fn clamp_coordinates(x: i32, y: i32) -> (i32, i32) {
    (x.max(0), y.max(0))
}

pub async fn click(
    primitives: &dyn AutomationPrimitives,
    button: Option<MouseButton>,
    count: Option<i64>,
) -> Result<Outcome> {
    let Some(count) = effective_count(count) else {
        return Ok(Outcome::NoOp);
    };
    primitives.click(button.unwrap_or_default(), count).await?;
    Ok(Outcome::Acted)
}

pub async fn click_button(
    primitives: &dyn AutomationPrimitives,
    label: &str,
    count: Option<i64>,
) -> Result<Outcome> {
    let Some(count) = effective_count(count) else {
        return Ok(Outcome::NoOp);
    };
    primitives.click_button(label, count).await?;
    Ok(Outcome::Acted)
}

pub async fn mouse_down(
    primitives: &dyn AutomationPrimitives,
    button: Option<MouseButton>,
) -> Result<()> {
    primitives.mouse_down(button.unwrap_or_default()).await?;
    Ok(())
}

pub async fn mouse_up(
    primitives: &dyn AutomationPrimitives,
    button: Option<MouseButton>,
) -> Result<()> {
    primitives.mouse_up(button.unwrap_or_default()).await?;
    Ok(())
}

pub async fn set_mouse_location(
    primitives: &dyn AutomationPrimitives,
    x: i32,
    y: i32,
) -> Result<()> {
    let (x, y) = clamp_coordinates(x, y);
    primitives.set_mouse_location(x, y).await?;
    Ok(())
}

pub async fn press_key(
    primitives: &dyn AutomationPrimitives,
    key: &str,
    modifiers: Option<Vec<Modifier>>,
    count: Option<i64>,
) -> Result<Outcome> {
    let Some(count) = effective_count(count) else {
        return Ok(Outcome::NoOp);
    };
    let modifiers = modifiers.unwrap_or_default();
    primitives.press_key(key, &modifiers, count).await?;
    Ok(Outcome::Acted)
}

/// Submit text to the primitive layer line by line.
///
/// The text primitive is not required to interpret embedded newlines, so each
/// segment except the last is followed by an explicit commit-line key press.
/// Empty segments submit no text but still get their separator committed: a
/// trailing newline therefore ends with a commit and no final submission.
pub async fn type_text(primitives: &dyn AutomationPrimitives, text: &str) -> Result<Outcome> {
    if text.is_empty() {
        return Ok(Outcome::NoOp);
    }

    let mut segments = text.split('\n').peekable();
    while let Some(segment) = segments.next() {
        if !segment.is_empty() {
            primitives.type_text(segment).await?;
        }
        if segments.peek().is_some() {
            primitives.press_key("enter", &[], 1).await?;
        }
    }
    Ok(Outcome::Acted)
}

pub async fn set_editor_state(
    primitives: &dyn AutomationPrimitives,
    text: &str,
    cursor: u32,
    cursor_end: Option<u32>,
) -> Result<()> {
    primitives
        .set_editor_state(text, cursor, cursor_end.unwrap_or(0))
        .await?;
    Ok(())
}
