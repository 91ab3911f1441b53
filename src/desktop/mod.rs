//! Application resolution and lifecycle orchestration.
//!
//! The driver addresses desktop applications by name: it discovers installed
//! applications from platform install locations, fuzzily matches a
//! user-supplied name against installed and running application lists, and
//! orchestrates focus, launch, and quit as multi-step platform-aware
//! procedures over a primitive automation layer the embedder provides.
//!
//! ## Architecture
//!
//! - [`DesktopManager`] - high-level orchestrator and normalized pass-throughs
//! - [`AutomationPrimitives`] - the consumed native primitive layer
//! - [`PlatformProfile`] - per-OS constants (search roots, suffix, quit combo)
//! - `matcher` / `scanner` / `input` - pure resolution and normalization logic
//!
//! ## Example
//!
//! ```rust,ignore
//! use desk_driver::desktop::DesktopManager;
//!
//! let manager = DesktopManager::new(primitives);
//!
//! // Focus the editor if it is running, otherwise launch it
//! manager.focus_or_launch_application("code", &aliases).await?;
//!
//! // Ask it to quit again
//! manager.quit_application("code", &aliases).await?;
//! ```

pub mod input;
pub mod manager;
pub mod matcher;
pub mod platform;
pub mod primitives;
pub mod scanner;
pub mod shell;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use manager::DesktopManager;
pub use platform::{LaunchStrategy, Platform, PlatformProfile};
pub use primitives::AutomationPrimitives;
pub use shell::{NoShortcuts, ProcessSpawner, ShortcutResolver, SystemSpawner};
pub use types::{
    AliasMap, CommandOutput, EditorState, KeyCombo, Modifier, MouseButton, Outcome, Point,
    ShortcutTarget, WindowBounds,
};
