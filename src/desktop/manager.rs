use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

use super::input;
use super::matcher;
use super::platform::{LaunchStrategy, PlatformProfile};
use super::primitives::AutomationPrimitives;
use super::scanner;
use super::shell::{NoShortcuts, ProcessSpawner, ShortcutResolver, SystemSpawner};
use super::types::{
    AliasMap, CommandOutput, EditorState, Modifier, MouseButton, Outcome, Point, WindowBounds,
};

/// Application lifecycle orchestrator.
///
/// Composes the matcher, the install-location scanner, and the primitive
/// layer into focus, focus-or-launch, launch, and quit procedures, and
/// exposes parameter-normalized pass-throughs for the remaining primitives.
///
/// Running and installed application lists are queried fresh on every call;
/// OS focus state is an external unsynchronized resource, so callers needing
/// a strict sequence of operations must await each one before the next.
pub struct DesktopManager {
    primitives: Arc<dyn AutomationPrimitives>,
    spawner: Arc<dyn ProcessSpawner>,
    shortcuts: Arc<dyn ShortcutResolver>,
    profile: PlatformProfile,
    config: Config,
}

impl DesktopManager {
    /// Create a manager for the current platform with environment-backed
    /// configuration.
    pub fn new(primitives: Arc<dyn AutomationPrimitives>) -> Self {
        Self::with_profile(primitives, PlatformProfile::current(), Config::from_env())
    }

    pub fn with_profile(
        primitives: Arc<dyn AutomationPrimitives>,
        profile: PlatformProfile,
        config: Config,
    ) -> Self {
        Self {
            primitives,
            spawner: Arc::new(SystemSpawner),
            shortcuts: Arc::new(NoShortcuts),
            profile,
            config,
        }
    }

    pub fn with_spawner(mut self, spawner: Arc<dyn ProcessSpawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Install the shortcut-resolution collaborator (Windows-family only).
    pub fn with_shortcut_resolver(mut self, shortcuts: Arc<dyn ShortcutResolver>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    // ============ Lifecycle ============

    /// Bring a running application matching `application` to the foreground.
    /// No running match is a common outcome and reported as `NoOp`.
    pub async fn focus_application(
        &self,
        application: &str,
        aliases: &AliasMap,
    ) -> Result<Outcome> {
        let running = self.primitives.get_running_applications().await?;
        let matches = matcher::match_applications(application, &running, aliases);
        match matches.first() {
            Some(&target) => {
                self.primitives.focus_application(target).await?;
                tracing::info!(application = %target, "focused");
                Ok(Outcome::Acted)
            }
            None => {
                tracing::debug!(application, "no running application matched");
                Ok(Outcome::NoOp)
            }
        }
    }

    /// Focus a running match if one exists, otherwise launch. The installed
    /// scan is far more expensive than the running-application query, so the
    /// launch path is only taken when no running match exists.
    pub async fn focus_or_launch_application(
        &self,
        application: &str,
        aliases: &AliasMap,
    ) -> Result<Outcome> {
        let running = self.primitives.get_running_applications().await?;
        let matches = matcher::match_applications(application, &running, aliases);
        match matches.first() {
            Some(&target) => {
                self.primitives.focus_application(target).await?;
                tracing::info!(application = %target, "focused");
                Ok(Outcome::Acted)
            }
            None => self.launch_application(application, aliases).await,
        }
    }

    /// Launch an application as a detached process, using the platform's
    /// launch strategy. No installed match is reported as `NoOp`.
    pub async fn launch_application(
        &self,
        application: &str,
        aliases: &AliasMap,
    ) -> Result<Outcome> {
        match self.profile.launch {
            LaunchStrategy::SpawnDirect => {
                // The name is an executable reference; no discovery here.
                self.spawner.spawn_detached(application, &[], None)?;
                tracing::info!(application, "launched");
                Ok(Outcome::Acted)
            }
            LaunchStrategy::OpenBundle => {
                let Some(bundle) = self.first_installed_match(application, aliases).await else {
                    return Ok(Outcome::NoOp);
                };
                self.spawner
                    .spawn_detached("open", std::slice::from_ref(&bundle), None)?;
                tracing::info!(application = %bundle, "launched");
                Ok(Outcome::Acted)
            }
            LaunchStrategy::ResolveShortcut => {
                let Some(candidate) = self.first_installed_match(application, aliases).await
                else {
                    return Ok(Outcome::NoOp);
                };
                if candidate.ends_with(".lnk") {
                    self.launch_shortcut(&candidate)
                } else {
                    self.spawner.spawn_detached(&candidate, &[], None)?;
                    tracing::info!(application = %candidate, "launched");
                    Ok(Outcome::Acted)
                }
            }
            LaunchStrategy::Unsupported => {
                tracing::debug!(application, "launch unsupported on this platform");
                Ok(Outcome::NoOp)
            }
        }
    }

    fn launch_shortcut(&self, shortcut: &str) -> Result<Outcome> {
        let resolved = match self.shortcuts.resolve(Path::new(shortcut)) {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::warn!(shortcut, %error, "shortcut resolution failed");
                return Ok(Outcome::NoOp);
            }
        };

        let program = resolved
            .target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| resolved.target.to_string_lossy().into_owned());
        let args: Vec<String> = resolved
            .args
            .map(|args| vec![args.replace('"', "")])
            .unwrap_or_default();

        self.spawner
            .spawn_detached(&program, &args, resolved.working_dir.as_deref())?;
        tracing::info!(application = %program, "launched");
        Ok(Outcome::Acted)
    }

    /// Ask a running application matching `application` to quit by focusing
    /// it and dispatching the platform's quit combo at it.
    pub async fn quit_application(
        &self,
        application: &str,
        aliases: &AliasMap,
    ) -> Result<Outcome> {
        if application.is_empty() {
            return Ok(Outcome::NoOp);
        }

        let running = self.primitives.get_running_applications().await?;
        let matches = matcher::match_applications(application, &running, aliases);
        let Some(&target) = matches.first() else {
            tracing::debug!(application, "no running application matched, nothing to quit");
            return Ok(Outcome::NoOp);
        };

        // The quit accelerator lands on whichever application holds focus, so
        // the focus step has to settle before the combo is dispatched.
        let combo = self.profile.quit_combo;
        self.primitives.focus_application(target).await?;
        tokio::time::sleep(self.config.settle_delay).await;
        self.primitives
            .press_key(combo.key, &[combo.modifier], 1)
            .await?;
        tracing::info!(application = %target, "sent quit combo");
        Ok(Outcome::Acted)
    }

    // ============ Discovery ============

    /// Scan the platform's install locations for application bundles or
    /// shortcuts. Produced fresh on every call.
    pub async fn get_installed_applications(&self) -> Vec<String> {
        scanner::scan(
            &self.profile.search_roots,
            self.profile.bundle_suffix,
            self.config.scan_depth,
        )
        .await
    }

    pub async fn get_running_applications(&self) -> Result<Vec<String>> {
        Ok(self.primitives.get_running_applications().await?)
    }

    async fn first_installed_match(&self, application: &str, aliases: &AliasMap) -> Option<String> {
        let installed = self.get_installed_applications().await;
        let matches = matcher::match_applications(application, &installed, aliases);
        match matches.first() {
            Some(&candidate) => Some(candidate.to_string()),
            None => {
                tracing::debug!(application, "no installed application matched");
                None
            }
        }
    }

    // ============ Normalized primitive pass-throughs ============

    pub async fn click(&self, button: Option<MouseButton>, count: Option<i64>) -> Result<Outcome> {
        input::click(self.primitives.as_ref(), button, count).await
    }

    pub async fn click_button(&self, label: &str, count: Option<i64>) -> Result<Outcome> {
        input::click_button(self.primitives.as_ref(), label, count).await
    }

    pub async fn mouse_down(&self, button: Option<MouseButton>) -> Result<()> {
        input::mouse_down(self.primitives.as_ref(), button).await
    }

    pub async fn mouse_up(&self, button: Option<MouseButton>) -> Result<()> {
        input::mouse_up(self.primitives.as_ref(), button).await
    }

    pub async fn set_mouse_location(&self, x: i32, y: i32) -> Result<()> {
        input::set_mouse_location(self.primitives.as_ref(), x, y).await
    }

    pub async fn get_mouse_location(&self) -> Result<Point> {
        Ok(self.primitives.get_mouse_location().await?)
    }

    pub async fn press_key(
        &self,
        key: &str,
        modifiers: Option<Vec<Modifier>>,
        count: Option<i64>,
    ) -> Result<Outcome> {
        input::press_key(self.primitives.as_ref(), key, modifiers, count).await
    }

    pub async fn type_text(&self, text: &str) -> Result<Outcome> {
        input::type_text(self.primitives.as_ref(), text).await
    }

    pub async fn get_active_application(&self) -> Result<String> {
        Ok(self.primitives.get_active_application().await?)
    }

    pub async fn get_editor_state(&self) -> Result<EditorState> {
        Ok(self.primitives.get_editor_state().await?)
    }

    pub async fn set_editor_state(
        &self,
        text: &str,
        cursor: u32,
        cursor_end: Option<u32>,
    ) -> Result<()> {
        input::set_editor_state(self.primitives.as_ref(), text, cursor, cursor_end).await
    }

    pub async fn get_clickable_buttons(&self) -> Result<Vec<String>> {
        Ok(self.primitives.get_clickable_buttons().await?)
    }

    pub async fn get_active_application_window_bounds(&self) -> Result<WindowBounds> {
        Ok(self.primitives.get_active_application_window_bounds().await?)
    }

    /// Run an external command to completion, capturing stdout and stderr.
    pub async fn run_command(
        &self,
        program: &str,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<CommandOutput> {
        self.spawner.run(program, args, working_dir).await
    }
}

impl Clone for DesktopManager {
    fn clone(&self) -> Self {
        Self {
            primitives: Arc::clone(&self.primitives),
            spawner: Arc::clone(&self.spawner),
            shortcuts: Arc::clone(&self.shortcuts),
            profile: self.profile.clone(),
            config: self.config.clone(),
        }
    }
}
