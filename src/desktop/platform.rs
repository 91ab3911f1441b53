use std::path::PathBuf;

use super::types::{KeyCombo, Modifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOs
        }

        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }

        #[cfg(target_os = "linux")]
        {
            Platform::Linux
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Platform::Other
        }
    }
}

/// How `launch_application` reaches an executable on this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStrategy {
    /// Spawn the given name verbatim as an executable; no discovery.
    SpawnDirect,
    /// Discover an application bundle and open it through the OS.
    OpenBundle,
    /// Discover a shortcut file and resolve it to an executable first.
    ResolveShortcut,
    Unsupported,
}

/// Read-only bundle of per-OS constants. Selected once, consumed by every
/// component; nothing outside this module inspects OS identity directly.
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    /// Root directories of the installed-application scan.
    pub search_roots: Vec<PathBuf>,
    /// File-name suffix identifying an application bundle or shortcut.
    pub bundle_suffix: Option<&'static str>,
    /// Accelerator that asks the focused application to quit.
    pub quit_combo: KeyCombo,
    pub launch: LaunchStrategy,
}

impl PlatformProfile {
    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::MacOs => Self {
                search_roots: vec![
                    PathBuf::from("/Applications"),
                    PathBuf::from("/System/Applications"),
                ],
                bundle_suffix: Some(".app"),
                quit_combo: KeyCombo {
                    modifier: Modifier::Meta,
                    key: "q",
                },
                launch: LaunchStrategy::OpenBundle,
            },
            Platform::Windows => {
                let mut search_roots = Vec::new();
                if let Some(desktop) = dirs::desktop_dir() {
                    search_roots.push(desktop);
                }
                if let Some(app_data) = dirs::config_dir() {
                    search_roots.push(
                        app_data
                            .join("Microsoft")
                            .join("Windows")
                            .join("Start Menu")
                            .join("Programs"),
                    );
                }
                search_roots.push(PathBuf::from(
                    r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs",
                ));

                Self {
                    search_roots,
                    bundle_suffix: Some(".lnk"),
                    quit_combo: KeyCombo {
                        modifier: Modifier::Alt,
                        key: "f4",
                    },
                    launch: LaunchStrategy::ResolveShortcut,
                }
            }
            // No filesystem-based discovery; launches spawn the name directly.
            Platform::Linux => Self {
                search_roots: Vec::new(),
                bundle_suffix: None,
                quit_combo: KeyCombo {
                    modifier: Modifier::Alt,
                    key: "f4",
                },
                launch: LaunchStrategy::SpawnDirect,
            },
            Platform::Other => Self {
                search_roots: Vec::new(),
                bundle_suffix: None,
                quit_combo: KeyCombo {
                    modifier: Modifier::Alt,
                    key: "f4",
                },
                launch: LaunchStrategy::Unsupported,
            },
        }
    }
}
