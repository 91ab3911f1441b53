//! desk-driver: address, discover, and control desktop applications by name.
//!
//! The crate sits between an automation client and a platform-specific
//! primitive layer (input synthesis, accessibility reads, process
//! enumeration) that the embedder implements behind the
//! [`desktop::AutomationPrimitives`] trait. On top of that layer it provides
//! application discovery, fuzzy name matching, lifecycle orchestration
//! (focus / launch / quit), and parameter normalization for every
//! primitive-facing call.

pub mod config;
pub mod desktop;
pub mod error;

pub use config::Config;
pub use desktop::DesktopManager;
pub use error::{DriverError, Result};
