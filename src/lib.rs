//! Browser front end for a circuit building sandbox.
//!
//! Components are placed and wired on a canvas, edited through a popup and
//! reported to an external simulation server, which owns the canonical
//! parameter values and does all validation and simulation.

pub mod api;
pub mod config;
pub mod error;
pub mod sandbox;
pub mod visual_editor;

pub use config::SandboxConfig;
pub use error::{Result, SandboxError};
pub use sandbox::SandboxSession;
