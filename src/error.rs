//! Error types for the circuit sandbox.

use thiserror::Error;

use crate::sandbox::registry::ComponentKind;
use crate::sandbox::ComponentId;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("unknown component kind: {0}")]
    UnknownComponentKind(String),

    #[error("{kind} has no parameter named {name}")]
    UnknownParameter { kind: ComponentKind, name: String },

    #[error("wrong value type for {kind}.{name}")]
    ParameterType { kind: ComponentKind, name: String },

    #[error("no component with id {0} in this sandbox")]
    UnknownComponent(ComponentId),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
