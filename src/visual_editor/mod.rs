//! Dioxus views: toolbox, sandbox canvas and the property popup.

pub mod component;
pub mod property_popup;

pub use component::CircuitSandbox;
