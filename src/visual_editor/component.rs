use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::property_popup::PropertyForm;
use crate::api::{dispatch, ServerRequest};
use crate::config::SandboxConfig;
use crate::sandbox::geometry::{line_geometry, Position};
use crate::sandbox::registry::ComponentKind;
use crate::sandbox::{ComponentId, Placement, SandboxSession};

const SANDBOX_ID: &str = "sandbox";
const ICON_SIZE: f64 = 50.0;

#[component]
pub fn CircuitSandbox() -> Element {
    let session = use_context::<Signal<SandboxSession>>();
    let config = use_context::<SandboxConfig>();
    let wiring_armed = session.read().wiring().is_armed();

    rsx! {
        div {
            class: "circuit-sandbox",
            style: "display: flex; height: 100vh; font-family: system-ui;",
            onmouseup: move |_| end_drag(session),

            div {
                class: "toolbox",
                style: "
                    width: 160px;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                ",
                h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "Components" }

                for kind in ComponentKind::ALL {
                    ToolboxButton { key: "{kind}", kind }
                }

                if wiring_armed {
                    button {
                        onclick: move |_| cancel_wiring(session),
                        "Cancel Wire"
                    }
                }

                button {
                    style: "margin-top: 24px;",
                    onclick: move |_| dispatch(&config, ServerRequest::StartSimulation),
                    "Start Simulation"
                }

                div { style: "margin-top: 24px;",
                    h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "Instructions" }
                    p { style: "font-size: 12px; color: #666; line-height: 1.4;",
                        "Click a component to place it"
                        br {}
                        "Drag components to move"
                        br {}
                        "Double click to edit properties"
                        br {}
                        "Wire, then click two components"
                    }
                }
            }

            div {
                class: "canvas-wrapper",
                style: "flex: 1; background: #f0f0f0; overflow: hidden; position: relative;",
                Canvas {}
            }

            PropertyForm {}
        }
    }
}

#[component]
fn ToolboxButton(kind: ComponentKind) -> Element {
    let session = use_context::<Signal<SandboxSession>>();
    let config = use_context::<SandboxConfig>();

    rsx! {
        button {
            class: "comp",
            onclick: move |_| place_component(session, &config, kind),
            "{kind}"
        }
    }
}

#[component]
fn Canvas() -> Element {
    let session = use_context::<Signal<SandboxSession>>();
    let state = session.read();

    let cursor = if state.wiring().is_armed() { "crosshair" } else { "auto" };
    let ids: Vec<ComponentId> = state.instances().map(|instance| instance.id.clone()).collect();
    let wires: Vec<(Position, Position)> = state
        .wires()
        .iter()
        .filter_map(|wire| {
            let start = state.instance(&wire.start).ok()?.position;
            let end = state.instance(&wire.end).ok()?.position;
            Some((start, end))
        })
        .collect();

    rsx! {
        div {
            id: SANDBOX_ID,
            style: "width: 100%; height: 100%; position: relative; cursor: {cursor};",
            onmouseleave: move |_| end_drag(session),
            onmousemove: move |e| {
                let point = e.client_coordinates();
                handle_drag(session, point.x, point.y);
            },

            for (start, end) in wires {
                WireLine { start, end }
            }

            for id in ids {
                PlacedIcon { key: "{id}", id: id.clone() }
            }
        }
    }
}

#[component]
fn WireLine(start: Position, end: Position) -> Element {
    let half = ICON_SIZE / 2.0;
    let line = line_geometry(start.x + half, start.y + half, end.x + half, end.y + half);

    rsx! {
        div {
            class: "wire",
            style: "
                position: absolute;
                left: {line.origin_x}px;
                top: {line.origin_y}px;
                width: {line.length}px;
                height: 2px;
                background: #222;
                transform-origin: 0% 0%;
                transform: rotate({line.angle_degrees}deg);
                pointer-events: none;
            ",
        }
    }
}

#[component]
fn PlacedIcon(id: ComponentId) -> Element {
    let session = use_context::<Signal<SandboxSession>>();
    let config = use_context::<SandboxConfig>();
    let state = session.read();

    let Ok(instance) = state.instance(&id) else {
        return rsx! {};
    };
    let (kind, x, y) = (instance.kind, instance.position.x, instance.position.y);
    let src = kind.icon_path(&config.asset_base);
    let is_target = state.wiring().is_target(&id);
    let is_dragging = state.dragging() == Some(&id);

    let outline = if is_target { "2px dashed #9C27B0" } else { "none" };
    let cursor = if is_target {
        "crosshair"
    } else if is_dragging {
        "grabbing"
    } else {
        "grab"
    };

    let click_id = id.clone();
    let edit_id = id.clone();
    let drag_id = id.clone();

    rsx! {
        img {
            id: "{id}",
            class: "{kind}",
            src: "{src}",
            draggable: "false",
            style: "
                position: absolute;
                left: {x}px;
                top: {y}px;
                width: {ICON_SIZE}px;
                height: {ICON_SIZE}px;
                outline: {outline};
                cursor: {cursor};
                user-select: none;
            ",
            onmousedown: move |e| {
                e.stop_propagation();
                let point = e.client_coordinates();
                start_dragging(session, &drag_id, point.x, point.y);
            },
            onclick: move |e| {
                e.stop_propagation();
                select_endpoint(session, &config, &click_id);
            },
            ondoubleclick: move |e| {
                e.stop_propagation();
                open_editor(session, &edit_id);
            },
        }
    }
}

fn place_component(
    mut session: Signal<SandboxSession>,
    config: &SandboxConfig,
    kind: ComponentKind,
) {
    let offset = 20.0 + session.read().instances().count() as f64 * 15.0;
    let placement = session.write().place_component(kind, Position::new(offset, offset));
    if let Placement::Component { request, .. } = placement {
        dispatch(config, request);
    }
}

fn select_endpoint(mut session: Signal<SandboxSession>, config: &SandboxConfig, id: &ComponentId) {
    let wire = session.write().select_endpoint(id);
    if let Some(wire) = wire {
        dispatch(config, wire);
    }
}

fn cancel_wiring(mut session: Signal<SandboxSession>) {
    session.write().cancel_wiring();
}

fn open_editor(mut session: Signal<SandboxSession>, id: &ComponentId) {
    if let Err(err) = session.write().open_editor(id) {
        warn!("cannot edit {id}: {err}");
    }
}

// Wiring targets are left alone so the click can pick them as an endpoint.
fn start_dragging(
    mut session: Signal<SandboxSession>,
    id: &ComponentId,
    mouse_x: f64,
    mouse_y: f64,
) {
    let origin = sandbox_origin();
    match session.write().begin_drag(id, mouse_x, mouse_y, origin) {
        Ok(true) => debug!("dragging {id}"),
        Ok(false) => {}
        Err(err) => warn!("cannot drag {id}: {err}"),
    }
}

fn handle_drag(mut session: Signal<SandboxSession>, mouse_x: f64, mouse_y: f64) {
    if session.read().dragging().is_none() {
        return;
    }
    let origin = sandbox_origin();
    session.write().drag_to(mouse_x, mouse_y, origin);
}

fn end_drag(mut session: Signal<SandboxSession>) {
    if session.read().dragging().is_some() {
        session.write().end_drag();
    }
}

/// Top-left corner of the sandbox container in client coordinates.
fn sandbox_origin() -> Position {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SANDBOX_ID))
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            Position::new(rect.left(), rect.top())
        })
        .unwrap_or_default()
}
