use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::api::dispatch;
use crate::config::SandboxConfig;
use crate::sandbox::registry::{get_info, ComponentKind};
use crate::sandbox::SandboxSession;

/// The edit popup. Renders nothing while no popup is open.
#[component]
pub fn PropertyForm() -> Element {
    let mut session = use_context::<Signal<SandboxSession>>();
    let config = use_context::<SandboxConfig>();

    let Some(popup) = session.read().popup().cloned() else {
        return rsx! {};
    };
    let kind = popup.kind;
    let fields = popup.fields;

    rsx! {
        div {
            id: "popup",
            style: "
                position: absolute;
                right: 24px;
                top: 24px;
                width: 140px;
                padding: 8px;
                background: white;
                border: 2px solid #333;
                border-radius: 8px;
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",
            div { style: "font-weight: bold; text-align: center;", "{kind}" }

            for field in fields {
                FieldRow { key: "{field.name}", kind, name: field.name, value: field.value }
            }

            button {
                style: "width: 120px;",
                onclick: move |_| submit_edits(session, &config),
                "Save Changes"
            }
            button {
                style: "width: 120px;",
                // Close without sending anything
                onclick: move |_| session.write().cancel_edits(),
                "Cancel"
            }
        }
    }
}

#[component]
fn FieldRow(kind: ComponentKind, name: &'static str, value: String) -> Element {
    let mut session = use_context::<Signal<SandboxSession>>();
    let mut show_info = use_signal(|| false);

    let info = if show_info() {
        get_info(kind, name)
            .inspect_err(|err| warn!("no hint for {kind}.{name}: {err}"))
            .ok()
    } else {
        None
    };

    rsx! {
        div {
            style: "text-align: center; cursor: help;",
            onmouseenter: move |_| show_info.set(true),
            onmouseleave: move |_| show_info.set(false),
            onclick: move |_| {
                let shown = show_info();
                show_info.set(!shown);
            },
            "{name}"
        }
        if let Some(info) = info {
            div {
                class: "param-info",
                style: "
                    font-size: 11px;
                    color: #555;
                    background: #ffffe0;
                    padding: 4px;
                    border-radius: 4px;
                ",
                "{info}"
            }
        }
        input {
            class: "propInput",
            style: "width: 116px;",
            value: "{value}",
            oninput: move |e| session.write().set_field(name, e.value()),
        }
    }
}

fn submit_edits(mut session: Signal<SandboxSession>, config: &SandboxConfig) {
    let update = session.write().submit_edits();
    if let Some(update) = update {
        dispatch(config, update);
    }
}
