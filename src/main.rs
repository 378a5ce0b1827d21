use circuit_sandbox::visual_editor::CircuitSandbox;
use circuit_sandbox::{SandboxConfig, SandboxSession};
use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    SandboxPage {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| {
        SandboxConfig::from_build_env().unwrap_or_else(|err| {
            warn!("{err}, using defaults");
            SandboxConfig::default()
        })
    });
    use_context_provider(|| Signal::new(SandboxSession::new(config.prefill)));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn SandboxPage() -> Element {
    rsx! {
        CircuitSandbox {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { style: "font-family: system-ui; padding: 32px;",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::SandboxPage {}, "Back to the sandbox" }
        }
    }
}
