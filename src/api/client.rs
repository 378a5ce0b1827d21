use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::spawn;
use gloo_net::http::Request;

use super::requests::{Method, ServerRequest, SimulationStatus};
use crate::config::SandboxConfig;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

pub async fn send(config: &SandboxConfig, request: &ServerRequest) -> Result<Reply> {
    let http = request.to_http(&config.server_url, config.encoding)?;
    let pending = match http.method {
        Method::Get => Request::get(&http.url).build()?,
        Method::Post => Request::post(&http.url)
            .header("Content-Type", "application/json")
            .body(http.body.unwrap_or_default())?,
    };
    let response = pending.send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(Reply { status, body })
}

/// Sends `request` in the background. The UI does not wait for or react to
/// the reply; the outcome is only logged.
pub fn dispatch(config: &SandboxConfig, request: impl Into<ServerRequest>) {
    let config = config.clone();
    let request = request.into();
    spawn(async move {
        match send(&config, &request).await {
            Ok(reply) => log_reply(&request, &reply),
            Err(err) => warn!("{} failed: {err}", request.path()),
        }
    });
}

fn log_reply(request: &ServerRequest, reply: &Reply) {
    info!("{} {} {}", request.path(), reply.body, reply.status);
    if !matches!(request, ServerRequest::StartSimulation) {
        return;
    }
    match serde_json::from_str::<SimulationStatus>(&reply.body) {
        Ok(status) if status.is_valid() => info!("simulation started"),
        Ok(status) => warn!("simulation rejected: {}", status.status),
        Err(err) => warn!("unreadable simulation status: {err}"),
    }
}
