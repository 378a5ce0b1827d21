//! Payloads for the simulation server and how they are put on the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SandboxError};
use crate::sandbox::params::ParameterSet;
use crate::sandbox::registry::ComponentKind;
use crate::sandbox::ComponentId;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub params: ParameterSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateWire {
    pub start: ComponentId,
    pub end: ComponentId,
}

/// Raw text of every popup input. The server validates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateProperties {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: ComponentId,
    pub params: IndexMap<String, String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ServerRequest {
    CreateComponent(CreateComponent),
    CreateWire(CreateWire),
    UpdateProperties(UpdateProperties),
    StartSimulation,
}

impl ServerRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ServerRequest::CreateComponent(_) => "newcomp",
            ServerRequest::CreateWire(_) => "newwire",
            ServerRequest::UpdateProperties(_) => "update",
            ServerRequest::StartSimulation => "start/",
        }
    }

    /// JSON payload, or `None` for requests that carry nothing.
    pub fn payload(&self) -> Result<Option<String>> {
        let json = match self {
            ServerRequest::CreateComponent(body) => serde_json::to_string(body),
            ServerRequest::CreateWire(body) => serde_json::to_string(body),
            ServerRequest::UpdateProperties(body) => serde_json::to_string(body),
            ServerRequest::StartSimulation => return Ok(None),
        };
        json.map(Some).map_err(SandboxError::Encode)
    }

    /// Method, URL and body for `encoding` against `server_url`.
    pub fn to_http(&self, server_url: &str, encoding: RequestEncoding) -> Result<HttpRequest> {
        let url = format!("{}/{}", server_url.trim_end_matches('/'), self.path());
        let request = match (self.payload()?, encoding) {
            (None, _) => HttpRequest {
                method: Method::Get,
                url,
                body: None,
            },
            (Some(json), RequestEncoding::JsonBody) => HttpRequest {
                method: Method::Post,
                url,
                body: Some(json),
            },
            (Some(json), RequestEncoding::LegacyQuery) => HttpRequest {
                method: Method::Get,
                url: format!("{url}?{json}"),
                body: None,
            },
        };
        Ok(request)
    }
}

impl From<CreateComponent> for ServerRequest {
    fn from(body: CreateComponent) -> Self {
        ServerRequest::CreateComponent(body)
    }
}

impl From<CreateWire> for ServerRequest {
    fn from(body: CreateWire) -> Self {
        ServerRequest::CreateWire(body)
    }
}

impl From<UpdateProperties> for ServerRequest {
    fn from(body: UpdateProperties) -> Self {
        ServerRequest::UpdateProperties(body)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestEncoding {
    /// `POST` with the payload as a JSON body.
    #[default]
    JsonBody,
    /// `GET path?{json}` with the JSON appended unescaped, as older servers
    /// expect.
    LegacyQuery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Reply to a start simulation request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SimulationStatus {
    pub status: String,
}

impl SimulationStatus {
    pub fn is_valid(&self) -> bool {
        self.status == "valid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_resistor() -> ServerRequest {
        CreateComponent {
            kind: ComponentKind::Resistor,
            params: ParameterSet::defaults(ComponentKind::Resistor),
        }
        .into()
    }

    #[test]
    fn create_component_payload() {
        assert_eq!(
            create_resistor().payload().unwrap().unwrap(),
            r#"{"type":"Resistor","params":{"resistance":5.0}}"#
        );
        let switch: ServerRequest = CreateComponent {
            kind: ComponentKind::Switch,
            params: ParameterSet::defaults(ComponentKind::Switch),
        }
        .into();
        assert_eq!(
            switch.payload().unwrap().unwrap(),
            r#"{"type":"Switch","params":{"state":"OFF"}}"#
        );
    }

    #[test]
    fn wire_and_update_payloads() {
        let wire: ServerRequest = CreateWire {
            start: ComponentId::new(ComponentKind::DcBattery, 0),
            end: ComponentId::new(ComponentKind::Junction, 2),
        }
        .into();
        assert_eq!(
            wire.payload().unwrap().unwrap(),
            r#"{"start":"DC_Battery0","end":"Junction2"}"#
        );

        let update: ServerRequest = UpdateProperties {
            kind: ComponentKind::LightBulb,
            name: ComponentId::new(ComponentKind::LightBulb, 1),
            params: IndexMap::from([
                ("resistance".to_string(), "7".to_string()),
                ("wattage".to_string(), "60".to_string()),
            ]),
        }
        .into();
        let expected = concat!(
            r#"{"type":"Light_Bulb","name":"Light_Bulb1","#,
            r#""params":{"resistance":"7","wattage":"60"}}"#
        );
        assert_eq!(update.payload().unwrap().unwrap(), expected);
    }

    #[test]
    fn json_body_encoding_posts() {
        let http = create_resistor()
            .to_http("http://localhost:8000/", RequestEncoding::JsonBody)
            .unwrap();
        assert_eq!(http.method, Method::Post);
        assert_eq!(http.url, "http://localhost:8000/newcomp");
        assert_eq!(
            http.body.as_deref(),
            Some(r#"{"type":"Resistor","params":{"resistance":5.0}}"#)
        );
    }

    #[test]
    fn legacy_encoding_appends_json_to_query() {
        let http = create_resistor().to_http("", RequestEncoding::LegacyQuery).unwrap();
        assert_eq!(http.method, Method::Get);
        assert_eq!(
            http.url,
            r#"/newcomp?{"type":"Resistor","params":{"resistance":5.0}}"#
        );
        assert_eq!(http.body, None);
    }

    #[test]
    fn start_simulation_has_no_payload() {
        let http = ServerRequest::StartSimulation
            .to_http("http://sim", RequestEncoding::JsonBody)
            .unwrap();
        assert_eq!(
            http,
            HttpRequest {
                method: Method::Get,
                url: "http://sim/start/".to_string(),
                body: None,
            }
        );
    }

    #[test]
    fn simulation_status_parses() {
        let status: SimulationStatus = serde_json::from_str(r#"{"status":"valid"}"#).unwrap();
        assert!(status.is_valid());
        let status: SimulationStatus =
            serde_json::from_str(r#"{"status":"open circuit"}"#).unwrap();
        assert!(!status.is_valid());
    }
}
