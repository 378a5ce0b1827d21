use circuit_sandbox::api::requests::{Method, RequestEncoding};
use circuit_sandbox::api::ServerRequest;
use circuit_sandbox::sandbox::editor::{EditorOutcome, PrefillPolicy};
use circuit_sandbox::sandbox::geometry::Position;
use circuit_sandbox::sandbox::registry::ComponentKind;
use circuit_sandbox::sandbox::{ComponentId, Placement};
use circuit_sandbox::SandboxSession;

fn place(session: &mut SandboxSession, kind: ComponentKind) -> (ComponentId, ServerRequest) {
    match session.place_component(kind, Position::new(0.0, 0.0)) {
        Placement::Component { instance, request } => (instance.id, request.into()),
        Placement::WiringArmed => panic!("{kind} armed wiring"),
    }
}

#[test]
fn placing_resistors_numbers_them_and_sends_defaults() {
    let mut session = SandboxSession::default();

    let (first, request) = place(&mut session, ComponentKind::Resistor);
    assert_eq!(first.as_str(), "Resistor0");
    assert_eq!(
        request.payload().unwrap().as_deref(),
        Some(r#"{"type":"Resistor","params":{"resistance":5.0}}"#)
    );

    let (second, _) = place(&mut session, ComponentKind::Resistor);
    assert_eq!(second.as_str(), "Resistor1");

    let (battery, request) = place(&mut session, ComponentKind::DcBattery);
    assert_eq!(battery.as_str(), "DC_Battery0");
    assert_eq!(
        request.payload().unwrap().as_deref(),
        Some(r#"{"type":"DC_Battery","params":{"voltage":9.0}}"#)
    );
}

#[test]
fn build_wire_and_edit_a_small_circuit() {
    let mut session = SandboxSession::new(PrefillPolicy::Defaults);
    let (battery, _) = place(&mut session, ComponentKind::DcBattery);
    let (bulb, _) = place(&mut session, ComponentKind::LightBulb);

    assert_eq!(
        session.place_component(ComponentKind::Wire, Position::default()),
        Placement::WiringArmed
    );
    assert!(session.select_endpoint(&battery).is_none());
    let wire: ServerRequest = session.select_endpoint(&bulb).unwrap().into();
    assert_eq!(
        wire.payload().unwrap().as_deref(),
        Some(r#"{"start":"DC_Battery0","end":"Light_Bulb0"}"#)
    );

    assert_eq!(session.open_editor(&bulb).unwrap(), EditorOutcome::Opened);
    assert_eq!(session.open_editor(&battery).unwrap(), EditorOutcome::AlreadyOpen);
    let fields: Vec<_> = session
        .popup()
        .unwrap()
        .fields
        .iter()
        .map(|field| (field.name, field.value.clone()))
        .collect();
    assert_eq!(fields, [("resistance", "5".to_string()), ("wattage", "16.2".to_string())]);

    session.set_field("wattage", "100");
    let update: ServerRequest = session.submit_edits().unwrap().into();
    assert!(session.popup().is_none());

    let http = update
        .to_http("http://localhost:8000", RequestEncoding::LegacyQuery)
        .unwrap();
    assert_eq!(http.method, Method::Get);
    let expected = concat!(
        r#"http://localhost:8000/update?{"type":"Light_Bulb","name":"Light_Bulb0","#,
        r#""params":{"resistance":"5","wattage":"100"}}"#
    );
    assert_eq!(http.url, expected);
}

#[test]
fn meters_place_but_cannot_be_edited() {
    let mut session = SandboxSession::default();
    let (meter, request) = place(&mut session, ComponentKind::Ammeter);
    assert_eq!(
        request.payload().unwrap().as_deref(),
        Some(r#"{"type":"Ammeter","params":{}}"#)
    );
    assert_eq!(session.open_editor(&meter).unwrap(), EditorOutcome::NothingToEdit);
    assert!(session.submit_edits().is_none());
}
