//! Sandbox state: placement counters, placed components, wiring and the
//! property popup, owned by one [`SandboxSession`].

pub mod editor;
pub mod geometry;
pub mod params;
pub mod registry;
pub mod wiring;

use std::collections::HashMap;
use std::fmt;

use dioxus::logger::tracing::{debug, info};
use indexmap::IndexMap;
use serde::Serialize;

use crate::api::requests::{CreateComponent, CreateWire, UpdateProperties};
use crate::error::{Result, SandboxError};
use editor::{EditorOutcome, PrefillPolicy, PropertyEditor, PropertyPopup};
use geometry::{move_component, Position};
use params::ParameterSet;
use registry::ComponentKind;
use wiring::WiringMachine;

/// Identifier of a placed component: kind name followed by its per-kind
/// placement index, e.g. `Resistor0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(kind: ComponentKind, index: u32) -> Self {
        Self(format!("{kind}{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kind encoded in the identifier prefix.
    pub fn kind(&self) -> Result<ComponentKind> {
        self.0.trim_end_matches(|c: char| c.is_ascii_digit()).parse()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComponentInstance {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWire {
    pub start: ComponentId,
    pub end: ComponentId,
}

/// Component being dragged and where inside its icon it was grabbed.
#[derive(Clone, Debug, PartialEq)]
struct Drag {
    id: ComponentId,
    grab: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
    Component {
        instance: ComponentInstance,
        request: CreateComponent,
    },
    WiringArmed,
}

/// Per-kind monotonically increasing placement counters. Never rewound.
#[derive(Clone, Debug, Default)]
pub struct PlacementCounters(HashMap<ComponentKind, u32>);

impl PlacementCounters {
    pub fn next_id(&mut self, kind: ComponentKind) -> ComponentId {
        let counter = self.0.entry(kind).or_default();
        let id = ComponentId::new(kind, *counter);
        *counter += 1;
        id
    }

    pub fn count(&self, kind: ComponentKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SandboxSession {
    counters: PlacementCounters,
    instances: IndexMap<ComponentId, ComponentInstance>,
    wires: Vec<PlacedWire>,
    wiring: WiringMachine,
    editor: PropertyEditor,
    drag: Option<Drag>,
}

impl SandboxSession {
    pub fn new(prefill: PrefillPolicy) -> Self {
        Self {
            editor: PropertyEditor::new(prefill),
            ..Self::default()
        }
    }

    /// Places a component of `kind` at `position`, or arms wiring mode for
    /// [`ComponentKind::Wire`].
    pub fn place_component(&mut self, kind: ComponentKind, position: Position) -> Placement {
        if !kind.is_placeable() {
            self.drag = None;
            self.wiring.arm(self.instances.keys().cloned());
            return Placement::WiringArmed;
        }

        let id = self.counters.next_id(kind);
        let instance = ComponentInstance {
            id: id.clone(),
            kind,
            position,
        };
        self.instances.insert(id.clone(), instance.clone());
        info!("placed {id}");

        Placement::Component {
            instance,
            request: CreateComponent {
                kind,
                params: ParameterSet::defaults(kind),
            },
        }
    }

    pub fn select_endpoint(&mut self, id: &ComponentId) -> Option<CreateWire> {
        let wire = self.wiring.select_endpoint(id.clone())?;
        info!("wired {} -> {}", wire.start, wire.end);
        self.wires.push(PlacedWire {
            start: wire.start.clone(),
            end: wire.end.clone(),
        });
        Some(wire)
    }

    pub fn cancel_wiring(&mut self) {
        self.wiring.disarm();
    }

    pub fn open_editor(&mut self, id: &ComponentId) -> Result<EditorOutcome> {
        let kind = self.instance(id)?.kind;
        let outcome = self.editor.open(id, kind);
        debug!("open editor for {id}: {outcome:?}");
        Ok(outcome)
    }

    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) {
        self.editor.set_field(name, raw);
    }

    pub fn submit_edits(&mut self) -> Option<UpdateProperties> {
        self.editor.submit()
    }

    pub fn cancel_edits(&mut self) {
        self.editor.cancel();
    }

    /// Moves a placed component to the pointer, relative to `origin`.
    pub fn move_component(
        &mut self,
        id: &ComponentId,
        pointer_x: f64,
        pointer_y: f64,
        origin: Position,
    ) -> Result<Position> {
        let position = move_component(pointer_x, pointer_y, origin);
        self.instances
            .get_mut(id)
            .ok_or_else(|| SandboxError::UnknownComponent(id.clone()))?
            .position = position;
        Ok(position)
    }

    /// Grabs `id` at the pointer. Returns `false` without grabbing when the
    /// component is a wiring target, since clicking it picks an endpoint.
    pub fn begin_drag(
        &mut self,
        id: &ComponentId,
        pointer_x: f64,
        pointer_y: f64,
        origin: Position,
    ) -> Result<bool> {
        let position = self.instance(id)?.position;
        if self.wiring.is_target(id) {
            return Ok(false);
        }
        let grab = move_component(pointer_x - position.x, pointer_y - position.y, origin);
        self.drag = Some(Drag {
            id: id.clone(),
            grab,
        });
        Ok(true)
    }

    /// Moves the grabbed component, if any, keeping the grab offset.
    pub fn drag_to(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        origin: Position,
    ) -> Option<Position> {
        let Drag { id, grab } = self.drag.clone()?;
        match self.move_component(&id, pointer_x - grab.x, pointer_y - grab.y, origin) {
            Ok(position) => Some(position),
            Err(err) => {
                debug!("dropping drag: {err}");
                self.drag = None;
                None
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn dragging(&self) -> Option<&ComponentId> {
        self.drag.as_ref().map(|drag| &drag.id)
    }

    pub fn instance(&self, id: &ComponentId) -> Result<&ComponentInstance> {
        self.instances
            .get(id)
            .ok_or_else(|| SandboxError::UnknownComponent(id.clone()))
    }

    pub fn instances(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.instances.values()
    }

    pub fn wires(&self) -> &[PlacedWire] {
        &self.wires
    }

    pub fn wiring(&self) -> &WiringMachine {
        &self.wiring
    }

    pub fn popup(&self) -> Option<&PropertyPopup> {
        self.editor.popup()
    }

    pub fn counters(&self) -> &PlacementCounters {
        &self.counters
    }
}
