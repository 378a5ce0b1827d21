use std::collections::BTreeSet;

use dioxus::logger::tracing::debug;

use super::ComponentId;
use crate::api::requests::CreateWire;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WiringState {
    #[default]
    Idle,
    AwaitingSecondEndpoint(ComponentId),
}

/// Two-click wire creation.
///
/// Arming snapshots the components that may be clicked as endpoints. The
/// second selection emits the wire, clears the targets and returns to idle in
/// one step. Selecting the same component twice is not rejected.
#[derive(Clone, Debug, Default)]
pub struct WiringMachine {
    state: WiringState,
    targets: Option<BTreeSet<ComponentId>>,
}

impl WiringMachine {
    pub fn arm(&mut self, targets: impl IntoIterator<Item = ComponentId>) {
        let targets: BTreeSet<_> = targets.into_iter().collect();
        debug!("wiring armed with {} targets", targets.len());
        self.targets = Some(targets);
    }

    /// Leaves wiring mode, dropping any pending start endpoint.
    pub fn disarm(&mut self) {
        self.targets = None;
        self.state = WiringState::Idle;
    }

    pub fn is_armed(&self) -> bool {
        self.targets.is_some()
    }

    pub fn is_target(&self, id: &ComponentId) -> bool {
        self.targets.as_ref().is_some_and(|targets| targets.contains(id))
    }

    pub fn state(&self) -> &WiringState {
        &self.state
    }

    /// Feeds a click on `id`. Returns the completed wire on the second
    /// selection. Clicks outside the armed targets are ignored.
    pub fn select_endpoint(&mut self, id: ComponentId) -> Option<CreateWire> {
        if !self.is_target(&id) {
            return None;
        }
        match std::mem::take(&mut self.state) {
            WiringState::Idle => {
                self.state = WiringState::AwaitingSecondEndpoint(id);
                None
            }
            WiringState::AwaitingSecondEndpoint(start) => {
                self.targets = None;
                Some(CreateWire { start, end: id })
            }
        }
    }
}
