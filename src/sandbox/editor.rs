use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use super::registry::{lookup, ComponentKind};
use super::ComponentId;
use crate::api::requests::UpdateProperties;

/// What the popup inputs are filled with when it opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefillPolicy {
    /// Registry defaults, whatever was submitted before.
    #[default]
    Defaults,
    /// The raw values last submitted in this session, falling back to
    /// defaults.
    LastSubmitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupField {
    pub name: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyPopup {
    pub target: ComponentId,
    pub kind: ComponentKind,
    pub fields: Vec<PopupField>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditorOutcome {
    Opened,
    AlreadyOpen,
    NothingToEdit,
}

/// The single property popup of a sandbox.
#[derive(Clone, Debug, Default)]
pub struct PropertyEditor {
    policy: PrefillPolicy,
    popup: Option<PropertyPopup>,
    submitted: HashMap<ComponentId, IndexMap<String, String>>,
}

impl PropertyEditor {
    pub fn new(policy: PrefillPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn popup(&self) -> Option<&PropertyPopup> {
        self.popup.as_ref()
    }

    pub fn open(&mut self, target: &ComponentId, kind: ComponentKind) -> EditorOutcome {
        if self.popup.is_some() {
            return EditorOutcome::AlreadyOpen;
        }
        let specs = lookup(kind);
        if specs.is_empty() {
            return EditorOutcome::NothingToEdit;
        }

        let previous = match self.policy {
            PrefillPolicy::Defaults => None,
            PrefillPolicy::LastSubmitted => self.submitted.get(target),
        };
        let fields = specs
            .iter()
            .map(|spec| PopupField {
                name: spec.name,
                value: previous
                    .and_then(|values| values.get(spec.name).cloned())
                    .unwrap_or_else(|| spec.default.to_string()),
            })
            .collect();

        self.popup = Some(PropertyPopup {
            target: target.clone(),
            kind,
            fields,
        });
        EditorOutcome::Opened
    }

    /// Replaces the text of one input. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) {
        if let Some(field) = self
            .popup
            .as_mut()
            .and_then(|popup| popup.fields.iter_mut().find(|field| field.name == name))
        {
            field.value = raw.into();
        }
    }

    /// Closes the popup and returns the raw values as typed. Nothing is
    /// checked against the registry bounds.
    pub fn submit(&mut self) -> Option<UpdateProperties> {
        let popup = self.popup.take()?;
        let params: IndexMap<String, String> = popup
            .fields
            .into_iter()
            .map(|field| (field.name.to_string(), field.value))
            .collect();
        if self.policy == PrefillPolicy::LastSubmitted {
            self.submitted.insert(popup.target.clone(), params.clone());
        }
        Some(UpdateProperties {
            kind: popup.target.kind().unwrap_or(popup.kind),
            name: popup.target,
            params,
        })
    }

    pub fn cancel(&mut self) {
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor() -> ComponentId {
        ComponentId::new(ComponentKind::Resistor, 0)
    }

    #[test]
    fn only_one_popup_at_a_time() {
        let mut editor = PropertyEditor::default();
        assert_eq!(editor.open(&resistor(), ComponentKind::Resistor), EditorOutcome::Opened);
        let battery = ComponentId::new(ComponentKind::DcBattery, 0);
        assert_eq!(editor.open(&battery, ComponentKind::DcBattery), EditorOutcome::AlreadyOpen);
        assert_eq!(editor.popup().unwrap().target, resistor());
    }

    #[test]
    fn read_only_kinds_do_not_open() {
        let mut editor = PropertyEditor::default();
        let meter = ComponentId::new(ComponentKind::Voltmeter, 0);
        assert_eq!(editor.open(&meter, ComponentKind::Voltmeter), EditorOutcome::NothingToEdit);
        assert!(editor.popup().is_none());
    }

    #[test]
    fn submit_sends_raw_text_without_validation() {
        let mut editor = PropertyEditor::default();
        editor.open(&resistor(), ComponentKind::Resistor);
        assert_eq!(editor.popup().unwrap().fields[0].value, "5");

        editor.set_field("resistance", "-12 ohms");
        let update = editor.submit().unwrap();
        assert_eq!(update.kind, ComponentKind::Resistor);
        assert_eq!(update.name, resistor());
        assert_eq!(update.params["resistance"], "-12 ohms");
        assert!(editor.popup().is_none());
        assert_eq!(editor.submit(), None);
    }

    #[test]
    fn defaults_policy_ignores_previous_submissions() {
        let mut editor = PropertyEditor::new(PrefillPolicy::Defaults);
        editor.open(&resistor(), ComponentKind::Resistor);
        editor.set_field("resistance", "42");
        editor.submit();

        editor.open(&resistor(), ComponentKind::Resistor);
        assert_eq!(editor.popup().unwrap().fields[0].value, "5");
    }

    #[test]
    fn last_submitted_policy_prefills_previous_values() {
        let mut editor = PropertyEditor::new(PrefillPolicy::LastSubmitted);
        editor.open(&resistor(), ComponentKind::Resistor);
        editor.set_field("resistance", "42");
        editor.submit();

        editor.open(&resistor(), ComponentKind::Resistor);
        assert_eq!(editor.popup().unwrap().fields[0].value, "42");
    }

    #[test]
    fn cancel_discards_edits() {
        let mut editor = PropertyEditor::default();
        editor.open(&ComponentId::new(ComponentKind::Switch, 3), ComponentKind::Switch);
        assert_eq!(editor.popup().unwrap().fields[0].value, "OFF");
        editor.set_field("state", "ON");
        editor.cancel();
        assert!(editor.popup().is_none());
        assert_eq!(editor.submit(), None);
    }
}
