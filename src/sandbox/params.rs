use indexmap::IndexMap;
use serde::Serialize;

use super::registry::{lookup, spec_of, ComponentKind, ParameterValue};
use crate::error::{Result, SandboxError};

/// Parameter record of one component kind, keyed in registry order.
///
/// Only names the registry lists for the kind can be present, and each value
/// has the same type as that parameter's default.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    #[serde(skip)]
    kind: ComponentKind,
    values: IndexMap<&'static str, ParameterValue>,
}

impl ParameterSet {
    pub fn defaults(kind: ComponentKind) -> Self {
        let values = lookup(kind).iter().map(|spec| (spec.name, spec.default)).collect();
        Self { kind, values }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<ParameterValue> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: ParameterValue) -> Result<()> {
        let spec = spec_of(self.kind, name)?;
        if !spec.default.same_type(&value) {
            return Err(SandboxError::ParameterType {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.values.insert(spec.name, value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParameterValue)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
