//! Capabilities and the visibility gate.
//!
//! Grants are resolved elsewhere (session/authorization) and handed in as a
//! [`CapabilitySet`]; this module only answers "may this actor see that node".

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NavError, NavResult};
use crate::menu::MenuNode;

/// A single authorizable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Capability {
    ReadPatients,
    WritePatients,
    ReadAppointments,
    WriteAppointments,
    DeleteAppointment,
    AddAllergy,
    AddDiagnosis,
    RequestLab,
    CancelLab,
    CompleteLab,
    ViewLab,
    ViewLabs,
    ViewIncidents,
    ViewIncident,
    ReportIncident,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 15] = [
        Capability::ReadPatients,
        Capability::WritePatients,
        Capability::ReadAppointments,
        Capability::WriteAppointments,
        Capability::DeleteAppointment,
        Capability::AddAllergy,
        Capability::AddDiagnosis,
        Capability::RequestLab,
        Capability::CancelLab,
        Capability::CompleteLab,
        Capability::ViewLab,
        Capability::ViewLabs,
        Capability::ViewIncidents,
        Capability::ViewIncident,
        Capability::ReportIncident,
    ];

    /// Stable wire name, as stored in role grants.
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ReadPatients => "read:patients",
            Capability::WritePatients => "write:patients",
            Capability::ReadAppointments => "read:appointments",
            Capability::WriteAppointments => "write:appointments",
            Capability::DeleteAppointment => "delete:appointment",
            Capability::AddAllergy => "write:allergy",
            Capability::AddDiagnosis => "write:diagnosis",
            Capability::RequestLab => "request:lab",
            Capability::CancelLab => "cancel:lab",
            Capability::CompleteLab => "complete:lab",
            Capability::ViewLab => "read:lab",
            Capability::ViewLabs => "read:labs",
            Capability::ViewIncidents => "read:incidents",
            Capability::ViewIncident => "read:incident",
            Capability::ReportIncident => "report:incident",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| NavError::unknown_capability(name))
    }
}

impl TryFrom<String> for Capability {
    type Error = NavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.as_str().to_string()
    }
}

/// The capabilities granted to the signed-in actor.
///
/// Ordered so that iteration and cache keys are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    grants: BTreeSet<Capability>,
}

impl CapabilitySet {
    /// No grants: the "logged in, nothing assigned" state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every capability.
    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    /// Parse wire names, failing on the first unknown one.
    pub fn parse_names<S: AsRef<str>>(names: &[S]) -> NavResult<Self> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }

    /// Parse wire names, skipping (and logging) any that are unknown.
    pub fn from_names_lossy<S: AsRef<str>>(names: &[S]) -> Self {
        names
            .iter()
            .filter_map(|n| match n.as_ref().parse::<Capability>() {
                Ok(c) => Some(c),
                Err(_) => {
                    warn!(capability = %n.as_ref(), "ignoring unknown capability grant");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.grants.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.grants.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(value: [Capability; N]) -> Self {
        value.into_iter().collect()
    }
}

/// Decide whether `node` is visible to an actor holding `grants`.
///
/// A node without a required capability is always visible. This is a
/// fail-open policy for missing metadata only; a capability that is present
/// but not granted always hides the node.
pub fn is_visible(node: &MenuNode, grants: &CapabilitySet) -> bool {
    match node.required_capability {
        None => true,
        Some(required) => grants.contains(required),
    }
}
