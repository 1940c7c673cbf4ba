//! Wire types for the scoring engine
//!
//! Request payload, result record and health probe body. Field names follow
//! the engine's JSON contract exactly.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DENIED;

// ============================================================================
// REQUEST
// ============================================================================

/// Incident telemetry submitted to `/predict`
///
/// Values are opaque and sent verbatim; empty strings are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IncidentTelemetry {
    pub category: String,
    pub mitre_techniques: String,
    pub action_grouped: String,
    pub entity_type: String,
    #[serde(rename = "OSFamily")]
    pub os_family: String,
    pub suspicion_level: String,
    pub country_code: String,
}

// ============================================================================
// RESULT
// ============================================================================

/// Outcome of a scoring call
///
/// Only the literal `DENIED` is a denial; any other value is an allow and
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Decision {
    Denied,
    Allowed(String),
}

impl Decision {
    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Denied)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Decision::Denied => DENIED,
            Decision::Allowed(raw) => raw,
        }
    }
}

impl From<String> for Decision {
    fn from(raw: String) -> Self {
        if raw == DENIED {
            Decision::Denied
        } else {
            Decision::Allowed(raw)
        }
    }
}

impl From<Decision> for String {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Denied => DENIED.to_string(),
            Decision::Allowed(raw) => raw,
        }
    }
}

/// Per-class contribution mapping, in the order the engine sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown(Vec<(String, f64)>);

impl Breakdown {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry. A repeated label replaces the earlier value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (label, value) in iter {
            breakdown.insert(label, value);
        }
        breakdown
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Breakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of class label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakdown, A::Error> {
                let mut breakdown = Breakdown(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((label, value)) = access.next_entry::<String, f64>()? {
                    breakdown.insert(label, value);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// Scored result returned by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub decision: Decision,
    pub predicted_grade: String,
    pub confidence: f64,
    pub breakdown: Breakdown,
    /// Human-readable explanation, when the engine sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 403 body: the scored result nested under `detail`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForbiddenBody {
    pub detail: ScoreResult,
}

// ============================================================================
// HEALTH
// ============================================================================

/// `/healthz` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
