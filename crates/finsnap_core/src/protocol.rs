//! Wire contract with the remote analysis service.
//!
//! One request shape (`AnalysisInput`, POSTed as JSON to `/analyze`) and one
//! response shape (`AnalysisResult`). The response is deserialized strictly:
//! forecast series must carry exactly twelve points and the risk level must
//! be one of the three known values (case-insensitive). Anything else is a
//! malformed body and the whole analysis cycle fails.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Number of forecast points per series, one per calendar month.
pub const FORECAST_MONTHS: usize = 12;

/// Fixed month axis shared by both chart slots.
pub const MONTH_LABELS: [&str; FORECAST_MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The three validated snapshot fields sent to the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub revenue: f64,
    pub expenses: f64,
    pub cash: f64,
}

/// Months of runway. The service reports an unbounded runway (no burn) as
/// JSON `null`, since JSON has no representation for infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Runway {
    Finite(f64),
    Unbounded,
}

impl Runway {
    /// Runway as a plain number, with `f64::INFINITY` for the unbounded case.
    pub fn as_f64(&self) -> f64 {
        match self {
            Runway::Finite(months) => *months,
            Runway::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Runway::Unbounded)
    }
}

impl<'de> Deserialize<'de> for Runway {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // null or a non-finite number both mean "no burn, infinite runway"
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(match raw {
            Some(months) if months.is_finite() => Runway::Finite(months),
            _ => Runway::Unbounded,
        })
    }
}

impl Serialize for Runway {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Runway::Finite(months) => serializer.serialize_some(months),
            Runway::Unbounded => serializer.serialize_none(),
        }
    }
}

/// Named scalar metrics for one analysis cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub profit: f64,
    pub profit_margin: f64,
    pub burn_rate: f64,
    pub runway: Runway,
    pub growth_score: f64,
}

/// Two parallel twelve-month series aligned to [`MONTH_LABELS`] by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub profit: [f64; FORECAST_MONTHS],
    pub revenue: [f64; FORECAST_MONTHS],
}

/// Strategy risk classification, case-insensitive on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Normalized display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(de::Error::unknown_variant(
                other,
                &["low", "medium", "high"],
            )),
        }
    }
}

impl Serialize for RiskLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

/// Full response payload for one analysis cycle. Supersedes the previous
/// result wholesale; there is no incremental merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub metrics: MetricsSnapshot,
    pub forecasts: ForecastSeries,
    pub strategy: String,
    pub risk_level: RiskLevel,
}
