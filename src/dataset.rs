//! Driver data: names, weights, and short explanations.
//!
//! The built-in table below is the single place to edit when weights change
//! or drivers are added/removed. Everything downstream (chart, table) takes
//! a `Dataset` value, so tests can supply their own.

use crate::error::ReportError;

/// One weighted adoption driver.
#[derive(Debug, Clone)]
pub struct Driver {
    pub name: String,
    pub weight: f64,
    pub explanation: String,
}

impl Driver {
    /// Weights must be finite and non-negative. Zero is allowed: it renders
    /// as a 0.0% share rather than an error.
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        explanation: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let name = name.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(ReportError::InvalidWeight { name, weight });
        }
        Ok(Self {
            name,
            weight,
            explanation: explanation.into(),
        })
    }
}

/// Ordered driver collection. Definition order is preserved; the ranked
/// view for the table is computed on demand.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    drivers: Vec<Driver>,
}

/// Built-in drivers: (name, weight, explanation). Weights are relative
/// points, not percentages.
const BUILTIN: &[(&str, f64, &str)] = &[
    (
        "Cost Efficiency",
        18.0,
        "Reduce upfront capital expenditure by renting compute & storage; pay-for-use pricing.",
    ),
    (
        "Scalability & Elasticity",
        16.0,
        "Automatically scale resources to meet demand peaks and avoid resource waste.",
    ),
    (
        "Speed & Agility",
        14.0,
        "Provision environments quickly for dev/test/prod, enabling faster releases and experimentation.",
    ),
    (
        "Access to Innovation (AI/ML/DB)",
        12.0,
        "Immediate access to managed AI, databases, analytics and other advanced services.",
    ),
    (
        "Reliability & Availability",
        11.0,
        "Provider SLAs, regional redundancy, and managed networking improve uptime.",
    ),
    (
        "Security & Compliance",
        9.0,
        "Providers offer hardened infrastructure, auditing tools and compliance frameworks; enterprises still retain some responsibility.",
    ),
    (
        "Operational Simplicity (Managed Services)",
        7.0,
        "Offload maintenance (patching, backups, upgrades) so teams focus on product features.",
    ),
    (
        "Global Reach/Latency",
        6.0,
        "Deploy near customers with multiple regions/data centers to reduce latency and serve global users.",
    ),
    (
        "Business Continuity / DR",
        4.0,
        "Easier backup, replication, and multi-region disaster recovery patterns.",
    ),
    (
        "Data & Analytics Enablement",
        3.0,
        "Scalable data stores, data lakes, and managed analytics pipelines accelerate insights.",
    ),
];

impl Dataset {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    /// The compiled-in enterprise cloud adoption drivers.
    pub fn builtin() -> Self {
        let drivers = BUILTIN
            .iter()
            .map(|&(name, weight, explanation)| Driver {
                name: name.to_string(),
                weight,
                explanation: explanation.to_string(),
            })
            .collect();
        Self { drivers }
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Drivers in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter()
    }

    pub fn total_weight(&self) -> f64 {
        self.drivers.iter().map(|d| d.weight).sum()
    }

    /// Weight as a percentage of the total. A zero total yields 0.0 for
    /// every driver instead of a NaN that would leak into the rendered
    /// report.
    pub fn share(&self, weight: f64) -> f64 {
        let total = self.total_weight();
        if total == 0.0 {
            0.0
        } else {
            weight / total * 100.0
        }
    }

    /// Drivers sorted by descending weight; equal weights keep definition
    /// order (the sort is stable).
    pub fn ranked(&self) -> Vec<&Driver> {
        let mut ranked: Vec<&Driver> = self.drivers.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }
}
