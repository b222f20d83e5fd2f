//! Per-day change reports for simulation runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelflife_inventory::{Item, ItemCategory};

/// Before/after shelf state of a single item for one simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDelta {
    pub name: String,
    pub category: ItemCategory,
    pub sell_in_before: i32,
    pub sell_in_after: i32,
    pub quality_before: i32,
    pub quality_after: i32,
}

impl ItemDelta {
    /// Diff two snapshots of the same item.
    pub fn between(before: &Item, after: &Item) -> Self {
        Self {
            name: before.name().to_string(),
            category: before.category(),
            sell_in_before: before.sell_in().days(),
            sell_in_after: after.sell_in().days(),
            quality_before: before.quality().value(),
            quality_after: after.quality().value(),
        }
    }

    /// Net quality movement for the day.
    pub fn quality_delta(&self) -> i32 {
        self.quality_after - self.quality_before
    }

    /// The item ended the day past its sell-by date.
    pub fn expired(&self) -> bool {
        self.sell_in_after < 0
    }

    /// Nothing moved (legendary items, every day).
    pub fn unchanged(&self) -> bool {
        self.sell_in_before == self.sell_in_after && self.quality_before == self.quality_after
    }
}

/// Everything that moved on one simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// 1-based day number within the run.
    pub day: u32,
    pub changes: Vec<ItemDelta>,
}

impl DayReport {
    pub fn expired_count(&self) -> usize {
        self.changes.iter().filter(|c| c.expired()).count()
    }
}

/// Full record of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Wall-clock production time of the report. The domain itself carries
    /// no clock; days are just counted updates.
    pub generated_at: DateTime<Utc>,
    pub days: Vec<DayReport>,
}

impl SimulationReport {
    pub fn new(days: Vec<DayReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            days,
        }
    }

    /// Serialize for inspection or downstream tooling.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
