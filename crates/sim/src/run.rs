//! Multi-day simulation driver.

use tracing::{debug, info, info_span};

use shelflife_inventory::Stockroom;

use crate::report::{DayReport, ItemDelta, SimulationReport};

/// Drives a stockroom through consecutive end-of-day updates, recording a
/// change report per day.
#[derive(Debug, Clone)]
pub struct Simulation {
    stockroom: Stockroom,
    elapsed_days: u32,
}

impl Simulation {
    pub fn new(stockroom: Stockroom) -> Self {
        Self {
            stockroom,
            elapsed_days: 0,
        }
    }

    pub fn stockroom(&self) -> &Stockroom {
        &self.stockroom
    }

    pub fn elapsed_days(&self) -> u32 {
        self.elapsed_days
    }

    /// Advance one day and report what moved.
    pub fn step(&mut self) -> DayReport {
        self.elapsed_days += 1;
        let day = self.elapsed_days;
        let span = info_span!("shop_day", day);
        let _guard = span.enter();

        let before = self.stockroom.clone();
        self.stockroom.advance_day();

        let changes: Vec<ItemDelta> = before
            .items()
            .iter()
            .zip(self.stockroom.items())
            .map(|(b, a)| ItemDelta::between(b, a))
            .collect();

        for change in &changes {
            // Exempt items never move; keep them out of the per-item noise.
            if change.category.is_exempt() {
                debug_assert!(change.unchanged());
                continue;
            }
            debug!(
                name = %change.name,
                sell_in = change.sell_in_after,
                quality = change.quality_after,
                "item aged"
            );
        }
        info!(
            items = changes.len(),
            expired = changes.iter().filter(|c| c.expired()).count(),
            "day complete"
        );

        DayReport { day, changes }
    }

    /// Run `days` consecutive updates and collect the full report.
    pub fn run(&mut self, days: u32) -> SimulationReport {
        let mut reports = Vec::with_capacity(days as usize);
        for _ in 0..days {
            reports.push(self.step());
        }
        SimulationReport::new(reports)
    }

    pub fn into_stockroom(self) -> Stockroom {
        self.stockroom
    }
}
