// Per-city rollups of customer capacity
use super::customer::{Customer, DemandCategory};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStat {
    pub city: String,
    pub site_count: usize,
    pub pv_mw: f64,
    pub storage_mw: f64,
    pub ev_mw: f64,
    pub other_mw: f64,
    pub total_mw: f64,
}

impl RegionStat {
    pub fn new(city: String) -> Self {
        Self {
            city,
            site_count: 0,
            pv_mw: 0.0,
            storage_mw: 0.0,
            ev_mw: 0.0,
            other_mw: 0.0,
            total_mw: 0.0,
        }
    }

    fn add(&mut self, customer: &Customer) {
        let mw = customer.capacity_mw;
        self.site_count += 1;
        self.total_mw += mw;
        match customer.category() {
            DemandCategory::Solar => self.pv_mw += mw,
            DemandCategory::Storage => self.storage_mw += mw,
            DemandCategory::EvCharging => self.ev_mw += mw,
            DemandCategory::Other => self.other_mw += mw,
        }
    }
}

/// Chart-facing view of a [`RegionStat`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    pub name: String,
    pub pv: f64,
    pub storage: f64,
    pub ev: f64,
    pub other: f64,
}

impl From<&RegionStat> for ChartDataPoint {
    fn from(stat: &RegionStat) -> Self {
        Self {
            name: stat.city.clone(),
            pv: stat.pv_mw,
            storage: stat.storage_mw,
            ev: stat.ev_mw,
            other: stat.other_mw,
        }
    }
}

/// Group customers by city, largest total capacity first. Cities with equal
/// totals keep the order in which they were first seen.
pub fn aggregate_regions(customers: &[Customer]) -> Vec<RegionStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<RegionStat> = Vec::new();

    for customer in customers {
        let slot = *index.entry(customer.city.as_str()).or_insert_with(|| {
            stats.push(RegionStat::new(customer.city.clone()));
            stats.len() - 1
        });
        stats[slot].add(customer);
    }

    stats.sort_by(|a, b| b.total_mw.total_cmp(&a.total_mw));
    stats
}

/// Chart series in the same order as the table.
pub fn chart_series(regions: &[RegionStat]) -> Vec<ChartDataPoint> {
    regions.iter().map(ChartDataPoint::from).collect()
}
