// Dashboard domain model
use super::customer::Customer;
use super::region::{aggregate_regions, chart_series, ChartDataPoint, RegionStat};
use serde::Serialize;

/// Where the current customer set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Nothing loaded yet.
    Pending,
    Remote,
    Mock,
    /// Contains records that only exist in this process.
    Session,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub site_count: usize,
    pub city_count: usize,
    pub total_mw: f64,
    pub pv_mw: f64,
    pub storage_mw: f64,
    pub ev_mw: f64,
    pub other_mw: f64,
}

impl DashboardTotals {
    pub fn from_regions(regions: &[RegionStat]) -> Self {
        regions.iter().fold(
            Self {
                city_count: regions.len(),
                ..Self::default()
            },
            |mut acc, r| {
                acc.site_count += r.site_count;
                acc.total_mw += r.total_mw;
                acc.pv_mw += r.pv_mw;
                acc.storage_mw += r.storage_mw;
                acc.ev_mw += r.ev_mw;
                acc.other_mw += r.other_mw;
                acc
            },
        )
    }
}

/// The customer set together with everything derived from it.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub source: DataSource,
    pub customers: Vec<Customer>,
    pub regions: Vec<RegionStat>,
    pub chart: Vec<ChartDataPoint>,
    pub totals: DashboardTotals,
}

impl DashboardSnapshot {
    pub fn build(source: DataSource, customers: Vec<Customer>) -> Self {
        let regions = aggregate_regions(&customers);
        let chart = chart_series(&regions);
        let totals = DashboardTotals::from_regions(&regions);
        Self {
            source,
            customers,
            regions,
            chart,
            totals,
        }
    }

    pub fn empty() -> Self {
        Self::build(DataSource::Pending, Vec::new())
    }
}
