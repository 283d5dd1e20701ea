// Response shapes; contact details are masked here and nowhere else
use crate::application::dashboard_service::RegistrationOutcome;
use crate::domain::customer::{Customer, DemandCategory};
use crate::domain::dashboard::{DashboardSnapshot, DashboardTotals, DataSource};
use crate::domain::masking::{mask_name, mask_phone};
use crate::domain::region::{ChartDataPoint, RegionStat};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub id: String,
    pub company_name: String,
    pub province: String,
    pub city: String,
    pub capacity_mw: f64,
    pub demand_type: String,
    pub category: DemandCategory,
    pub industry: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Customer> for CustomerView {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            company_name: c.company_name.clone(),
            province: c.province.clone(),
            city: c.city.clone(),
            capacity_mw: c.capacity_mw,
            demand_type: c.demand_type.clone(),
            category: c.category(),
            industry: c.industry.clone(),
            contact_name: c.contact_name.as_deref().map(mask_name),
            contact_phone: c.contact_phone.as_deref().map(mask_phone),
            created_at: c.created_at,
        }
    }
}

pub fn customer_views(customers: &[Customer]) -> Vec<CustomerView> {
    customers.iter().map(CustomerView::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub source: DataSource,
    pub totals: DashboardTotals,
    pub customers: Vec<CustomerView>,
    pub regions: Vec<RegionStat>,
    pub chart: Vec<ChartDataPoint>,
}

impl From<DashboardSnapshot> for DashboardView {
    fn from(snapshot: DashboardSnapshot) -> Self {
        Self {
            source: snapshot.source,
            totals: snapshot.totals,
            customers: customer_views(&snapshot.customers),
            regions: snapshot.regions,
            chart: snapshot.chart,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegistrationView {
    Persisted,
    SessionLocal { notice: String, customer: CustomerView },
}

impl From<RegistrationOutcome> for RegistrationView {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Persisted => RegistrationView::Persisted,
            RegistrationOutcome::SessionOnly { customer, notice } => RegistrationView::SessionLocal {
                notice,
                customer: CustomerView::from(&customer),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_view_masks_contacts() {
        let customer = Customer {
            id: "1".to_string(),
            company_name: "测试".to_string(),
            province: "上海".to_string(),
            city: "上海".to_string(),
            capacity_mw: 1.0,
            demand_type: "充电".to_string(),
            industry: None,
            contact_name: Some("张三丰".to_string()),
            contact_phone: Some("13800138000".to_string()),
            created_at: None,
        };

        let view = CustomerView::from(&customer);
        assert_eq!(view.contact_name.as_deref(), Some("张**"));
        assert_eq!(view.contact_phone.as_deref(), Some("138****8000"));
        assert_eq!(view.category, DemandCategory::EvCharging);
        // stored record untouched
        assert_eq!(customer.contact_name.as_deref(), Some("张三丰"));
    }

    #[test]
    fn test_registration_view_tags_status() {
        let json = serde_json::to_value(RegistrationView::Persisted).unwrap();
        assert_eq!(json["status"], "persisted");
    }
}
