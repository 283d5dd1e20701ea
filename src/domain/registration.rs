// Registration form payload
use super::customer::{coerce_capacity, parse_form_capacity, NewCustomer, OTHER_MARKER};
use serde::Deserialize;

/// Fields submitted by the "register a site" form. Every field is optional on
/// the wire; missing ones default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub company_name: String,
    pub province: String,
    pub city: String,
    pub address: String,
    /// Typed as text in the form, but numeric JSON is accepted too.
    pub capacity: serde_json::Value,
    pub demand_type: String,
    pub other_detail: String,
    pub industry: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl RegistrationForm {
    /// `其他` plus a detail becomes `其他-<detail>`.
    pub fn demand_type_label(&self) -> String {
        let demand_type = self.demand_type.trim();
        let detail = self.other_detail.trim();
        if demand_type == OTHER_MARKER && !detail.is_empty() {
            format!("{}-{}", OTHER_MARKER, detail)
        } else {
            demand_type.to_string()
        }
    }

    pub fn into_new_customer(self) -> NewCustomer {
        if !self.address.trim().is_empty() || !self.contact_email.trim().is_empty() {
            tracing::debug!(
                "Registration for {} carries address/email, which the store does not keep",
                self.company_name
            );
        }

        NewCustomer {
            demand_type: self.demand_type_label(),
            capacity_mw: match &self.capacity {
                serde_json::Value::String(text) => parse_form_capacity(text),
                other => coerce_capacity(other),
            },
            company_name: self.company_name.trim().to_string(),
            province: self.province.trim().to_string(),
            city: self.city.trim().to_string(),
            industry: non_blank(self.industry),
            contact_name: non_blank(self.contact_name),
            contact_phone: non_blank(self.contact_phone),
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: serde_json::Value) -> RegistrationForm {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_other_detail_is_concatenated() {
        let f = form(json!({"demand_type": "其他", "other_detail": " 风电 "}));
        assert_eq!(f.demand_type_label(), "其他-风电");

        let f = form(json!({"demand_type": "其他", "other_detail": ""}));
        assert_eq!(f.demand_type_label(), "其他");

        let f = form(json!({"demand_type": "光伏", "other_detail": "ignored"}));
        assert_eq!(f.demand_type_label(), "光伏");
    }

    #[test]
    fn test_into_new_customer() {
        let record = form(json!({
            "company_name": " 无锡储能 ",
            "province": "江苏",
            "city": "无锡",
            "address": "新吴区 1 号",
            "capacity": "12.5",
            "demand_type": "储能",
            "industry": "",
            "contact_name": "赵六",
            "contact_phone": "13700001111",
            "contact_email": "ops@example.com"
        }))
        .into_new_customer();

        assert_eq!(record.company_name, "无锡储能");
        assert_eq!(record.capacity_mw, 12.5);
        assert_eq!(record.demand_type, "储能");
        assert_eq!(record.industry, None);
        assert_eq!(record.contact_name.as_deref(), Some("赵六"));
    }

    #[test]
    fn test_capacity_defaults_to_zero() {
        assert_eq!(form(json!({"capacity": "lots"})).into_new_customer().capacity_mw, 0.0);
        assert_eq!(form(json!({})).into_new_customer().capacity_mw, 0.0);
        assert_eq!(form(json!({"capacity": 3})).into_new_customer().capacity_mw, 3.0);
        assert_eq!(form(json!({"capacity": "12.5 MW"})).into_new_customer().capacity_mw, 12.5);
    }
}
