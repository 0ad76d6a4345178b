use serde::{Deserialize, Serialize};
use crate::models::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "S_ID", default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "Name", default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(rename = "ProviderID", default, deserialize_with = "lenient::opt_i64")]
    pub provider_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub provider_name: Option<String>,
}

/// Cuerpo de POST /api/admin/services
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewService {
    /// Valida los valores crudos del formulario de alta
    pub fn from_form(name: &str, description: &str, price: &str) -> Result<Self, String> {
        let name = name.trim();
        let price = price.trim();
        if name.is_empty() || price.is_empty() {
            return Err("Name and price are required".to_string());
        }
        let price: f64 = price
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| "Price must be a valid amount".to_string())?;
        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_service_requires_name_and_price() {
        assert_eq!(
            NewService::from_form("", "desc", "10").unwrap_err(),
            "Name and price are required"
        );
        assert_eq!(
            NewService::from_form("Cleaning", "desc", "  ").unwrap_err(),
            "Name and price are required"
        );
        assert!(NewService::from_form("Cleaning", "", "abc").is_err());
    }

    #[test]
    fn new_service_parses_price() {
        let svc = NewService::from_form(" Cleaning ", "Deep clean", "49.5").unwrap();
        assert_eq!(svc.name, "Cleaning");
        assert_eq!(svc.price, 49.5);
        let body = serde_json::to_value(&svc).unwrap();
        assert_eq!(body["description"], "Deep clean");
    }
}
