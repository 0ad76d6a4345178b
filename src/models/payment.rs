use serde::{Deserialize, Serialize};
use crate::models::lenient;

/// Pago de /api/user/payments y de `recent_payments` en /api/provider/earnings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "PaymentID", alias = "P_ID", default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "B_ID", default, deserialize_with = "lenient::opt_i64")]
    pub booking_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_name: Option<String>,
    #[serde(rename = "PaymentDate", default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
    #[serde(rename = "Amount", default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    #[serde(rename = "PaymentMethod", default, deserialize_with = "lenient::opt_string")]
    pub method: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(rename = "PaymentStatus", default, deserialize_with = "lenient::opt_string")]
    pub payment_status: Option<String>,
    #[serde(rename = "InvoiceID", default, deserialize_with = "lenient::opt_i64")]
    pub invoice_id: Option<i64>,
}

impl Payment {
    /// `Status` tiene prioridad; el backend a veces solo rellena `PaymentStatus`
    pub fn display_status(&self) -> Option<&str> {
        self.status.as_deref().or(self.payment_status.as_deref())
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.display_status(), Some("Confirmed") | Some("Success"))
    }
}

/// Cuerpo de POST /api/payments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub booking_id: i64,
    /// El backend cobra el precio del servicio; el importe es informativo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_id_spellings() {
        let a: Payment = serde_json::from_str(r#"{"PaymentID": 4, "Amount": "10.00"}"#).unwrap();
        let b: Payment = serde_json::from_str(r#"{"P_ID": 4, "Amount": 10}"#).unwrap();
        assert_eq!(a.id, Some(4));
        assert_eq!(b.id, Some(4));
        assert_eq!(a.amount, b.amount);
    }

    #[test]
    fn status_falls_back_to_payment_status() {
        let p: Payment = serde_json::from_str(r#"{"PaymentStatus": "Success"}"#).unwrap();
        assert_eq!(p.display_status(), Some("Success"));
        assert!(p.is_confirmed());
    }
}
