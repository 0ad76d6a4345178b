use serde::Deserialize;
use crate::models::lenient;
use crate::models::payment::Payment;

/// Agregado de /api/provider/earnings/dashboard
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProviderEarnings {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total_earnings: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub month_earnings: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub pending_amount: Option<f64>,
}

/// Respuesta de /api/provider/earnings (solo usamos el historial)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PaymentHistory {
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub recent_payments: Vec<Payment>,
}
