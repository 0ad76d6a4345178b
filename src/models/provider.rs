use serde::{Deserialize, Serialize};
use crate::models::lenient;

/// Proveedor pendiente de aprobación (/api/admin/providers/pending)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PendingProvider {
    #[serde(rename = "U_ID", default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "Name", default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(rename = "Phone_no", default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(rename = "Specialization", default, deserialize_with = "lenient::opt_string")]
    pub specialization: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
}

/// Respuesta de /api/providers/{id}/availability
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub available: bool,
}
