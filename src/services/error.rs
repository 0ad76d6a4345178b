use serde_json::Value;
use thiserror::Error;

/// Errores de la capa HTTP. Dos niveles: fallo de transporte/parseo
/// (mensaje genérico al usuario) y error de negocio con texto del backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// `{error: "..."}` o `{status: "error", message: "..."}`
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Texto a mostrar: el mensaje del backend tal cual, o el genérico
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Server(message) => message.clone(),
            _ => generic.to_string(),
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Server(_))
    }
}

/// Extrae el mensaje de error de un payload JSON, si lo hay
pub fn server_error(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    if let Some(error) = obj.get("error") {
        return match error {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        };
    }
    if obj.get("status").and_then(Value::as_str) == Some("error") {
        let message = obj
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request failed");
        return Some(message.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_both_error_shapes() {
        assert_eq!(server_error(&json!({"error": "X"})), Some("X".to_string()));
        assert_eq!(
            server_error(&json!({"status": "error", "message": "Booking not found"})),
            Some("Booking not found".to_string())
        );
        assert_eq!(server_error(&json!({"status": "success"})), None);
        assert_eq!(server_error(&json!([{"error": "in a row"}])), None);
        assert_eq!(server_error(&json!({"error": null, "count": 1})), None);
    }

    #[test]
    fn user_message_hides_transport_detail() {
        let generic = "Failed to load payments. Please try again.";
        assert_eq!(ApiError::Server("Unauthorized".into()).user_message(generic), "Unauthorized");
        assert_eq!(ApiError::Network("reset".into()).user_message(generic), generic);
        assert_eq!(ApiError::Parse("eof".into()).user_message(generic), generic);
    }
}
