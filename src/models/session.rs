use serde::Deserialize;
use crate::models::lenient;

/// Perfil de /api/user/profile. El backend responde con campos vacíos
/// (nunca 401) cuando no hay sesión.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn is_logged_in(&self) -> bool {
        self.name.is_some() || self.email.is_some()
    }
}

/// Respuesta de /api/notifications/count
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct NotificationCount {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub count: Option<i64>,
}

impl NotificationCount {
    /// Negativos cuentan como 0; por encima de u32::MAX se satura
    pub fn unread(&self) -> u32 {
        u32::try_from(self.count.unwrap_or(0).max(0)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_is_logged_out() {
        let p: UserProfile =
            serde_json::from_str(r#"{"name":"","email":"","user_type":"","phone":""}"#).unwrap();
        assert!(!p.is_logged_in());
        let p: UserProfile = serde_json::from_str(r#"{"name":"Ana","user_type":"Customer"}"#).unwrap();
        assert!(p.is_logged_in());
    }

    #[test]
    fn negative_count_reads_as_zero() {
        let c: NotificationCount = serde_json::from_str(r#"{"count":-3}"#).unwrap();
        assert_eq!(c.unread(), 0);
    }

    #[test]
    fn huge_count_saturates() {
        let c = NotificationCount { count: Some(i64::from(u32::MAX) + 10) };
        assert_eq!(c.unread(), u32::MAX);
    }
}
