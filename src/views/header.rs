// ============================================================================
// HEADER VIEW - Nombre de usuario y badge de notificaciones
// ============================================================================

use crate::dom::VNode;
use crate::models::UserProfile;

/// Texto de `#user-name`; sin sesión queda "Guest"
pub fn render_user_name(profile: Option<&UserProfile>) -> Vec<VNode> {
    let name = profile
        .filter(|p| p.is_logged_in())
        .and_then(|p| p.name.clone().or_else(|| p.email.clone()))
        .unwrap_or_else(|| "Guest".to_string());
    vec![VNode::text(name)]
}

/// Texto de `#notification-count`; vacío cuando no hay pendientes
pub fn render_notification_badge(unread: u32) -> Vec<VNode> {
    if unread == 0 {
        Vec::new()
    } else {
        vec![VNode::text(unread.to_string())]
    }
}
