// ============================================================================
// NOTIFICATIONS VIEW - Banners apilados (más reciente arriba)
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::state::action::Action;
use crate::state::notifications::Notification;

pub fn render(items: &[Notification]) -> Vec<VNode> {
    items.iter().map(render_banner).collect()
}

fn render_banner(notification: &Notification) -> VNode {
    ElementBuilder::new("div")
        .class(&format!(
            "alert alert-{} alert-dismissible fade show",
            notification.kind.alert_class()
        ))
        .attr("role", "alert")
        .attr("data-notification-id", &notification.id.to_string())
        .text(&notification.message)
        .child(
            ElementBuilder::new("button")
                .class("btn-close")
                .attr("type", "button")
                .attr("aria-label", "Close")
                .on_click(Action::DismissNotification(notification.id))
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notifications::NotificationKind;

    #[test]
    fn banner_markup() {
        let nodes = render(&[Notification {
            id: 3,
            message: "Payment processed successfully!".into(),
            kind: NotificationKind::Error,
            created_at_ms: 0.0,
        }]);
        assert_eq!(nodes.len(), 1);
        let banner = nodes[0].as_element().unwrap();
        assert!(banner.has_class("alert-danger"));
        assert!(banner.has_class("alert-dismissible"));
        assert_eq!(nodes[0].actions(), vec![Action::DismissNotification(3)]);
        assert_eq!(nodes[0].text_content(), "Payment processed successfully!");
    }
}
