// ============================================================================
// PROVIDERS VIEW - Proveedores pendientes de aprobación (admin)
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::models::PendingProvider;
use crate::state::action::Action;
use crate::views::shared::{badge, empty_row, or, td};

/// Filas de `#pending-providers`
pub fn render_pending_providers(providers: &[PendingProvider]) -> Vec<VNode> {
    if providers.is_empty() {
        return vec![empty_row(6, "No pending providers")];
    }
    providers.iter().map(render_provider_row).collect()
}

fn render_provider_row(provider: &PendingProvider) -> VNode {
    let mut actions = ElementBuilder::new("td");
    if let Some(id) = provider.id {
        actions = actions
            .child(
                ElementBuilder::new("button")
                    .class("btn btn-sm btn-success mr-2")
                    .on_click(Action::ApproveProvider(id))
                    .text("Approve")
                    .build(),
            )
            .child(
                ElementBuilder::new("button")
                    .class("btn btn-sm btn-danger")
                    .on_click(Action::RejectProvider(id))
                    .text("Reject")
                    .build(),
            );
    }

    ElementBuilder::new("tr")
        .child(td(or(provider.name.as_deref(), "Unknown")))
        .child(td(or(provider.email.as_deref(), "N/A")))
        .child(td(or(provider.phone.as_deref(), "N/A")))
        .child(td(or(provider.specialization.as_deref(), "N/A")))
        .child(
            ElementBuilder::new("td")
                .child(badge("warning", or(provider.status.as_deref(), "Pending")))
                .build(),
        )
        .child(actions.build())
        .build()
}
