// ============================================================================
// PAYMENTS VIEW - Pagos del cliente e historial del proveedor
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::models::Payment;
use crate::state::action::Action;
use crate::utils::format::format_currency;
use crate::views::shared::{badge, empty_row, id_or_na, or, td};

/// Filas de `#payments-table-body` (6 columnas)
pub fn render_user_payments(payments: &[Payment]) -> Vec<VNode> {
    if payments.is_empty() {
        return vec![empty_row(6, "No payments found")];
    }
    payments.iter().map(render_payment_row).collect()
}

fn render_payment_row(payment: &Payment) -> VNode {
    let booking = format!(
        "Booking #{} - {}",
        id_or_na(payment.booking_id),
        or(payment.service_name.as_deref(), "N/A")
    );
    let status_kind = if payment.is_confirmed() { "success" } else { "warning" };

    let mut status_cell = ElementBuilder::new("td")
        .child(badge(status_kind, or(payment.display_status(), "N/A")));
    if let Some(invoice) = payment.invoice_id {
        status_cell = status_cell.child(
            ElementBuilder::new("button")
                .class("btn btn-sm btn-outline-primary ml-2")
                .on_click(Action::ViewInvoice(invoice))
                .text("Invoice")
                .build(),
        );
    }

    ElementBuilder::new("tr")
        .child(td(&id_or_na(payment.id)))
        .child(td(&booking))
        .child(td(or(payment.date.as_deref(), "N/A")))
        .child(td(&format_currency(payment.amount)))
        .child(td(or(payment.method.as_deref(), "N/A")))
        .child(status_cell.build())
        .build()
}

/// Filas de `#payment-history-table tbody` (5 columnas)
pub fn render_payment_history(payments: &[Payment]) -> Vec<VNode> {
    if payments.is_empty() {
        return vec![empty_row(5, "No payments received yet")];
    }
    payments
        .iter()
        .map(|payment| {
            ElementBuilder::new("tr")
                .child(td(or(payment.customer_name.as_deref(), "Unknown")))
                .child(td(or(payment.service_name.as_deref(), "Service")))
                .child(td(or(payment.date.as_deref(), "N/A")))
                .child(td(&format_currency(payment.amount)))
                .child(
                    ElementBuilder::new("td")
                        .child(
                            ElementBuilder::new("span")
                                .class("badge bg-success")
                                .text(or(payment.payment_status.as_deref(), "Paid"))
                                .build(),
                        )
                        .build(),
                )
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &VNode) -> Vec<String> {
        row.children().iter().map(VNode::text_content).collect()
    }

    #[test]
    fn missing_payment_id_renders_na() {
        let payment = Payment {
            booking_id: Some(12),
            amount: Some(19.5),
            status: Some("Confirmed".into()),
            ..Default::default()
        };
        let rows = render_user_payments(&[payment]);
        assert_eq!(
            cells(&rows[0]),
            vec!["N/A", "Booking #12 - N/A", "N/A", "$19.50", "N/A", "Confirmed"]
        );
        let badge = rows[0].find(&|el| el.tag == "span").unwrap();
        assert!(badge.has_class("badge-success"));
    }

    #[test]
    fn invoice_button_only_when_present() {
        let with_invoice = Payment { id: Some(1), invoice_id: Some(77), ..Default::default() };
        let without = Payment { id: Some(2), ..Default::default() };
        let rows = render_user_payments(&[with_invoice, without]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].actions(), vec![Action::ViewInvoice(77)]);
        assert!(rows[1].actions().is_empty());
        let badge = rows[1].find(&|el| el.tag == "span").unwrap();
        assert!(badge.has_class("badge-warning"));
    }

    #[test]
    fn empty_tables() {
        let rows = render_user_payments(&[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text_content(), "No payments found");
        let cell = rows[0].children()[0].as_element().unwrap();
        assert_eq!(cell.attr("colspan"), Some("6"));

        let rows = render_payment_history(&[]);
        assert_eq!(rows[0].text_content(), "No payments received yet");
    }

    #[test]
    fn history_fallbacks() {
        let rows = render_payment_history(&[Payment::default()]);
        assert_eq!(cells(&rows[0]), vec!["Unknown", "Service", "N/A", "$0.00", "Paid"]);
    }
}
