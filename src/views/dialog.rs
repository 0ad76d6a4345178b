// ============================================================================
// DIALOG VIEW - Diálogo en página (sustituye prompt/confirm)
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::state::action::{Action, DialogField};
use crate::state::dialog::Dialog;
use crate::utils::format::format_currency;

/// Sin diálogo abierto la raíz queda vacía
pub fn render(dialog: Option<&Dialog>) -> Vec<VNode> {
    let dialog = match dialog {
        Some(d) => d,
        None => return Vec::new(),
    };

    let body = match dialog {
        Dialog::CancelBooking { reason, .. } => vec![
            paragraph("Are you sure you want to cancel this booking? This action cannot be undone."),
            field(
                "Please provide a reason for cancellation:",
                "text",
                "dialog-reason",
                reason,
                DialogField::Reason,
            ),
        ],
        Dialog::BookService { price, date, time, .. } => {
            let mut body = Vec::new();
            if price.is_some() {
                body.push(paragraph(&format!("Price: {}", format_currency(*price))));
            }
            body.push(field("Booking date", "date", "dialog-date", date, DialogField::Date));
            body.push(field("Booking time", "time", "dialog-time", time, DialogField::Time));
            body
        }
        Dialog::RejectProvider { .. } => {
            vec![paragraph("Are you sure you want to reject this service provider?")]
        }
    };

    let confirm_label = match dialog {
        Dialog::CancelBooking { .. } => "Cancel Booking",
        Dialog::BookService { .. } => "Book",
        Dialog::RejectProvider { .. } => "Reject",
    };

    let card = ElementBuilder::new("div")
        .class("app-dialog card shadow")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .child(
            ElementBuilder::new("div")
                .class("card-header")
                .child(ElementBuilder::new("h5").class("mb-0").text(&dialog.title()).build())
                .build(),
        )
        .child(ElementBuilder::new("div").class("card-body").children(body).build())
        .child(
            ElementBuilder::new("div")
                .class("card-footer text-right")
                .child(
                    ElementBuilder::new("button")
                        .class("btn btn-secondary mr-2")
                        .attr("type", "button")
                        .on_click(Action::DialogDismiss)
                        .text("Close")
                        .build(),
                )
                .child(
                    ElementBuilder::new("button")
                        .class("btn btn-primary")
                        .attr("type", "button")
                        .on_click(Action::DialogConfirm)
                        .text(confirm_label)
                        .build(),
                )
                .build(),
        )
        .build();

    vec![ElementBuilder::new("div").class("app-dialog-backdrop").child(card).build()]
}

fn paragraph(text: &str) -> VNode {
    ElementBuilder::new("p").text(text).build()
}

fn field(label: &str, input_type: &str, id: &str, value: &str, binding: DialogField) -> VNode {
    ElementBuilder::new("div")
        .class("form-group")
        .child(ElementBuilder::new("label").attr("for", id).text(label).build())
        .child(
            ElementBuilder::new("input")
                .class("form-control")
                .id(id)
                .attr("type", input_type)
                .attr("value", value)
                .on_input(binding)
                .build(),
        )
        .build()
}
