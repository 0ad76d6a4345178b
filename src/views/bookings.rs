// ============================================================================
// BOOKINGS VIEW - Tarjetas del cliente y tabla de administración
// ============================================================================

use std::collections::HashMap;
use crate::dom::{ElementBuilder, VNode};
use crate::models::{Booking, BookingStatus, Service};
use crate::models::review::MAX_RATING;
use crate::state::action::Action;
use crate::utils::constants::{comment_input_id, rating_input_id, review_form_id};
use crate::utils::format::{format_currency, format_date, format_time};
use crate::views::shared::{badge, empty_row, id_or_na, info_alert, or, td};

/// Contenido de `#user-bookings`. `reviewed` lleva las reseñas enviadas en
/// esta página para no volver a ofrecer el formulario; `services` es el
/// catálogo cargado, de donde sale el precio que la reserva no trae.
pub fn render_user_bookings(
    bookings: &[Booking],
    reviewed: &HashMap<i64, u8>,
    services: &[Service],
) -> Vec<VNode> {
    if bookings.is_empty() {
        return vec![info_alert("No bookings found")];
    }
    bookings
        .iter()
        .map(|b| render_booking_card(b, reviewed, booking_price(b, services)))
        .collect()
}

/// Precio de la reserva: el suyo si lo trae, si no el del servicio (S_ID)
pub fn booking_price(booking: &Booking, services: &[Service]) -> Option<f64> {
    booking.price.or_else(|| {
        let service_id = booking.service_id?;
        services
            .iter()
            .find(|s| s.id == Some(service_id))
            .and_then(|s| s.price)
    })
}

fn render_booking_card(booking: &Booking, reviewed: &HashMap<i64, u8>, price: Option<f64>) -> VNode {
    let status = booking.status();
    let when = format!(
        "{} at {}",
        booking.date.as_deref().map(format_date).unwrap_or_else(|| "N/A".into()),
        booking.time.as_deref().map(format_time).unwrap_or_else(|| "N/A".into()),
    );
    let payment = if booking.is_paid() { "Paid" } else { "Pending" };

    let mut body = ElementBuilder::new("div")
        .class("card-body")
        .child(
            ElementBuilder::new("h5")
                .class("card-title")
                .text(or(booking.service_name.as_deref(), "Service"))
                .build(),
        )
        .child(ElementBuilder::new("p").class("card-text mb-1").text(&when).build())
        .child(
            ElementBuilder::new("p")
                .class("card-text mb-1")
                .text("Status: ")
                .child(badge(status.badge_class(), status_label(booking, status)))
                .build(),
        )
        .child(
            ElementBuilder::new("p")
                .class("card-text mb-1")
                .text(&format!("Payment: {}", payment))
                .build(),
        );

    if price.is_some() {
        body = body.child(
            ElementBuilder::new("p")
                .class("card-text font-weight-bold")
                .text(&format_currency(price))
                .build(),
        );
    }

    if let Some(id) = booking.id {
        let mut actions = Vec::new();
        if booking.can_cancel() {
            actions.push(
                ElementBuilder::new("button")
                    .class("btn btn-sm btn-outline-danger mr-2")
                    .on_click(Action::CancelBooking(id))
                    .text("Cancel")
                    .build(),
            );
        }
        if booking.can_pay() {
            // Sin precio conocido el backend cobra el del servicio
            let label = match price {
                Some(_) => format!("Pay {}", format_currency(price)),
                None => "Pay".to_string(),
            };
            actions.push(
                ElementBuilder::new("button")
                    .class("btn btn-sm btn-success")
                    .on_click(Action::PayBooking { booking_id: id, amount: price })
                    .text(&label)
                    .build(),
            );
        }
        if !actions.is_empty() {
            body = body.child(ElementBuilder::new("div").class("booking-actions").children(actions).build());
        }

        if let Some(stars) = reviewed.get(&id) {
            body = body.child(review_wrapper(id, review_submitted(*stars)));
        } else if booking.can_review() {
            body = body.child(review_wrapper(id, review_form(id)));
        }
    }

    let card = ElementBuilder::new("div")
        .class("booking-item card mb-3")
        .attr("data-booking-id", &id_or_na(booking.id));
    match booking.id {
        Some(id) => card.key(&id.to_string()),
        None => card,
    }
    .child(body.build())
    .build()
}

fn status_label(booking: &Booking, status: BookingStatus) -> &str {
    match status {
        BookingStatus::Cancelled => "Cancelled",
        _ => or(booking.status.as_deref(), "Unknown"),
    }
}

/// `#review-form-{id}`: envoltorio estable del formulario o de la confirmación
fn review_wrapper(booking_id: i64, content: VNode) -> VNode {
    ElementBuilder::new("div")
        .id(&review_form_id(booking_id))
        .class("review-form mt-3")
        .child(content)
        .build()
}

fn review_form(booking_id: i64) -> VNode {
    let options = std::iter::once(
        ElementBuilder::new("option").attr("value", "").text("Select rating").build(),
    )
    .chain((1..=MAX_RATING).rev().map(|r| {
        ElementBuilder::new("option")
            .attr("value", &r.to_string())
            .text(&format!("{} ({})", stars(r), r))
            .build()
    }));

    ElementBuilder::new("div")
        .class("form-group mb-0")
        .child(
            ElementBuilder::new("select")
                .class("form-control mb-2")
                .id(&rating_input_id(booking_id))
                .children(options)
                .build(),
        )
        .child(
            ElementBuilder::new("textarea")
                .class("form-control mb-2")
                .id(&comment_input_id(booking_id))
                .attr("rows", "2")
                .attr("placeholder", "Leave a comment (optional)")
                .build(),
        )
        .child(
            ElementBuilder::new("button")
                .class("btn btn-sm btn-primary")
                .on_click(Action::SubmitReview(booking_id))
                .text("Submit Review")
                .build(),
        )
        .build()
}

/// Lo que queda en `#review-form-{id}` tras enviar la reseña
pub fn review_submitted(stars: u8) -> VNode {
    ElementBuilder::new("div")
        .class("alert alert-success")
        .text(&format!("Review submitted ({} stars)", stars))
        .build()
}

/// ★ llenas y ☆ vacías sobre 5
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

/// Filas de `#admin-bookings`
pub fn render_admin_bookings(bookings: &[Booking]) -> Vec<VNode> {
    if bookings.is_empty() {
        return vec![empty_row(7, "No bookings found")];
    }
    bookings.iter().map(render_admin_row).collect()
}

fn render_admin_row(booking: &Booking) -> VNode {
    let status = booking.status();
    let action = match booking.id {
        Some(id) if booking.can_confirm() => ElementBuilder::new("td")
            .child(
                ElementBuilder::new("button")
                    .class("btn btn-sm btn-success")
                    .on_click(Action::ConfirmBooking(id))
                    .text("Confirm")
                    .build(),
            )
            .build(),
        _ => td(""),
    };

    ElementBuilder::new("tr")
        .child(td(&id_or_na(booking.id)))
        .child(td(or(booking.customer_name.as_deref(), "Unknown")))
        .child(td(or(booking.service_name.as_deref(), "Service")))
        .child(td(or(booking.date.as_deref(), "N/A")))
        .child(td(or(booking.time.as_deref(), "N/A")))
        .child(
            ElementBuilder::new("td")
                .child(badge(status.badge_class(), status_label(booking, status)))
                .build(),
        )
        .child(action)
        .build()
}
