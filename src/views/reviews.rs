// ============================================================================
// REVIEWS VIEW - Reseñas de un proveedor
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::models::{ProviderReviews, Review};
use crate::views::bookings::stars;
use crate::views::shared::{info_alert, or};

/// Texto de `#provider-rating`: "4.5 (12 reviews)". La media se muestra tal
/// cual llega del backend, sin redondear.
pub fn render_rating_summary(reviews: &ProviderReviews) -> Vec<VNode> {
    let average = reviews
        .average_rating
        .map(|a| a.to_string())
        .unwrap_or_else(|| "0".to_string());
    let total = reviews.total_reviews.unwrap_or(reviews.reviews.len() as i64);
    vec![VNode::text(format!("{} ({} reviews)", average, total))]
}

/// Contenido de `#provider-reviews`
pub fn render_reviews(reviews: &ProviderReviews) -> Vec<VNode> {
    if reviews.reviews.is_empty() {
        return vec![info_alert("No reviews yet")];
    }
    reviews.reviews.iter().map(render_review).collect()
}

fn render_review(review: &Review) -> VNode {
    ElementBuilder::new("div")
        .class("review-item mb-3 p-3 border rounded")
        .child(
            ElementBuilder::new("div")
                .class("d-flex justify-content-between align-items-center")
                .child(
                    ElementBuilder::new("div")
                        .child(
                            ElementBuilder::new("strong")
                                .text(or(review.customer_name.as_deref(), "Anonymous"))
                                .build(),
                        )
                        .child(
                            ElementBuilder::new("span")
                                .class("text-muted ml-2")
                                .text(or(review.date.as_deref(), "N/A"))
                                .build(),
                        )
                        .build(),
                )
                .child(
                    ElementBuilder::new("div")
                        .class("rating")
                        .text(&stars(review.stars()))
                        .build(),
                )
                .build(),
        )
        .child(
            ElementBuilder::new("p")
                .class("mt-2 mb-0")
                .text(or(review.comment.as_deref(), "No comment provided"))
                .build(),
        )
        .build()
}
