use serde::{Deserialize, Serialize};
use crate::models::lenient;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_name: Option<String>,
    #[serde(rename = "ReviewDate", alias = "Timestamp", default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
    #[serde(rename = "Rating", default, deserialize_with = "lenient::opt_i64")]
    pub rating: Option<i64>,
    #[serde(rename = "Comment", alias = "Comments", default, deserialize_with = "lenient::opt_string")]
    pub comment: Option<String>,
}

impl Review {
    /// Rating acotado a 0..=5 para pintar estrellas
    pub fn stars(&self) -> u8 {
        self.rating.unwrap_or(0).clamp(0, MAX_RATING as i64) as u8
    }
}

/// Respuesta de /api/provider/{id}/reviews
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProviderReviews {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub average_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_reviews: Option<i64>,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub reviews: Vec<Review>,
}

/// Cuerpo de POST /api/reviews
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRequest {
    pub booking_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl ReviewRequest {
    pub fn from_form(booking_id: i64, rating: &str, comment: &str) -> Result<Self, String> {
        let rating = rating.trim();
        if rating.is_empty() {
            return Err("Please select a rating".to_string());
        }
        let rating: u8 = rating
            .parse()
            .ok()
            .filter(|r| (1..=MAX_RATING).contains(r))
            .ok_or_else(|| "Please select a rating between 1 and 5".to_string())?;
        Ok(Self {
            booking_id,
            rating,
            comment: comment.trim().to_string(),
        })
    }
}

/// Respuesta de POST /api/reviews
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ReviewSubmitted {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub rating: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        let r = |n| Review { rating: Some(n), ..Review::default() };
        assert_eq!(r(3).stars(), 3);
        assert_eq!(r(9).stars(), 5);
        assert_eq!(r(-2).stars(), 0);
        assert_eq!(Review::default().stars(), 0);
    }

    #[test]
    fn review_request_requires_rating() {
        assert_eq!(
            ReviewRequest::from_form(1, "", "great").unwrap_err(),
            "Please select a rating"
        );
        assert!(ReviewRequest::from_form(1, "6", "").is_err());
        let req = ReviewRequest::from_form(1, "4", " great ").unwrap();
        assert_eq!(req.rating, 4);
        assert_eq!(req.comment, "great");
    }

    #[test]
    fn provider_reviews_tolerates_null_list() {
        let parsed: ProviderReviews =
            serde_json::from_str(r#"{"average_rating":"4.5","total_reviews":2,"reviews":null}"#).unwrap();
        assert_eq!(parsed.average_rating, Some(4.5));
        assert!(parsed.reviews.is_empty());
    }
}
