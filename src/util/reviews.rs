//! Rating summaries for the review modal.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use crate::net::types::Review;

pub const MAX_RATING: u8 = 5;

/// Mean rating rounded to one decimal, or `None` without reviews.
///
/// Ratings outside `1..=5` are clamped before averaging.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews
        .iter()
        .map(|r| u32::from(r.rating.clamp(1, MAX_RATING)))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(total) / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Five-character star bar, e.g. `"★★★☆☆"` for 3.
///
/// Clamped to `1..=5` the same way `average_rating` clamps.
#[must_use]
pub fn star_string(rating: u8) -> String {
    let filled = usize::from(rating.clamp(1, MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Summary line such as `"4.5 (12 reseñas)"`.
#[must_use]
pub fn rating_summary(reviews: &[Review]) -> String {
    match average_rating(reviews) {
        None => "Sin reseñas".to_owned(),
        Some(avg) if reviews.len() == 1 => format!("{avg:.1} (1 reseña)"),
        Some(avg) => format!("{avg:.1} ({} reseñas)", reviews.len()),
    }
}
