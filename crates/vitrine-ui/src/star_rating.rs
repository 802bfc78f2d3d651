//! Star rating row.

use leptos::prelude::*;

use vitrine_catalog::{format_rating, format_review_count};

use crate::config::StorefrontConfig;
use crate::icons::StarIcon;

/// Fill state of one star position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Classify a 1-indexed star position against a rating.
///
/// Position i is `Full` iff `i <= floor(rating)`, `Half` iff
/// `i == ceil(rating)` and the rating is not an integer, else `Empty`.
pub fn star_fill(position: u8, rating: f32) -> StarFill {
    let position = i64::from(position);
    if position <= rating.floor() as i64 {
        StarFill::Full
    } else if position == rating.ceil() as i64 && rating.fract() != 0.0 {
        StarFill::Half
    } else {
        StarFill::Empty
    }
}

/// Fill states for every position in a `max_rating`-star row.
pub fn star_fills(rating: f32, max_rating: u8) -> Vec<StarFill> {
    (1..=max_rating)
        .map(|position| star_fill(position, rating))
        .collect()
}

/// Row of stars with an optional numeric rating and review count.
///
/// Pure display; holds no state.
#[component]
pub fn StarRating(
    /// Rating value, expected range 0.0 to `max_rating`.
    rating: f32,
    /// Number of star positions. Falls back to the configured default.
    #[prop(into, optional)]
    max_rating: Option<u8>,
    /// Pixel size of each star glyph.
    #[prop(default = 16)]
    size: u32,
    /// Whether to display the numeric rating next to the stars.
    #[prop(default = true)]
    show_rating: bool,
    /// Review count displayed after the rating, with thousands grouping.
    #[prop(into, optional)]
    review_count: Option<u32>,
) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let max_rating = max_rating.unwrap_or(config.max_rating);

    view! {
        <div class="star-rating">
            <div class="star-row">
                {star_fills(rating, max_rating)
                    .into_iter()
                    .map(|fill| view! { <Star fill=fill size=size /> })
                    .collect_view()}
            </div>
            {show_rating
                .then(|| {
                    view! {
                        <div class="rating-text">
                            <span class="rating-value">{format_rating(rating)}</span>
                            {review_count
                                .map(|count| {
                                    view! {
                                        <span class="review-count">
                                            {format_review_count(count)}
                                        </span>
                                    }
                                })}
                        </div>
                    }
                })}
        </div>
    }
}

/// One star position. The half state clips a filled overlay to the left
/// half of the empty base glyph.
#[component]
fn Star(fill: StarFill, size: u32) -> impl IntoView {
    view! {
        <span class="star">
            <StarIcon size=size class="star-base" />
            {match fill {
                StarFill::Full => {
                    Some(view! { <StarIcon size=size class="star-overlay" /> }.into_any())
                }
                StarFill::Half => {
                    Some(
                        view! {
                            <span class="star-clip">
                                <StarIcon size=size class="star-overlay" />
                            </span>
                        }
                            .into_any(),
                    )
                }
                StarFill::Empty => None,
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_or_half(rating: f32, max_rating: u8) -> usize {
        star_fills(rating, max_rating)
            .iter()
            .filter(|fill| **fill != StarFill::Empty)
            .count()
    }

    #[test]
    fn test_star_fill_whole_rating() {
        assert_eq!(star_fill(1, 3.0), StarFill::Full);
        assert_eq!(star_fill(3, 3.0), StarFill::Full);
        assert_eq!(star_fill(4, 3.0), StarFill::Empty);
        assert_eq!(star_fill(5, 3.0), StarFill::Empty);
    }

    #[test]
    fn test_star_fill_half_position() {
        assert_eq!(star_fill(4, 4.5), StarFill::Full);
        assert_eq!(star_fill(5, 4.5), StarFill::Half);
        assert_eq!(star_fill(3, 2.2), StarFill::Half);
        assert_eq!(star_fill(4, 2.2), StarFill::Empty);
    }

    #[test]
    fn test_star_fill_zero_rating_all_empty() {
        assert!(star_fills(0.0, 5).iter().all(|fill| *fill == StarFill::Empty));
    }

    #[test]
    fn test_star_fill_max_rating_all_full() {
        assert!(star_fills(5.0, 5).iter().all(|fill| *fill == StarFill::Full));
    }

    #[test]
    fn test_star_fills_length_matches_max() {
        assert_eq!(star_fills(4.5, 5).len(), 5);
        assert_eq!(star_fills(4.5, 10).len(), 10);
        assert_eq!(star_fills(4.5, 0).len(), 0);
    }

    #[test]
    fn test_filled_or_half_count_property() {
        // Non-integer ratings fill ceil(r) positions, integer ratings r,
        // both bounded by the row length.
        for max_rating in 1..=10u8 {
            for tenths in 0..=50u32 {
                let rating = tenths as f32 / 10.0;
                let expected = if rating.fract() == 0.0 {
                    rating as usize
                } else {
                    rating.ceil() as usize
                };
                assert_eq!(
                    filled_or_half(rating, max_rating),
                    expected.min(max_rating as usize),
                    "rating {rating} with {max_rating} stars"
                );
            }
        }
    }

    #[test]
    fn test_at_most_one_half_star() {
        for tenths in 0..=50u32 {
            let rating = tenths as f32 / 10.0;
            let halves = star_fills(rating, 5)
                .iter()
                .filter(|fill| **fill == StarFill::Half)
                .count();
            assert!(halves <= 1, "rating {rating} produced {halves} half stars");
        }
    }

    #[test]
    fn test_rating_above_row_saturates() {
        assert!(star_fills(6.2, 5).iter().all(|fill| *fill == StarFill::Full));
    }

    #[test]
    fn test_negative_rating_all_empty() {
        assert!(star_fills(-1.5, 5).iter().all(|fill| *fill == StarFill::Empty));
    }
}
