//! Display formatting for prices, ratings, and review counts.

/// Format a price with a currency symbol and two decimal places.
pub fn format_price(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

/// Format a rating value fixed to one decimal place.
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}

/// Format a review count for display next to the star row, with
/// thousands grouping.
pub fn format_review_count(count: u32) -> String {
    format!("({})", group_thousands(count))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
