//! Currency amounts as integer cents.
//!
//! Balances and bets are stored as whole cents so that debits and credits
//! stay exact and money-bearing types keep `Eq`. The roster file and the
//! interactive prompts speak decimal dollars; these helpers convert between
//! the two representations.

/// A currency amount in cents.
pub type Cents = u64;

/// Parses a decimal dollar amount such as `"250.50"`, `"100"`, or `"7.5"`
/// into cents. At most two fraction digits are accepted.
///
/// # Examples
///
/// ```
/// use blackjack_engine::currency::parse_amount;
///
/// assert_eq!(parse_amount("250.50"), Some(25050));
/// assert_eq!(parse_amount("100"), Some(10000));
/// assert_eq!(parse_amount("7.5"), Some(750));
/// assert_eq!(parse_amount("1.999"), None);
/// assert_eq!(parse_amount("-5"), None);
/// ```
pub fn parse_amount(input: &str) -> Option<Cents> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let dollars: Cents = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let cents: Cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<Cents>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    dollars.checked_mul(100)?.checked_add(cents)
}

/// Formats cents as a decimal dollar amount with two fraction digits.
///
/// ```
/// use blackjack_engine::currency::format_amount;
///
/// assert_eq!(format_amount(25050), "250.50");
/// assert_eq!(format_amount(5), "0.05");
/// ```
pub fn format_amount(amount: Cents) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}
