//! Input formatting, card masking, and transaction id generation.
//!
//! These are the pure helpers both screens share: the form screen live-formats
//! input with them, the receipt screen masks with them. None of them touch the
//! wall clock on their own; callers pass the current instant in where it
//! matters.

use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Groups the digits of `raw` into space-separated chunks of 4.
///
/// All non-digit characters are stripped first, so the function is safe to
/// reapply to its own output. No length cap is applied here; the form screen
/// truncates to 16 digits before calling.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Formats expiry input as `MM/YY`.
///
/// Strips non-digits; once 2 or more digits are present, inserts `/` after
/// the first two and keeps at most 4 digits total. With fewer than 2 digits
/// the digit string is returned unchanged.
pub fn format_expiry_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let month = &digits[..2];
        let year = &digits[2..digits.len().min(4)];
        format!("{}/{}", month, year)
    } else {
        digits
    }
}

/// Masks a card number for display, keeping only the last 4 characters.
///
/// Spaces are stripped first, so both raw and display-formatted numbers mask
/// identically. The tail is taken per character, not per byte, so degenerate
/// input (fewer than 4 digits, non-digit or non-ASCII text) still masks
/// without panicking; whatever remains follows the placeholder.
pub fn mask_card_number(card_number: &str) -> String {
    let cleaned: Vec<char> = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    let tail: String = cleaned[cleaned.len().saturating_sub(4)..].iter().collect();
    format!("**** **** **** {}", tail)
}

/// Generates a session-unique transaction id from the given instant.
///
/// The id is `TXN-` followed by the base-36 millisecond timestamp and a
/// 7-character pseudo-random base-36 suffix, upper-cased. Collisions within
/// a session are vanishingly unlikely; nothing here is cryptographic, which
/// is acceptable only because no real ledger exists.
pub fn generate_transaction_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().max(0) as u128;
    let mut rng = rand::rng();
    let suffix: String = (0..7)
        .map(|_| BASE36_DIGITS[rng.random_range(0..36)] as char)
        .collect();
    format!("TXN-{}-{}", to_base36(millis), suffix).to_uppercase()
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    // Safety: buf only ever holds ASCII base-36 digits
    String::from_utf8(buf).expect("base-36 digits are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_card_number_groups_of_four() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("411"), "411");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_card_number_strips_non_digits() {
        assert_eq!(format_card_number("4111-1111 11ab11"), "4111 1111 1111");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_card_number_idempotent_on_own_output() {
        let once = format_card_number("4111111111111111");
        assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn test_format_expiry_date() {
        assert_eq!(format_expiry_date("1225"), "12/25");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date(""), "");
        assert_eq!(format_expiry_date("12/25"), "12/25");
    }

    #[test]
    fn test_format_expiry_date_caps_at_four_digits() {
        assert_eq!(format_expiry_date("122534"), "12/25");
        assert_eq!(format_expiry_date("1a2b2c5d9"), "12/25");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(
            mask_card_number("4111 1111 1111 1111"),
            "**** **** **** 1111"
        );
        assert_eq!(mask_card_number("4111111111111111"), "**** **** **** 1111");
    }

    #[test]
    fn test_mask_card_number_short_input() {
        assert_eq!(mask_card_number("42"), "**** **** **** 42");
        assert_eq!(mask_card_number(""), "**** **** **** ");
    }

    #[test]
    fn test_mask_card_number_multibyte_input() {
        // Arbitrary text can arrive via the navigation boundary; masking
        // must stay total over it.
        assert_eq!(mask_card_number("€€"), "**** **** **** €€");
        assert_eq!(mask_card_number("４１１１2345"), "**** **** **** 2345");
    }

    #[test]
    fn test_transaction_id_shape() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap();
        let id = generate_transaction_id(now);

        assert!(id.starts_with("TXN-"));
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(!parts[1].is_empty());
        assert_eq!(parts[2].len(), 7);
        for part in &parts[1..] {
            assert!(part.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_transaction_id_timestamp_component_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap();
        let a = generate_transaction_id(now);
        let b = generate_transaction_id(now);

        let ts = |id: &str| id.split('-').nth(1).unwrap().to_string();
        assert_eq!(ts(&a), ts(&b));
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
