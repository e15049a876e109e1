use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

pub const PREFIX: &str = "ORD-";

/// Last millisecond value handed out by this process.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Generate the next order number: `ORD-` followed by epoch milliseconds.
///
/// Two calls in the same millisecond never return the same value: the second
/// one takes the previous value + 1. Across processes the unique key on
/// `orders.order_number` is the guard.
pub fn next_order_number() -> String {
    format!("{}{}", PREFIX, next_sequence(Utc::now().timestamp_millis()))
}

fn next_sequence(now_millis: i64) -> i64 {
    let mut last = LAST_ISSUED.load(Ordering::Acquire);
    loop {
        let candidate = if now_millis > last { now_millis } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Check that a value has the `ORD-<digits>` shape
#[cfg(test)]
pub(crate) fn is_order_number(value: &str) -> bool {
    value
        .strip_prefix(PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_number_shape() {
        let number = next_order_number();
        assert!(is_order_number(&number), "unexpected order number {}", number);
    }

    #[test]
    fn test_order_numbers_are_unique_within_a_millisecond() {
        let numbers: HashSet<String> = (0..1000).map(|_| next_order_number()).collect();
        assert_eq!(numbers.len(), 1000);
    }

    #[test]
    fn test_sequence_never_goes_backwards() {
        let now = Utc::now().timestamp_millis();
        let first = next_sequence(now);
        // A clock that jumps backwards still yields a larger value
        let second = next_sequence(now - 1_000);
        assert!(second > first);
    }

    #[test]
    fn test_is_order_number() {
        assert!(is_order_number("ORD-1700000000000"));
        assert!(!is_order_number("ORD-"));
        assert!(!is_order_number("ORD-12a4"));
        assert!(!is_order_number("CMD-1700000000000"));
    }
}
