//! ID generation
//!
//! Records carry decimal string ids. A new id is one past the largest
//! numeric id already in the collection; ids that are not base-10 integers
//! (e.g. hex ids from imported seed data) take no part in the maximum.
//!
//! Ids are compared and incremented as digit strings, so there is no upper
//! bound past which two creates could produce the same id.

/// Largest numeric id among `ids` without leading zeros, or `"0"` when there is none
pub fn max_numeric_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> &'a str {
    ids.into_iter()
        .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
        .map(|id| id.trim_start_matches('0'))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .filter(|id| !id.is_empty())
        .unwrap_or("0")
}

/// Next id after `max_id` (a base-10 digit string)
pub fn next_id(max_id: &str) -> String {
    let mut digits = max_id.as_bytes().to_vec();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    digits.into_iter().map(char::from).collect()
}
