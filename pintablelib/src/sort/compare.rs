//! Default cell comparator.
//!
//! Two cell values compare numerically when both coerce to a number, and as
//! strings otherwise. The comparator is total over every input it can see:
//! it never panics and never yields an ordering from a NaN.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;
use serde_json::Value;

use crate::data::{cast_value, SortOrder};

/// Compare two cell values for one column, oriented by `order`.
///
/// - If either side does not coerce to a number, both sides are compared
///   by their string form with [`locale_compare`].
/// - Otherwise the numeric difference decides; a NaN difference (for example
///   infinity minus infinity) counts as equal.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let (x, y) = (to_number(a), to_number(b));
    if x.is_nan() || y.is_nan() {
        return order.apply(locale_compare(&cast_value(a), &cast_value(b)));
    }
    order.apply(ordering_of(x - y))
}

/// Locale-aware string ordering.
///
/// Uses the Unicode Collation Algorithm with the root locale: accented
/// letters sort next to their base letter, case only breaks ties, and
/// lowercase sorts before uppercase on otherwise equal strings.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Coerce a cell value to a number.
///
/// `null`, `false` and blank strings are 0, `true` is 1, numeric strings
/// parse after trimming. Missing values, objects, arrays and any other
/// string are NaN.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_numeric(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

fn parse_numeric(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    // Rust accepts "inf" and "nan" spellings that are not numbers here.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn ordering_of(diff: f64) -> Ordering {
    if diff < 0.0 {
        Ordering::Less
    } else if diff > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
