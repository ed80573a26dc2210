use std::cmp::Ordering;

/// Compare two dotted version strings, most significant segment first.
///
/// Missing trailing segments count as `0`, so `"1.0"` and `"1.0.0"` are
/// equal. A segment that is not a non-negative integer also counts as `0`;
/// this function never fails for any input. Numeric segments are compared by
/// value at any width.
///
/// The returned [`Ordering`] has the discriminants `-1`, `0` and `1`. Use
/// [`compare_versions_sign`] when the numeric form is needed.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => {
                let ordering = compare_digits(segment_digits(l), segment_digits(r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Same as [`compare_versions`], returning `-1`, `0` or `1`.
#[must_use]
pub fn compare_versions_sign(a: &str, b: &str) -> i8 {
    compare_versions(a, b) as i8
}

/// Significant digits of a segment, without sign or leading zeros.
///
/// Zero, absent and malformed segments are all the empty string.
pub(crate) fn segment_digits(segment: Option<&str>) -> &str {
    let Some(segment) = segment else {
        return "";
    };
    let segment = segment.trim();
    let segment = segment.strip_prefix('+').unwrap_or(segment);
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return "";
    }
    segment.trim_start_matches('0')
}

/// Numeric ordering of two [`segment_digits`] results.
pub(crate) fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
