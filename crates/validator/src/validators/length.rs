//! String length rules
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` has
//! length 5. An absent value has length 0.

#[inline]
fn char_len(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Fails when the value is shorter than `min` characters.
    ///
    /// Absent and empty values have length 0, so this rule fails on them
    /// unless `min` is 0. Pair it with [`required`](super::required) to
    /// report emptiness separately.
    ///
    /// ```rust
    /// use formwork_validator::validators::min_length;
    ///
    /// let rule = min_length(6);
    /// assert!(rule.check(Some("abcde")));
    /// assert!(rule.check(None));
    /// assert!(!rule.check(Some("abcdef")));
    /// ```
    pub fn min_length(min: usize) as "minLength";
    params { "min" => min }
    check(value) { char_len(value) < min }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Fails when the value is longer than `max` characters.
    ///
    /// Absent values pass.
    pub fn max_length(max: usize) as "maxLength";
    params { "max" => max }
    check(value) { char_len(value) > max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_boundaries() {
        let rule = min_length(6);
        assert!(rule.check(Some("abcde")));
        assert!(!rule.check(Some("abcdef")));
        assert!(!rule.check(Some("abcdefg")));
        assert!(rule.check(None));
        assert!(rule.check(Some("")));
    }

    #[test]
    fn min_length_zero_accepts_absent() {
        assert!(!min_length(0).check(None));
        assert!(!min_length(0).check(Some("")));
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        // 5 chars, 6 bytes
        assert!(min_length(6).check(Some("héllo")));
        assert!(!min_length(5).check(Some("héllo")));
    }

    #[test]
    fn max_length_boundaries() {
        let rule = max_length(3);
        assert!(!rule.check(None));
        assert!(!rule.check(Some("abc")));
        assert!(rule.check(Some("abcd")));
    }

    #[test]
    fn length_params() {
        assert_eq!(min_length(6).param("min"), Some("6"));
        assert_eq!(max_length(64).param("max"), Some("64"));
        assert_eq!(min_length(6).name().as_str(), "minLength");
    }
}
