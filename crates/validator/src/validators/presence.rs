//! Presence rules

crate::rule! {
    /// Fails when the value is absent, or blank after trimming leading and
    /// trailing whitespace.
    ///
    /// This is the only built-in rule that flags emptiness; the others treat
    /// an empty value as "nothing to check".
    ///
    /// ```rust
    /// use formwork_validator::validators::required;
    ///
    /// let rule = required();
    /// assert!(rule.check(None));
    /// assert!(rule.check(Some("   ")));
    /// assert!(!rule.check(Some("a")));
    /// ```
    pub fn required() as "required";
    check(value) { value.is_none_or(|v| v.trim().is_empty()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_name() {
        assert_eq!(required().name().as_str(), "required");
        assert!(required().params().is_empty());
    }

    #[test]
    fn required_flags_absent_and_blank() {
        let rule = required();
        assert!(rule.check(None));
        assert!(rule.check(Some("")));
        assert!(rule.check(Some(" \t\n")));
        assert!(!rule.check(Some("a")));
        assert!(!rule.check(Some("  a  ")));
    }
}
