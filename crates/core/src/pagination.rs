//! Limit/offset pagination helpers shared by list endpoints.

/// Default page size when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound accepted for `limit`; larger values are clamped.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a caller-supplied limit into `1..=MAX_LIMIT`, defaulting to
/// [`DEFAULT_LIMIT`] when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Whether another page exists after the current one.
///
/// True exactly when `offset + limit < total`.
pub fn has_more(limit: i64, offset: i64, total: i64) -> bool {
    offset + limit < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_partial_page_remaining() {
        assert!(has_more(20, 0, 45));
        assert!(has_more(20, 20, 45));
    }

    #[test]
    fn has_more_last_page() {
        assert!(!has_more(20, 40, 45));
        assert!(!has_more(20, 0, 20));
        assert!(!has_more(20, 0, 0));
    }

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(500)), MAX_LIMIT);
        assert_eq!(clamp_limit(Some(35)), 35);
    }

    #[test]
    fn offset_defaults_and_clamps() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-5)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}
