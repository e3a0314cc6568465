use super::entry::parse_leading_integer;

/// Highest price an entry may have and still be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceCeiling {
    /// No price control, or a value that does not parse.
    #[default]
    Unbounded,
    AtMost(u64),
}

impl PriceCeiling {
    pub fn admits(&self, price: u64) -> bool {
        match self {
            PriceCeiling::Unbounded => true,
            PriceCeiling::AtMost(limit) => price <= *limit,
        }
    }

    /// Ceiling from an optional slider: no slider means no limit.
    pub fn from_slider(value: Option<&str>) -> Self {
        value.map(parse_ceiling).unwrap_or_default()
    }

    pub fn limit(&self) -> Option<u64> {
        match self {
            PriceCeiling::Unbounded => None,
            PriceCeiling::AtMost(limit) => Some(*limit),
        }
    }
}

/// Coerce the raw slider value. Non-numeric input is unbounded, negative
/// input clamps to 0.
pub fn parse_ceiling(raw: &str) -> PriceCeiling {
    match parse_leading_integer(raw) {
        Some(value) => PriceCeiling::AtMost(value.max(0) as u64),
        None => PriceCeiling::Unbounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ceiling() {
        assert_eq!(parse_ceiling("1000"), PriceCeiling::AtMost(1000));
        assert_eq!(parse_ceiling("750.5"), PriceCeiling::AtMost(750));
        assert_eq!(parse_ceiling("-20"), PriceCeiling::AtMost(0));
        assert_eq!(parse_ceiling(""), PriceCeiling::Unbounded);
        assert_eq!(parse_ceiling("max"), PriceCeiling::Unbounded);
    }

    #[test]
    fn test_admits_is_inclusive() {
        let ceiling = PriceCeiling::AtMost(1000);
        assert!(ceiling.admits(999));
        assert!(ceiling.admits(1000));
        assert!(!ceiling.admits(1001));
        assert!(PriceCeiling::Unbounded.admits(u64::MAX));
    }

    #[test]
    fn test_missing_slider_is_unbounded() {
        assert_eq!(PriceCeiling::from_slider(None), PriceCeiling::Unbounded);
        assert_eq!(
            PriceCeiling::from_slider(Some("50000")),
            PriceCeiling::AtMost(50000)
        );
        assert_eq!(PriceCeiling::AtMost(5).limit(), Some(5));
        assert_eq!(PriceCeiling::Unbounded.limit(), None);
    }
}
