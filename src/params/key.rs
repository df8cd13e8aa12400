//! Recognised parameter keys.

/// A numeric parameter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKey {
    /// Pitch between adjacent pin centres along a row (mm).
    Spacing,
    /// Pad size along the row axis (mm).
    PadWidth,
    /// Pad size across the row axis (mm).
    PadHeight,
    /// Outline length along the row axis (mm).
    TotalLength,
    /// Centre-to-centre distance between the two pad rows (mm).
    SpaceBetweenPads,
    /// Total pin count.
    NumPins,
}

impl NumericKey {
    /// All numeric keys, in parameter file order.
    pub const ALL: [Self; 6] = [
        Self::Spacing,
        Self::PadWidth,
        Self::PadHeight,
        Self::TotalLength,
        Self::SpaceBetweenPads,
        Self::NumPins,
    ];

    /// Returns the key as written in a parameter file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spacing => "SPACING",
            Self::PadWidth => "PAD_WIDTH",
            Self::PadHeight => "PAD_HEIGHT",
            Self::TotalLength => "TOTAL_LENGTH",
            Self::SpaceBetweenPads => "SPACE_BETWEEN_PADS",
            Self::NumPins => "NUM_PINS",
        }
    }
}

/// The first token of a parameter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey<'a> {
    /// `NAME`, the only text-valued key.
    Name,
    /// One of the numeric keys.
    Numeric(NumericKey),
    /// Anything else.
    Unrecognized(&'a str),
}

impl<'a> ParamKey<'a> {
    /// Key name for `NAME`.
    pub const NAME: &'static str = "NAME";

    /// Classifies a key token. Matching is case-sensitive.
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        if token == Self::NAME {
            return Self::Name;
        }
        NumericKey::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .map_or(Self::Unrecognized(token), Self::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name() {
        assert_eq!(ParamKey::parse("NAME"), ParamKey::Name);
    }

    #[test]
    fn parse_every_numeric_key() {
        for key in NumericKey::ALL {
            assert_eq!(ParamKey::parse(key.as_str()), ParamKey::Numeric(key));
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(ParamKey::parse("spacing"), ParamKey::Unrecognized("spacing"));
        assert_eq!(ParamKey::parse("Name"), ParamKey::Unrecognized("Name"));
    }

    #[test]
    fn unknown_key_is_kept() {
        assert_eq!(ParamKey::parse("FOO"), ParamKey::Unrecognized("FOO"));
    }
}
