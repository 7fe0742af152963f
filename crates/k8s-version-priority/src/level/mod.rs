use std::{cmp::Ordering, fmt::Display, num::ParseIntError, str::FromStr, sync::LazyLock};

use regex::Regex;
use snafu::{OptionExt, ResultExt, Snafu};

#[cfg(feature = "serde")]
mod serde;

static LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<qualifier>[a-z]+)(?P<minor>\d+)?$").expect("failed to compile level regex")
});

/// Error variants which can be encountered when creating a new [`Level`] from
/// unparsed input.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseLevelError {
    #[snafu(display("invalid level format, expected alpha(<MINOR>) or beta(<MINOR>)"))]
    InvalidFormat,

    #[snafu(display("failed to parse minor version"))]
    ParseMinor { source: ParseIntError },

    #[snafu(display("unknown level qualifier {qualifier:?}"))]
    UnknownQualifier { qualifier: String },
}

/// The maturity marker of a pre-release Kubernetes version.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Qualifier {
    Alpha,
    Beta,
}

impl Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => f.write_str("alpha"),
            Self::Beta => f.write_str("beta"),
        }
    }
}

/// A pre-release Kubernetes version level with the `alpha/beta(<MINOR>)`
/// format, for example `alpha`, `beta3` or `alpha12`.
///
/// Levels without a minor version rank below levels of the same qualifier
/// with one.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Level {
    /// Beta-level version, `beta(<MINOR>)`.
    Beta(Option<u64>),

    /// Alpha-level version, `alpha(<MINOR>)`.
    Alpha(Option<u64>),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let captures = LEVEL_REGEX.captures(input).context(InvalidFormatSnafu)?;

        let qualifier = captures
            .name("qualifier")
            .context(InvalidFormatSnafu)?
            .as_str();

        let minor = captures
            .name("minor")
            .map(|minor| minor.as_str().parse::<u64>())
            .transpose()
            .context(ParseMinorSnafu)?;

        match qualifier {
            "alpha" => Ok(Self::Alpha(minor)),
            "beta" => Ok(Self::Beta(minor)),
            _ => UnknownQualifierSnafu { qualifier }.fail(),
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        // None < Some, so a missing minor ranks lowest.
        self.qualifier()
            .cmp(&other.qualifier())
            .then_with(|| self.minor().cmp(&other.minor()))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.minor() {
            Some(minor) => write!(f, "{qualifier}{minor}", qualifier = self.qualifier()),
            None => write!(f, "{qualifier}", qualifier = self.qualifier()),
        }
    }
}

impl Level {
    pub fn qualifier(&self) -> Qualifier {
        match self {
            Self::Beta(_) => Qualifier::Beta,
            Self::Alpha(_) => Qualifier::Alpha,
        }
    }

    pub fn minor(&self) -> Option<u64> {
        match self {
            Self::Beta(minor) | Self::Alpha(minor) => *minor,
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use rstest_reuse::*;

    use super::*;

    #[template]
    #[rstest]
    #[case(Level::Beta(Some(1)), Level::Alpha(Some(1)), Ordering::Greater)]
    #[case(Level::Alpha(Some(1)), Level::Beta(Some(1)), Ordering::Less)]
    #[case(Level::Beta(None), Level::Alpha(Some(42)), Ordering::Greater)]
    #[case(Level::Alpha(Some(2)), Level::Alpha(Some(1)), Ordering::Greater)]
    #[case(Level::Alpha(Some(2)), Level::Alpha(Some(2)), Ordering::Equal)]
    #[case(Level::Alpha(Some(1)), Level::Alpha(Some(2)), Ordering::Less)]
    #[case(Level::Alpha(None), Level::Alpha(Some(0)), Ordering::Less)]
    #[case(Level::Alpha(None), Level::Alpha(None), Ordering::Equal)]
    #[case(Level::Beta(Some(2)), Level::Beta(Some(1)), Ordering::Greater)]
    #[case(Level::Beta(Some(42)), Level::Beta(None), Ordering::Greater)]
    #[case(Level::Beta(Some(1)), Level::Beta(Some(2)), Ordering::Less)]
    fn ord_cases(#[case] input: Level, #[case] other: Level, #[case] expected: Ordering) {}

    #[apply(ord_cases)]
    fn ord(input: Level, other: Level, expected: Ordering) {
        assert_eq!(input.cmp(&other), expected)
    }

    #[apply(ord_cases)]
    fn partial_ord(input: Level, other: Level, expected: Ordering) {
        assert_eq!(input.partial_cmp(&other), Some(expected))
    }

    #[rstest]
    #[case("alpha", Level::Alpha(None))]
    #[case("alpha12", Level::Alpha(Some(12)))]
    #[case("beta", Level::Beta(None))]
    #[case("beta1", Level::Beta(Some(1)))]
    fn valid_level(#[case] input: &str, #[case] expected: Level) {
        let level = Level::from_str(input).expect("valid level");
        assert_eq!(level, expected);
        assert_eq!(level.to_string(), input);
    }

    #[rstest]
    #[case("gamma1", ParseLevelError::UnknownQualifier { qualifier: "gamma".into() })]
    #[case("Beta1", ParseLevelError::InvalidFormat)]
    #[case("1", ParseLevelError::InvalidFormat)]
    #[case("", ParseLevelError::InvalidFormat)]
    fn invalid_level(#[case] input: &str, #[case] error: ParseLevelError) {
        let err = Level::from_str(input).expect_err("invalid level");
        assert_eq!(err, error)
    }

    #[test]
    fn minor_overflow() {
        let err = Level::from_str("beta99999999999999999999").expect_err("minor overflows u64");
        assert!(matches!(err, ParseLevelError::ParseMinor { .. }));
    }
}
