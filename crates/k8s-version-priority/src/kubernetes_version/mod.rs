use std::{cmp::Ordering, fmt::Display, num::ParseIntError, str::FromStr, sync::LazyLock};

use regex::Regex;
use snafu::{OptionExt, ResultExt, Snafu};

use crate::{Level, ParseLevelError, Qualifier};

#[cfg(feature = "serde")]
mod serde;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(?P<major>\d+)(?P<level>[a-z]+\d*)?$").expect("failed to compile version regex")
});

/// Error variants which can be encountered when creating a new
/// [`KubernetesVersion`] from unparsed input.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseKubernetesVersionError {
    #[snafu(display(
        "invalid version format, expected v<MAJOR>, v<MAJOR>alpha(<MINOR>) or v<MAJOR>beta(<MINOR>)"
    ))]
    InvalidFormat,

    #[snafu(display("failed to parse major version"))]
    ParseMajor { source: ParseIntError },

    #[snafu(display("failed to parse version level"))]
    ParseLevel { source: ParseLevelError },
}

/// A Kubernetes API version, following the `v<MAJOR>(alpha|beta(<MINOR>))`
/// format, for example `v1`, `v2beta3` or `v10alpha`.
///
/// A trailing number is only read as the minor version if it follows a
/// qualifier: `v422` is the stable major version 422.
///
/// The original input is kept, so [`Display`] reproduces it exactly, even for
/// inputs with leading zeros like `v01`.
///
/// ### See
///
/// - <https://kubernetes.io/docs/reference/using-api/#api-versioning>
/// - <https://kubernetes.io/docs/tasks/extend-kubernetes/custom-resources/custom-resource-definition-versioning/#version-priority>
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct KubernetesVersion {
    major: u64,
    level: Option<Level>,
    full: String,
}

impl FromStr for KubernetesVersion {
    type Err = ParseKubernetesVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let captures = VERSION_REGEX.captures(input).context(InvalidFormatSnafu)?;

        let major = captures
            .name("major")
            .context(InvalidFormatSnafu)?
            .as_str()
            .parse::<u64>()
            .context(ParseMajorSnafu)?;

        let level = captures
            .name("level")
            .map(|level| Level::from_str(level.as_str()))
            .transpose()
            .context(ParseLevelSnafu)?;

        Ok(Self {
            major,
            level,
            full: input.to_owned(),
        })
    }
}

impl PartialOrd for KubernetesVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KubernetesVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Only differently spelled versions of equal rank (v1 vs v01) need the
        // literal.
        self.cmp_priority(other).then_with(|| other.full.cmp(&self.full))
    }
}

impl Display for KubernetesVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl KubernetesVersion {
    pub fn new(major: u64, level: Option<Level>) -> Self {
        let full = match &level {
            Some(level) => format!("v{major}{level}"),
            None => format!("v{major}"),
        };

        Self { major, level, full }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn qualifier(&self) -> Option<Qualifier> {
        self.level.as_ref().map(Level::qualifier)
    }

    pub fn minor(&self) -> Option<u64> {
        self.level.as_ref().and_then(Level::minor)
    }

    /// Returns `true` for general availability versions, which carry no
    /// qualifier.
    pub fn is_stable(&self) -> bool {
        self.level.is_none()
    }

    /// The original input this version was parsed from.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Compares the rank of both versions: maturity first, then the major and
    /// finally the minor version.
    ///
    /// In contrast to [`Ord`], differently spelled versions of the same rank,
    /// like `v1` and `v01`, compare as [`Ordering::Equal`].
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.stability()
            .cmp(&other.stability())
            .then_with(|| self.major.cmp(&other.major))
            .then_with(|| self.minor().cmp(&other.minor()))
    }

    /// Ranks GA above beta above alpha.
    fn stability(&self) -> u8 {
        match self.qualifier() {
            None => 2,
            Some(Qualifier::Beta) => 1,
            Some(Qualifier::Alpha) => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use rstest_reuse::{apply, template};

    use super::*;

    #[template]
    #[rstest]
    #[case(KubernetesVersion::new(84, None), KubernetesVersion::new(42, None), Ordering::Greater)]
    #[case(KubernetesVersion::new(10, None), KubernetesVersion::new(2, None), Ordering::Greater)]
    #[case(KubernetesVersion::new(42, None), KubernetesVersion::new(42, None), Ordering::Equal)]
    #[case(KubernetesVersion::new(42, None), KubernetesVersion::new(42, Some(Level::Beta(None))), Ordering::Greater)]
    #[case(KubernetesVersion::new(42, Some(Level::Alpha(None))), KubernetesVersion::new(42, Some(Level::Beta(None))), Ordering::Less)]
    #[case(KubernetesVersion::new(1, Some(Level::Beta(Some(1)))), KubernetesVersion::new(1, Some(Level::Alpha(Some(1)))), Ordering::Greater)]
    #[case(KubernetesVersion::new(1, Some(Level::Beta(Some(1)))), KubernetesVersion::new(1, Some(Level::Beta(Some(1)))), Ordering::Equal)]
    #[case(KubernetesVersion::new(42, Some(Level::Alpha(Some(84)))), KubernetesVersion::new(42, Some(Level::Alpha(Some(42)))), Ordering::Greater)]
    #[case(KubernetesVersion::new(42, Some(Level::Alpha(None))), KubernetesVersion::new(42, Some(Level::Alpha(Some(42)))), Ordering::Less)]
    #[case(KubernetesVersion::new(12, Some(Level::Alpha(Some(1)))), KubernetesVersion::new(3, Some(Level::Beta(Some(1)))), Ordering::Less)]
    #[case(KubernetesVersion::new(11, Some(Level::Beta(Some(2)))), KubernetesVersion::new(10, Some(Level::Beta(Some(3)))), Ordering::Greater)]
    #[case(KubernetesVersion::new(1, None), KubernetesVersion::new(12, Some(Level::Alpha(Some(1)))), Ordering::Greater)]
    #[case(KubernetesVersion::new(1, None), KubernetesVersion::new(2, Some(Level::Beta(None))), Ordering::Greater)]
    fn ord_cases(
        #[case] input: KubernetesVersion,
        #[case] other: KubernetesVersion,
        #[case] expected: Ordering,
    ) {
    }

    #[rstest]
    #[case("v1alpha12", KubernetesVersion::new(1, Some(Level::Alpha(Some(12)))))]
    #[case("v1alpha", KubernetesVersion::new(1, Some(Level::Alpha(None))))]
    #[case("v1beta1", KubernetesVersion::new(1, Some(Level::Beta(Some(1)))))]
    #[case("v42beta42", KubernetesVersion::new(42, Some(Level::Beta(Some(42)))))]
    #[case("v422", KubernetesVersion::new(422, None))]
    #[case("v0", KubernetesVersion::new(0, None))]
    #[case("v1", KubernetesVersion::new(1, None))]
    fn valid_version(#[case] input: &str, #[case] expected: KubernetesVersion) {
        let version = KubernetesVersion::from_str(input).expect("valid Kubernetes version");
        assert_eq!(version, expected);
        assert_eq!(version.to_string(), input);
    }

    #[rstest]
    #[case("v1gamma", ParseKubernetesVersionError::ParseLevel { source: ParseLevelError::UnknownQualifier { qualifier: "gamma".into() } })]
    #[case("v1gamma12", ParseKubernetesVersionError::ParseLevel { source: ParseLevelError::UnknownQualifier { qualifier: "gamma".into() } })]
    #[case("vbeta", ParseKubernetesVersionError::InvalidFormat)]
    #[case("v1bet√§1", ParseKubernetesVersionError::InvalidFormat)]
    #[case("v1Beta1", ParseKubernetesVersionError::InvalidFormat)]
    #[case("1beta1", ParseKubernetesVersionError::InvalidFormat)]
    #[case("v1beta1-rc", ParseKubernetesVersionError::InvalidFormat)]
    #[case("v", ParseKubernetesVersionError::InvalidFormat)]
    #[case("", ParseKubernetesVersionError::InvalidFormat)]
    fn invalid_version(#[case] input: &str, #[case] error: ParseKubernetesVersionError) {
        let err = KubernetesVersion::from_str(input).expect_err("invalid Kubernetes version");
        assert_eq!(err, error)
    }

    #[test]
    fn major_overflow() {
        let err = KubernetesVersion::from_str("v99999999999999999999")
            .expect_err("major overflows u64");
        assert!(matches!(err, ParseKubernetesVersionError::ParseMajor { .. }));
    }

    #[rstest]
    #[case("v1", true)]
    #[case("v42alpha", false)]
    #[case("v42beta1", false)]
    fn is_stable(#[case] input: &str, #[case] expected: bool) {
        let version = KubernetesVersion::from_str(input).expect("valid Kubernetes version");
        assert_eq!(version.is_stable(), expected);
    }

    #[test]
    fn accessors() {
        let version = KubernetesVersion::from_str("v422beta442").expect("valid Kubernetes version");
        assert_eq!(version.major(), 422);
        assert_eq!(version.qualifier(), Some(Qualifier::Beta));
        assert_eq!(version.minor(), Some(442));

        let version = KubernetesVersion::from_str("v422").expect("valid Kubernetes version");
        assert_eq!(version.qualifier(), None);
        assert_eq!(version.minor(), None);
    }

    #[test]
    fn leading_zeros_keep_input() {
        let version = KubernetesVersion::from_str("v01").expect("valid Kubernetes version");
        assert_eq!(version.major(), 1);
        assert_eq!(version.to_string(), "v01");
        assert_ne!(version, KubernetesVersion::new(1, None));
    }

    #[rstest]
    #[case("v1", "v01")]
    #[case("v2alpha1", "v2alpha01")]
    #[case("v007beta3", "v7beta03")]
    fn equal_priority_different_spelling(#[case] input: &str, #[case] other: &str) {
        let input = KubernetesVersion::from_str(input).expect("valid Kubernetes version");
        let other = KubernetesVersion::from_str(other).expect("valid Kubernetes version");

        assert_eq!(input.cmp_priority(&other), Ordering::Equal);
        assert_ne!(input.cmp(&other), Ordering::Equal);
    }

    #[apply(ord_cases)]
    fn ord(input: KubernetesVersion, other: KubernetesVersion, expected: Ordering) {
        assert_eq!(input.cmp(&other), expected)
    }

    #[apply(ord_cases)]
    fn partial_ord(input: KubernetesVersion, other: KubernetesVersion, expected: Ordering) {
        assert_eq!(input.partial_cmp(&other), Some(expected))
    }
}
