use std::{cmp::Ordering, fmt};

/// Any version string which doesn't follow the Kubernetes API version format,
/// for example `skywalker1`, `v1gamma` or `vbeta`.
///
/// The raw string is split into a prefix and an optional numeric suffix, the
/// trailing run of ASCII digits. The prefix is everything in front of that
/// suffix, digits included: `a1b2` splits into `a1b` and `2`, while `v1gamma`
/// has no suffix at all. Ordering is inverted on every component:
///
/// - prefixes compare reverse-alphabetically (`a` ranks above `b`),
/// - for equal prefixes, a missing suffix ranks above any suffix,
/// - and a smaller suffix ranks above a larger one (`foo1` above `foo10`).
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct NonKubernetesVersion {
    raw: String,
}

impl NonKubernetesVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Everything in front of the numeric suffix.
    pub fn prefix(&self) -> &str {
        self.raw.trim_end_matches(|c: char| c.is_ascii_digit())
    }

    /// The trailing ASCII digits, if any.
    pub fn suffix(&self) -> Option<&str> {
        let suffix = &self.raw[self.prefix().len()..];
        (!suffix.is_empty()).then_some(suffix)
    }

    /// Compares the rank of both versions by prefix and numeric suffix.
    ///
    /// In contrast to [`Ord`], versions with numerically equal suffixes, like
    /// `foo1` and `foo01`, compare as [`Ordering::Equal`].
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        let (prefix, suffix) = self.sort_key();
        let (other_prefix, other_suffix) = other.sort_key();

        // Every component is compared other-to-self, i.e. descending.
        other_prefix
            .cmp(prefix)
            .then_with(|| match (suffix, other_suffix) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
            })
    }

    fn sort_key(&self) -> (&str, Option<NumericSuffix<'_>>) {
        (self.prefix(), self.suffix().map(NumericSuffix))
    }
}

impl PartialOrd for NonKubernetesVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NonKubernetesVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_priority(other).then_with(|| other.raw.cmp(&self.raw))
    }
}

impl fmt::Display for NonKubernetesVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A run of ASCII digits, compared by numeric value without parsing it into
/// a fixed-width integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NumericSuffix<'a>(&'a str);

impl NumericSuffix<'_> {
    fn significant_digits(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl PartialOrd for NumericSuffix<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericSuffix<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.significant_digits(), other.significant_digits());
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }
}
