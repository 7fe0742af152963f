use std::{cmp::Ordering, convert::Infallible, fmt::Display, str::FromStr};

use crate::{KubernetesVersion, NonKubernetesVersion};

#[cfg(feature = "serde")]
mod serde;

/// A version string as advertised for a resource, classified as either a
/// [`KubernetesVersion`] or a [`NonKubernetesVersion`].
///
/// Versions are totally ordered by priority: greater means preferred. Every
/// Kubernetes version ranks above every non-Kubernetes version.
///
/// ```
/// use k8s_version_priority::Version;
///
/// let versions = ["v1beta1", "v1", "foo1"].map(Version::parse);
/// assert_eq!(versions.iter().max().map(Version::full), Some("v1"));
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Version {
    Kubernetes(KubernetesVersion),
    NonKubernetes(NonKubernetesVersion),
}

impl Version {
    /// Classifies `input`. This never fails: anything which isn't a valid
    /// [`KubernetesVersion`] becomes a [`NonKubernetesVersion`].
    pub fn parse(input: &str) -> Self {
        match KubernetesVersion::from_str(input) {
            Ok(version) => Self::Kubernetes(version),
            Err(error) => {
                tracing::trace!(input, %error, "treating version as non-Kubernetes version");
                Self::NonKubernetes(NonKubernetesVersion::new(input))
            }
        }
    }

    pub fn is_kubernetes(&self) -> bool {
        matches!(self, Self::Kubernetes(_))
    }

    /// The original input this version was created from.
    pub fn full(&self) -> &str {
        match self {
            Self::Kubernetes(version) => version.full(),
            Self::NonKubernetes(version) => version.raw(),
        }
    }

    /// Compares the rank of both versions, ignoring how they are spelled.
    ///
    /// [`Ord`] additionally orders versions of equal rank by their literal
    /// (`v1` and `v01`), so it agrees with [`Eq`]. Use this comparison to pick
    /// between versions without preferring one spelling over another.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Kubernetes(lhs), Self::Kubernetes(rhs)) => lhs.cmp_priority(rhs),
            (Self::NonKubernetes(lhs), Self::NonKubernetes(rhs)) => lhs.cmp_priority(rhs),
            (Self::Kubernetes(_), Self::NonKubernetes(_)) => Ordering::Greater,
            (Self::NonKubernetes(_), Self::Kubernetes(_)) => Ordering::Less,
        }
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

impl From<&str> for Version {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for Version {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<KubernetesVersion> for Version {
    fn from(version: KubernetesVersion) -> Self {
        Self::Kubernetes(version)
    }
}

impl From<NonKubernetesVersion> for Version {
    fn from(version: NonKubernetesVersion) -> Self {
        Self::NonKubernetes(version)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Kubernetes(lhs), Self::Kubernetes(rhs)) => lhs.cmp(rhs),
            (Self::NonKubernetes(lhs), Self::NonKubernetes(rhs)) => lhs.cmp(rhs),
            (Self::Kubernetes(_), Self::NonKubernetes(_)) => Ordering::Greater,
            (Self::NonKubernetes(_), Self::Kubernetes(_)) => Ordering::Less,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.full())
    }
}
