//! This library parses and orders Kubernetes API versions, in order to pick
//! the preferred one among several versions advertised for the same resource
//! kind, for example by a `CustomResourceDefinition`.
//!
//! Kubernetes versions follow the `v<MAJOR>(alpha|beta(<MINOR>))` format, like
//! `v1`, `v2beta3` or `v10alpha`. Any other string is accepted too and
//! classified as a [`NonKubernetesVersion`], so parsing never fails.
//!
//! ## Usage
//!
//! ```
//! use k8s_version_priority::{Version, highest_priority};
//!
//! let preferred = highest_priority(["v1beta1", "v1", "v2alpha1", "foo1"]);
//! assert_eq!(preferred, Some("v1"));
//!
//! // Individual versions can be classified and compared directly.
//! let ga = Version::parse("v42");
//! let beta = Version::parse("v42beta42");
//! assert!(ga > beta);
//! ```
//!
//! The ordering follows the [Kubernetes version priority][1] rules:
//!
//! - Kubernetes versions rank above all other versions.
//! - GA ranks above beta, which ranks above alpha, regardless of the major
//!   version: `v1` ranks above `v12alpha1`.
//! - Of two equal qualifiers, a larger major version ranks higher.
//! - Then a larger minor version ranks higher and a missing minor version
//!   ranks lowest.
//! - Other versions are sorted alphabetically by their prefix, then by
//!   their numeric suffix, smallest first.
//!
//! [1]: https://kubernetes.io/docs/tasks/extend-kubernetes/custom-resources/custom-resource-definition-versioning/#version-priority

// NOTE (@Techassi): Fixed in https://github.com/la10736/rstest/pull/244 but not
// yet released.
#[cfg(test)]
use rstest_reuse::{self};

pub mod crd;

mod kubernetes_version;
mod level;
mod non_kubernetes_version;
mod priority;
mod version;

pub use kubernetes_version::*;
pub use level::*;
pub use non_kubernetes_version::*;
pub use priority::*;
pub use version::*;
