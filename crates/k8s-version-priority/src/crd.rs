//! Helpers to pick the preferred version of a `CustomResourceDefinition` and
//! to match resources against its spec.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionSpec,
};
use snafu::{OptionExt, Snafu};

use crate::highest_priority;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("CustomResourceDefinition has no name"))]
    MissingName,

    #[snafu(display("failed to determine the preferred version of {group}/{kind}"))]
    NoPreferredVersion { group: String, kind: String },
}

/// Returns the name of the version with the highest priority among the
/// versions of `spec`, or [`None`] if it lists no versions.
pub fn preferred_version(spec: &CustomResourceDefinitionSpec) -> Option<&str> {
    let version = highest_priority(spec.versions.iter().map(|version| version.name.as_str()));

    if version.is_none() {
        tracing::warn!(
            group = %spec.group,
            kind = %spec.names.kind,
            "could not find version with highest priority"
        );
    }

    version
}

/// Joins `group` and `version` into an API version, for example
/// `apps/v1`. Resources of the core group only use the version.
pub fn api_version(group: &str, version: &str) -> String {
    if group.is_empty() {
        version.to_owned()
    } else {
        format!("{group}/{version}")
    }
}

/// Splits an API version like `apps/v1` into its group and version. A bare
/// version like `v1` belongs to the core group, which has no name.
pub fn api_group_and_version(api_version: &str) -> (Option<&str>, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (Some(group), version),
        None => (None, api_version),
    }
}

/// Returns `true` if resources with the given `kind`, `group` and `version`
/// are defined by `definition`, i.e. the kind and group match and the version
/// is one of the versions it lists.
///
/// A `group` of [`None`] stands for the core group.
pub fn is_matching_spec(
    kind: &str,
    group: Option<&str>,
    version: &str,
    definition: &CustomResourceDefinition,
) -> bool {
    let spec = &definition.spec;

    spec.names.kind == kind
        && spec.group == group.unwrap_or_default()
        && spec.versions.iter().any(|candidate| candidate.name == version)
}

/// Everything needed to address resources of a custom resource kind, using
/// the preferred version of its definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomResourceContext {
    pub group: String,
    pub version: String,
    pub scope: String,
    pub name: String,
    pub plural: String,
    pub kind: String,
}

impl CustomResourceContext {
    pub fn from_definition(definition: &CustomResourceDefinition) -> Result<Self> {
        let spec = &definition.spec;
        let name = definition.metadata.name.clone().context(MissingNameSnafu)?;
        let version = preferred_version(spec).context(NoPreferredVersionSnafu {
            group: &spec.group,
            kind: &spec.names.kind,
        })?;

        Ok(Self {
            group: spec.group.clone(),
            version: version.to_owned(),
            scope: spec.scope.clone(),
            name,
            plural: spec.names.plural.clone(),
            kind: spec.names.kind.clone(),
        })
    }

    pub fn api_version(&self) -> String {
        api_version(&self.group, &self.version)
    }

    pub fn is_namespaced(&self) -> bool {
        self.scope == "Namespaced"
    }
}

impl TryFrom<&CustomResourceDefinition> for CustomResourceContext {
    type Error = Error;

    fn try_from(definition: &CustomResourceDefinition) -> Result<Self> {
        Self::from_definition(definition)
    }
}
