use std::{
    io::Read,
    path::{Path, PathBuf},
};

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_version_priority::crd::{self, CustomResourceContext};
use serde::Deserialize;
use snafu::{ResultExt, Snafu};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read CRDs from {}", path.display()))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to read CRDs from stdin"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("failed to deserialize CustomResourceDefinition"))]
    DeserializeDefinition { source: serde_yaml::Error },

    #[snafu(display("failed to create context for CustomResourceDefinition"))]
    CreateContext { source: crd::Error },
}

/// Reads all YAML documents at `path`, or stdin if `path` is `-`.
pub fn read_definitions(path: &Path) -> Result<Vec<CustomResourceDefinition>> {
    let input = if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context(ReadStdinSnafu)?;
        input
    } else {
        std::fs::read_to_string(path).context(ReadFileSnafu { path })?
    };

    parse_definitions(&input)
}

/// Deserializes every YAML document of `input`. Empty documents, for example
/// behind a trailing `---`, are skipped.
pub fn parse_definitions(input: &str) -> Result<Vec<CustomResourceDefinition>> {
    let mut definitions = Vec::new();

    for document in serde_yaml::Deserializer::from_str(input) {
        let value = serde_yaml::Value::deserialize(document).context(DeserializeDefinitionSnafu)?;
        if value.is_null() {
            tracing::trace!("skipping empty YAML document");
            continue;
        }

        definitions.push(serde_yaml::from_value(value).context(DeserializeDefinitionSnafu)?);
    }

    Ok(definitions)
}

pub fn contexts(definitions: &[CustomResourceDefinition]) -> Result<Vec<CustomResourceContext>> {
    definitions
        .iter()
        .map(|definition| {
            let context = CustomResourceContext::from_definition(definition)
                .context(CreateContextSnafu)?;

            tracing::debug!(
                name = %context.name,
                api_version = %context.api_version(),
                "picked preferred version"
            );
            Ok(context)
        })
        .collect()
}
