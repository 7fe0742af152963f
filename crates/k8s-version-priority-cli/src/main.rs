use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};
use k8s_version_priority::{by_priority, highest_priority};
use snafu::{OptionExt, ResultExt, Snafu};

use crate::logging::{ConsoleLogSettings, LogOptions};

mod crd;
mod logging;

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to initialize logging"))]
    InitLogging { source: logging::Error },

    #[snafu(display("failed to determine the version with the highest priority"))]
    NoVersion,

    #[snafu(display("failed to pick preferred CRD versions"))]
    Crd { source: crd::Error },

    #[snafu(display("failed to write to stdout"))]
    WriteStdout { source: std::io::Error },
}

/// Picks the preferred version among Kubernetes API versions, following the
/// Kubernetes version priority rules.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    logging: LogOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Print the version with the highest priority.
    Versions {
        /// Print all versions, highest priority first.
        #[arg(long)]
        sorted: bool,

        #[arg(required = true, value_name = "VERSION")]
        versions: Vec<String>,
    },

    /// Print the preferred version of each CustomResourceDefinition in a YAML
    /// file, use `-` to read from stdin.
    Crd { file: PathBuf },
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    ConsoleLogSettings::from(&cli.logging)
        .init()
        .context(InitLoggingSnafu)?;

    run(&cli.command, &mut std::io::stdout().lock())
}

fn run(command: &Command, out: &mut impl Write) -> Result<(), Error> {
    match command {
        Command::Versions {
            sorted: true,
            versions,
        } => {
            for version in by_priority(versions) {
                writeln!(out, "{version}").context(WriteStdoutSnafu)?;
            }
        }
        Command::Versions {
            sorted: false,
            versions,
        } => {
            let version = highest_priority(versions).context(NoVersionSnafu)?;
            writeln!(out, "{version}").context(WriteStdoutSnafu)?;
        }
        Command::Crd { file } => {
            let definitions = crd::read_definitions(file).context(CrdSnafu)?;
            for context in crd::contexts(&definitions).context(CrdSnafu)? {
                writeln!(
                    out,
                    "{name}\t{api_version}",
                    name = context.name,
                    api_version = context.api_version()
                )
                .context(WriteStdoutSnafu)?;
            }
        }
    }

    Ok(())
}
