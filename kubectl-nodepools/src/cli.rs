use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use super::*;

/// Read-only interaction with nodepools.
///
/// List node pools/groups in the current cluster, alongside a count of
/// how many nodes there are in each pool/group and their type.
///
/// You can also list nodes for a given node pool/group by name.
#[derive(Debug, Parser)]
#[command(name = "kubectl-nodepools", version)]
pub(crate) struct Cli {
    /// Don't print headers (default print headers)
    #[arg(long, global = true)]
    pub(crate) no_headers: bool,

    /// Output format. One of: name, json
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub(crate) output: Option<String>,

    /// Label to group nodes into pools with
    #[arg(
        short,
        long,
        global = true,
        value_name = "KEY",
        default_value = "",
        hide_default_value = true,
        env = "KUBECTL_NODEPOOLS_LABEL"
    )]
    pub(crate) label: String,

    /// Show how many nodes of each instance type a pool has
    #[arg(long, global = true)]
    pub(crate) type_counts: bool,

    /// The name of the kubeconfig context to use
    #[arg(long, global = true)]
    pub(crate) context: Option<String>,

    /// Path to the kubeconfig file to use
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) kubeconfig: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        default_value = "warn",
        env = "KUBECTL_NODEPOOLS_LOG_LEVEL"
    )]
    pub(crate) log_level: String,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List node pools/groups in current cluster
    ///
    /// List node pools/groups in the current cluster, alongside a count of nodes and their type.
    #[command(visible_alias = "ls")]
    List,

    /// List nodes in node pool/group
    ///
    /// List nodes in the given node pool/group, alongside their status.
    #[command(visible_alias = "ns")]
    Nodes {
        /// Node pool name, as shown by `list`
        #[arg(value_name = "NAME")]
        name: String,
    },
}

impl Cli {
    pub(crate) fn render_options(&self) -> Result<render::Options, Error> {
        let format = match self.output.as_deref() {
            None | Some("") => render::Format::Table,
            Some("name") => render::Format::Name,
            Some("json") => render::Format::Json,
            Some(other) => return Err(Error::UnrecognizedOutput(other.to_string())),
        };
        let type_listing = if self.type_counts {
            nodepools::TypeListing::Counted
        } else {
            nodepools::TypeListing::Plain
        };
        Ok(render::Options {
            headers: !self.no_headers,
            format,
            type_listing,
        })
    }
}
