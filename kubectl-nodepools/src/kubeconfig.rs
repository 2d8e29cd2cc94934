use std::path::Path;

use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;

use super::*;

/// Resolves the client configuration the way kubectl does.
///
/// An explicit `--kubeconfig` file or `--context` is read from kubeconfig,
/// otherwise `KUBECONFIG`, `~/.kube/config` and the in-cluster environment are tried.
pub(crate) async fn resolve(
    kubeconfig: Option<&Path>,
    context: Option<&str>,
) -> Result<kube::Config, Error> {
    let options = KubeConfigOptions {
        context: context.map(ToString::to_string),
        ..KubeConfigOptions::default()
    };

    let config = match (kubeconfig, context) {
        (Some(path), _) => {
            tracing::debug!(path = %path.display(), ?context, "Reading kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        (None, Some(context)) => {
            tracing::debug!(context, "Using kubeconfig context");
            kube::Config::from_kubeconfig(&options).await?
        }
        (None, None) => kube::Config::infer().await?,
    };

    tracing::debug!(cluster_url = %config.cluster_url, "Resolved cluster");
    Ok(config)
}
