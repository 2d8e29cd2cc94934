use std::fmt::Debug;

use k8s_nodepools_ext as k8s;
use kube::api;

use k8s::corev1;
use k8s::nodepools::NodeRecord;
use k8s::NodeExt as _;

pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi from a resolved client configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = kube::Config::infer().await?;
    /// let api = k8s_nodepools_kubeapi::KubeApi::from_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: kube::Config) -> kube::Result<Self> {
        kube::Client::try_from(config).map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// Nodes are listed with default `ListParams`: one request, no label selector.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// Lists all Nodes in the cluster.
    ///
    /// A failing request is returned unchanged, there are no retries.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use k8s_nodepools_kubeapi::KubeApi;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = kube::Config::infer().await?;
    /// let api = KubeApi::from_config(config)?;
    /// let nodes = api.list_nodes().await?;
    /// println!("discovered {} nodes", nodes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_nodes(&self) -> kube::Result<Vec<corev1::Node>> {
        let lp = self.list_params();
        let nodes = self.nodes().list(lp).await.map(|list| list.items)?;
        tracing::debug!(count = nodes.len(), "Listed nodes");
        Ok(nodes)
    }

    /// Lists all Nodes and flattens them into `NodeRecord`s for classification.
    ///
    pub async fn node_records(&self) -> kube::Result<Vec<NodeRecord>> {
        self.list_nodes()
            .await
            .map(|nodes| nodes.iter().map(corev1::Node::to_record).collect())
    }

    fn nodes(&self) -> api::Api<corev1::Node> {
        api::Api::all(self.client.clone())
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing `list_params` while redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
