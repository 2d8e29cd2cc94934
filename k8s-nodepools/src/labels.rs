//! Well-known node labels consulted during classification.

use constcat::concat;

/// Pool identity (and instance type) of a node nothing could be said about.
pub const UNKNOWN: &str = "-";

/// Label domain shared by all Karpenter well-known labels.
pub const KARPENTER_DOMAIN: &str = "karpenter.sh";

/// Provisioner label set by Karpenter `v1alpha5`.
pub const KARPENTER_PROVISIONER_NAME: &str = concat!(KARPENTER_DOMAIN, "/provisioner-name");

/// NodePool label set by Karpenter `v1beta1` and later.
pub const KARPENTER_NODEPOOL: &str = concat!(KARPENTER_DOMAIN, "/nodepool");

/// Karpenter labels in priority order, legacy first.
pub const KARPENTER_LABELS: [&str; 2] = [KARPENTER_PROVISIONER_NAME, KARPENTER_NODEPOOL];

/// Prepended to the label value of Karpenter-managed pools.
pub const KARPENTER_DISPLAY_PREFIX: &str = "(Karpenter) ";

pub const EKS_NODEGROUP: &str = "eks.amazonaws.com/nodegroup";
pub const GKE_NODEPOOL: &str = "cloud.google.com/gke-nodepool";
pub const AKS_AGENTPOOL: &str = "kubernetes.azure.com/agentpool";
pub const DOKS_NODE_POOL_ID: &str = "doks.digitalocean.com/node-pool-id";

/// Cloud provider node group labels in the order they are checked.
///
/// A node is expected to carry at most one of these. When it carries several,
/// the first one in this list wins.
pub const PROVIDER_NODEPOOL_LABELS: [&str; 4] = [
    EKS_NODEGROUP,
    GKE_NODEPOOL,
    AKS_AGENTPOOL,
    DOKS_NODE_POOL_ID,
];

pub const INSTANCE_TYPE: &str = "node.kubernetes.io/instance-type";
pub const INSTANCE_TYPE_BETA: &str = "beta.kubernetes.io/instance-type";

/// Instance type labels in priority order.
pub const INSTANCE_TYPE_LABELS: [&str; 2] = [INSTANCE_TYPE, INSTANCE_TYPE_BETA];
