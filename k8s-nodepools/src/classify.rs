use super::*;

/// Computes the pool identity of `node`.
///
/// The first matching source wins:
///
/// 1. `custom_label`, when non-empty and present on the node, verbatim
/// 2. Karpenter provisioner/nodepool labels, shown as `(Karpenter) <value>`
/// 3. cloud provider node group labels, in [`labels::PROVIDER_NODEPOOL_LABELS`] order
/// 4. [`labels::UNKNOWN`]
///
/// # Examples
///
/// ```
/// use k8s_nodepools::{classify, NodeRecord};
///
/// let node = NodeRecord::new("node-1").label("karpenter.sh/nodepool", "spot");
/// assert_eq!(classify(&node, ""), "(Karpenter) spot");
/// ```
pub fn classify(node: &NodeRecord, custom_label: &str) -> String {
    if !custom_label.is_empty() {
        if let Some(pool) = node.get_label(custom_label) {
            return pool.to_string();
        }
    }

    if let Some(pool) = first_label(node, &labels::KARPENTER_LABELS) {
        return karpenter_display(pool);
    }

    first_label(node, &labels::PROVIDER_NODEPOOL_LABELS)
        .unwrap_or(labels::UNKNOWN)
        .to_string()
}

/// Instance type of `node`, or [`labels::UNKNOWN`] when it is not labelled with one.
///
pub fn instance_type(node: &NodeRecord) -> &str {
    first_label(node, &labels::INSTANCE_TYPE_LABELS).unwrap_or(labels::UNKNOWN)
}

/// Display name of a Karpenter pool, `(Karpenter) <pool>`.
pub fn karpenter_display(pool: &str) -> String {
    format!("{}{pool}", labels::KARPENTER_DISPLAY_PREFIX)
}

/// Reverses [`karpenter_display`]; any other name is returned unchanged.
///
pub fn strip_karpenter_prefix(pool: &str) -> &str {
    pool.strip_prefix(labels::KARPENTER_DISPLAY_PREFIX)
        .unwrap_or(pool)
}

fn first_label<'a>(node: &'a NodeRecord, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| node.get_label(key))
}
