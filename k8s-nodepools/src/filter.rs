use super::*;

/// One member of a requested pool together with its condition summary
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub name: String,
    /// every true condition, comma separated, e.g. `Ready,DiskPressure`
    ///
    pub status: String,
}

/// Members of one pool, sorted by node name
///
pub type NodeFilterResult = Vec<NodeStatus>;

impl NodeStatus {
    pub fn new(node: &NodeRecord) -> Self {
        let name = node.name.clone();
        let status = status_summary(node);
        Self { name, status }
    }
}

/// Selects the nodes whose pool identity is `requested`.
///
/// Both sides are compared with the `(Karpenter) ` display prefix removed, so
/// a Karpenter pool is found by its bare label value as well as by the name
/// [`aggregate`] reports for it. Otherwise names must be equal.
///
pub fn filter_by_pool<'a>(
    nodes: impl IntoIterator<Item = &'a NodeRecord>,
    custom_label: &str,
    requested: &str,
) -> NodeFilterResult {
    let requested = strip_karpenter_prefix(requested);

    let mut members = nodes
        .into_iter()
        .filter(|node| strip_karpenter_prefix(&classify(node, custom_label)) == requested)
        .map(NodeStatus::new)
        .collect::<NodeFilterResult>();
    members.sort_by(|a, b| a.name.cmp(&b.name));
    members
}

/// Types of all true conditions of `node` in their original order, joined with `,`
///
pub fn status_summary(node: &NodeRecord) -> String {
    node.conditions
        .iter()
        .filter(|condition| condition.is_true)
        .map(|condition| condition.type_.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(result: &NodeFilterResult) -> Vec<&str> {
        result.iter().map(|node| node.name.as_str()).collect()
    }

    #[test]
    fn status_basic() {
        let node = NodeRecord::new("node").condition("Ready", true);
        assert_eq!(status_summary(&node), "Ready");
    }

    #[test]
    fn status_keeps_condition_order() {
        let node = NodeRecord::new("node")
            .condition("Ready", true)
            .condition("DiskPressure", false)
            .condition("MemoryPressure", true);
        assert_eq!(status_summary(&node), "Ready,MemoryPressure");

        let node = NodeRecord::new("node")
            .condition("PIDPressure", true)
            .condition("Ready", true);
        assert_eq!(status_summary(&node), "PIDPressure,Ready");
    }

    #[test]
    fn status_nothing_true() {
        let node = NodeRecord::new("node").condition("Ready", false);
        assert_eq!(status_summary(&node), "");
        assert_eq!(status_summary(&NodeRecord::new("node")), "");
    }

    #[test]
    fn exact_match_sorted_by_name() {
        let nodes = [
            NodeRecord::new("node-b").label(labels::GKE_NODEPOOL, "pool"),
            NodeRecord::new("node-c").label(labels::GKE_NODEPOOL, "pool-2"),
            NodeRecord::new("Node-z").label(labels::GKE_NODEPOOL, "pool"),
            NodeRecord::new("node-a").label(labels::GKE_NODEPOOL, "pool"),
        ];
        let result = filter_by_pool(&nodes, "", "pool");

        assert_eq!(names(&result), ["Node-z", "node-a", "node-b"]);
    }

    #[test]
    fn no_prefix_matching_for_regular_pools() {
        let nodes = [NodeRecord::new("node").label(labels::GKE_NODEPOOL, "pool-1")];

        assert!(filter_by_pool(&nodes, "", "pool").is_empty());
        assert!(filter_by_pool(&nodes, "", "pool-10").is_empty());
        assert_eq!(filter_by_pool(&nodes, "", "(Karpenter) pool-1").len(), 1);
    }

    #[test]
    fn karpenter_by_either_name() {
        let nodes = [
            NodeRecord::new("node-1").label(labels::KARPENTER_NODEPOOL, "spot"),
            NodeRecord::new("node-2").label(labels::EKS_NODEGROUP, "spot-ng"),
        ];

        assert_eq!(names(&filter_by_pool(&nodes, "", "spot")), ["node-1"]);
        assert_eq!(
            names(&filter_by_pool(&nodes, "", "(Karpenter) spot")),
            ["node-1"]
        );
    }

    #[test]
    fn unclassified_nodes() {
        let nodes = [
            NodeRecord::new("node-1"),
            NodeRecord::new("node-2").label(labels::EKS_NODEGROUP, "ng-1"),
        ];

        assert_eq!(names(&filter_by_pool(&nodes, "", "-")), ["node-1"]);
    }

    #[test]
    fn custom_label_wins_over_provider() {
        let nodes = [
            NodeRecord::new("node-1")
                .label("team", "payments")
                .condition("Ready", true),
            NodeRecord::new("node-2")
                .label("team", "search")
                .label(labels::EKS_NODEGROUP, "payments"),
        ];
        let result = filter_by_pool(&nodes, "team", "payments");

        assert_eq!(
            result,
            [NodeStatus {
                name: "node-1".to_string(),
                status: "Ready".to_string(),
            }]
        );
    }

    #[test]
    fn custom_label_missing_falls_through_to_provider() {
        let nodes = [
            NodeRecord::new("node-1")
                .label("team", "payments")
                .condition("Ready", true),
            NodeRecord::new("node-2").label(labels::EKS_NODEGROUP, "payments"),
        ];
        let result = filter_by_pool(&nodes, "team", "payments");

        assert_eq!(names(&result), ["node-1", "node-2"]);
        assert_eq!(result[1].status, "");
    }

    #[test]
    fn unknown_pool() {
        let nodes = [NodeRecord::new("node-1").label(labels::EKS_NODEGROUP, "ng-1")];
        assert!(filter_by_pool(&nodes, "", "ng-2").is_empty());
    }
}
