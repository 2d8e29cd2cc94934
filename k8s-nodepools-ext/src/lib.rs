pub use k8s_nodepools as nodepools;
pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub use condition::NodeConditionExt;

use nodepools::NodeRecord;

mod condition;

pub trait NodeExt {
    fn new(name: impl ToString) -> Self;
    fn label(self, key: impl ToString, value: impl ToString) -> Self;
    fn condition(self, type_: impl ToString, status: bool) -> Self;
    fn to_record(&self) -> NodeRecord;
}

impl NodeExt for corev1::Node {
    fn new(name: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::new(name);
        Self {
            metadata,
            ..default()
        }
    }

    fn label(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.metadata = self.metadata.label(key, value);
        self
    }

    fn condition(mut self, type_: impl ToString, status: bool) -> Self {
        let condition = corev1::NodeCondition::new(type_, status);
        self.status
            .get_or_insert_with(default)
            .conditions
            .get_or_insert_with(default)
            .push(condition);
        self
    }

    /// Flattens a `corev1::Node` into the record the classifier works on.
    ///
    /// Missing metadata maps to empty values, conditions keep the API order.
    ///
    /// # Examples
    ///
    /// ```
    /// use k8s_nodepools_ext::{corev1, NodeExt as _};
    ///
    /// let node = corev1::Node::new("node-1")
    ///     .label("eks.amazonaws.com/nodegroup", "ng-1")
    ///     .condition("Ready", true);
    /// let record = node.to_record();
    /// assert_eq!(record.name, "node-1");
    /// assert_eq!(record.get_label("eks.amazonaws.com/nodegroup"), Some("ng-1"));
    /// ```
    fn to_record(&self) -> NodeRecord {
        let name = self.metadata.name.clone().unwrap_or_default();
        let labels = self.metadata.labels.clone().unwrap_or_default();
        let conditions = self
            .status
            .as_ref()
            .and_then(|status| status.conditions.as_deref())
            .unwrap_or_default()
            .iter()
            .map(NodeConditionExt::to_condition)
            .collect();
        NodeRecord {
            name,
            labels,
            conditions,
        }
    }
}

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn label(self, key: impl ToString, value: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn label(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.labels
            .get_or_insert_with(default)
            .insert(key.to_string(), value.to_string());
        self
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_meta_new() {
        let metadata = metav1::ObjectMeta::new("node-1");

        assert_eq!(metadata.name.unwrap(), "node-1");
        assert!(metadata.labels.is_none());
    }

    #[test]
    fn object_meta_label() {
        let metadata = metav1::ObjectMeta::new("node-1")
            .label("a", "1")
            .label("b", "2");
        let labels = metadata.labels.unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels["a"], "1");
        assert_eq!(labels["b"], "2");
    }

    #[test]
    fn to_record() {
        let node = corev1::Node::new("node-1")
            .label("karpenter.sh/nodepool", "spot")
            .label("node.kubernetes.io/instance-type", "m5.large")
            .condition("Ready", true)
            .condition("DiskPressure", false)
            .condition("MemoryPressure", true);
        let record = node.to_record();

        assert_eq!(record.name, "node-1");
        assert_eq!(record.labels.len(), 2);
        assert_eq!(nodepools::classify(&record, ""), "(Karpenter) spot");
        assert_eq!(nodepools::instance_type(&record), "m5.large");
        assert_eq!(nodepools::status_summary(&record), "Ready,MemoryPressure");
    }

    #[test]
    fn to_record_empty_node() {
        let record = corev1::Node::default().to_record();

        assert_eq!(record, NodeRecord::default());
        assert_eq!(nodepools::classify(&record, ""), "-");
    }

    #[test]
    fn to_record_status_without_conditions() {
        let node = corev1::Node {
            status: Some(corev1::NodeStatus::default()),
            ..corev1::Node::new("node-1")
        };

        assert!(node.to_record().conditions.is_empty());
    }
}
