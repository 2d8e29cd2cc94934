use k8s_nodepools::Condition;

use super::*;

const CONDITION_TRUE: &str = "True";
const CONDITION_FALSE: &str = "False";

pub trait NodeConditionExt {
    fn new(type_: impl ToString, status: bool) -> Self;
    fn is_true(&self) -> bool;
    fn to_condition(&self) -> Condition;
}

impl NodeConditionExt for corev1::NodeCondition {
    fn new(type_: impl ToString, status: bool) -> Self {
        let type_ = type_.to_string();
        let status = if status {
            CONDITION_TRUE
        } else {
            CONDITION_FALSE
        };
        Self {
            type_,
            status: status.to_string(),
            ..default()
        }
    }

    /// Only an exact `True` status counts, `Unknown` does not.
    fn is_true(&self) -> bool {
        self.status == CONDITION_TRUE
    }

    fn to_condition(&self) -> Condition {
        Condition::new(&self.type_, self.is_true())
    }
}
