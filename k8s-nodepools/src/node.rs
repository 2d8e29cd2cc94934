use super::*;

/// `NodeRecord` is the part of a cluster node that classification looks at
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeRecord {
    /// name of the node, unique within one listing
    ///
    pub name: String,
    pub labels: BTreeMap<String, String>,
    /// node conditions in the order the API reported them
    ///
    pub conditions: Vec<Condition>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub type_: String,
    pub is_true: bool,
}

impl NodeRecord {
    pub fn new(name: impl ToString) -> Self {
        let name = name.to_string();
        Self {
            name,
            ..Self::default()
        }
    }

    /// Add (or replace) label `key` with `value`
    ///
    pub fn label(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    /// Append a condition of type `type_`
    ///
    pub fn condition(mut self, type_: impl ToString, is_true: bool) -> Self {
        let condition = Condition::new(type_, is_true);
        self.conditions.push(condition);
        self
    }

    pub fn get_label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

impl Condition {
    pub fn new(type_: impl ToString, is_true: bool) -> Self {
        let type_ = type_.to_string();
        Self { type_, is_true }
    }
}
