use super::*;

/// `PoolSummary` aggregates all nodes sharing one pool identity
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub name: String,
    pub node_count: usize,
    /// occurrences of every instance type seen in this pool
    ///
    pub instance_types: BTreeMap<String, usize>,
}

/// How [`PoolSummary::type_list`] renders instance types
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeListing {
    /// `m5.large, m5.xlarge`
    #[default]
    Plain,
    /// `m5.large (3), m5.xlarge (1)`
    Counted,
}

/// Per-pool summaries, sorted by pool name
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pools: Vec<PoolSummary>,
}

impl PoolSummary {
    fn new(name: String, instance_type: &str) -> Self {
        let instance_types = BTreeMap::from([(instance_type.to_string(), 1)]);
        Self {
            name,
            node_count: 1,
            instance_types,
        }
    }

    fn add(&mut self, instance_type: &str) {
        self.node_count += 1;
        *self
            .instance_types
            .entry(instance_type.to_string())
            .or_default() += 1;
    }

    /// Instance types sorted by name and joined with `", "`
    ///
    pub fn type_list(&self, listing: TypeListing) -> String {
        self.instance_types
            .iter()
            .map(|(instance_type, count)| match listing {
                TypeListing::Plain => instance_type.clone(),
                TypeListing::Counted => format!("{instance_type} ({count})"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Report {
    pub fn pools(&self) -> &[PoolSummary] {
        &self.pools
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PoolSummary> {
        self.pools.iter()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Total number of nodes across all pools
    ///
    pub fn node_count(&self) -> usize {
        self.pools.iter().map(|pool| pool.node_count).sum()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a PoolSummary;
    type IntoIter = std::slice::Iter<'a, PoolSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Groups `nodes` into pools using [`classify`] and summarizes each pool.
///
/// Pools are ordered by name, byte-wise. An empty input gives an empty report.
///
/// # Examples
///
/// ```
/// use k8s_nodepools::{aggregate, NodeRecord};
///
/// let nodes = [
///     NodeRecord::new("a").label("eks.amazonaws.com/nodegroup", "ng-1"),
///     NodeRecord::new("b").label("eks.amazonaws.com/nodegroup", "ng-1"),
///     NodeRecord::new("c"),
/// ];
/// let report = aggregate(&nodes, "");
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.pools()[0].name, "-");
/// assert_eq!(report.pools()[1].node_count, 2);
/// ```
pub fn aggregate<'a>(nodes: impl IntoIterator<Item = &'a NodeRecord>, custom_label: &str) -> Report {
    let mut pools = BTreeMap::<String, PoolSummary>::new();

    for node in nodes {
        let instance_type = instance_type(node);
        match pools.entry(classify(node, custom_label)) {
            Entry::Vacant(entry) => {
                let summary = PoolSummary::new(entry.key().clone(), instance_type);
                entry.insert(summary);
            }
            Entry::Occupied(mut entry) => entry.get_mut().add(instance_type),
        }
    }

    let pools = pools.into_values().collect();
    Report { pools }
}
