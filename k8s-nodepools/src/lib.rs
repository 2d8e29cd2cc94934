//! Node pool classification and aggregation.
//!
//! Every node is assigned to exactly one pool identity, derived from its labels.
//! Nodes sharing an identity are then folded into a [`Report`] of per-pool
//! summaries, or filtered down to the members of one requested pool.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;

pub use aggregate::aggregate;
pub use aggregate::PoolSummary;
pub use aggregate::Report;
pub use aggregate::TypeListing;
pub use classify::classify;
pub use classify::instance_type;
pub use classify::karpenter_display;
pub use classify::strip_karpenter_prefix;
pub use filter::filter_by_pool;
pub use filter::status_summary;
pub use filter::NodeFilterResult;
pub use filter::NodeStatus;
pub use node::Condition;
pub use node::NodeRecord;

pub mod labels;

mod aggregate;
mod classify;
mod filter;
mod node;
