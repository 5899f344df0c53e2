pub mod component;
pub mod filter_criteria;
pub mod statistics;
pub mod tree_node;

pub use component::{Component, ComponentId, ComponentReference, NORMAL_CONDITION, ROOT_PARENT_ID};
pub use filter_criteria::{CriticalityFilter, FilterCriteria};
pub use statistics::ComponentStatistics;
pub use tree_node::{find_node, forest_size, TreeNode};
