use crate::component_hierarchy::domain::{Component, ComponentId, TreeNode};
use std::collections::HashMap;

/// Result of a forest build, with counts of the recoveries that were applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub forest: Vec<TreeNode>,
    /// Mounted records whose parent is missing from the mounted set (or is themselves)
    pub orphans_promoted: usize,
    /// Records promoted to roots because their ancestry loops back on itself
    pub cycles_broken: usize,
}

/// TreeBuilder service reconstructing the installed-equipment hierarchy
/// from a flat record list.
///
/// Works on an arena of mounted records indexed by id; the parent-to-children
/// relation is resolved once into index lists and the owned `TreeNode`
/// forest is materialised from those lists.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the forest of mounted components.
    ///
    /// Roots and children keep the order of `components`. Every mounted
    /// record appears exactly once; unmounted records never appear.
    pub fn build(components: &[Component]) -> Vec<TreeNode> {
        Self::build_with_report(components).forest
    }

    /// Builds the forest and reports how many records had to be promoted.
    pub fn build_with_report(components: &[Component]) -> BuildReport {
        let mounted: Vec<&Component> = components.iter().filter(|c| c.is_mounted).collect();

        // Later duplicates win, ids are expected to be unique per vessel
        let index: HashMap<ComponentId, usize> = mounted
            .iter()
            .enumerate()
            .map(|(position, component)| (component.id, position))
            .collect();

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); mounted.len()];
        let mut roots = Vec::new();
        let mut orphans_promoted = 0;

        for (position, component) in mounted.iter().enumerate() {
            if component.is_root_declared() {
                roots.push(position);
                continue;
            }
            match index.get(&component.parent_component_id) {
                Some(&parent) if parent != position => children[parent].push(position),
                _ => {
                    orphans_promoted += 1;
                    roots.push(position);
                }
            }
        }

        let mut visited = vec![false; mounted.len()];
        let mut forest = Vec::with_capacity(roots.len());
        for root in roots {
            forest.push(Self::materialize(root, &mounted, &children, &mut visited));
        }

        // Whatever is still unvisited hangs off a parent cycle.
        let mut cycles_broken = 0;
        for position in 0..mounted.len() {
            if !visited[position] {
                cycles_broken += 1;
                forest.push(Self::materialize(position, &mounted, &children, &mut visited));
            }
        }

        BuildReport {
            forest,
            orphans_promoted,
            cycles_broken,
        }
    }

    /// Creates the owned subtree rooted at `root`.
    ///
    /// A child that was already emitted is skipped, which stops the descent
    /// at the point where a cycle closes. Nodes are marked visited in
    /// pre-order and assembled post-order on an explicit stack.
    fn materialize(
        root: usize,
        mounted: &[&Component],
        children: &[Vec<usize>],
        visited: &mut [bool],
    ) -> TreeNode {
        visited[root] = true;
        let mut root_frame = Frame::new(root);
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let frame = stack.last_mut().unwrap_or(&mut root_frame);
            let pending = &children[frame.position];
            while frame.next_child < pending.len() && visited[pending[frame.next_child]] {
                frame.next_child += 1;
            }

            if let Some(&child) = pending.get(frame.next_child) {
                frame.next_child += 1;
                visited[child] = true;
                stack.push(Frame::new(child));
                continue;
            }

            match stack.pop() {
                Some(done) => {
                    let node = done.into_node(mounted);
                    stack
                        .last_mut()
                        .unwrap_or(&mut root_frame)
                        .children
                        .push(node);
                }
                None => return root_frame.into_node(mounted),
            }
        }
    }
}

/// A node under construction: its arena position, the next child index to
/// descend into and the subtrees finished so far.
struct Frame {
    position: usize,
    next_child: usize,
    children: Vec<TreeNode>,
}

impl Frame {
    fn new(position: usize) -> Self {
        Self {
            position,
            next_child: 0,
            children: Vec::new(),
        }
    }

    fn into_node(self, mounted: &[&Component]) -> TreeNode {
        TreeNode::with_children(mounted[self.position].clone(), self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_hierarchy::domain::forest_size;

    fn component(id: ComponentId, parent: ComponentId, mounted: bool, name: &str) -> Component {
        Component {
            id,
            parent_component_id: parent,
            is_mounted: mounted,
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn ids(forest: &[TreeNode]) -> Vec<ComponentId> {
        forest.iter().map(TreeNode::id).collect()
    }

    #[test]
    fn test_build_worked_example() {
        let components = vec![
            component(1, 0, true, "Engine"),
            component(2, 1, true, "Piston"),
            component(3, 1, false, "SpareValve"),
        ];

        let forest = TreeBuilder::build(&components);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].component.name, "Engine");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].component.name, "Piston");
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn test_build_orphan_promotion() {
        let components = vec![component(1, 0, true, "A"), component(2, 99, true, "B")];

        let report = TreeBuilder::build_with_report(&components);

        assert_eq!(ids(&report.forest), vec![1, 2]);
        assert_eq!(report.orphans_promoted, 1);
        assert_eq!(report.cycles_broken, 0);
    }

    #[test]
    fn test_build_parent_unmounted_promotes_child() {
        let components = vec![component(1, 0, false, "Crate"), component(2, 1, true, "Pump")];

        let forest = TreeBuilder::build(&components);

        assert_eq!(ids(&forest), vec![2]);
    }

    #[test]
    fn test_build_preserves_input_order() {
        let components = vec![
            component(5, 0, true, "R1"),
            component(3, 5, true, "c-b"),
            component(9, 0, true, "R2"),
            component(1, 5, true, "c-a"),
            component(2, 9, true, "c-c"),
        ];

        let forest = TreeBuilder::build(&components);

        assert_eq!(ids(&forest), vec![5, 9]);
        assert_eq!(ids(&forest[0].children), vec![3, 1]);
        assert_eq!(ids(&forest[1].children), vec![2]);
    }

    #[test]
    fn test_build_child_listed_before_parent() {
        let components = vec![
            component(3, 2, true, "Grandchild"),
            component(2, 1, true, "Child"),
            component(1, 0, true, "Root"),
        ];

        let forest = TreeBuilder::build(&components);

        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(ids(&forest[0].children), vec![2]);
        assert_eq!(ids(&forest[0].children[0].children), vec![3]);
    }

    #[test]
    fn test_build_two_node_cycle_emits_each_once() {
        let components = vec![component(1, 2, true, "A"), component(2, 1, true, "B")];

        let report = TreeBuilder::build_with_report(&components);

        assert_eq!(forest_size(&report.forest), 2);
        assert_eq!(ids(&report.forest), vec![1]);
        assert_eq!(ids(&report.forest[0].children), vec![2]);
        assert_eq!(report.cycles_broken, 1);
    }

    #[test]
    fn test_build_self_parent_is_orphan() {
        let components = vec![component(4, 4, true, "Loop")];

        let report = TreeBuilder::build_with_report(&components);

        assert_eq!(ids(&report.forest), vec![4]);
        assert_eq!(report.orphans_promoted, 1);
    }

    #[test]
    fn test_build_cycle_below_a_valid_root_branch() {
        // 10 is a proper root; 20 -> 30 -> 20 is a detached loop
        let components = vec![
            component(10, 0, true, "Root"),
            component(20, 30, true, "X"),
            component(30, 20, true, "Y"),
            component(40, 10, true, "Child"),
        ];

        let forest = TreeBuilder::build(&components);

        assert_eq!(forest_size(&forest), 4);
        assert_eq!(ids(&forest), vec![10, 20]);
        assert_eq!(ids(&forest[0].children), vec![40]);
        assert_eq!(ids(&forest[1].children), vec![30]);
    }

    #[test]
    fn test_build_node_count_matches_mounted_count() {
        let components: Vec<Component> = (1..=50)
            .map(|id| component(id, id / 3, id % 4 != 0, "node"))
            .collect();
        let mounted = components.iter().filter(|c| c.is_mounted).count();

        let forest = TreeBuilder::build(&components);

        assert_eq!(forest_size(&forest), mounted);
    }

    #[test]
    fn test_build_duplicate_ids_keep_every_record() {
        let components = vec![
            component(1, 0, true, "First"),
            component(1, 0, true, "Second"),
            component(2, 1, true, "Child"),
        ];

        let forest = TreeBuilder::build(&components);

        assert_eq!(forest_size(&forest), 3);
        assert!(forest[0].children.is_empty());
        assert_eq!(forest[1].component.name, "Second");
        assert_eq!(ids(&forest[1].children), vec![2]);
    }

    #[test]
    fn test_build_deep_parent_chain() {
        let depth: ComponentId = 20_000;
        let components: Vec<Component> = (1..=depth)
            .map(|id| component(id, id - 1, true, "link"))
            .collect();

        let report = TreeBuilder::build_with_report(&components);

        assert_eq!(ids(&report.forest), vec![1]);
        assert_eq!(forest_size(&report.forest), depth as usize);
        assert_eq!(report.orphans_promoted, 0);
        let mut expected = 1;
        report.forest[0].visit(&mut |node| {
            assert_eq!(node.id(), expected);
            assert!(node.children.len() <= 1);
            expected += 1;
        });
    }

    #[test]
    fn test_build_deep_cycle_is_broken_once() {
        // 1 -> 2 -> ... -> n -> 1 with no declared root
        let depth: ComponentId = 20_000;
        let mut components: Vec<Component> = (2..=depth)
            .map(|id| component(id, id - 1, true, "link"))
            .collect();
        components.insert(0, component(1, depth, true, "head"));

        let report = TreeBuilder::build_with_report(&components);

        assert_eq!(report.cycles_broken, 1);
        assert_eq!(ids(&report.forest), vec![1]);
        assert_eq!(forest_size(&report.forest), depth as usize);
    }

    #[test]
    fn test_build_empty() {
        assert!(TreeBuilder::build(&[]).is_empty());
    }
}
