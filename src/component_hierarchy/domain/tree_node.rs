use super::{Component, ComponentId};
use serde::Serialize;

/// A mounted component together with its installed sub-components.
///
/// Children keep the order of the source record list. A forest owns its
/// nodes outright; nothing points back into the flat record list.
///
/// Parent chains can be arbitrarily deep, so every walk over a tree
/// (including clone, comparison and drop) keeps its own stack instead of
/// recursing.
#[derive(Debug, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub component: Component,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(component: Component) -> Self {
        Self {
            component,
            children: Vec::new(),
        }
    }

    pub fn with_children(component: Component, children: Vec<TreeNode>) -> Self {
        Self {
            component,
            children,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.component.id
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        let mut size = 0;
        self.visit(&mut |_| size += 1);
        size
    }

    /// Visits this node and its descendants depth-first, parents before children.
    pub fn visit<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a TreeNode),
    {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            visitor(node);
            pending.extend(node.children.iter().rev());
        }
    }

    /// Folds the subtree bottom-up: `combine` sees each node together with
    /// the folded values of its children, in child order.
    pub fn fold<'a, T, F>(&'a self, mut combine: F) -> T
    where
        F: FnMut(&'a TreeNode, Vec<T>) -> T,
    {
        let mut root_values = Vec::with_capacity(self.children.len());
        let mut root_children = self.children.iter();
        // (node, values of the children folded so far)
        let mut stack: Vec<(&'a TreeNode, Vec<T>)> = Vec::new();

        loop {
            match stack.pop() {
                Some((node, values)) => match node.children.get(values.len()) {
                    Some(child) => {
                        stack.push((node, values));
                        stack.push((child, Vec::with_capacity(child.children.len())));
                    }
                    None => {
                        let value = combine(node, values);
                        match stack.last_mut() {
                            Some((_, parent_values)) => parent_values.push(value),
                            None => root_values.push(value),
                        }
                    }
                },
                None => match root_children.next() {
                    Some(child) => {
                        stack.push((child, Vec::with_capacity(child.children.len())))
                    }
                    None => break,
                },
            }
        }

        combine(self, root_values)
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        self.fold(|node, children| TreeNode::with_children(node.component.clone(), children))
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.component != right.component || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach descendants so each node is dropped with no children left
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Total number of nodes across a forest.
pub fn forest_size(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::subtree_size).sum()
}

/// Finds a node anywhere in the forest by component id, in depth-first order.
pub fn find_node(forest: &[TreeNode], id: ComponentId) -> Option<&TreeNode> {
    let mut pending: Vec<&TreeNode> = forest.iter().rev().collect();
    while let Some(node) = pending.pop() {
        if node.id() == id {
            return Some(node);
        }
        pending.extend(node.children.iter().rev());
    }
    None
}
