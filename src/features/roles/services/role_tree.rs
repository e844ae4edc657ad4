use std::collections::HashSet;

use crate::features::roles::dtos::{RoleRow, RoleTreeNode};
use crate::features::roles::models::Role;

/// Which roles are expanded in the table. In memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<i64>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            expanded: ids.into_iter().collect(),
        }
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    /// Flip one role; returns the new state
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn expand(&mut self, id: i64) {
        self.expanded.insert(id);
    }

    pub fn collapse(&mut self, id: i64) {
        self.expanded.remove(&id);
    }

    /// Expand every node of the forest that has children
    pub fn expand_all(&mut self, forest: &[RoleTreeNode]) {
        let mut stack: Vec<&RoleTreeNode> = forest.iter().collect();
        while let Some(node) = stack.pop() {
            if node.has_children() {
                self.expanded.insert(node.role.id);
                stack.extend(node.children.iter());
            }
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

/// Depth-first rows of the forest, descending only into expanded nodes
pub fn flatten_for_display(forest: &[RoleTreeNode], expansion: &ExpansionState) -> Vec<RoleRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&RoleTreeNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, level)) = stack.pop() {
        let has_children = node.has_children();
        let expanded = has_children && expansion.is_expanded(node.role.id);

        rows.push(RoleRow {
            role: node.role.clone(),
            has_children,
            expanded,
            display_level: level,
        });

        if expanded {
            stack.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
    }

    rows
}

/// Headless role table: the forest of the loaded roles plus expansion state
#[derive(Debug, Clone, Default)]
pub struct RoleTreeView {
    forest: Vec<RoleTreeNode>,
    expansion: ExpansionState,
}

impl RoleTreeView {
    pub fn new(roles: Vec<Role>, expansion: ExpansionState) -> Self {
        Self {
            forest: RoleTreeNode::build_tree(roles),
            expansion,
        }
    }

    /// Rebuild the forest after a reload; expansion state is kept
    pub fn reload(&mut self, roles: Vec<Role>) {
        self.forest = RoleTreeNode::build_tree(roles);
    }

    pub fn forest(&self) -> &[RoleTreeNode] {
        &self.forest
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    pub fn toggle(&mut self, id: i64) -> bool {
        self.expansion.toggle(id)
    }

    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.forest);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    pub fn rows(&self) -> Vec<RoleRow> {
        flatten_for_display(&self.forest, &self.expansion)
    }
}
