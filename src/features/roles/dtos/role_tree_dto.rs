use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::roles::models::Role;

/// A role with its children, as built from the flat upstream list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(no_recursion)]
pub struct RoleTreeNode {
    #[serde(flatten)]
    pub role: Role,
    pub children: Vec<RoleTreeNode>,
}

/// One table row of the flattened tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleRow {
    #[serde(flatten)]
    pub role: Role,
    pub has_children: bool,
    /// Only ever true for rows that have children
    pub expanded: bool,
    /// Indentation depth, roots are 0
    pub display_level: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

impl RoleTreeNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Build a forest from a flat list of roles.
    ///
    /// Roles are linked to their parents through an id map in one pass.
    /// A parent that is missing from the list, or the role itself, makes the
    /// role a root. Parent cycles are cut at the first role of the cycle in
    /// load order. Roots and every children list are sorted by `sort_order`;
    /// ties keep load order.
    pub fn build_tree(roles: Vec<Role>) -> Vec<RoleTreeNode> {
        let mut index: HashMap<i64, usize> = HashMap::with_capacity(roles.len());
        for (i, role) in roles.iter().enumerate() {
            if index.insert(role.id, i).is_some() {
                tracing::warn!("Duplicate role id {} in loaded set", role.id);
            }
        }

        let mut parents: Vec<Option<usize>> = roles
            .iter()
            .enumerate()
            .map(|(i, role)| {
                let parent_id = role.parent_role_id?;
                match index.get(&parent_id) {
                    Some(&p) if p != i && roles[p].id != role.id => Some(p),
                    Some(_) => None,
                    None => {
                        tracing::debug!(
                            "Role {} has parent {} outside the loaded set, treating as root",
                            role.id,
                            parent_id
                        );
                        None
                    }
                }
            })
            .collect();

        Self::break_cycles(&roles, &mut parents);

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); roles.len()];
        let mut roots: Vec<usize> = Vec::new();
        for (i, parent) in parents.iter().enumerate() {
            match parent {
                Some(p) => children[*p].push(i),
                None => roots.push(i),
            }
        }

        let by_sort_order = |list: &mut Vec<usize>| list.sort_by_key(|&i| roles[i].sort_order);
        by_sort_order(&mut roots);
        children.iter_mut().for_each(by_sort_order);

        let mut slots: Vec<Option<Role>> = roles.into_iter().map(Some).collect();
        roots
            .into_iter()
            .filter_map(|root| Self::build_node(root, &children, &mut slots))
            .collect()
    }

    fn build_node(
        i: usize,
        children: &[Vec<usize>],
        slots: &mut [Option<Role>],
    ) -> Option<RoleTreeNode> {
        let role = slots[i].take()?;
        let children = children[i]
            .iter()
            .filter_map(|&child| Self::build_node(child, children, slots))
            .collect();
        Some(RoleTreeNode { role, children })
    }

    /// Walk each parent chain once; a chain that reaches a role already on
    /// the current walk is a cycle.
    fn break_cycles(roles: &[Role], parents: &mut [Option<usize>]) {
        let mut visit = vec![Visit::New; roles.len()];
        let mut path: Vec<usize> = Vec::new();

        for start in 0..roles.len() {
            path.clear();
            let mut current = Some(start);

            while let Some(i) = current {
                match visit[i] {
                    Visit::Done => break,
                    Visit::OnPath => {
                        let from = path.iter().position(|&p| p == i).unwrap_or(0);
                        let cut = path[from..].iter().copied().min().unwrap_or(i);
                        tracing::warn!(
                            "Role {} is part of a parent cycle, detaching it as a root",
                            roles[cut].id
                        );
                        parents[cut] = None;
                        break;
                    }
                    Visit::New => {
                        visit[i] = Visit::OnPath;
                        path.push(i);
                        current = parents[i];
                    }
                }
            }

            for &i in &path {
                visit[i] = Visit::Done;
            }
        }
    }
}
