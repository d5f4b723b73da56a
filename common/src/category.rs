use serde::{Deserialize, Serialize};

/// Unique category identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

/// A node in the category tree.
///
/// `path` is the materialized list of ancestor ids from the root down to the
/// category itself; `level` is the depth in the tree (root = 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub parent_id: Option<CategoryId>,
    pub path: Vec<CategoryId>,
    pub level: u32,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// True if `ancestor` appears in this category's path above itself.
    pub fn is_descendant_of(&self, ancestor: &CategoryId) -> bool {
        if *ancestor == self.id {
            return false;
        }
        self.path.contains(ancestor)
    }

    /// Check the materialized path against the node's own fields:
    /// the path ends with the node's id, its length matches the level,
    /// and the last-but-one entry is the parent (when there is one).
    pub fn path_consistent(&self) -> bool {
        if self.path.last() != Some(&self.id) {
            return false;
        }
        if self.path.len() != self.level as usize + 1 {
            return false;
        }
        match &self.parent_id {
            Some(parent) => self.path.len() >= 2 && self.path[self.path.len() - 2] == *parent,
            None => self.path.len() == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, parent: Option<&str>, path: &[&str], level: u32) -> Category {
        Category {
            id: CategoryId(id.into()),
            name: id.to_uppercase(),
            parent_id: parent.map(|p| CategoryId(p.into())),
            path: path.iter().map(|p| CategoryId((*p).into())).collect(),
            level,
        }
    }

    #[test]
    fn test_root_category() {
        let root = cat("food", None, &["food"], 0);
        assert!(root.is_root());
        assert!(root.path_consistent());
        assert!(!root.is_descendant_of(&CategoryId("food".into())));
    }

    #[test]
    fn test_descendant() {
        let leaf = cat("noodles", Some("food"), &["food", "noodles"], 1);
        assert!(!leaf.is_root());
        assert!(leaf.path_consistent());
        assert!(leaf.is_descendant_of(&CategoryId("food".into())));
        assert!(!leaf.is_descendant_of(&CategoryId("drinks".into())));
    }

    #[test]
    fn test_inconsistent_paths() {
        // Path does not end with own id
        let bad = cat("noodles", Some("food"), &["food"], 1);
        assert!(!bad.path_consistent());

        // Level disagrees with path length
        let bad = cat("noodles", Some("food"), &["food", "noodles"], 2);
        assert!(!bad.path_consistent());

        // Parent missing from path
        let bad = cat("noodles", Some("drinks"), &["food", "noodles"], 1);
        assert!(!bad.path_consistent());
    }
}
