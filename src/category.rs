use serde::{Deserialize, Serialize};

/// A node in the reward category tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: u64,

    /// Category title
    #[serde(default)]
    pub title: Option<String>,

    /// Longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Parent category, absent for root-level categories
    #[serde(default)]
    pub parent_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserialization() {
        let json = r#"{"id": 11, "title": "Dining", "parent_id": 2}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 11);
        assert_eq!(category.title.as_deref(), Some("Dining"));
        assert_eq!(category.parent_id, Some(2));
    }

    #[test]
    fn test_root_category_has_no_parent() {
        let json = r#"{"id": 2, "title": "Lifestyle"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.parent_id.is_none());
    }
}
