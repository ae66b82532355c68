use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - groups posts by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category, deriving its slug from the name.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            created_at: Utc::now(),
        }
    }

    /// Change the display name and re-derive the slug.
    ///
    /// Posts filed under the previous slug keep it.
    pub fn rename(&mut self, name: String) {
        self.slug = slugify(&name);
        self.name = name;
    }
}

/// Lowercase the name and replace every space with a hyphen.
///
/// Slugs are not checked for uniqueness.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name() {
        let category = Category::new("My Category".to_string());
        assert_eq!(category.slug, "my-category");
    }

    #[test]
    fn test_rename_recomputes_slug() {
        let mut category = Category::new("My Category".to_string());
        let id = category.id;

        category.rename("New Name".to_string());

        assert_eq!(category.id, id);
        assert_eq!(category.name, "New Name");
        assert_eq!(category.slug, "new-name");
    }

    #[test]
    fn test_slugify_only_replaces_spaces() {
        assert_eq!(slugify("Rust  &  Go"), "rust--&--go");
        assert_eq!(slugify("Already-Slugged"), "already-slugged");
    }
}
