//! What is planned for one meal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;

/// Separator between category values in a summary.
pub const SUMMARY_SEPARATOR: &str = "、";

/// Free-text values per category for one date and meal slot.
///
/// A category that is absent is "not specified". Entries coming out of the
/// plan store never hold empty or untrimmed values; entries built from user
/// input may, until they are [normalized](PlanEntry::normalized).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanEntry(BTreeMap<Category, String>);

impl PlanEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    pub fn set(&mut self, category: Category, value: impl Into<String>) {
        self.0.insert(category, value.into());
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present categories and their values, in summary order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.0.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// A copy with every value trimmed and blank values dropped.
    pub fn normalized(&self) -> PlanEntry {
        PlanEntry(
            self.0
                .iter()
                .filter_map(|(c, v)| {
                    let v = v.trim();
                    (!v.is_empty()).then(|| (*c, v.to_string()))
                })
                .collect(),
        )
    }

    /// The non-blank values joined in category order, or an empty string.
    pub fn summary(&self) -> String {
        self.0
            .values()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(SUMMARY_SEPARATOR)
    }
}

impl FromIterator<(Category, String)> for PlanEntry {
    fn from_iter<I: IntoIterator<Item = (Category, String)>>(iter: I) -> Self {
        PlanEntry(iter.into_iter().collect())
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, value) in self.iter() {
            writeln!(f, "  {}: {}", category.label(), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_drops_blank() {
        let entry = PlanEntry::new()
            .with(Category::Staple, "  rice ")
            .with(Category::Main, "   ")
            .with(Category::Side, "");

        let cleaned = entry.normalized();
        assert_eq!(cleaned.get(Category::Staple), Some("rice"));
        assert_eq!(cleaned.get(Category::Main), None);
        assert_eq!(cleaned.get(Category::Side), None);
        assert_eq!(cleaned.iter().count(), 1);
    }

    #[test]
    fn test_summary_uses_category_order() {
        let entry = PlanEntry::new()
            .with(Category::Other, "tea")
            .with(Category::Main, "egg")
            .with(Category::Staple, "rice");
        assert_eq!(entry.summary(), "rice、egg、tea");
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(PlanEntry::new().summary(), "");
        assert_eq!(PlanEntry::new().with(Category::Side, " ").summary(), "");
    }

    #[test]
    fn test_json_shape() {
        let entry = PlanEntry::new()
            .with(Category::Staple, "rice")
            .with(Category::Main, "egg");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"staple":"rice","main":"egg"}"#);

        let parsed: PlanEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
