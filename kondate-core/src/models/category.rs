use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sub-field of a meal entry.
///
/// The declaration order is the order categories are summarized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Staple,
    Main,
    Side,
    Other,
}

impl Category {
    /// All categories in summary order.
    pub const ALL: [Category; 4] = [
        Category::Staple,
        Category::Main,
        Category::Side,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Staple => "主食",
            Category::Main => "主菜",
            Category::Side => "副菜",
            Category::Other => "その他",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Staple => write!(f, "staple"),
            Category::Main => write!(f, "main"),
            Category::Side => write!(f, "side"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "staple" => Ok(Category::Staple),
            "main" => Ok(Category::Main),
            "side" => Ok(Category::Side),
            "other" => Ok(Category::Other),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: staple, main, side, other",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("STAPLE").unwrap(), Category::Staple);
        assert_eq!(Category::from_str("side").unwrap(), Category::Side);
        assert!(Category::from_str("dessert").is_err());
    }

    #[test]
    fn test_category_order_matches_all() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::Other.label(), "その他");
    }

    #[test]
    fn test_category_json() {
        assert_eq!(serde_json::to_string(&Category::Main).unwrap(), "\"main\"");
    }
}
