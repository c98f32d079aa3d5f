use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The meal of the day an entry is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in display order.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Row label in the week view.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "朝食",
            MealSlot::Lunch => "昼食",
            MealSlot::Dinner => "夕食",
        }
    }

    /// One-character badge shown on month grid cells.
    pub fn badge(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "朝",
            MealSlot::Lunch => "昼",
            MealSlot::Dinner => "夕",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "breakfast"),
            MealSlot::Lunch => write!(f, "lunch"),
            MealSlot::Dinner => write!(f, "dinner"),
        }
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            _ => Err(format!(
                "Invalid meal slot '{}'. Valid options: breakfast, lunch, dinner",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_slot_display() {
        assert_eq!(format!("{}", MealSlot::Breakfast), "breakfast");
        assert_eq!(format!("{}", MealSlot::Lunch), "lunch");
        assert_eq!(format!("{}", MealSlot::Dinner), "dinner");
    }

    #[test]
    fn test_meal_slot_from_str() {
        assert_eq!(
            MealSlot::from_str("breakfast").unwrap(),
            MealSlot::Breakfast
        );
        assert_eq!(MealSlot::from_str("LUNCH").unwrap(), MealSlot::Lunch);
        assert_eq!(MealSlot::from_str("Dinner").unwrap(), MealSlot::Dinner);
    }

    #[test]
    fn test_meal_slot_from_str_invalid() {
        assert!(MealSlot::from_str("snack").is_err());
        assert!(MealSlot::from_str("").is_err());
    }

    #[test]
    fn test_meal_slot_order_and_labels() {
        let mut slots = vec![MealSlot::Dinner, MealSlot::Breakfast, MealSlot::Lunch];
        slots.sort();
        assert_eq!(slots, MealSlot::ALL);
        assert_eq!(MealSlot::Lunch.label(), "昼食");
        assert_eq!(MealSlot::Dinner.badge(), "夕");
    }

    #[test]
    fn test_meal_slot_json() {
        let json = serde_json::to_string(&MealSlot::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");

        let parsed: MealSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MealSlot::Breakfast);
    }
}
