//! Meal plans keyed by calendar day.
//!
//! Each date holds up to one [`PlanEntry`] per [`MealSlot`]. Saving an entry
//! replaces whatever was stored for that date and slot; dates are never
//! removed once planned.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use super::suggestions::SuggestionIndex;
use crate::date_key::{parse_key, to_key, DateKey};
use crate::models::{Category, MealSlot, PlanEntry};
use crate::persistence::{load_or_default, write_through, PersistenceGateway, Slot};

/// The entries saved for one date.
pub type DayPlan = BTreeMap<MealSlot, PlanEntry>;

/// Store owning every planned meal and the plan slot.
pub struct MealPlanStore {
    plans: BTreeMap<DateKey, DayPlan>,
    gateway: Arc<dyn PersistenceGateway>,
}

impl MealPlanStore {
    /// Loads plans from the gateway, starting empty if nothing usable is
    /// stored.
    ///
    /// Only a slot that is not a JSON object is discarded as a whole. Inside
    /// it, invalid date keys, unknown meal slots, unknown categories and
    /// non-text values are skipped one by one, stored values are
    /// re-normalized and dates without any slot dropped.
    pub fn open(gateway: Arc<dyn PersistenceGateway>) -> Self {
        let raw: BTreeMap<String, Value> = load_or_default(gateway.as_ref(), Slot::MealPlans);
        let total = raw.len();

        let plans: BTreeMap<DateKey, DayPlan> = raw
            .into_iter()
            .filter_map(|(key, value)| {
                if parse_key(&key).is_none() {
                    tracing::warn!("Skipping plan with invalid date key '{}'", key);
                    return None;
                }
                let day = read_day(&key, &value);
                (!day.is_empty()).then_some((key, day))
            })
            .collect();

        tracing::info!("Loaded {} planned date(s) ({} stored)", plans.len(), total);
        Self { plans, gateway }
    }

    /// The entry saved for `date` and `slot`, or an empty entry.
    pub fn get_entry(&self, date: NaiveDate, slot: MealSlot) -> PlanEntry {
        self.day(date)
            .and_then(|day| day.get(&slot))
            .cloned()
            .unwrap_or_default()
    }

    /// Every slot saved for `date`.
    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.plans.get(&to_key(date))
    }

    /// Compact one-line rendering of an entry.
    pub fn summarize(entry: &PlanEntry) -> String {
        entry.summary()
    }

    /// Normalizes `entry` and stores it for `date` and `slot`, replacing any
    /// previous entry, then feeds its values to the suggestion index.
    ///
    /// Returns the entry as stored.
    pub fn save_entry(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        entry: &PlanEntry,
        suggestions: &mut SuggestionIndex,
    ) -> PlanEntry {
        let cleaned = entry.normalized();
        let key = to_key(date);

        tracing::debug!(
            "Saving {} {} ({} categories)",
            key,
            slot,
            cleaned.iter().count()
        );
        self.plans
            .entry(key)
            .or_default()
            .insert(slot, cleaned.clone());
        self.persist();

        suggestions.record_entry(&cleaned);
        cleaned
    }

    /// Slots of `date` that have something planned, in slot order.
    pub fn planned_slots(&self, date: NaiveDate) -> Vec<MealSlot> {
        MealSlot::ALL
            .into_iter()
            .filter(|slot| !self.get_entry(date, *slot).summary().is_empty())
            .collect()
    }

    /// Summary of every slot of `date`, in slot order; unplanned slots have
    /// an empty summary.
    pub fn day_summaries(&self, date: NaiveDate) -> Vec<(MealSlot, String)> {
        MealSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.get_entry(date, slot).summary()))
            .collect()
    }

    /// Keys of every planned date, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    fn persist(&self) {
        write_through(self.gateway.as_ref(), Slot::MealPlans, &self.plans);
    }
}

/// Decodes one stored day, keeping whatever slots and categories it can.
fn read_day(key: &str, value: &Value) -> DayPlan {
    let mut day = DayPlan::new();
    let Some(slots) = value.as_object() else {
        tracing::warn!("Skipping plan for {}: not an object", key);
        return day;
    };

    for (slot_name, fields) in slots {
        let Ok(slot) = slot_name.parse::<MealSlot>() else {
            tracing::warn!("Skipping unknown meal slot '{}' on {}", slot_name, key);
            continue;
        };
        let Some(fields) = fields.as_object() else {
            tracing::warn!("Skipping {} on {}: not an object", slot, key);
            continue;
        };

        let mut entry = PlanEntry::new();
        for (name, value) in fields {
            match (name.parse::<Category>(), value.as_str()) {
                (Ok(category), Some(text)) => entry.set(category, text),
                _ => tracing::warn!("Ignoring '{}' in {} on {}", name, slot, key),
            }
        }
        day.insert(slot, entry.normalized());
    }
    day
}
