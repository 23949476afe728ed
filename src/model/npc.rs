//! NPC domain logic: weekly availability, dialogue selection, cooldowns.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Caller-supplied attributes for NPC creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewNpc {
    pub code: String,
    pub name: String,
    pub alliance_category_id: Option<i32>,
    pub traits: Value,
    pub abilities: Value,
    pub personality: Value,
    pub inventory: Value,
    pub relationships: Value,
    pub dialogue: Value,
    pub schedule: Option<Value>,
    pub interaction_cooldown: i32,
}

/// Whether enough time has passed since the last interaction. A cooldown of
/// zero (or below) always permits.
pub fn cooldown_elapsed(last: NaiveDateTime, cooldown_minutes: i32, now: NaiveDateTime) -> bool {
    if cooldown_minutes <= 0 {
        return true;
    }

    now.signed_duration_since(last) >= Duration::minutes(cooldown_minutes as i64)
}

fn day_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

const DAY_KEYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Per-weekday list of `[start, end)` hour ranges. A day with no entry means
/// the NPC is available all day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: BTreeMap<String, Vec<(u32, u32)>>,
}

impl WeeklySchedule {
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::BadSchedule {
                day: "schedule".to_string(),
            })?;

        let mut days = BTreeMap::new();

        for (day, ranges) in obj {
            let bad = || ValidationError::BadSchedule { day: day.clone() };

            if !DAY_KEYS.contains(&day.as_str()) {
                return Err(bad());
            }

            let ranges = ranges
                .as_array()
                .ok_or_else(bad)?
                .iter()
                .map(|range| {
                    let pair = range.as_array().filter(|pair| pair.len() == 2).ok_or_else(bad)?;
                    let start = pair[0].as_u64().ok_or_else(bad)?;
                    let end = pair[1].as_u64().ok_or_else(bad)?;

                    if start >= end || end > 24 {
                        return Err(bad());
                    }

                    Ok((start as u32, end as u32))
                })
                .collect::<Result<Vec<_>, ValidationError>>()?;

            days.insert(day.clone(), ranges);
        }

        Ok(Self { days })
    }

    /// True when the probe instant's weekday has no schedule entry, or its
    /// hour falls inside any listed range.
    pub fn allows(&self, at: NaiveDateTime) -> bool {
        match self.days.get(day_key(at.weekday())) {
            None => true,
            Some(ranges) => {
                let hour = at.hour();
                ranges.iter().any(|&(start, end)| hour >= start && hour < end)
            }
        }
    }
}

/// Dialogue lines grouped by context key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueSets {
    contexts: BTreeMap<String, Vec<String>>,
}

impl DialogueSets {
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::BadDialogue {
                context: "dialogue".to_string(),
            })?;

        let mut contexts = BTreeMap::new();

        for (context, lines) in obj {
            let bad = || ValidationError::BadDialogue {
                context: context.clone(),
            };

            let lines = lines
                .as_array()
                .ok_or_else(bad)?
                .iter()
                .map(|line| line.as_str().map(str::to_string).ok_or_else(bad))
                .collect::<Result<Vec<_>, ValidationError>>()?;

            contexts.insert(context.clone(), lines);
        }

        Ok(Self { contexts })
    }

    /// Uniform-random pick among the context's lines; `None` when the context
    /// is absent or empty. Callers inject the RNG so tests can seed it.
    pub fn pick<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> Option<&str> {
        let lines = self.contexts.get(context)?;

        if lines.is_empty() {
            return None;
        }

        lines
            .get(rng.random_range(0..lines.len()))
            .map(String::as_str)
    }
}
