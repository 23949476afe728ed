//! Category engine: pure computation over a category's parsed JSON bags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::CategoryError,
    model::{bag, db::CategoryModel},
};

/// Caller-supplied attributes for category creation. The JSON bags are
/// validated before any write.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub traits: Value,
    pub bonuses: Value,
    pub requirements: Value,
    pub abilities: Value,
    pub progression: Value,
    pub specializations: Value,
    pub special_resources: Value,
    pub min_members: i32,
    pub max_members: i32,
    pub power_index: f64,
    pub resource_multiplier: f64,
    pub balance_factors: Value,
    pub unlock_requirements: Value,
}

/// Stat context a category's `requirements` thresholds are evaluated against.
#[derive(Clone, Copy, Debug)]
pub struct AllianceStats {
    pub level: i32,
    pub total_xp: i64,
    pub member_count: u64,
    pub treasury_balance: i64,
}

impl AllianceStats {
    /// Unknown keys resolve to `None` and are ignored by requirement checks.
    fn get(&self, key: &str) -> Option<f64> {
        match key {
            "level" => Some(self.level as f64),
            "total_xp" => Some(self.total_xp as f64),
            "member_count" => Some(self.member_count as f64),
            "treasury_balance" => Some(self.treasury_balance as f64),
            _ => None,
        }
    }
}

/// A category's JSON bags parsed into typed maps, validated once at the
/// boundary. All derived-value computation is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySheet {
    pub traits: BTreeMap<String, f64>,
    pub bonuses: BTreeMap<String, f64>,
    pub requirements: BTreeMap<String, f64>,
    pub unlock_requirements: BTreeMap<String, f64>,
    /// `(level, threshold)` pairs sorted ascending by threshold.
    progression: Vec<(u32, i64)>,
    pub power_index: f64,
    pub resource_multiplier: f64,
}

impl CategorySheet {
    pub fn from_model(model: &CategoryModel) -> Result<Self, CategoryError> {
        if model.min_members > model.max_members {
            return Err(CategoryError::MemberBounds {
                min: model.min_members,
                max: model.max_members,
            });
        }

        Ok(Self {
            traits: bag::parse_trait_map("traits", &model.traits)?,
            bonuses: bag::parse_number_map("bonuses", &model.bonuses)?,
            requirements: bag::parse_number_map("requirements", &model.requirements)?,
            unlock_requirements: bag::parse_number_map(
                "unlock_requirements",
                &model.unlock_requirements,
            )?,
            progression: bag::parse_progression(&model.progression)?,
            power_index: model.power_index,
            resource_multiplier: model.resource_multiplier,
        })
    }

    /// Trait value by name, 0 when absent.
    pub fn trait_value(&self, name: &str) -> f64 {
        self.traits.get(name).copied().unwrap_or(0.0)
    }

    /// Bonus value by name, 0 when absent.
    pub fn bonus(&self, name: &str) -> f64 {
        self.bonuses.get(name).copied().unwrap_or(0.0)
    }

    /// Every requirement key known to the stat context must meet its
    /// threshold; unknown keys are ignored to keep the requirement vocabulary
    /// forward compatible.
    pub fn meets_requirements(&self, stats: &AllianceStats) -> bool {
        self.requirements
            .iter()
            .all(|(key, &threshold)| match stats.get(key) {
                Some(value) => value >= threshold,
                None => true,
            })
    }

    /// Unlock checks fail closed: a key missing from the profile fails the
    /// check, unlike [`Self::meets_requirements`].
    pub fn meets_unlock_requirements(&self, profile: &BTreeMap<String, f64>) -> bool {
        self.unlock_requirements
            .iter()
            .all(|(key, &threshold)| profile.get(key).is_some_and(|&value| value >= threshold))
    }

    /// Power score: base rating plus 10 per trait point, scaled by member
    /// count and the resource multiplier, rounded to the nearest integer.
    pub fn power_score(&self, member_count: u64) -> i64 {
        let base = self.power_index + self.traits.values().map(|value| value * 10.0).sum::<f64>();
        let scaled = base * (1.0 + member_count as f64 / 100.0) * self.resource_multiplier;

        scaled.round() as i64
    }

    /// Highest progression level whose threshold is within `points`, 0 when
    /// no threshold is reached or the progression map is empty.
    pub fn progression_level(&self, points: i64) -> u32 {
        let mut level = 0;

        for &(candidate, threshold) in &self.progression {
            if threshold <= points {
                level = candidate;
            } else {
                break;
            }
        }

        level
    }
}
