//! Alliance category service.
//!
//! Wraps the pure [`CategorySheet`] computations with database lookups:
//! creation validates every JSON bag before any write, and the check
//! operations build their stat context from live alliance rows.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::alliance::{alliance::AllianceRepository, category::CategoryRepository, member::MemberRepository},
    error::{AllianceError, CategoryError, Error},
    model::{
        bag,
        category::{AllianceStats, CategorySheet, NewCategory},
        db::CategoryModel,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category template.
    ///
    /// Every JSON bag is validated synchronously before any write: trait
    /// values must sit in [0, 5], the numeric maps must be objects of
    /// numbers, progression keys must be positive integer levels, and
    /// `min_members` must not exceed `max_members`.
    pub async fn create_category(&self, attrs: NewCategory) -> Result<CategoryModel, Error> {
        if attrs.min_members > attrs.max_members {
            return Err(CategoryError::MemberBounds {
                min: attrs.min_members,
                max: attrs.max_members,
            }
            .into());
        }

        bag::parse_trait_map("traits", &attrs.traits).map_err(CategoryError::Validation)?;
        bag::parse_number_map("bonuses", &attrs.bonuses).map_err(CategoryError::Validation)?;
        bag::parse_number_map("requirements", &attrs.requirements)
            .map_err(CategoryError::Validation)?;
        bag::parse_number_map("unlock_requirements", &attrs.unlock_requirements)
            .map_err(CategoryError::Validation)?;
        bag::parse_progression(&attrs.progression).map_err(CategoryError::Validation)?;

        let category_repo = CategoryRepository::new(self.db);

        if category_repo.get_by_name(&attrs.name).await?.is_some() {
            return Err(CategoryError::NameTaken(attrs.name).into());
        }

        if category_repo.get_by_code(&attrs.code).await?.is_some() {
            return Err(CategoryError::CodeTaken(attrs.code).into());
        }

        let category = category_repo.create(attrs).await?;

        tracing::info!(category_id = category.id, code = %category.code, "category created");

        Ok(category)
    }

    /// Parsed sheet for a category, validated on the way out of the database.
    pub async fn sheet(&self, category_id: i32) -> Result<CategorySheet, Error> {
        let category = CategoryRepository::new(self.db)
            .get_by_id(category_id)
            .await?
            .ok_or(CategoryError::NotFound(category_id))?;

        Ok(CategorySheet::from_model(&category)?)
    }

    /// Power score for a category at a given member count.
    pub async fn power_score(&self, category_id: i32, member_count: u64) -> Result<i64, Error> {
        Ok(self.sheet(category_id).await?.power_score(member_count))
    }

    /// Progression level a point total buys in this category.
    pub async fn progression_level(&self, category_id: i32, points: i64) -> Result<u32, Error> {
        Ok(self.sheet(category_id).await?.progression_level(points))
    }

    /// Evaluates the category's requirement thresholds against an alliance's
    /// live stats (level, xp, active member count, treasury).
    pub async fn check_requirements(
        &self,
        category_id: i32,
        alliance_id: i32,
    ) -> Result<bool, Error> {
        let sheet = self.sheet(category_id).await?;

        let alliance = AllianceRepository::new(self.db)
            .get_by_id(alliance_id)
            .await?
            .ok_or(AllianceError::NotFound(alliance_id))?;
        let member_count = MemberRepository::new(self.db)
            .count_active(alliance_id)
            .await?;

        let stats = AllianceStats {
            level: alliance.level,
            total_xp: alliance.total_xp,
            member_count,
            treasury_balance: alliance.treasury_balance,
        };

        Ok(sheet.meets_requirements(&stats))
    }

    /// Evaluates unlock thresholds against a user profile; missing profile
    /// keys fail the check.
    pub async fn check_unlock(
        &self,
        category_id: i32,
        profile: &BTreeMap<String, f64>,
    ) -> Result<bool, Error> {
        let sheet = self.sheet(category_id).await?;

        Ok(sheet.meets_unlock_requirements(profile))
    }
}
