use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{category::NewCategory, db::CategoryModel};

pub struct CategoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a category template. Attrs are expected to be validated by the
    /// category service beforehand.
    pub async fn create(&self, attrs: NewCategory) -> Result<CategoryModel, DbErr> {
        let now = Utc::now().naive_utc();

        let category = entity::alliance_category::ActiveModel {
            name: ActiveValue::Set(attrs.name),
            code: ActiveValue::Set(attrs.code),
            description: ActiveValue::Set(attrs.description),
            traits: ActiveValue::Set(attrs.traits),
            bonuses: ActiveValue::Set(attrs.bonuses),
            requirements: ActiveValue::Set(attrs.requirements),
            abilities: ActiveValue::Set(attrs.abilities),
            progression: ActiveValue::Set(attrs.progression),
            specializations: ActiveValue::Set(attrs.specializations),
            special_resources: ActiveValue::Set(attrs.special_resources),
            min_members: ActiveValue::Set(attrs.min_members),
            max_members: ActiveValue::Set(attrs.max_members),
            power_index: ActiveValue::Set(attrs.power_index),
            resource_multiplier: ActiveValue::Set(attrs.resource_multiplier),
            balance_factors: ActiveValue::Set(attrs.balance_factors),
            unlock_requirements: ActiveValue::Set(attrs.unlock_requirements),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(&self, category_id: i32) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::AllianceCategory::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::AllianceCategory::find()
            .filter(entity::alliance_category::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::AllianceCategory::find()
            .filter(entity::alliance_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::AllianceCategory::find().all(self.db).await
    }
}
