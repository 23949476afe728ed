use std::collections::BTreeMap;

use bastion_test_utils::{factory, TestError};
use entity::alliance_member::{MemberRole, MemberStatus};
use sea_orm::ActiveValue;
use serde_json::json;

use crate::service::category::CategoryService;

use super::*;

/// Expect requirement thresholds evaluated against the live alliance row
#[tokio::test]
async fn requirements_read_live_alliance_stats() -> Result<(), TestError> {
    let test = setup().await?;

    let alliance = factory::alliance::insert_alliance_with(
        &test.db,
        1,
        "Iron Vanguard",
        "IRON",
        |alliance| {
            alliance.level = ActiveValue::Set(3);
            alliance.total_xp = ActiveValue::Set(4_000);
        },
    )
    .await?;
    factory::alliance::insert_member(
        &test.db,
        alliance.id,
        1,
        MemberRole::Leader,
        MemberStatus::Active,
    )
    .await?;

    let category = factory::category::insert_category_with(
        &test.db,
        "Warbound Compact",
        "warbound",
        |category| {
            // "honor" is not a stat field and must be ignored
            category.requirements =
                ActiveValue::Set(json!({"level": 2, "member_count": 1, "honor": 99}));
        },
    )
    .await?;

    let category_service = CategoryService::new(&test.db);
    assert!(category_service
        .check_requirements(category.id, alliance.id)
        .await
        .unwrap());

    let strict = factory::category::insert_category_with(
        &test.db,
        "Silent Accord",
        "silent",
        |category| {
            category.requirements = ActiveValue::Set(json!({"member_count": 5}));
        },
    )
    .await?;

    assert!(!category_service
        .check_requirements(strict.id, alliance.id)
        .await
        .unwrap());

    Ok(())
}

/// Expect unlock checks to fail closed on a missing profile key
#[tokio::test]
async fn unlock_requirements_fail_closed() -> Result<(), TestError> {
    let test = setup().await?;

    let category = factory::category::insert_category_with(
        &test.db,
        "Warbound Compact",
        "warbound",
        |category| {
            category.unlock_requirements = ActiveValue::Set(json!({"reputation": 10}));
        },
    )
    .await?;

    let category_service = CategoryService::new(&test.db);

    let empty = BTreeMap::new();
    assert!(!category_service
        .check_unlock(category.id, &empty)
        .await
        .unwrap());

    let profile: BTreeMap<String, f64> = [("reputation".to_string(), 15.0)].into_iter().collect();
    assert!(category_service
        .check_unlock(category.id, &profile)
        .await
        .unwrap());

    Ok(())
}
