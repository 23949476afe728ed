use bastion::{
    model::alliance::{JoinMethod, NewAlliance},
    service::{
        alliance::AllianceService, category::CategoryService, membership::MembershipService,
    },
};
use bastion_test_utils::{factory, TestBuilder, TestContext, TestError};
use entity::alliance::{AllianceType, MembershipPolicy};
use sea_orm::ActiveValue;
use serde_json::json;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_core_tables()
        .with_user("aldric")
        .with_user("mira")
        .with_user("oswin")
        .build()
        .await
}

fn attrs() -> NewAlliance {
    NewAlliance {
        name: "Iron Vanguard".to_string(),
        tag: "IRON".to_string(),
        alliance_type: AllianceType::Roleplay,
        membership_type: MembershipPolicy::Approval,
        max_members: None,
        tax_rate: 0.1,
    }
}

/// Growth path: members join, xp accrues and levels the alliance, and the
/// category's requirement check flips from failing to passing.
#[tokio::test]
async fn growth_unlocks_category_requirements() -> Result<(), TestError> {
    let test = setup().await?;
    let alliance_service = AllianceService::new(&test.db);
    let membership_service = MembershipService::new(&test.db);
    let category_service = CategoryService::new(&test.db);

    let alliance = alliance_service.create_alliance(1, attrs()).await.unwrap();

    let category = factory::category::insert_category_with(
        &test.db,
        "Warbound Compact",
        "warbound",
        |category| {
            category.requirements = ActiveValue::Set(json!({"level": 2, "member_count": 3}));
        },
    )
    .await?;

    assert!(!category_service
        .check_requirements(category.id, alliance.id)
        .await
        .unwrap());

    membership_service
        .join(alliance.id, 2, JoinMethod::Approval)
        .await
        .unwrap();
    membership_service
        .join(alliance.id, 3, JoinMethod::Invite { invited_by: 1 })
        .await
        .unwrap();
    alliance_service.update_stats(alliance.id, 1_500).await.unwrap();

    assert!(category_service
        .check_requirements(category.id, alliance.id)
        .await
        .unwrap());

    Ok(())
}

/// Disband after kicks: both operations stay idempotent end to end.
#[tokio::test]
async fn kick_then_disband_idempotence() -> Result<(), TestError> {
    let test = setup().await?;
    let alliance_service = AllianceService::new(&test.db);
    let membership_service = MembershipService::new(&test.db);

    let alliance = alliance_service.create_alliance(1, attrs()).await.unwrap();
    membership_service
        .join(alliance.id, 2, JoinMethod::Open)
        .await
        .unwrap();

    let kicked = membership_service
        .kick(alliance.id, 2, 1, Some("inactive"))
        .await
        .unwrap();
    let kicked_again = membership_service
        .kick(alliance.id, 2, 1, Some("inactive"))
        .await
        .unwrap();
    assert_eq!(kicked.left_at, kicked_again.left_at);

    let disbanded = alliance_service.disband(alliance.id).await.unwrap();
    let disbanded_again = alliance_service.disband(alliance.id).await.unwrap();
    assert_eq!(disbanded.disbanded_at, disbanded_again.disbanded_at);

    Ok(())
}
