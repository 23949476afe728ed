use bastion::{
    error::{Error, MembershipError},
    model::alliance::{JoinMethod, NewAlliance},
    service::{alliance::AllianceService, membership::MembershipService},
};
use bastion_test_utils::{TestBuilder, TestContext, TestError};
use entity::alliance::{AllianceType, MembershipPolicy};

async fn setup(user_count: usize) -> Result<TestContext, TestError> {
    let mut builder = TestBuilder::new().with_core_tables();

    for index in 1..=user_count {
        builder = builder.with_user(format!("user_{index}"));
    }

    builder.build().await
}

fn capped_attrs(max_members: i32) -> NewAlliance {
    NewAlliance {
        name: "Iron Vanguard".to_string(),
        tag: "IRON".to_string(),
        alliance_type: AllianceType::Competitive,
        membership_type: MembershipPolicy::Open,
        max_members: Some(max_members),
        tax_rate: 0.05,
    }
}

/// Alliance capped at 2: two joins fill it, the third bounces, and a leave
/// frees the slot for the bounced user.
#[tokio::test]
async fn two_member_cap_scenario() -> Result<(), TestError> {
    let test = setup(4).await?;
    let alliance_service = AllianceService::new(&test.db);
    let membership_service = MembershipService::new(&test.db);

    // Leader (user 1) occupies the first slot at creation time
    let alliance = alliance_service
        .create_alliance(1, capped_attrs(2))
        .await
        .unwrap();

    membership_service
        .join(alliance.id, 2, JoinMethod::Open)
        .await
        .unwrap();

    let bounced = membership_service.join(alliance.id, 3, JoinMethod::Open).await;
    assert!(matches!(
        bounced,
        Err(Error::MembershipError(MembershipError::AllianceFull { .. }))
    ));

    membership_service.leave(alliance.id, 2, None).await.unwrap();

    membership_service
        .join(alliance.id, 3, JoinMethod::Open)
        .await
        .unwrap();

    assert_eq!(alliance_service.member_count(alliance.id).await.unwrap(), 2);

    Ok(())
}

/// Alliance capped at 5: fill it, bounce the sixth, leave and rejoin.
#[tokio::test]
async fn five_member_round_trip() -> Result<(), TestError> {
    let test = setup(6).await?;
    let alliance_service = AllianceService::new(&test.db);
    let membership_service = MembershipService::new(&test.db);

    let alliance = alliance_service
        .create_alliance(1, capped_attrs(5))
        .await
        .unwrap();

    for user_id in 2..=5 {
        membership_service
            .join(alliance.id, user_id, JoinMethod::Open)
            .await
            .unwrap();
    }
    assert!(alliance_service.is_full(alliance.id).await.unwrap());

    let sixth = membership_service.join(alliance.id, 6, JoinMethod::Open).await;
    assert!(matches!(
        sixth,
        Err(Error::MembershipError(MembershipError::AllianceFull { .. }))
    ));

    membership_service.leave(alliance.id, 3, None).await.unwrap();
    assert!(!alliance_service.is_full(alliance.id).await.unwrap());

    membership_service
        .join(alliance.id, 3, JoinMethod::Open)
        .await
        .unwrap();
    assert!(alliance_service.is_full(alliance.id).await.unwrap());

    Ok(())
}
