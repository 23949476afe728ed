use bastion_test_utils::{factory, TestError};
use chrono::{Duration, Utc};
use entity::npc_interaction::InteractionType;
use sea_orm::ActiveValue;
use serde_json::json;

use crate::{
    data::npc::interaction::NpcInteractionRepository,
    error::{Error, ValidationError},
    service::npc::NpcService,
};

use super::*;

/// Expect a first interaction to always be permitted
#[tokio::test]
async fn first_interaction_always_permitted() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc_with(
        &test.db,
        "Brom the Blacksmith",
        "blacksmith_brom",
        |npc| {
            npc.interaction_cooldown = ActiveValue::Set(10);
        },
    )
    .await?;

    let npc_service = NpcService::new(&test.db);

    assert!(npc_service.can_interact(npc.id, 1).await.unwrap());

    Ok(())
}

/// Expect the 10-minute cooldown to block at 5 minutes and pass at 11
#[tokio::test]
async fn cooldown_gates_on_last_interaction() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc_with(
        &test.db,
        "Brom the Blacksmith",
        "blacksmith_brom",
        |npc| {
            npc.interaction_cooldown = ActiveValue::Set(10);
        },
    )
    .await?;

    let interaction_repo = NpcInteractionRepository::new(&test.db);
    let npc_service = NpcService::new(&test.db);

    interaction_repo
        .insert(
            npc.id,
            1,
            InteractionType::Talk,
            json!({}),
            None,
            Utc::now().naive_utc() - Duration::minutes(5),
        )
        .await?;
    assert!(!npc_service.can_interact(npc.id, 1).await.unwrap());

    interaction_repo
        .insert(
            npc.id,
            1,
            InteractionType::Talk,
            json!({}),
            None,
            Utc::now().naive_utc() - Duration::minutes(11),
        )
        .await?;
    // Latest row is still the 5-minute-old one
    assert!(!npc_service.can_interact(npc.id, 1).await.unwrap());

    // A different user has no history with this NPC
    assert!(npc_service.can_interact(npc.id, 99).await.unwrap());

    Ok(())
}

/// Expect the gate to reopen once the latest interaction is older than the
/// cooldown
#[tokio::test]
async fn cooldown_permits_after_elapsed() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc_with(
        &test.db,
        "Brom the Blacksmith",
        "blacksmith_brom",
        |npc| {
            npc.interaction_cooldown = ActiveValue::Set(10);
        },
    )
    .await?;

    let interaction_repo = NpcInteractionRepository::new(&test.db);
    let npc_service = NpcService::new(&test.db);

    interaction_repo
        .insert(
            npc.id,
            1,
            InteractionType::Talk,
            json!({}),
            None,
            Utc::now().naive_utc() - Duration::minutes(11),
        )
        .await?;

    assert!(npc_service.can_interact(npc.id, 1).await.unwrap());

    Ok(())
}

/// Expect a zero cooldown to always permit
#[tokio::test]
async fn zero_cooldown_always_permits() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc(&test.db, "Brom the Blacksmith", "blacksmith_brom").await?;

    let npc_service = NpcService::new(&test.db);

    npc_service
        .record_interaction(npc.id, 1, InteractionType::Talk, json!({}), None)
        .await
        .unwrap();

    assert!(npc_service.can_interact(npc.id, 1).await.unwrap());

    Ok(())
}

/// Expect result objects without a boolean success flag rejected
#[tokio::test]
async fn result_requires_boolean_success() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc(&test.db, "Brom the Blacksmith", "blacksmith_brom").await?;

    let npc_service = NpcService::new(&test.db);

    for bad_result in [json!({}), json!({"success": "yes"}), json!(true)] {
        let result = npc_service
            .record_interaction(
                npc.id,
                1,
                InteractionType::Trade,
                json!({"item": "sword"}),
                Some(bad_result),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::ResultMissingSuccess))
        ));
    }

    let recorded = npc_service
        .record_interaction(
            npc.id,
            1,
            InteractionType::Trade,
            json!({"item": "sword"}),
            Some(json!({"success": true, "price": 120})),
        )
        .await
        .unwrap();

    assert_eq!(recorded.interaction_type, InteractionType::Trade);

    Ok(())
}

/// Expect the audit log to keep every row in order
#[tokio::test]
async fn log_is_append_only() -> Result<(), TestError> {
    let test = setup().await?;
    let npc = factory::npc::insert_npc(&test.db, "Brom the Blacksmith", "blacksmith_brom").await?;

    let npc_service = NpcService::new(&test.db);

    npc_service
        .record_interaction(npc.id, 1, InteractionType::Talk, json!({}), None)
        .await
        .unwrap();
    npc_service
        .record_interaction(npc.id, 1, InteractionType::Quest, json!({"quest": 7}), None)
        .await
        .unwrap();

    let interaction_repo = NpcInteractionRepository::new(&test.db);
    let log = interaction_repo.list_for_npc(npc.id).await?;

    assert_eq!(log.len(), 2);
    assert_eq!(log[0].interaction_type, InteractionType::Quest);

    Ok(())
}
