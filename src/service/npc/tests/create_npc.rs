use bastion_test_utils::TestError;
use serde_json::{json, Value};

use crate::{
    error::{Error, NpcError, ValidationError},
    model::npc::NewNpc,
    service::npc::NpcService,
};

use super::*;

fn attrs(name: &str, code: &str) -> NewNpc {
    NewNpc {
        code: code.to_string(),
        name: name.to_string(),
        alliance_category_id: None,
        traits: json!({"strength": 4.0}),
        abilities: json!([]),
        personality: json!({"gruff": true}),
        inventory: json!({}),
        relationships: json!({}),
        dialogue: json!({"greeting": ["Well met.", "Need something forged?"]}),
        schedule: Some(json!({"monday": [[9, 17]]})),
        interaction_cooldown: 10,
    }
}

/// Expect the validated NPC persisted with its schedule
#[tokio::test]
async fn creates_valid_npc() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    let npc = npc_service
        .create_npc(attrs("Brom the Blacksmith", "blacksmith_brom"))
        .await
        .unwrap();

    assert_eq!(npc.code, "blacksmith_brom");
    assert_eq!(npc.interaction_cooldown, 10);
    assert_eq!(npc.schedule, Some(json!({"monday": [[9, 17]]})));

    Ok(())
}

/// Expect trait range validation shared with categories
#[tokio::test]
async fn rejects_out_of_range_trait() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    let mut bad = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad.traits = json!({"strength": -1.0});

    let result = npc_service.create_npc(bad).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TraitOutOfRange { .. }))
    ));

    Ok(())
}

/// Expect malformed dialogue and schedule rejected before any write
#[tokio::test]
async fn rejects_malformed_dialogue_and_schedule() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    let mut bad_dialogue = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad_dialogue.dialogue = json!({"greeting": [1, 2]});
    assert!(matches!(
        npc_service.create_npc(bad_dialogue).await,
        Err(Error::ValidationError(ValidationError::BadDialogue { .. }))
    ));

    let mut bad_schedule = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad_schedule.schedule = Some(json!({"monday": [[17, 9]]}));
    assert!(matches!(
        npc_service.create_npc(bad_schedule).await,
        Err(Error::ValidationError(ValidationError::BadSchedule { .. }))
    ));

    Ok(())
}

/// Expect the other map fields rejected when they are not JSON objects
#[tokio::test]
async fn rejects_non_object_map_fields() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    let mut bad_personality = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad_personality.personality = json!("gruff");
    assert!(matches!(
        npc_service.create_npc(bad_personality).await,
        Err(Error::ValidationError(ValidationError::NotAnObject { .. }))
    ));

    let mut bad_inventory = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad_inventory.inventory = json!(["hammer", "tongs"]);
    assert!(matches!(
        npc_service.create_npc(bad_inventory).await,
        Err(Error::ValidationError(ValidationError::NotAnObject { .. }))
    ));

    let mut bad_relationships = attrs("Brom the Blacksmith", "blacksmith_brom");
    bad_relationships.relationships = json!(7);
    assert!(matches!(
        npc_service.create_npc(bad_relationships).await,
        Err(Error::ValidationError(ValidationError::NotAnObject { .. }))
    ));

    Ok(())
}

/// Expect CodeTaken on a duplicate NPC code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    npc_service
        .create_npc(attrs("Brom the Blacksmith", "blacksmith_brom"))
        .await
        .unwrap();

    let result = npc_service
        .create_npc(attrs("Brom the Younger", "blacksmith_brom"))
        .await;

    assert!(matches!(
        result,
        Err(Error::NpcError(NpcError::CodeTaken(_)))
    ));

    Ok(())
}

/// Expect an NPC without a schedule to be accepted
#[tokio::test]
async fn schedule_is_optional() -> Result<(), TestError> {
    let test = setup().await?;
    let npc_service = NpcService::new(&test.db);

    let mut unscheduled = attrs("Wandering Merchant", "merchant");
    unscheduled.schedule = None;

    let npc = npc_service.create_npc(unscheduled).await.unwrap();
    assert_eq!(npc.schedule, None::<Value>);

    Ok(())
}
