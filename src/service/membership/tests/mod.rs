mod promote;

use bastion_test_utils::{factory, TestBuilder, TestContext, TestError};

/// Users 1..=4 plus an alliance led by user 1, capped at `max_members`.
async fn setup_with_cap(
    max_members: Option<i32>,
) -> Result<(TestContext, i32), TestError> {
    let test = TestBuilder::new()
        .with_core_tables()
        .with_user("aldric")
        .with_user("mira")
        .with_user("oswin")
        .with_user("tamsin")
        .build()
        .await?;

    let alliance = factory::alliance::insert_alliance_with(
        &test.db,
        1,
        "Iron Vanguard",
        "IRON",
        |alliance| {
            alliance.max_members = sea_orm::ActiveValue::Set(max_members);
        },
    )
    .await?;

    let alliance_id = alliance.id;
    Ok((test, alliance_id))
}
