mod create_npc;
mod dialogue;
mod interactions;

use bastion_test_utils::{TestBuilder, TestContext, TestError};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_core_tables()
        .with_user("aldric")
        .build()
        .await
}
