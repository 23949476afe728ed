mod requirements;

use bastion_test_utils::{TestBuilder, TestContext, TestError};

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_core_tables()
        .with_user("aldric")
        .with_user("mira")
        .build()
        .await
}
