
use bastion_test_utils::{TestBuilder, TestContext, TestError};
use entity::alliance::{AllianceType, MembershipPolicy};

use crate::model::alliance::NewAlliance;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_core_tables()
        .with_user("aldric")
        .with_user("mira")
        .with_user("oswin")
        .build()
        .await
}

fn attrs(name: &str, tag: &str) -> NewAlliance {
    NewAlliance {
        name: name.to_string(),
        tag: tag.to_string(),
        alliance_type: AllianceType::Casual,
        membership_type: MembershipPolicy::Open,
        max_members: None,
        tax_rate: 0.05,
    }
}
