//! Shared constants for test fixtures.

pub const TEST_ALLIANCE_NAME: &str = "Iron Vanguard";
pub const TEST_ALLIANCE_TAG: &str = "IRON";
pub const TEST_CATEGORY_NAME: &str = "Warbound Compact";
pub const TEST_CATEGORY_CODE: &str = "warbound";
pub const TEST_NPC_NAME: &str = "Brom the Blacksmith";
pub const TEST_NPC_CODE: &str = "blacksmith_brom";
