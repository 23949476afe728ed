pub use super::alliance::Entity as Alliance;
pub use super::alliance_category::Entity as AllianceCategory;
pub use super::alliance_member::Entity as AllianceMember;
pub use super::npc::Entity as Npc;
pub use super::npc_interaction::Entity as NpcInteraction;
pub use super::npc_location::Entity as NpcLocation;
pub use super::user::Entity as User;
