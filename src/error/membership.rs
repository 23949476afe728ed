use entity::alliance_member::MemberRole;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MembershipError {
    #[error("Alliance ID {alliance_id} is at its member cap of {max_members}")]
    AllianceFull { alliance_id: i32, max_members: i32 },
    #[error("User ID {user_id} already has an open membership in alliance ID {alliance_id}")]
    AlreadyMember { alliance_id: i32, user_id: i32 },
    #[error("Role {0:?} cannot be assigned via promotion")]
    RoleNotAssignable(MemberRole),
    #[error("No membership for user ID {user_id} in alliance ID {alliance_id}")]
    NotFound { alliance_id: i32, user_id: i32 },
}
