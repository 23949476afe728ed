use entity::alliance::{AllianceType, MembershipPolicy};

/// Caller-supplied attributes for alliance creation.
#[derive(Clone, Debug)]
pub struct NewAlliance {
    pub name: String,
    pub tag: String,
    pub alliance_type: AllianceType,
    pub membership_type: MembershipPolicy,
    pub max_members: Option<i32>,
    pub tax_rate: f64,
}

/// How a user entered an alliance; `Invite` records the inviting member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinMethod {
    Open,
    Approval,
    Invite { invited_by: i32 },
}

impl JoinMethod {
    pub fn invited_by(&self) -> Option<i32> {
        match self {
            Self::Invite { invited_by } => Some(*invited_by),
            Self::Open | Self::Approval => None,
        }
    }
}
