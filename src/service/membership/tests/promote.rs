use bastion_test_utils::TestError;
use entity::alliance_member::MemberRole;

use crate::{
    error::{Error, MembershipError},
    model::alliance::JoinMethod,
    service::membership::MembershipService,
};

use super::*;

/// Expect the new role and a promoted_at stamp
#[tokio::test]
async fn promotes_to_assignable_role() -> Result<(), TestError> {
    let (test, alliance_id) = setup_with_cap(None).await?;
    let membership_service = MembershipService::new(&test.db);

    membership_service
        .join(alliance_id, 2, JoinMethod::Open)
        .await
        .unwrap();

    let promoted = membership_service
        .promote(alliance_id, 2, MemberRole::Treasurer)
        .await
        .unwrap();

    assert_eq!(promoted.role, MemberRole::Treasurer);
    assert!(promoted.promoted_at.is_some());

    Ok(())
}

/// Expect RoleNotAssignable for leader and recruit
#[tokio::test]
async fn rejects_unassignable_roles() -> Result<(), TestError> {
    let (test, alliance_id) = setup_with_cap(None).await?;
    let membership_service = MembershipService::new(&test.db);

    membership_service
        .join(alliance_id, 2, JoinMethod::Open)
        .await
        .unwrap();

    for role in [MemberRole::Leader, MemberRole::Recruit] {
        let result = membership_service.promote(alliance_id, 2, role).await;

        assert!(matches!(
            result,
            Err(Error::MembershipError(MembershipError::RoleNotAssignable(_)))
        ));
    }

    Ok(())
}

/// Expect NotFound when promoting a pair whose row is terminal
#[tokio::test]
async fn rejects_promoting_departed_member() -> Result<(), TestError> {
    let (test, alliance_id) = setup_with_cap(None).await?;
    let membership_service = MembershipService::new(&test.db);

    membership_service
        .join(alliance_id, 2, JoinMethod::Open)
        .await
        .unwrap();
    membership_service.leave(alliance_id, 2, None).await.unwrap();

    let result = membership_service
        .promote(alliance_id, 2, MemberRole::Member)
        .await;

    assert!(matches!(
        result,
        Err(Error::MembershipError(MembershipError::NotFound { .. }))
    ));

    Ok(())
}
