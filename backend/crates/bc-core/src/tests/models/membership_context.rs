use crate::{Club, Member, MembershipContext};

use uuid::Uuid;

#[test]
fn test_membership_context_owner() {
    let owner = Uuid::new_v4();
    let club = Club::new("Test".to_string(), owner);
    let ctx = MembershipContext {
        member: Member::new(club.id, owner),
        club,
    };

    assert!(ctx.is_owner());
    assert_eq!(ctx.subject_id(), owner);
}

#[test]
fn test_membership_context_regular_member() {
    let club = Club::new("Test".to_string(), Uuid::new_v4());
    let reader = Uuid::new_v4();
    let ctx = MembershipContext {
        member: Member::new(club.id, reader),
        club,
    };

    assert!(!ctx.is_owner());
    assert_eq!(ctx.subject_id(), reader);
}
