use crate::{Club, Member};

use uuid::Uuid;

#[test]
fn test_club_new() {
    let owner = Uuid::new_v4();
    let club = Club::new("Dune Readers".to_string(), owner);

    assert_eq!(club.title, "Dune Readers");
    assert_eq!(club.owner_id, owner);
}

#[test]
fn test_club_is_owner() {
    let owner = Uuid::new_v4();
    let club = Club::new("Test".to_string(), owner);

    assert!(club.is_owner(owner));
    assert!(!club.is_owner(Uuid::new_v4()));
}

#[test]
fn test_member_new_is_active() {
    let mut member = Member::new(Uuid::new_v4(), Uuid::new_v4());

    assert!(member.is_active());

    member.removed = true;
    assert!(!member.is_active());
}
