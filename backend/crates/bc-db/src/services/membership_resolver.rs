use crate::{
    ClubRepository, DbError, InviteRepository, MemberRepository, Result as DbErrorResult,
};

use bc_core::{MembershipContext, authorize_removal};

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Answers "is this subject an active member of this club" and gates the
/// owner-or-self removals.
///
/// Non-membership is always reported as `NotFound` so a non-member cannot
/// tell a missing club from one they are not in.
#[derive(Clone)]
pub struct MembershipResolver {
    clubs: ClubRepository,
    members: MemberRepository,
    invites: InviteRepository,
}

impl MembershipResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            clubs: ClubRepository::new(pool.clone()),
            members: MemberRepository::new(pool.clone()),
            invites: InviteRepository::new(pool),
        }
    }

    /// `Some` only when the club exists and the subject has a non-removed
    /// member row in it.
    pub async fn resolve_active_membership(
        &self,
        subject_id: Uuid,
        club_id: Uuid,
    ) -> DbErrorResult<Option<MembershipContext>> {
        let (club, member) = tokio::try_join!(
            self.clubs.find_by_id(club_id),
            self.members.find_active(subject_id, club_id),
        )?;

        Ok(match (club, member) {
            (Some(club), Some(member)) => Some(MembershipContext { club, member }),
            _ => None,
        })
    }

    pub async fn require_active_membership(
        &self,
        subject_id: Uuid,
        club_id: Uuid,
    ) -> DbErrorResult<MembershipContext> {
        self.resolve_active_membership(subject_id, club_id)
            .await?
            .ok_or_else(|| club_not_found(club_id))
    }

    /// Soft-delete `member_id` from the club. Allowed for the club owner and
    /// for the member themself.
    ///
    /// Removing a member that is already removed succeeds. Returns whether
    /// this call flipped the flag.
    pub async fn remove_member(
        &self,
        requester_id: Uuid,
        club_id: Uuid,
        member_id: Uuid,
    ) -> DbErrorResult<bool> {
        let (club, target, requester) = tokio::try_join!(
            self.clubs.find_by_id(club_id),
            self.members.find_in_club(member_id, club_id),
            self.members.find_active(requester_id, club_id),
        )?;

        let club = club.ok_or_else(|| club_not_found(club_id))?;
        let can_see_club = requester.is_some() || club.is_owner(requester_id);
        let target = match target {
            Some(target) if can_see_club || target.user_id == requester_id => target,
            Some(_) => return Err(club_not_found(club_id)),
            None if can_see_club => {
                return Err(DbError::not_found(format!("member {}", member_id)));
            }
            None => return Err(club_not_found(club_id)),
        };

        authorize_removal(requester_id, &club, target.user_id)?;

        let removed = self.members.soft_delete(target.id).await?;
        if !removed {
            debug!("Member {} already removed from club {}", target.id, club_id);
        }

        Ok(removed)
    }

    /// Delete a pending invite. Allowed for the club owner and for the
    /// invited user.
    pub async fn delete_invite(
        &self,
        requester_id: Uuid,
        club_id: Uuid,
        invite_id: Uuid,
    ) -> DbErrorResult<()> {
        let (club, invite, requester) = tokio::try_join!(
            self.clubs.find_by_id(club_id),
            self.invites.find_in_club(invite_id, club_id),
            self.members.find_active(requester_id, club_id),
        )?;

        let club = club.ok_or_else(|| club_not_found(club_id))?;
        let can_see_club = requester.is_some() || club.is_owner(requester_id);
        let invite = match invite {
            Some(invite) if can_see_club || invite.user_id == requester_id => invite,
            Some(_) => return Err(club_not_found(club_id)),
            None if can_see_club => {
                return Err(DbError::not_found(format!("invite {}", invite_id)));
            }
            None => return Err(club_not_found(club_id)),
        };

        authorize_removal(requester_id, &club, invite.user_id)?;

        if !self.invites.delete(invite.id).await? {
            debug!("Invite {} already deleted", invite.id);
        }

        Ok(())
    }
}

/// The only `NotFound` a requester outside the club ever receives.
#[track_caller]
fn club_not_found(club_id: Uuid) -> DbError {
    DbError::not_found(format!("club {}", club_id))
}
