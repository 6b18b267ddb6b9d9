mod common;

use common::{seed_chapter, seed_club, seed_member, seed_user, test_app, token_for};

use bc_core::Invite;
use bc_db::InviteRepository;

use http::{Method, StatusCode};
use uuid::Uuid;

// =========================================================================
// Membership
// =========================================================================

#[tokio::test]
async fn given_member_when_getting_club_then_context_returned() {
    // Given
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let reader = seed_user(&app.pool, "reader").await;
    let club = seed_club(&app.pool, &owner).await;
    seed_member(&app.pool, &club, &reader).await;

    // When
    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}", club.id),
            Some(&token_for(&reader)),
            None,
        )
        .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["club"]["id"], club.id.to_string());
    assert_eq!(body["is_owner"], false);
}

#[tokio::test]
async fn given_non_member_when_getting_club_then_404_same_as_missing_club() {
    // Given
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let stranger = seed_user(&app.pool, "stranger").await;
    let club = seed_club(&app.pool, &owner).await;
    let token = token_for(&stranger);

    // When
    let (existing, _) = app
        .send(Method::GET, &format!("/api/v1/clubs/{}", club.id), Some(&token), None)
        .await;
    let (missing, _) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}", Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;

    // Then
    assert_eq!(existing, StatusCode::NOT_FOUND);
    assert_eq!(missing, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_bad_club_id_when_getting_club_then_400() {
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;

    let (status, _) = app
        .send(Method::GET, "/api/v1/clubs/not-a-uuid", Some(&token_for(&owner)), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =========================================================================
// Member removal
// =========================================================================

#[tokio::test]
async fn given_non_owner_when_removing_other_member_then_403() {
    // Given
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let alice = seed_user(&app.pool, "alice").await;
    let bob = seed_user(&app.pool, "bob").await;
    let club = seed_club(&app.pool, &owner).await;
    seed_member(&app.pool, &club, &alice).await;
    let bob_member = seed_member(&app.pool, &club, &bob).await;

    // When
    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/api/v1/clubs/{}/members/{}", club.id, bob_member.id),
            Some(&token_for(&alice)),
            None,
        )
        .await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn given_self_removal_twice_then_both_succeed_and_access_lost() {
    // Given
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let reader = seed_user(&app.pool, "reader").await;
    let club = seed_club(&app.pool, &owner).await;
    let member = seed_member(&app.pool, &club, &reader).await;
    let token = token_for(&reader);
    let uri = format!("/api/v1/clubs/{}/members/{}", club.id, member.id);

    // When
    let (first, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    let (second, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;

    // Then
    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);
    let (status, _) = app
        .send(Method::GET, &format!("/api/v1/clubs/{}", club.id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_owner_when_deleting_invite_then_204() {
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let invitee = seed_user(&app.pool, "invitee").await;
    let club = seed_club(&app.pool, &owner).await;
    let invite = Invite::new(club.id, invitee.id, owner.id);
    InviteRepository::new(app.pool.clone())
        .create(&invite)
        .await
        .unwrap();

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/v1/clubs/{}/invites/{}", club.id, invite.id),
            Some(&token_for(&owner)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn given_non_member_when_deleting_unknown_targets_then_body_same_as_missing_club() {
    // Given
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let stranger = seed_user(&app.pool, "stranger").await;
    let club = seed_club(&app.pool, &owner).await;
    let missing_club = Uuid::new_v4();
    let token = token_for(&stranger);

    for kind in ["members", "invites"] {
        // When
        let (real_status, real_body) = app
            .send(
                Method::DELETE,
                &format!("/api/v1/clubs/{}/{}/{}", club.id, kind, Uuid::new_v4()),
                Some(&token),
                None,
            )
            .await;
        let (missing_status, missing_body) = app
            .send(
                Method::DELETE,
                &format!("/api/v1/clubs/{}/{}/{}", missing_club, kind, Uuid::new_v4()),
                Some(&token),
                None,
            )
            .await;

        // Then: only the echoed club id differs
        assert_eq!(real_status, StatusCode::NOT_FOUND);
        assert_eq!(missing_status, StatusCode::NOT_FOUND);
        let real = real_body.to_string().replace(&club.id.to_string(), "<club>");
        let missing = missing_body
            .to_string()
            .replace(&missing_club.to_string(), "<club>");
        assert_eq!(real, missing);
    }
}

// =========================================================================
// Progress
// =========================================================================

#[tokio::test]
async fn given_progress_marked_when_reading_stats_then_counts_and_checklist_agree() {
    // Given: owner and reader, reader completes chapter 1
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let reader = seed_user(&app.pool, "reader").await;
    let club = seed_club(&app.pool, &owner).await;
    seed_member(&app.pool, &club, &reader).await;
    let chapter = seed_chapter(&app.pool, &club, 1).await;
    let reader_token = token_for(&reader);
    let progress_uri = format!("/api/v1/clubs/{}/chapters/{}/progress", club.id, chapter.id);

    // When: marking twice is idempotent
    let (first, _) = app.send(Method::PUT, &progress_uri, Some(&reader_token), None).await;
    let (second, _) = app.send(Method::PUT, &progress_uri, Some(&reader_token), None).await;

    // Then
    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);

    let owner_token = token_for(&owner);
    let (status, counts) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}/chapters/{}/counts", club.id, chapter.id),
            Some(&owner_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts["completed"], 1);
    assert_eq!(counts["remaining"], 1);

    let (status, checklist) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}/chapters/{}/completion", club.id, chapter.id),
            Some(&owner_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let members = checklist["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    let owner_row = members
        .iter()
        .find(|m| m["user"]["id"] == owner.id.to_string())
        .unwrap();
    let reader_row = members
        .iter()
        .find(|m| m["user"]["id"] == reader.id.to_string())
        .unwrap();
    assert!(owner_row["progress"].is_null());
    assert!(reader_row["progress"]["created_at"].is_i64());

    let (status, summary) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}/progress", club.id),
            Some(&owner_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["members"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn given_unmark_when_repeated_then_204_and_count_zero() {
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let club = seed_club(&app.pool, &owner).await;
    let chapter = seed_chapter(&app.pool, &club, 1).await;
    let token = token_for(&owner);
    let progress_uri = format!("/api/v1/clubs/{}/chapters/{}/progress", club.id, chapter.id);

    app.send(Method::PUT, &progress_uri, Some(&token), None).await;
    let (first, _) = app.send(Method::DELETE, &progress_uri, Some(&token), None).await;
    let (second, _) = app.send(Method::DELETE, &progress_uri, Some(&token), None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);
    let (_, counts) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}/chapters/{}/counts", club.id, chapter.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(counts["completed"], 0);
    assert_eq!(counts["remaining"], 1);
}

#[tokio::test]
async fn given_non_member_when_reading_counts_then_404_not_zeros() {
    let app = test_app().await;
    let owner = seed_user(&app.pool, "owner").await;
    let stranger = seed_user(&app.pool, "stranger").await;
    let club = seed_club(&app.pool, &owner).await;
    let chapter = seed_chapter(&app.pool, &club, 1).await;

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/v1/clubs/{}/chapters/{}/counts", club.id, chapter.id),
            Some(&token_for(&stranger)),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("completed").is_none());
}
