use bc_core::{Chapter, Club, Member, Progress, User};
use bc_db::{
    ChapterRepository, ClubRepository, MemberRepository, ProgressRepository, UserRepository,
};

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

pub const TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

/// Inserts a user named `name` with email `<name>@example.com`
pub async fn seed_user(pool: &SqlitePool, name: &str) -> User {
    let user = User::new(format!("{}@example.com", name), name.to_string());
    UserRepository::new(pool.clone())
        .create(&user, TEST_PASSWORD_HASH)
        .await
        .expect("Failed to create test user");
    user
}

/// Inserts a club owned by `owner`, with the owner as its first member
pub async fn seed_club(pool: &SqlitePool, owner: &User) -> Club {
    let club = Club::new("Test Club".to_string(), owner.id);
    ClubRepository::new(pool.clone())
        .create(&club)
        .await
        .expect("Failed to create test club");
    seed_member(pool, &club, owner, 3600).await;
    club
}

/// Inserts an active member row that joined `joined_secs_ago` seconds ago
pub async fn seed_member(
    pool: &SqlitePool,
    club: &Club,
    user: &User,
    joined_secs_ago: i64,
) -> Member {
    let mut member = Member::new(club.id, user.id);
    member.created_at = Utc::now() - Duration::seconds(joined_secs_ago);
    MemberRepository::new(pool.clone())
        .create(&member)
        .await
        .expect("Failed to create test member");
    member
}

pub async fn seed_chapter(pool: &SqlitePool, club: &Club, position: i32) -> Chapter {
    let chapter = Chapter::new(club.id, format!("Chapter {}", position), position);
    ChapterRepository::new(pool.clone())
        .create(&chapter)
        .await
        .expect("Failed to create test chapter");
    chapter
}

pub async fn seed_progress(pool: &SqlitePool, chapter: &Chapter, user: &User) -> Progress {
    let progress = Progress::new(chapter.id, user.id);
    ProgressRepository::new(pool.clone())
        .mark_complete(&progress)
        .await
        .expect("Failed to create test progress");
    progress
}
