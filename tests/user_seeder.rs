mod common;

use common::{MemoryStore, PrefixHasher};
use proshop_seed::{
    credentials::{Argon2Hasher, verify_password},
    exit,
    models::Role,
    seed::{SeedReport, demo_users, seed_users},
};

#[tokio::test]
async fn empty_store_receives_all_three_users() -> anyhow::Result<()> {
    let store = MemoryStore::default();

    let report = seed_users(&store, &PrefixHasher, demo_users()).await?;

    assert_eq!(report, SeedReport { inserted: 3, skipped: 0 });
    assert_eq!(store.user_count(), 3);

    let users = store.users.lock().unwrap().clone();
    let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["john@example.com", "jane@example.com", "admin@example.com"]
    );
    assert_eq!(users[2].role, Role::Admin);
    assert_eq!(users[0].password_hash, "hashed:Password@123");
    assert_eq!(users[1].addresses[0].postal.street, "45 Business Ave");
    Ok(())
}

#[tokio::test]
async fn second_run_skips_everything() -> anyhow::Result<()> {
    let store = MemoryStore::default();

    let first = seed_users(&store, &PrefixHasher, demo_users()).await?;
    let second = seed_users(&store, &PrefixHasher, demo_users()).await?;

    assert_eq!(first, SeedReport { inserted: 3, skipped: 0 });
    assert_eq!(second, SeedReport { inserted: 0, skipped: 3 });
    assert_eq!(store.user_count(), 3);
    Ok(())
}

#[tokio::test]
async fn existing_user_is_left_untouched() -> anyhow::Result<()> {
    let store = MemoryStore::default();
    let existing = store.add_user("Jane Original", "jane@example.com", Role::Admin);

    let report = seed_users(&store, &PrefixHasher, demo_users()).await?;

    assert_eq!(report, SeedReport { inserted: 2, skipped: 1 });
    let users = store.users.lock().unwrap().clone();
    let jane: Vec<_> = users
        .iter()
        .filter(|u| u.email == "jane@example.com")
        .collect();
    assert_eq!(jane.len(), 1);
    assert_eq!(jane[0], &existing);
    Ok(())
}

#[tokio::test]
async fn failed_insert_keeps_earlier_users() {
    let store = MemoryStore::default();
    *store.user_insert_budget.lock().unwrap() = Some(1);

    let result = seed_users(&store, &PrefixHasher, demo_users()).await;

    assert_eq!(exit::status("user seeding", result.map_err(anyhow::Error::from)), exit::FAILURE);
    let users = store.users.lock().unwrap().clone();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "john@example.com");
}

#[tokio::test]
async fn argon2_hashes_are_stored_instead_of_plaintext() -> anyhow::Result<()> {
    let store = MemoryStore::default();

    seed_users(&store, &Argon2Hasher::default(), demo_users()).await?;

    let users = store.users.lock().unwrap().clone();
    let admin = users
        .iter()
        .find(|u| u.email == "admin@example.com")
        .expect("admin seeded");
    assert_ne!(admin.password_hash, "Admin@1234");
    assert!(verify_password(&admin.password_hash, "Admin@1234"));
    Ok(())
}
