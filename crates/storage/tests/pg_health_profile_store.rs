//! Postgres-backed store tests. Each test gets a fresh database with
//! migrations applied; run with `DATABASE_URL` pointing at a Postgres
//! server and `--ignored`.

use sqlx::PgPool;
use storage::{Database, HealthProfile, HealthProfileStore};

fn sample_profile() -> HealthProfile {
    HealthProfile {
        gender: Some("female".to_string()),
        age: Some(30),
        height: Some(165.0),
        weight: Some(60.0),
        goal_type: Some("fat-loss".to_string()),
        target_weight: Some(55.0),
        period: Some(3),
        activity_level: Some("light".to_string()),
        body_fat_rate: Some(27.5),
        waistline: Some(72.0),
        living_habits: Some("early riser".to_string()),
        sleep_quality: Some("good".to_string()),
        stress_level: Some("medium".to_string()),
        diet_preference: Some("vegetarian".to_string()),
        allergens: Some("seafood".to_string()),
        ..Default::default()
    }
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres server reachable through DATABASE_URL"]
async fn test_save_then_find_by_id(pool: PgPool) -> anyhow::Result<()> {
    let store = Database::from_pool(pool).health_profiles();
    let submitted = sample_profile();

    let stored = store.save(submitted.clone()).await?;
    let id = stored.id.expect("identity column assigns an id");
    assert_eq!(stored, submitted.clone().with_id(id));

    let found = store.find_by_id(id).await?;
    assert_eq!(found, Some(submitted.with_id(id)));

    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres server reachable through DATABASE_URL"]
async fn test_save_with_existing_id_replaces_row(pool: PgPool) -> anyhow::Result<()> {
    let store = Database::from_pool(pool).health_profiles();
    let id = store.save(sample_profile()).await?.id.unwrap();

    let replacement = HealthProfile {
        id: Some(id),
        weight: Some(58.0),
        ..Default::default()
    };
    let stored = store.save(replacement.clone()).await?;
    assert_eq!(stored, replacement);

    let found = store.find_by_id(id).await?.unwrap();
    assert_eq!(found.weight, Some(58.0));
    assert_eq!(found.gender, None);
    assert_eq!(found.allergens, None);
    assert_eq!(store.find_all().await?.len(), 1);

    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres server reachable through DATABASE_URL"]
async fn test_save_with_unknown_id_inserts(pool: PgPool) -> anyhow::Result<()> {
    let store = Database::from_pool(pool).health_profiles();

    let stored = store.save(sample_profile().with_id(12345)).await?;

    assert!(stored.id.is_some());
    assert_ne!(stored.id, Some(12345));
    assert!(store.find_by_id(12345).await?.is_none());

    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres server reachable through DATABASE_URL"]
async fn test_find_all(pool: PgPool) -> anyhow::Result<()> {
    let store = Database::from_pool(pool).health_profiles();
    assert!(store.find_all().await?.is_empty());

    let mut ids = Vec::new();
    for age in [25, 35, 45] {
        let profile = HealthProfile {
            age: Some(age),
            ..sample_profile()
        };
        ids.push(store.save(profile).await?.id.unwrap());
    }

    let all = store.find_all().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().filter_map(|p| p.id).collect::<Vec<_>>(), ids);
    assert_eq!(
        all.iter().filter_map(|p| p.age).collect::<Vec<_>>(),
        vec![25, 35, 45]
    );

    Ok(())
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres server reachable through DATABASE_URL"]
async fn test_find_by_unknown_id(pool: PgPool) -> anyhow::Result<()> {
    let store = Database::from_pool(pool).health_profiles();

    assert!(store.find_by_id(1).await?.is_none());

    Ok(())
}
