use highfields_db::models::life_group::LifeGroup;
use highfields_db::models::sermon::Sermon;
use highfields_db::repositories::ResourceRepo;
use highfields_db::seed::{seed_defaults, SeedReport, DEFAULT_LIFE_GROUPS, DEFAULT_SERMONS};
use sqlx::PgPool;

#[test]
fn default_sets_have_expected_sizes() {
    assert_eq!(DEFAULT_LIFE_GROUPS.len(), 5);
    assert_eq!(DEFAULT_SERMONS.len(), 4);
}

#[test]
fn default_groups_have_sane_counts() {
    for group in DEFAULT_LIFE_GROUPS {
        assert!(group.max_members > 0, "{}", group.name);
        assert!(group.current_members >= 0, "{}", group.name);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_populates_empty_store(pool: PgPool) {
    let report = seed_defaults(&pool).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            life_groups: 5,
            sermons: 4
        }
    );

    assert_eq!(ResourceRepo::count::<LifeGroup>(&pool).await.unwrap(), 5);
    assert_eq!(ResourceRepo::count::<Sermon>(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    seed_defaults(&pool).await.unwrap();
    let second = seed_defaults(&pool).await.unwrap();

    assert_eq!(second, SeedReport::default());
    assert_eq!(ResourceRepo::count::<LifeGroup>(&pool).await.unwrap(), 5);
    assert_eq!(ResourceRepo::count::<Sermon>(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_seeds_do_not_duplicate(pool: PgPool) {
    let runs = (0..4).map(|_| {
        let pool = pool.clone();
        tokio::spawn(async move { seed_defaults(&pool).await })
    });
    let reports: Vec<SeedReport> = futures::future::join_all(runs)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    let inserted_groups: u64 = reports.iter().map(|r| r.life_groups).sum();
    let inserted_sermons: u64 = reports.iter().map(|r| r.sermons).sum();
    assert_eq!(inserted_groups, 5);
    assert_eq!(inserted_sermons, 4);
    assert_eq!(ResourceRepo::count::<Sermon>(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_keeps_existing_counters(pool: PgPool) {
    seed_defaults(&pool).await.unwrap();
    sqlx::query("UPDATE life_groups SET current_members = 3 WHERE name = 'Men''s Breakfast'")
        .execute(&pool)
        .await
        .unwrap();

    seed_defaults(&pool).await.unwrap();

    let groups = ResourceRepo::list::<LifeGroup>(&pool).await.unwrap();
    let breakfast = groups
        .iter()
        .find(|g| g.name == "Men's Breakfast")
        .unwrap();
    assert_eq!(breakfast.current_members, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_sermons_list_newest_first(pool: PgPool) {
    seed_defaults(&pool).await.unwrap();

    let sermons = ResourceRepo::list::<Sermon>(&pool).await.unwrap();
    let titles: Vec<&str> = sermons.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "RISE: A New Beginning",
            "Faith Over Fear",
            "The Power of Community",
            "Grace Upon Grace",
        ]
    );
    assert!(sermons.windows(2).all(|w| w[0].date >= w[1].date));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_groups_list_in_definition_order(pool: PgPool) {
    seed_defaults(&pool).await.unwrap();

    let groups = ResourceRepo::list::<LifeGroup>(&pool).await.unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    let expected: Vec<&str> = DEFAULT_LIFE_GROUPS.iter().map(|g| g.name).collect();
    assert_eq!(names, expected);
}
