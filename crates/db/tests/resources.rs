use chrono::{Duration, SubsecRound, Utc};
use highfields_core::checkins::{start_of_utc_day, TODAY_LIST_LIMIT};
use highfields_core::types::new_record_id;
use highfields_db::models::checkin::{CheckIn, CreateCheckIn};
use highfields_db::models::donation::CreateDonation;
use highfields_db::models::sermon::Sermon;
use highfields_db::models::volunteer::{CreateVolunteer, Volunteer};
use highfields_db::repositories::{CheckInRepo, ResourceRepo, Submission};
use sqlx::PgPool;

fn checkin(name: &str) -> CreateCheckIn {
    CreateCheckIn {
        name: name.to_string(),
        phone: None,
        is_first_time: true,
        notes: Some("Came with family".to_string()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_assigns_id_and_timestamp(pool: PgPool) {
    let started = Utc::now().trunc_subsecs(6);
    let created = checkin("Ruth").insert(&pool).await.unwrap();

    assert_eq!(created.name, "Ruth");
    assert!(created.is_first_time);
    assert_eq!(created.notes.as_deref(), Some("Came with family"));
    assert!(created.phone.is_none());
    assert!(created.timestamp >= started);

    let listed = ResourceRepo::list::<CheckIn>(&pool).await.unwrap();
    assert!(listed.iter().any(|c| c.id == created.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_newest_first(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        checkin(name).insert(&pool).await.unwrap();
    }

    let listed = ResourceRepo::list::<CheckIn>(&pool).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    assert_eq!(listed[0].name, "Third");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_capped(pool: PgPool) {
    sqlx::query(
        "INSERT INTO checkins (id, name, created_at) \
         SELECT gen_random_uuid(), 'Guest ' || n, NOW() - (n || ' seconds')::interval \
         FROM generate_series(1, 120) AS n",
    )
    .execute(&pool)
    .await
    .unwrap();

    let listed = ResourceRepo::list::<CheckIn>(&pool).await.unwrap();
    assert_eq!(listed.len(), 100);
    assert_eq!(listed[0].name, "Guest 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_since_excludes_older(pool: PgPool) {
    let yesterday = Utc::now() - Duration::days(1);
    sqlx::query("INSERT INTO checkins (id, name, created_at) VALUES ($1, 'Old', $2)")
        .bind(new_record_id())
        .bind(yesterday)
        .execute(&pool)
        .await
        .unwrap();
    let fresh = checkin("New").insert(&pool).await.unwrap();

    let since = Utc::now() - Duration::hours(1);
    let listed = CheckInRepo::list_since(&pool, since, 1_000).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, fresh.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_today_list_is_capped(pool: PgPool) {
    let since = start_of_utc_day(Utc::now());
    sqlx::query(
        "INSERT INTO checkins (id, name, created_at) \
         SELECT gen_random_uuid(), 'Guest ' || n, $1::timestamptz + (n || ' microseconds')::interval \
         FROM generate_series(1, 1050) AS n",
    )
    .bind(since)
    .execute(&pool)
    .await
    .unwrap();

    let listed = CheckInRepo::list_since(&pool, since, TODAY_LIST_LIMIT)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1_000);
    assert_eq!(listed[0].name, "Guest 1050");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_today_starts_exactly_at_utc_midnight(pool: PgPool) {
    let since = start_of_utc_day(Utc::now());
    for (name, at) in [
        ("Just before", since - Duration::microseconds(1)),
        ("At midnight", since),
    ] {
        sqlx::query("INSERT INTO checkins (id, name, created_at) VALUES ($1, $2, $3)")
            .bind(new_record_id())
            .bind(name)
            .bind(at)
            .execute(&pool)
            .await
            .unwrap();
    }

    let listed = CheckInRepo::list_since(&pool, since, TODAY_LIST_LIMIT)
        .await
        .unwrap();
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["At midnight"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_volunteer_keeps_ministry_area_order(pool: PgPool) {
    let input = CreateVolunteer {
        name: "Boaz".to_string(),
        email: "boaz@example.com".to_string(),
        phone: "555-0101".to_string(),
        ministry_areas: vec!["Worship".into(), "Kids".into(), "Hospitality".into()],
        availability: "Sundays".to_string(),
        notes: None,
    };
    let created = input.insert(&pool).await.unwrap();
    assert_eq!(created.ministry_areas, input.ministry_areas);

    let found = ResourceRepo::find_by_id::<Volunteer>(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.ministry_areas, ["Worship", "Kids", "Hospitality"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = ResourceRepo::find_by_id::<Sermon>(&pool, new_record_id())
        .await
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn donation_validation_rejects_unknown_type() {
    let input = CreateDonation {
        name: "Naomi".to_string(),
        email: "naomi@example.com".to_string(),
        amount: 50.0,
        donation_type: "weekly".to_string(),
        message: None,
    };
    assert!(input.validate().unwrap_err().contains("donation_type"));
}

#[test]
fn checkin_validation_requires_name() {
    let mut input = checkin("   ");
    assert_eq!(input.validate().unwrap_err(), "name is required");
    input.name = "Ruth".to_string();
    assert!(input.validate().is_ok());
}
