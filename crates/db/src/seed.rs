//! Default reference data: the starter life groups and sermon archive.
//!
//! [`seed_defaults`] runs once at startup. Each row is inserted with
//! `ON CONFLICT DO NOTHING` against its natural key (`life_groups.name`,
//! `sermons.title`), so re-running it, or running it from several replicas
//! at once, never duplicates a record.

use crate::models::life_group::NewLifeGroup;
use crate::models::sermon::NewSermon;
use crate::repositories::{LifeGroupRepo, SermonRepo};
use crate::DbPool;

const SAMPLE_YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const SAMPLE_THUMBNAIL_URL: &str = "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg";

/// The five starter life groups, in the order they are listed.
pub const DEFAULT_LIFE_GROUPS: &[NewLifeGroup<'static>] = &[
    NewLifeGroup {
        name: "Faith Foundations",
        description: "A study on the core beliefs of Christianity. Perfect for new believers \
                      or those wanting to strengthen their foundation.",
        leader: "Pastor John",
        schedule: "Tuesdays, 7:00 PM",
        location: "Church Hall A",
        max_members: 12,
        current_members: 8,
        image_url: None,
    },
    NewLifeGroup {
        name: "Marriage & Family",
        description: "Building stronger marriages and families through biblical principles \
                      and community support.",
        leader: "David & Sarah",
        schedule: "Wednesdays, 6:30 PM",
        location: "Fellowship Room",
        max_members: 10,
        current_members: 6,
        image_url: None,
    },
    NewLifeGroup {
        name: "Young Adults Connect",
        description: "For ages 18-30. Navigating life, faith, and purpose together.",
        leader: "Mike Thompson",
        schedule: "Fridays, 7:30 PM",
        location: "Youth Center",
        max_members: 15,
        current_members: 11,
        image_url: None,
    },
    NewLifeGroup {
        name: "Women's Bible Study",
        description: "Deep dive into Scripture with fellowship and prayer. Currently studying \
                      the book of Ruth.",
        leader: "Jennifer Adams",
        schedule: "Thursdays, 10:00 AM",
        location: "Room 201",
        max_members: 12,
        current_members: 9,
        image_url: None,
    },
    NewLifeGroup {
        name: "Men's Breakfast",
        description: "Weekly gathering for men to grow in faith, accountability, and brotherhood.",
        leader: "Robert Chen",
        schedule: "Saturdays, 8:00 AM",
        location: "Cafe Area",
        max_members: 20,
        current_members: 14,
        image_url: None,
    },
];

/// The four starter sermons, newest first.
pub const DEFAULT_SERMONS: &[NewSermon<'static>] = &[
    NewSermon {
        title: "RISE: A New Beginning",
        description: "Pastor John kicks off our RISE series with a powerful message about new \
                      beginnings and God's purpose for your life.",
        speaker: "Pastor John",
        youtube_url: SAMPLE_YOUTUBE_URL,
        thumbnail_url: SAMPLE_THUMBNAIL_URL,
        date: "2025-07-06T00:00:00Z",
        series: Some("RISE"),
    },
    NewSermon {
        title: "Faith Over Fear",
        description: "Learning to trust God in uncertain times. A message of hope and courage.",
        speaker: "Pastor Sarah",
        youtube_url: SAMPLE_YOUTUBE_URL,
        thumbnail_url: SAMPLE_THUMBNAIL_URL,
        date: "2025-06-29T00:00:00Z",
        series: Some("RISE"),
    },
    NewSermon {
        title: "The Power of Community",
        description: "Why we need each other and how God designed us for fellowship.",
        speaker: "Pastor John",
        youtube_url: SAMPLE_YOUTUBE_URL,
        thumbnail_url: SAMPLE_THUMBNAIL_URL,
        date: "2025-06-22T00:00:00Z",
        series: Some("Connected"),
    },
    NewSermon {
        title: "Grace Upon Grace",
        description: "Understanding the depth of God's grace and how it transforms our lives.",
        speaker: "Guest Speaker: Rev. Michael",
        youtube_url: SAMPLE_YOUTUBE_URL,
        thumbnail_url: SAMPLE_THUMBNAIL_URL,
        date: "2025-06-15T00:00:00Z",
        series: Some("Amazing Grace"),
    },
];

/// Rows inserted by one [`seed_defaults`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub life_groups: u64,
    pub sermons: u64,
}

/// Insert any missing default life groups and sermons in one transaction.
pub async fn seed_defaults(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for (position, group) in (0..).zip(DEFAULT_LIFE_GROUPS) {
        if LifeGroupRepo::insert_if_absent(&mut *tx, group, position).await? {
            report.life_groups += 1;
        }
    }
    for sermon in DEFAULT_SERMONS {
        if SermonRepo::insert_if_absent(&mut *tx, sermon).await? {
            report.sermons += 1;
        }
    }

    tx.commit().await?;
    tracing::info!(
        life_groups = report.life_groups,
        sermons = report.sermons,
        "Default reference data seeded",
    );
    Ok(report)
}
