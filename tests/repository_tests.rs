//! Integration tests for the SQLite repository
//!
//! Each test builds a fresh schema (in-memory or file-backed) and drives
//! the repository through the public trait only.

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use sakemap::db::{init_database, init_schema};
use sakemap::model::{DrinkRecord, DrinkRecordId, DrinkType, Prefecture};
use sakemap::repository::{DrinkRecordRepository, SqliteDrinkRecordRepository};
use sakemap::stats::prefecture_coverage;
use sakemap::validation::RecordForm;
use sakemap::Error;

async fn setup_repo() -> (SqlitePool, SqliteDrinkRecordRepository) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    (pool.clone(), SqliteDrinkRecordRepository::new(pool))
}

fn full_record() -> DrinkRecord {
    DrinkRecord::new(
        "獺祭 純米大吟醸 磨き二割三分".to_string(),
        Some("旭酒造".to_string()),
        DrinkType::Sake,
        Prefecture::Yamaguchi,
        5,
        Some("/photos/dassai.jpg".to_string()),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        Some("華やかな香り".to_string()),
    )
}

fn minimal_record(prefecture: Prefecture) -> DrinkRecord {
    DrinkRecord::new(
        "テスト".to_string(),
        None,
        DrinkType::Beer,
        prefecture,
        1,
        None,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        None,
    )
}

#[tokio::test]
async fn register_then_search_round_trips_all_fields() {
    let (_pool, repo) = setup_repo().await;
    let record = full_record();

    repo.register(&record).await.unwrap();

    let all = repo.search().await.unwrap();
    assert_eq!(all, vec![record]);
}

#[tokio::test]
async fn register_then_find_by_id() {
    let (_pool, repo) = setup_repo().await;
    let record = minimal_record(Prefecture::Tokyo);

    repo.register(&record).await.unwrap();

    let found = repo.find(record.id()).await.unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn find_absent_id_is_none() {
    let (_pool, repo) = setup_repo().await;
    let found = repo.find(&DrinkRecordId::new()).await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn prefecture_is_stored_as_code_not_display_name() {
    let (pool, repo) = setup_repo().await;
    repo.register(&minimal_record(Prefecture::Kyoto)).await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT prefecture FROM drink_record")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "JP-26");
}

#[tokio::test]
async fn dates_are_stored_as_iso_8601_text() {
    let (pool, repo) = setup_repo().await;
    repo.register(&full_record()).await.unwrap();

    let (drink_date, created_at): (String, String) =
        sqlx::query_as("SELECT drinkDate, createdAt FROM drink_record")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(drink_date, "2024-03-01");
    // e.g. 2024-03-01T19:30:00.123456
    assert!(created_at.contains('T'), "createdAt not ISO-8601: {created_at}");
}

#[tokio::test]
async fn register_duplicate_id_fails_and_keeps_original() {
    let (_pool, repo) = setup_repo().await;
    let record = full_record();
    repo.register(&record).await.unwrap();

    let duplicate = DrinkRecord::reconstruct(
        record.id().clone(),
        "別の銘柄".to_string(),
        None,
        DrinkType::Gin,
        Prefecture::Okinawa,
        2,
        None,
        record.drink_date(),
        None,
        record.created_at(),
    );

    let err = repo.register(&duplicate).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));

    let stored = repo.find(record.id()).await.unwrap().unwrap();
    assert_eq!(stored, record);
}

#[tokio::test]
async fn delete_removes_only_the_target() {
    let (_pool, repo) = setup_repo().await;
    let keep = minimal_record(Prefecture::Nagano);
    let gone = minimal_record(Prefecture::Gifu);
    repo.register(&keep).await.unwrap();
    repo.register(&gone).await.unwrap();

    repo.delete(gone.id()).await.unwrap();

    assert_eq!(repo.find(gone.id()).await.unwrap(), None);
    assert_eq!(repo.search().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn delete_absent_id_succeeds_and_leaves_records_intact() {
    let (_pool, repo) = setup_repo().await;
    let record = minimal_record(Prefecture::Miyagi);
    repo.register(&record).await.unwrap();

    // Pinned behavior: absent id is a silent no-op
    repo.delete(&DrinkRecordId::new()).await.unwrap();

    let all = repo.search().await.unwrap();
    assert_eq!(all, vec![record]);
}

#[tokio::test]
async fn validated_form_submission_persists() {
    let (_pool, repo) = setup_repo().await;
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let form = RecordForm {
        name: "山崎12年".to_string(),
        manufacturer: "サントリー".to_string(),
        drink_type: Some(DrinkType::Whiskey),
        prefecture: Some(Prefecture::Osaka),
        rating: 5,
        photo_path: None,
        drink_date: Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        description: String::new(),
    };
    let record = form.submit(today).unwrap();

    repo.register(&record).await.unwrap();

    let stored = repo.find(record.id()).await.unwrap().unwrap();
    assert_eq!(stored.name(), "山崎12年");
    assert_eq!(stored.manufacturer(), Some("サントリー"));
    assert_eq!(stored.description(), None);
}

#[tokio::test]
async fn coverage_stats_over_persisted_records() {
    let (_pool, repo) = setup_repo().await;
    for prefecture in [
        Prefecture::Akita,
        Prefecture::Akita,
        Prefecture::Akita,
        Prefecture::Hyogo,
        Prefecture::Akita,
        Prefecture::Akita,
    ] {
        repo.register(&minimal_record(prefecture)).await.unwrap();
    }

    let records = repo.search().await.unwrap();
    let stats = prefecture_coverage(&records);

    assert_eq!(stats.total_records, 6);
    assert_eq!(stats.visited_prefectures, 2);
    assert_eq!(stats.total_prefectures, 47);
    let top = stats.most_popular.unwrap();
    assert_eq!(top.prefecture, Prefecture::Akita);
    assert_eq!(top.count, 5);
}

#[tokio::test]
async fn repository_works_through_trait_object() {
    let (_pool, repo) = setup_repo().await;
    let repo: Box<dyn DrinkRecordRepository> = Box::new(repo);

    let record = minimal_record(Prefecture::Fukuoka);
    repo.register(&record).await.unwrap();
    assert_eq!(repo.search().await.unwrap().len(), 1);
}

#[tokio::test]
async fn file_backed_database_persists_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("sake_map.db");

    let record = full_record();
    {
        let pool = init_database(&db_path).await.unwrap();
        let repo = SqliteDrinkRecordRepository::new(pool.clone());
        repo.register(&record).await.unwrap();
        pool.close().await;
    }

    let pool = init_database(&db_path).await.unwrap();
    let repo = SqliteDrinkRecordRepository::new(pool);
    let stored = repo.find(record.id()).await.unwrap();
    assert_eq!(stored, Some(record));
}
