//! Integration tests for enquiry persistence and atomic partner/status updates.

use chrono::{TimeZone, Utc};
use pixisphere_db::models::enquiry::{CreateEnquiry, Enquiry};
use pixisphere_db::models::user::CreateUser;
use pixisphere_db::repositories::{CategoryRepo, EnquiryRepo, LocationRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_client(pool: &PgPool) -> i64 {
    let input = CreateUser {
        full_name: "Test Client".to_string(),
        email: "client@test.com".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role_id: 3,
        city_id: None,
        category_id: None,
        is_verified: true,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

async fn create_enquiry(pool: &PgPool, assigned_partners: Vec<i64>) -> Enquiry {
    let client_id = create_client(pool).await;
    let category = CategoryRepo::get_or_create(pool, "wedding").await.unwrap();
    let city = LocationRepo::get_or_create(pool, "Pune").await.unwrap();

    let input = CreateEnquiry {
        client_id,
        category_id: Some(category.id),
        city_id: Some(city.id),
        service_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        budget: 50_000.0,
        message: "need shoot".to_string(),
        reference_image: None,
        assigned_partners,
    };
    EnquiryRepo::create(pool, &input).await.unwrap()
}

// ---------------------------------------------------------------------------
// Creation and reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_sets_defaults(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![10, 11]).await;

    assert_eq!(enquiry.status, "new");
    assert_eq!(enquiry.reference_image, "");
    assert_eq!(enquiry.assigned_partners, vec![10, 11]);
    assert_eq!(enquiry.budget, 50_000.0);

    let found = EnquiryRepo::find_by_id(&pool, enquiry.id).await.unwrap().unwrap();
    assert_eq!(found.id, enquiry.id);
    assert_eq!(found.service_date, enquiry.service_date);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_status_is_rejected_by_check_constraint(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![]).await;

    let err = EnquiryRepo::set_status(&pool, enquiry.id, "archived")
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("ck_enquiries_status"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_for_partner_returns_only_assigned(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![7, 8]).await;

    let for_seven = EnquiryRepo::list_for_partner(&pool, 7).await.unwrap();
    assert_eq!(for_seven.len(), 1);
    assert_eq!(for_seven[0].id, enquiry.id);

    let for_nine = EnquiryRepo::list_for_partner(&pool, 9).await.unwrap();
    assert!(for_nine.is_empty());
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_append_does_not_deduplicate(pool: PgPool) {
    // Repeated assignment duplicates the id. Kept as observed behaviour; it is
    // most likely a defect rather than an assignment counter.
    let enquiry = create_enquiry(&pool, vec![1]).await;

    EnquiryRepo::append_partners(&pool, enquiry.id, &[2]).await.unwrap();
    let updated = EnquiryRepo::append_partners(&pool, enquiry.id, &[2])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.assigned_partners, vec![1, 2, 2]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_drops_all_occurrences_and_keeps_order(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![5, 1, 2, 1, 3]).await;

    let updated = EnquiryRepo::remove_partners(&pool, enquiry.id, &[1, 99])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.assigned_partners, vec![5, 2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_everything_leaves_empty_list(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![4]).await;

    let updated = EnquiryRepo::remove_partners(&pool, enquiry.id, &[4])
        .await
        .unwrap()
        .unwrap();

    assert!(updated.assigned_partners.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_appends_are_not_lost(pool: PgPool) {
    let enquiry_id = create_enquiry(&pool, vec![]).await.id;

    let tasks: Vec<_> = (1..=10_i64)
        .map(|partner| {
            let pool = pool.clone();
            tokio::spawn(async move {
                EnquiryRepo::append_partners(&pool, enquiry_id, &[partner])
                    .await
                    .unwrap();
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let mut partners = EnquiryRepo::find_by_id(&pool, enquiry_id)
        .await
        .unwrap()
        .unwrap()
        .assigned_partners;
    partners.sort_unstable();
    assert_eq!(partners, (1..=10).collect::<Vec<i64>>());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_mutators_return_none_for_missing_enquiry(pool: PgPool) {
    assert!(EnquiryRepo::append_partners(&pool, 9999, &[1]).await.unwrap().is_none());
    assert!(EnquiryRepo::remove_partners(&pool, 9999, &[1]).await.unwrap().is_none());
    assert!(EnquiryRepo::set_status(&pool, 9999, "closed").await.unwrap().is_none());
    assert!(EnquiryRepo::delete(&pool, 9999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_permanent_and_keeps_reference_data(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![]).await;

    let deleted = EnquiryRepo::delete(&pool, enquiry.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, enquiry.id);

    assert!(EnquiryRepo::find_by_id(&pool, enquiry.id).await.unwrap().is_none());
    assert!(CategoryRepo::find_by_name(&pool, "wedding").await.unwrap().is_some());
    assert!(LocationRepo::find_by_city(&pool, "Pune").await.unwrap().is_some());
}

/// A client with enquiries cannot be deleted out from under them.
#[sqlx::test(migrations = "./migrations")]
async fn test_client_with_enquiries_cannot_be_deleted(pool: PgPool) {
    let enquiry = create_enquiry(&pool, vec![]).await;

    let err = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(enquiry.client_id)
        .execute(&pool)
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
    assert!(EnquiryRepo::find_by_id(&pool, enquiry.id).await.unwrap().is_some());
}
