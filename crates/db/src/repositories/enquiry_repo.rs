//! Repository for the `enquiries` table.
//!
//! Every mutation is a single `UPDATE ... RETURNING` statement so concurrent
//! requests against the same enquiry cannot overwrite each other's changes.
//! Mutators return `None` when no enquiry has the given ID.

use pixisphere_core::types::DbId;
use sqlx::PgPool;

use crate::models::enquiry::{CreateEnquiry, Enquiry};

/// Column list for `enquiries` queries.
const COLUMNS: &str = "\
    id, client_id, category_id, city_id, service_date, budget, message, \
    reference_image, assigned_partners, status, created_at, updated_at";

/// Provides persistence and atomic mutation of enquiries.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Insert a new enquiry with status `new`.
    pub async fn create(pool: &PgPool, input: &CreateEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries \
                 (client_id, category_id, city_id, service_date, budget, message, \
                  reference_image, assigned_partners) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(input.client_id)
            .bind(input.category_id)
            .bind(input.city_id)
            .bind(input.service_date)
            .bind(input.budget)
            .bind(&input.message)
            .bind(input.reference_image.as_deref())
            .bind(&input.assigned_partners)
            .fetch_one(pool)
            .await
    }

    /// Find an enquiry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List enquiries, newest first. `limit`/`offset` are expected to be
    /// clamped by the caller.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enquiries \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List every enquiry whose assigned partners include `partner_id`,
    /// newest first.
    pub async fn list_for_partner(
        pool: &PgPool,
        partner_id: DbId,
    ) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enquiries \
             WHERE assigned_partners @> ARRAY[$1::BIGINT] \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(partner_id)
            .fetch_all(pool)
            .await
    }

    /// Append `partner_ids` to the assigned partners.
    ///
    /// No de-duplication: assigning an id that is already present adds it
    /// again.
    pub async fn append_partners(
        pool: &PgPool,
        id: DbId,
        partner_ids: &[DbId],
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries \
             SET assigned_partners = assigned_partners || $2::BIGINT[] \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(partner_ids)
            .fetch_optional(pool)
            .await
    }

    /// Remove every occurrence of each id in `partner_ids` from the assigned
    /// partners. Remaining entries keep their order; ids that are not
    /// assigned are ignored.
    pub async fn remove_partners(
        pool: &PgPool,
        id: DbId,
        partner_ids: &[DbId],
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries \
             SET assigned_partners = ARRAY( \
                 SELECT t.partner_id \
                 FROM unnest(assigned_partners) WITH ORDINALITY AS t(partner_id, ord) \
                 WHERE NOT (t.partner_id = ANY($2::BIGINT[])) \
                 ORDER BY t.ord) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(partner_ids)
            .fetch_optional(pool)
            .await
    }

    /// Set the status. The value must already be validated; the
    /// `ck_enquiries_status` constraint rejects anything else.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an enquiry, returning the deleted row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("DELETE FROM enquiries WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
