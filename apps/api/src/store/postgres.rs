use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::application::{ApplicantApplicationRow, AppliedJob, AppliedJobRow};
use crate::models::company::CompanyRow;
use crate::models::job::{JobDetail, JobListing, JobRow, NewJob};
use crate::models::user::{NewUser, UserRow};
use crate::store::{JobBoardStore, StoreResult};

/// Job columns plus the aliased company summary columns read by `JobListing`.
const LISTING_SELECT: &str = r#"
    SELECT j.*,
           c.name     AS company_name,
           c.logo     AS company_logo,
           c.location AS company_location,
           c.website  AS company_website
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
"#;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the keyword is matched literally.
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn create_job(&self, job: NewJob) -> StoreResult<JobRow> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs
                (id, title, description, requirements, salary, location,
                 job_type, experience_level, position, company_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(job.salary)
        .bind(&job.location)
        .bind(&job.job_type)
        .bind(&job.experience_level)
        .bind(job.position)
        .bind(job.company_id)
        .bind(job.created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn search_jobs(&self, keyword: &str) -> StoreResult<Vec<JobListing>> {
        let pattern = format!("%{}%", escape_like(keyword));
        debug!("Searching jobs with pattern {pattern:?}");
        let query = format!(
            "{LISTING_SELECT} WHERE j.title ILIKE $1 OR j.description ILIKE $1 ORDER BY j.created_at DESC"
        );
        Ok(sqlx::query_as::<_, JobListing>(&query)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_job(&self, job_id: Uuid) -> StoreResult<Option<JobDetail>> {
        let query = format!("{LISTING_SELECT} WHERE j.id = $1");
        let Some(listing) = sqlx::query_as::<_, JobListing>(&query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let applications = sqlx::query_as::<_, ApplicantApplicationRow>(
            r#"
            SELECT a.id AS application_id, a.status, a.created_at AS applied_at, u.*
            FROM applications a
            JOIN users u ON u.id = a.applicant_id
            WHERE a.job_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(JobDetail {
            listing,
            applications: applications.into_iter().map(Into::into).collect(),
        }))
    }

    async fn jobs_created_by(&self, user_id: Uuid) -> StoreResult<Vec<JobListing>> {
        let query = format!("{LISTING_SELECT} WHERE j.created_by = $1 ORDER BY j.created_at DESC");
        Ok(sqlx::query_as::<_, JobListing>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> StoreResult<Option<UserRow>> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        Ok(sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, fullname, email, phone_number, password_hash, role, avatar)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.avatar)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_user(&self, user: &UserRow) -> StoreResult<UserRow> {
        Ok(sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET fullname = $2, email = $3, phone_number = $4, bio = $5, skills = $6,
                avatar = $7, resume = $8, resume_original_name = $9, upload = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.bio)
        .bind(&user.skills)
        .bind(&user.avatar)
        .bind(&user.resume)
        .bind(&user.resume_original_name)
        .bind(&user.upload)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn applications_by_applicant(&self, user_id: Uuid) -> StoreResult<Vec<AppliedJob>> {
        let rows = sqlx::query_as::<_, AppliedJobRow>(
            r#"
            SELECT a.id AS application_id, a.status, a.created_at AS applied_at,
                   j.*,
                   c.name     AS company_name,
                   c.logo     AS company_logo,
                   c.location AS company_location,
                   c.website  AS company_website
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            JOIN companies c ON c.id = j.company_id
            WHERE a.applicant_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_company(&self, company_id: Uuid) -> StoreResult<Option<CompanyRow>> {
        Ok(
            sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
                .bind(company_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
