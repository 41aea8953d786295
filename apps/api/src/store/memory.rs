//! In-memory `JobBoardStore` for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::application::{ApplicationRow, ApplicationStatus, AppliedJob, JobApplication};
use crate::models::company::{CompanyRow, CompanySummary};
use crate::models::job::{JobDetail, JobListing, JobRow, NewJob};
use crate::models::user::{NewUser, UserRow};
use crate::store::{JobBoardStore, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    companies: Vec<CompanyRow>,
    jobs: Vec<JobRow>,
    applications: Vec<ApplicationRow>,
    /// Makes every call fail, to exercise 500 paths.
    broken: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn break_backend(&self) {
        self.tables.lock().unwrap().broken = true;
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn job_count(&self) -> usize {
        self.tables.lock().unwrap().jobs.len()
    }

    pub fn user(&self, id: Uuid) -> Option<UserRow> {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn insert_company(&self, name: &str, owner: Uuid) -> CompanyRow {
        let now = Utc::now();
        let company = CompanyRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            website: Some(format!("https://{}.example", name.to_lowercase())),
            location: Some("Remote".to_string()),
            logo: None,
            user_id: owner,
            created_at: now,
            updated_at: now,
        };
        self.tables.lock().unwrap().companies.push(company.clone());
        company
    }

    pub fn insert_application(&self, job_id: Uuid, applicant_id: Uuid) -> ApplicationRow {
        let application = ApplicationRow {
            id: Uuid::new_v4(),
            job_id,
            applicant_id,
            status: ApplicationStatus::Pending,
            created_at: Utc::now(),
        };
        self.tables
            .lock()
            .unwrap()
            .applications
            .push(application.clone());
        application
    }
}

impl Tables {
    fn check(&self) -> StoreResult<()> {
        if self.broken {
            return Err(StoreError::Other(anyhow::anyhow!("backend unavailable")));
        }
        Ok(())
    }

    fn listing(&self, job: &JobRow) -> StoreResult<JobListing> {
        let company = self
            .companies
            .iter()
            .find(|c| c.id == job.company_id)
            .ok_or_else(|| anyhow::anyhow!("company {} missing", job.company_id))?;
        Ok(JobListing {
            job: job.clone(),
            company: CompanySummary::from(company),
        })
    }

    /// Newest first, like `ORDER BY created_at DESC`.
    fn listings<'a>(&self, jobs: impl Iterator<Item = &'a JobRow>) -> StoreResult<Vec<JobListing>> {
        let mut jobs: Vec<&JobRow> = jobs.collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs.into_iter().map(|j| self.listing(j)).collect()
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn create_job(&self, job: NewJob) -> StoreResult<JobRow> {
        let mut tables = self.tables.lock().unwrap();
        tables.check()?;
        if !tables.companies.iter().any(|c| c.id == job.company_id) {
            return Err(StoreError::UnknownCompany);
        }
        // Strictly increasing timestamps keep "newest first" deterministic.
        let created_at = tables
            .jobs
            .iter()
            .map(|j| j.created_at + Duration::milliseconds(1))
            .max()
            .unwrap_or_else(Utc::now);
        let row = JobRow {
            id: Uuid::new_v4(),
            title: job.title,
            description: job.description,
            requirements: job.requirements,
            salary: job.salary,
            location: job.location,
            job_type: job.job_type,
            experience_level: job.experience_level,
            position: job.position,
            company_id: job.company_id,
            created_by: job.created_by,
            created_at,
            updated_at: created_at,
        };
        tables.jobs.push(row.clone());
        Ok(row)
    }

    async fn search_jobs(&self, keyword: &str) -> StoreResult<Vec<JobListing>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        let needle = keyword.to_lowercase();
        tables.listings(tables.jobs.iter().filter(|j| {
            j.title.to_lowercase().contains(&needle)
                || j.description.to_lowercase().contains(&needle)
        }))
    }

    async fn find_job(&self, job_id: Uuid) -> StoreResult<Option<JobDetail>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        let Some(job) = tables.jobs.iter().find(|j| j.id == job_id) else {
            return Ok(None);
        };
        let applications = tables
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .filter_map(|a| {
                let applicant = tables.users.iter().find(|u| u.id == a.applicant_id)?;
                Some(JobApplication {
                    id: a.id,
                    status: a.status,
                    created_at: a.created_at,
                    applicant: applicant.applicant(),
                })
            })
            .collect();
        Ok(Some(JobDetail {
            listing: tables.listing(job)?,
            applications,
        }))
    }

    async fn jobs_created_by(&self, user_id: Uuid) -> StoreResult<Vec<JobListing>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        tables.listings(tables.jobs.iter().filter(|j| j.created_by == user_id))
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> StoreResult<Option<UserRow>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow> {
        let mut tables = self.tables.lock().unwrap();
        tables.check()?;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let now = Utc::now();
        let row = UserRow {
            id: Uuid::new_v4(),
            fullname: user.fullname,
            email: user.email,
            phone_number: user.phone_number,
            password_hash: user.password_hash,
            role: user.role,
            bio: None,
            skills: Vec::new(),
            avatar: user.avatar,
            resume: None,
            resume_original_name: None,
            upload: None,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn update_user(&self, user: &UserRow) -> StoreResult<UserRow> {
        let mut tables = self.tables.lock().unwrap();
        tables.check()?;
        if tables
            .users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::DuplicateEmail);
        }
        let stored = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| anyhow::anyhow!("user {} missing", user.id))?;
        *stored = UserRow {
            updated_at: Utc::now(),
            ..user.clone()
        };
        Ok(stored.clone())
    }

    async fn applications_by_applicant(&self, user_id: Uuid) -> StoreResult<Vec<AppliedJob>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        let mut applied = tables
            .applications
            .iter()
            .filter(|a| a.applicant_id == user_id)
            .map(|a| -> StoreResult<AppliedJob> {
                let job = tables
                    .jobs
                    .iter()
                    .find(|j| j.id == a.job_id)
                    .ok_or_else(|| anyhow::anyhow!("job {} missing", a.job_id))?;
                Ok(AppliedJob {
                    id: a.id,
                    status: a.status,
                    created_at: a.created_at,
                    job: tables.listing(job)?,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;
        applied.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applied)
    }

    async fn find_company(&self, company_id: Uuid) -> StoreResult<Option<CompanyRow>> {
        let tables = self.tables.lock().unwrap();
        tables.check()?;
        Ok(tables.companies.iter().find(|c| c.id == company_id).cloned())
    }
}
