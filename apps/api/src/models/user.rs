use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses and applies to jobs.
    Student,
    /// Owns companies and posts jobs.
    Recruiter,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "recruiter" => Ok(Role::Recruiter),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// A row of the `users` table. The profile sub-record is stored inline.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Role,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
    pub upload: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a user at registration.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Role,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub resume_original_name: Option<String>,
    pub upload: Option<String>,
}

/// The user as it may be shown to a client: everything but the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjection {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub profile: Profile,
}

/// Applicant details embedded in a job's application list.
#[derive(Debug, Clone, Serialize)]
pub struct Applicant {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub profile: Profile,
}

impl UserRow {
    pub fn profile(&self) -> Profile {
        Profile {
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            avatar: self.avatar.clone(),
            resume: self.resume.clone(),
            resume_original_name: self.resume_original_name.clone(),
            upload: self.upload.clone(),
        }
    }

    pub fn projection(&self) -> UserProjection {
        UserProjection {
            id: self.id,
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            role: self.role,
            profile: self.profile(),
        }
    }

    pub fn applicant(&self) -> Applicant {
        Applicant {
            id: self.id,
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            profile: self.profile(),
        }
    }
}
