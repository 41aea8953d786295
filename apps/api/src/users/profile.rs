use crate::models::user::UserRow;
use crate::upload::{MultipartForm, UploadKind};

/// Splits a comma-separated skills field, trimming entries and dropping blanks.
/// A blank field yields `None`, which leaves the stored list untouched.
pub fn parse_skills(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    )
}

/// A partial profile update. `None` leaves the stored value unchanged.
#[derive(Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn from_form(form: &MultipartForm) -> Self {
        Self {
            fullname: form.text("fullname").map(String::from),
            email: form.text("email").map(String::from),
            phone_number: form.text("phoneNumber").map(String::from),
            bio: form.text("bio").map(String::from),
            skills: form.text("skills").and_then(parse_skills),
        }
    }

    pub fn apply(self, user: &mut UserRow) {
        if let Some(fullname) = self.fullname {
            user.fullname = fullname;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
        if let Some(skills) = self.skills {
            user.skills = skills;
        }
    }
}

/// Stores a hosted upload URL in the profile slot chosen by `kind`.
pub fn apply_upload(user: &mut UserRow, kind: UploadKind, url: String, original_name: Option<String>) {
    match kind {
        UploadKind::Avatar => user.avatar = Some(url),
        UploadKind::Resume => {
            user.resume = Some(url);
            user.resume_original_name = original_name;
        }
        UploadKind::Other => user.upload = Some(url),
    }
}
