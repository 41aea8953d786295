use crate::models::User;

pub const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/150";
pub const NOT_AVAILABLE: &str = "NA";

#[derive(Debug, Clone, PartialEq)]
pub enum ResumeDisplay {
    /// Rendered as plain "NA".
    Missing,
    Link { url: String, label: String },
}

/// Read-only display model of the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub avatar_url: String,
    pub fullname: String,
    pub bio: String,
    pub email: String,
    pub phone_number: String,
    /// Badge labels; a single "NA" when the user lists no skills.
    pub skills: Vec<String>,
    pub resume: ResumeDisplay,
}

impl ProfileView {
    pub fn from_user(user: &User) -> Self {
        let profile = &user.profile;

        let skills = if profile.skills.is_empty() {
            vec![NOT_AVAILABLE.to_string()]
        } else {
            profile.skills.clone()
        };

        let resume = match profile.resume.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => ResumeDisplay::Link {
                url: url.to_string(),
                label: profile
                    .resume_original_name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| url.to_string()),
            },
            None => ResumeDisplay::Missing,
        };

        Self {
            avatar_url: profile
                .avatar
                .clone()
                .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string()),
            fullname: user.fullname.clone(),
            bio: profile.bio.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            skills,
            resume,
        }
    }

    /// The text shown under "Resume".
    pub fn resume_text(&self) -> &str {
        match &self.resume {
            ResumeDisplay::Missing => NOT_AVAILABLE,
            ResumeDisplay::Link { label, .. } => label.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::fixtures::user_json;

    fn user(bio: Option<&str>, skills: &[&str]) -> User {
        serde_json::from_value(user_json(Uuid::new_v4(), "Jane Doe", bio, skills)).unwrap()
    }

    #[test]
    fn test_bare_profile_uses_placeholders() {
        let view = ProfileView::from_user(&user(None, &[]));

        assert_eq!(view.avatar_url, AVATAR_PLACEHOLDER);
        assert_eq!(view.skills, vec!["NA"]);
        assert_eq!(view.resume, ResumeDisplay::Missing);
        assert_eq!(view.resume_text(), "NA");
        assert_eq!(view.bio, "");
    }

    #[test]
    fn test_filled_profile_is_shown_as_is() {
        let mut user = user(Some("Rustacean"), &["Rust", "SQL"]);
        user.profile.avatar = Some("https://media.test/a.png".into());
        user.profile.resume = Some("https://media.test/cv.pdf".into());
        user.profile.resume_original_name = Some("jane-cv.pdf".into());

        let view = ProfileView::from_user(&user);

        assert_eq!(view.avatar_url, "https://media.test/a.png");
        assert_eq!(view.skills, vec!["Rust", "SQL"]);
        assert_eq!(view.bio, "Rustacean");
        assert_eq!(
            view.resume,
            ResumeDisplay::Link {
                url: "https://media.test/cv.pdf".into(),
                label: "jane-cv.pdf".into(),
            }
        );
    }

    #[test]
    fn test_resume_without_original_name_is_labelled_with_its_url() {
        let mut user = user(None, &[]);
        user.profile.resume = Some("https://media.test/cv.pdf".into());
        user.profile.resume_original_name = Some(String::new());

        assert_eq!(
            ProfileView::from_user(&user).resume_text(),
            "https://media.test/cv.pdf"
        );
    }
}
