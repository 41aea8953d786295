//! The update-profile dialog: form state seeded from the signed-in user,
//! submitted as multipart with the session cookie.

use reqwest::multipart::{Form, Part};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::models::User;
use crate::state::ClientState;

/// A file picked in the dialog, sent as the `file` part.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub bio: String,
    /// Comma separated, as typed.
    pub skills: String,
    pub file: Option<SelectedFile>,
}

impl ProfileForm {
    pub fn seed(user: Option<&User>) -> Self {
        let mut form = Self::default();
        if let Some(user) = user {
            form.sync_text(user);
        }
        form
    }

    /// Copies the user's text fields over; fields the user lacks keep their value.
    fn sync_text(&mut self, user: &User) {
        self.fullname = user.fullname.clone();
        self.email = user.email.clone();
        self.phone_number = user.phone_number.clone();
        if let Some(bio) = &user.profile.bio {
            self.bio = bio.clone();
        }
        self.skills = user.profile.skills.join(", ");
    }

    fn to_multipart(&self) -> Result<Form, ClientError> {
        let mut form = Form::new()
            .text("fullname", self.fullname.clone())
            .text("email", self.email.clone())
            .text("phoneNumber", self.phone_number.clone())
            .text("bio", self.bio.clone())
            .text("skills", self.skills.clone());
        if let Some(file) = &self.file {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)?;
            form = form.part("file", part);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDialog {
    pub open: bool,
    pub form: ProfileForm,
    /// True only while a submit is in flight.
    pub loading: bool,
    /// Message of the last failed submit.
    pub error: Option<String>,
    /// Confirmation of the last successful submit.
    pub notice: Option<String>,
}

impl UpdateProfileDialog {
    pub fn new(user: Option<&User>) -> Self {
        Self {
            form: ProfileForm::seed(user),
            ..Default::default()
        }
    }

    pub fn show(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Re-seeds the text fields after the held user changed. The selected file is kept.
    pub fn sync_from(&mut self, user: &User) {
        self.form.sync_text(user);
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.form.file = file;
    }

    /// Posts the form. On success the new user replaces `state.user` and the
    /// dialog closes; on failure it stays open with `error` set.
    pub async fn submit(&mut self, client: &ApiClient, state: &mut ClientState) -> bool {
        self.loading = true;
        self.error = None;
        let result = match self.form.to_multipart() {
            Ok(form) => client.update_profile(form).await,
            Err(e) => Err(e),
        };
        self.loading = false;

        match result {
            Ok(reply) => {
                info!("Profile {} updated", reply.payload.id);
                self.notice = Some(
                    reply
                        .message
                        .unwrap_or_else(|| "Profile updated".to_string()),
                );
                self.sync_from(&reply.payload);
                state.user = Some(reply.payload);
                self.close();
                true
            }
            Err(e) => {
                warn!("Profile update failed: {e}");
                self.error = Some(e.user_message().to_string());
                false
            }
        }
    }
}
