use crate::client::ApiClient;
use crate::loaders::load_applied_jobs;
use crate::profile_view::ProfileView;
use crate::state::ClientState;
use crate::update_profile::UpdateProfileDialog;

/// The profile page: the signed-in user's details, the update dialog, and
/// the applied-jobs table fed from `ClientState::applied_jobs`.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    /// `None` while nobody is signed in.
    pub view: Option<ProfileView>,
    pub dialog: UpdateProfileDialog,
}

impl ProfilePage {
    /// Builds the page from `state` and loads the caller's applications.
    pub async fn mount(client: &ApiClient, state: &mut ClientState) -> Self {
        let page = Self::render(state);
        load_applied_jobs(client, state).await;
        page
    }

    fn render(state: &ClientState) -> Self {
        Self {
            view: state.user.as_ref().map(ProfileView::from_user),
            dialog: UpdateProfileDialog::new(state.user.as_ref()),
        }
    }

    /// Rebuilds the view after `state.user` changed, keeping the dialog's
    /// open flag and selected file.
    pub fn refresh(&mut self, state: &ClientState) {
        self.view = state.user.as_ref().map(ProfileView::from_user);
        if let Some(user) = &state.user {
            self.dialog.sync_from(user);
        }
    }
}
