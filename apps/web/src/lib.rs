//! Client-side logic of the job board: a credentialed HTTP client, a
//! caller-owned state container, and the view models behind the profile page.

pub mod client;
pub mod error;
pub mod loaders;
pub mod models;
pub mod profile_page;
pub mod profile_view;
pub mod state;
pub mod update_profile;

pub use client::ApiClient;
pub use error::ClientError;
pub use loaders::{load_applied_jobs, CompanyLoader};
pub use profile_page::ProfilePage;
pub use profile_view::ProfileView;
pub use state::ClientState;
pub use update_profile::{ProfileForm, SelectedFile, UpdateProfileDialog};
