//! Upload adapter: multipart file -> data URI -> hosted URL.

pub mod data_uri;
pub mod form;
pub mod kind;
pub mod media_host;

pub use data_uri::DataUri;
pub use form::{MultipartForm, UploadedFile};
pub use kind::UploadKind;
pub use media_host::{MediaHost, S3MediaHost};
