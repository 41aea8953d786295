use mime::Mime;

/// Where an uploaded file lands on the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Any `image/*` type.
    Avatar,
    /// `application/pdf`.
    Resume,
    /// Everything else, kept in the generic upload slot.
    Other,
}

impl UploadKind {
    pub fn classify(content_type: &str) -> Self {
        let Ok(mime) = content_type.trim().parse::<Mime>() else {
            return UploadKind::Other;
        };
        if mime.type_() == mime::IMAGE {
            UploadKind::Avatar
        } else if mime.essence_str() == mime::APPLICATION_PDF.essence_str() {
            UploadKind::Resume
        } else {
            UploadKind::Other
        }
    }
}
