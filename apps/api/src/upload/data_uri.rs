use std::fmt;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::upload::UploadedFile;

/// A file encoded in-line as `data:<mime>;base64,<payload>`.
///
/// This is the form an upload takes between the request and the media host.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUri {
    mime: String,
    extension: String,
    payload: String,
}

impl DataUri {
    /// Encodes an uploaded file. The MIME type is derived from the file
    /// name's extension; a file without a name or extension yields `None`.
    pub fn from_upload(file: &UploadedFile) -> Option<Self> {
        let name = file.file_name.as_deref()?;
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())?
            .to_ascii_lowercase();
        let mime = mime_guess::from_ext(&extension)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Some(Self {
            mime,
            extension,
            payload: STANDARD.encode(&file.bytes),
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Lowercased extension of the original file name, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.payload)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}
