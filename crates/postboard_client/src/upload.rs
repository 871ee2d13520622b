use crate::Error;
use postboard_core::multipart::{Attachment, FileMeta, MultipartForm, PartValue};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// A file read into memory for a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    #[must_use]
    pub fn new(file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        Ok(Self {
            file_name,
            mime: mime_for(path).to_string(),
            bytes,
        })
    }
}

impl Attachment for Upload {
    fn meta(&self) -> FileMeta {
        FileMeta {
            name: self.file_name.clone(),
            mime: self.mime.clone(),
            size: self.bytes.len() as u64,
        }
    }
}

/// MIME type for the image formats the API stores; anything else is sent as
/// an opaque binary and rejected by validation.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Converts a platform-neutral form into a `reqwest` multipart body.
pub(crate) fn into_form(form: MultipartForm<Upload>) -> Result<Form, Error> {
    form.into_parts()
        .into_iter()
        .try_fold(Form::new(), |body, part| match part.value {
            PartValue::Text(value) => Ok(body.text(part.name, value)),
            PartValue::File(upload) => {
                let file = Part::bytes(upload.bytes)
                    .file_name(upload.file_name)
                    .mime_str(&upload.mime)?;
                Ok(body.part(part.name, file))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("shot.png")), "image/png");
        assert_eq!(mime_for(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn upload_reports_size() {
        let upload = Upload::new("a.png", "image/png", vec![0; 16]);
        let meta = upload.meta();
        assert_eq!(meta.size, 16);
        assert_eq!(meta.mime, "image/png");
    }
}
