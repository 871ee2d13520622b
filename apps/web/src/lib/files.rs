//! Browser file handles for multipart uploads.

use super::errors::AppError;
use postboard_core::multipart::{Attachment, FileMeta, MultipartForm, PartValue};
use web_sys::{FormData, HtmlInputElement};

/// A file picked through an `<input type="file">`.
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile(pub web_sys::File);

impl Attachment for PickedFile {
    fn meta(&self) -> FileMeta {
        FileMeta {
            name: self.0.name(),
            mime: self.0.type_(),
            size: self.0.size() as u64,
        }
    }
}

/// Files currently selected in a file input.
pub fn picked_files(input: &HtmlInputElement) -> Vec<PickedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(PickedFile)
        .collect()
}

/// Object URL for previewing a picked image; revoke it when the preview goes away.
pub fn preview_url(file: &PickedFile) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(&file.0).ok()
}

pub fn revoke_preview(url: &str) {
    if let Err(err) = web_sys::Url::revoke_object_url(url) {
        leptos::logging::warn!("failed to revoke image preview {url}: {err:?}");
    }
}

/// Encodes a form in order; the browser adds the multipart boundary.
pub fn to_form_data(form: MultipartForm<PickedFile>) -> Result<FormData, AppError> {
    let data = FormData::new()
        .map_err(|_| AppError::Serialization("form data is unavailable".to_string()))?;

    for part in form.into_parts() {
        let appended = match part.value {
            PartValue::Text(value) => data.append_with_str(part.name, &value),
            PartValue::File(file) => {
                data.append_with_blob_and_filename(part.name, &file.0, &file.0.name())
            }
        };
        appended.map_err(|_| {
            AppError::Serialization(format!("field {} could not be encoded", part.name))
        })?;
    }

    Ok(data)
}
