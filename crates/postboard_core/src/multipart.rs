//! Platform-neutral multipart payloads.
//!
//! A [`MultipartForm`] is an ordered list of named parts. It is generic over
//! the file handle so the browser can carry `web_sys::File` objects straight
//! into a `FormData`, while native clients carry bytes read from disk.

/// Metadata the validators need from an attached file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// MIME type as reported by the platform, e.g. `image/png`.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
}

/// A file handle that can report its metadata.
pub trait Attachment {
    fn meta(&self) -> FileMeta;
}

impl Attachment for FileMeta {
    fn meta(&self) -> FileMeta {
        self.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartForm<F> {
    parts: Vec<Part<F>>,
}

impl<F> MultipartForm<F> {
    #[must_use]
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    #[must_use]
    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.parts.push(Part {
            name,
            value: PartValue::Text(value.into()),
        });
        self
    }

    #[must_use]
    pub fn file(mut self, name: &'static str, file: F) -> Self {
        self.parts.push(Part {
            name,
            value: PartValue::File(file),
        });
        self
    }

    #[must_use]
    pub fn files(self, name: &'static str, files: impl IntoIterator<Item = F>) -> Self {
        files
            .into_iter()
            .fold(self, |form, file| form.file(name, file))
    }

    #[must_use]
    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    #[must_use]
    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    /// Text value of the first part called `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::Text(value) if part.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Names of all parts, in order, for diagnostics and tests.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|part| part.name).collect()
    }
}

impl<F> Default for MultipartForm<F> {
    fn default() -> Self {
        Self::new()
    }
}
