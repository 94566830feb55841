//! Parsed form submissions.
//!
//! The HTTP layer decodes a request body into [`FormFields`]; everything past
//! that point works on this model and never sees the raw stream.

use std::collections::HashMap;

/// One file part of a multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    media_type: String,
    size: usize,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }

    /// Client-supplied filename, exactly as sent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client-declared media type. Empty when the part carried no Content-Type.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Number of payload bytes received for the part.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(UploadedFile),
}

impl FieldValue {
    pub fn as_file(&self) -> Option<&UploadedFile> {
        match self {
            FieldValue::File(file) => Some(file),
            FieldValue::Text(_) => None,
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::File(_) => "file",
        }
    }
}

/// Field name to value mapping for one request.
///
/// Inserting a name that is already present replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: HashMap<String, FieldValue>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, FieldValue::Text(value.into()));
    }

    pub fn insert_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.insert(name, FieldValue::File(file));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}
