//! Image file selection for the post editor.
//!
//! The file input advertises `accept="image/*"`, but browsers let users pick
//! any file through "All files", so the MIME type is checked again here before
//! the file is attached to a multipart body.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Value for the file input's `accept` attribute.
pub const IMAGE_ACCEPT: &str = "image/*";

/// A picked image file plus the metadata needed to validate and send it.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub name: String,
    pub mime: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// Whether a MIME type passes the `image/*` filter.
pub fn accepts_image(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    mime.strip_prefix("image/").is_some_and(|subtype| !subtype.is_empty())
}

/// Reason shown when a picked file is rejected.
pub fn rejection_message(name: &str) -> String {
    format!("{name} is not an image")
}

impl ImageUpload {
    /// Wrap a browser `File`, rejecting anything that is not an image.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the file's type is not `image/*`.
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Result<Self, String> {
        let name = file.name();
        let mime = file.type_();
        if !accepts_image(&mime) {
            return Err(rejection_message(&name));
        }
        Ok(Self { name, mime, file })
    }

    /// Object URL for an `<img>` preview of the picked file.
    pub fn preview_url(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::Url::create_object_url_with_blob(&self.file).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Whether `url` was minted by [`ImageUpload::preview_url`] and must be released.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Free an object URL from an earlier preview. Server image URLs are left alone.
pub fn release_preview(url: &str) {
    if !is_object_url(url) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

/// What the editor keeps after the file input changes.
#[derive(Clone, Debug)]
pub struct PickOutcome {
    /// File to send on submit; `None` keeps the post's current image.
    pub image: Option<ImageUpload>,
    pub preview: Option<String>,
    pub error: Option<String>,
}

/// Resolve a file-input change against the post's `existing` image.
///
/// A cleared or rejected pick drops any earlier upload and shows the existing
/// image again.
pub fn resolve_pick(picked: Result<Option<ImageUpload>, String>, existing: Option<String>) -> PickOutcome {
    match picked {
        Ok(Some(upload)) => {
            let preview = upload.preview_url().or(existing);
            PickOutcome { image: Some(upload), preview, error: None }
        }
        Ok(None) => PickOutcome { image: None, preview: existing, error: None },
        Err(message) => PickOutcome { image: None, preview: existing, error: Some(message) },
    }
}

/// Read the first file from a change event on an `<input type="file">`.
///
/// Returns `Ok(None)` when the selection was cleared.
///
/// # Errors
///
/// Returns a user-facing message when the picked file is not an image.
#[cfg(feature = "hydrate")]
pub fn image_from_event(ev: &leptos::ev::Event) -> Result<Option<ImageUpload>, String> {
    let input: web_sys::HtmlInputElement = leptos::prelude::event_target(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    match ImageUpload::from_file(file) {
        Ok(upload) => Ok(Some(upload)),
        Err(message) => {
            input.set_value("");
            Err(message)
        }
    }
}
