//! Gallery state: the submissions shown under the form.
//!
//! DESIGN
//! ======
//! The list mirrors the server's newest-first list as of the last successful
//! fetch. It is only ever replaced wholesale; a failed fetch leaves it
//! untouched and records a message instead.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use protocol::Submission;

/// Gallery list plus fetch status.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    items: Vec<Submission>,
    pub loading: bool,
    pub error: Option<String>,
}

/// One rendered gallery card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry<'a> {
    pub name: &'a str,
    /// Used directly as the image source.
    pub image_src: &'a str,
    pub alt: String,
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched list. No merging with the previous one.
    pub fn replace_all(&mut self, items: Vec<Submission>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Record a failed fetch; the current items stay.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    #[must_use]
    pub fn items(&self) -> &[Submission] {
        &self.items
    }

    /// The gallery section renders only when there is something to show.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<GalleryEntry<'_>> {
        self.items
            .iter()
            .map(|s| GalleryEntry { name: &s.name, image_src: &s.drawing, alt: alt_text(&s.name) })
            .collect()
    }
}

#[must_use]
pub fn alt_text(name: &str) -> String {
    format!("Drawing by {name}")
}
