//! RSVP client: submission flow, gallery state and the page model.
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | `RsvpApi` seam and the reqwest transport |
//! | [`submit`] | Validation, in-flight guard, create/list calls |
//! | [`gallery`] | Newest-first gallery list and fetch status |
//! | [`page`] | Form + drawing surface + gallery, driven by one owner |
//! | [`error`] | Error taxonomy and user notices |
//! | [`config`] | Base URL, size limit and timeouts |

pub mod api;
pub mod config;
pub mod error;
pub mod gallery;
pub mod page;
pub mod submit;

pub use api::{HttpApi, RsvpApi};
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, ValidationError};
pub use gallery::GalleryState;
pub use page::RsvpPage;
pub use submit::SubmissionClient;
