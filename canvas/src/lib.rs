//! Drawing surface engine for the RSVP page.
//!
//! The crate owns everything between a raw pointer event and the PNG that gets
//! submitted: mapping viewport coordinates onto the backing raster, drawing
//! round-capped segments, the idle/drawing gesture machine, clearing and
//! export. It is host-agnostic. The embedding host reports the element's
//! bounding box and forwards pointer events, then acts on the returned
//! [`session::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | [`session::DrawingSession`], the per-mount controller |
//! | [`surface`] | Host wrapper holding an optional session |
//! | [`mapper`] | Viewport to raster coordinate mapping |
//! | [`stroke`] | Open-path state and segment drawing |
//! | [`input`] | Pointer event types and gesture state |
//! | [`color`] | Colors, hex parsing and the swatch palette |
//! | [`export`] | PNG data-URI export |
//! | [`consts`] | Line width and default colors |

pub mod color;
pub mod consts;
pub mod export;
pub mod input;
pub mod mapper;
pub mod session;
pub mod stroke;
pub mod surface;

pub use color::{PALETTE, Rgba};
pub use export::{ExportError, RasterExporter};
pub use input::{PointerEvent, PointerPhase};
pub use mapper::ElementRect;
pub use session::{Action, DrawingSession, SurfaceError};
pub use surface::Surface;
