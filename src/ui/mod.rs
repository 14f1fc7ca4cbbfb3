//! Terminal UI for the portfolio listing.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable snapshot of the UI
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: per-section renderers
//! - [`helpers`]: cursor placement, truncation and match highlighting
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ColumnHeader, ContactFieldView, ContactPane, DisplayRow, EmptyState, FooterInfo, HeaderInfo,
    Notice, NoticeKind, PaginationInfo, SearchBarInfo, TagBarInfo, TagOption, UIViewModel,
};
