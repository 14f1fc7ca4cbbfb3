//! Application layer between the plugin shim and the domain.
//!
//! ```text
//! User Input → Event → handle_event → AppState → Actions → Zellij API
//!                           ↑                        ↓
//!                           └── worker / web replies ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects the shim executes
//! - [`handler`]: event processing
//! - [`modes`]: input modes
//! - [`state`]: application state and view model computation
//!
//! # Example
//!
//! ```
//! use folio::app::{handle_event, AppState, Event};
//! use folio::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 6, None, None);
//! let (render, actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::{AppState, CatalogStatus};
