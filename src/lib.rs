//! Folio: a Zellij plugin for browsing a portfolio collection.
//!
//! Folio shows a collection of developer portfolios as a paged table with:
//! - Case-insensitive search over author, description and tech stack
//! - Tag filters from the catalog's tag menu (any selected tag matches)
//! - Sortable columns with a ▲/▼ direction marker
//! - Pagination with a configurable page size
//! - A contact form delivered through the EmailJS HTTP API
//! - Catalog loading on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and input modes                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!     │               │                │             │
//! ┌──────────┐  ┌─────────────┐  ┌──────────┐  ┌────────────┐
//! │ ui/      │  │ listing/    │  │ contact/ │  │ worker/    │
//! │ Render   │  │ Filter,     │  │ Form,    │  │ Catalog    │
//! │ Theming  │  │ sort, page  │  │ EmailJS  │  │ loading    │
//! └──────────┘  └─────────────┘  └──────────┘  └────────────┘
//!                        │                           │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, catalog and infrastructure                 │
//! │  - Portfolio records and errors (domain/)           │
//! │  - JSON catalog sources (catalog/)                  │
//! │  - Host path mapping (infrastructure/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry spans                    │
//! │  - Rotating OTLP JSON file export                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/folio.wasm" {
//!         catalog_path "~/portfolios.json"
//!         page_size "6"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!         open_command "xdg-open"
//!         emailjs_service_id "service_xxx"
//!         emailjs_template_id "template_xxx"
//!         emailjs_public_key "public_xxx"
//!         contact_email "hello@example.com"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, install tracing,
//!    build `AppState`, request permissions and subscribe to events.
//! 2. **Permissions Granted**: post `LoadCatalog` to the worker.
//! 3. **Worker**: read and validate the catalog, reply with records and tags.
//! 4. **UI**: compute the view model per frame and render it; keys become
//!    [`Event`]s and handled events return [`Action`]s for the shim.
//!
//! # Example
//!
//! ```
//! use folio::{handle_event, initialize, Config, Event};
//!
//! let config = Config { page_size: 4, ..Config::default() };
//! let mut state = initialize(&config);
//!
//! for event in [Event::SearchMode, Event::Char('r'), Event::ExitSearch] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.engine.query(), "");
//! # Ok::<(), folio::FolioError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod contact;
pub mod domain;
pub mod infrastructure;
pub mod listing;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{FolioError, PortfolioRecord, Result, SortKey};
pub use ui::Theme;

use crate::contact::MailConfig;
use crate::infrastructure::expand_tilde;
use crate::listing::DEFAULT_PAGE_SIZE;
use std::collections::BTreeMap;

/// Command used to open record links when none is configured.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog JSON file. `~` is mapped to the host mount. `None` uses the
    /// built-in sample catalog.
    pub catalog_path: Option<String>,

    /// Records per page. Default: 6
    pub page_size: usize,

    /// Built-in theme name. Ignored if `theme_file` loads.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`.
    pub theme_name: Option<String>,

    /// Custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Program given a record URL to open it. Default: `xdg-open`
    pub open_command: String,

    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,

    /// Recipient passed to the mail template.
    pub contact_email: Option<String>,

    /// Overrides the EmailJS send endpoint.
    pub emailjs_endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_public_key: None,
            contact_email: None,
            emailjs_endpoint: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. A `page_size` that is zero or not a
    /// number falls back to the default.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use folio::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/portfolios.json".to_string());
    /// map.insert("page_size".to_string(), "10".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path.as_deref(), Some("/host/portfolios.json"));
    /// assert_eq!(config.page_size, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let page_size = get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            catalog_path: get("catalog_path").map(|p| expand_tilde(&p)),
            page_size,
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|p| expand_tilde(&p)),
            trace_level: get("trace_level"),
            open_command: get("open_command").unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
            emailjs_service_id: get("emailjs_service_id"),
            emailjs_template_id: get("emailjs_template_id"),
            emailjs_public_key: get("emailjs_public_key"),
            contact_email: get("contact_email"),
            emailjs_endpoint: get("emailjs_endpoint"),
        }
    }

    /// Mail credentials, or `None` unless service, template and key are all set.
    #[must_use]
    pub fn mail_config(&self) -> Option<MailConfig> {
        MailConfig::new(
            self.emailjs_service_id.as_deref()?,
            self.emailjs_template_id.as_deref()?,
            self.emailjs_public_key.as_deref()?,
            self.contact_email.as_deref(),
            self.emailjs_endpoint.as_deref(),
        )
    }
}

/// Builds the initial application state. The collection stays empty until
/// the worker replies to [`AppState::load_request`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing folio plugin");

    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref());
    let mail = config.mail_config();
    if mail.is_none() {
        tracing::info!("mail service not configured; contact submissions will fail");
    }

    AppState::new(theme, config.page_size, mail, config.catalog_path.clone())
}
