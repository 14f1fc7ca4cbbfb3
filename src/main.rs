//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Folio library and the Zellij plugin
//! system. Every host call lives here; the library only sees [`Event`]s and
//! returns [`Action`]s.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  FolioWorker     │   │  ← Catalog loading
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! - `Key` → mode-dependent [`Event`] (see [`State::map_key_event`])
//! - `CustomMessage("folio", ..)` → `Event::WorkerResponse`
//! - `WebRequestResult` tagged as a contact send → `Event::ContactDelivered`
//! - `PermissionRequestResult(Granted)` → initial `LoadCatalog` request
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`k`, `Down`/`Up`, `Ctrl+n`/`Ctrl+p`: move selection
//! - `h`/`l`, `Left`/`Right`: previous/next page; `g`/`G`: first/last page
//! - `/`: search; `t`: tag picker; `x`: clear tags
//! - `a`/`d`/`i`/`u`/`s`: sort by author/description/id/live site/source
//! - `Enter`: open live site; `o`: open source; `c`: contact form
//! - `Esc`: clear filters; `q`: close

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use folio::app::AppState;
use folio::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use folio::{handle_event, Action, Config, Event, InputMode, SearchFocus, SortKey};

register_plugin!(State);
register_worker!(FolioWorker, folio_worker, FOLIO_WORKER);

const WORKER_NAME: &str = "folio";
const CONTEXT_KEY: &str = "folio";
const CONTACT_CONTEXT: &str = "contact";
const OPEN_CONTEXT: &str = "open";

/// Zellij worker registration around the library's catalog worker.
#[derive(Default, Serialize, Deserialize)]
struct FolioWorker {
    #[serde(skip)]
    inner: CatalogWorker,
}

impl ZellijWorker<'_> for FolioWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if let Some(reply) = self.inner.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload: reply,
                worker_name: None,
            });
        }
    }
}

struct State {
    app: AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Program that opens record links.
    open_command: String,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: folio::initialize(&config),
            worker_name: WORKER_NAME.to_string(),
            open_command: config.open_command,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the app state, requests permissions and
    /// subscribes to events. The catalog is requested once permissions are
    /// granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        folio::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            catalog_path = ?config.catalog_path,
            page_size = config.page_size,
            "parsed configuration"
        );

        self.app = folio::initialize(&config);
        self.open_command.clone_from(&config.open_command);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::RunCommands,
            PermissionType::WebAccess,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %span_name,
            event_type = %event_name
        )
        .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Self::log_command_result(exit_code, &stderr, &context);
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        folio::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keys per input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_results_key(key),
            InputMode::TagPicker => Self::map_tag_picker_key(key),
            InputMode::Contact => Self::map_contact_key(key),
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('t') => Event::OpenTagPicker,
            BareKey::Char('x') => Event::ClearTags,
            BareKey::Char('a') => Event::Sort(SortKey::Author),
            BareKey::Char('d') => Event::Sort(SortKey::Description),
            BareKey::Char('i') => Event::Sort(SortKey::Id),
            BareKey::Char('u') => Event::Sort(SortKey::LiveUrl),
            BareKey::Char('s') => Event::Sort(SortKey::GithubUrl),
            BareKey::Enter => Event::OpenLiveSite,
            BareKey::Char('o') => Event::OpenSource,
            BareKey::Char('c') => Event::OpenContact,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter | BareKey::Down => Event::FocusResults,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_results_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Enter => Event::OpenLiveSite,
            BareKey::Char('o') => Event::OpenSource,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_tag_picker_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char(' ') | BareKey::Enter => Event::ToggleTag,
            BareKey::Char('x') => Event::ClearTags,
            BareKey::Esc | BareKey::Char('t') => Event::Escape,
            _ => return None,
        })
    }

    fn map_contact_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Left | BareKey::Right => Event::CycleSubject,
            BareKey::Enter => Event::SubmitContact,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading catalog");
                self.post_worker_message(&self.app.load_request());
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be loaded");
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Only replies to our contact request are of interest. The host reports
    /// transport failures with status 0 or a body-only error.
    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(CONTEXT_KEY).map(String::as_str) != Some(CONTACT_CONTEXT) {
            return None;
        }

        tracing::debug!(status, body_len = body.len(), "contact delivery result");
        if status == 0 {
            Some(Event::ContactTransportFailed {
                error: String::from_utf8_lossy(&body).into_owned(),
            })
        } else {
            Some(Event::ContactDelivered { status, body })
        }
    }

    fn log_command_result(exit_code: Option<i32>, stderr: &[u8], context: &BTreeMap<String, String>) {
        if context.get(CONTEXT_KEY).map(String::as_str) != Some(OPEN_CONTEXT) {
            return;
        }
        if exit_code == Some(0) {
            tracing::debug!(url = ?context.get("url"), "link opened");
        } else {
            tracing::warn!(
                exit_code = ?exit_code,
                url = ?context.get("url"),
                stderr = %String::from_utf8_lossy(stderr),
                "failed to open link"
            );
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(message),
            Action::OpenUrl { url } => {
                let context = BTreeMap::from([
                    (CONTEXT_KEY.to_string(), OPEN_CONTEXT.to_string()),
                    ("url".to_string(), url.clone()),
                ]);
                run_command(&[self.open_command.as_str(), url.as_str()], context);
            }
            Action::SendContact(request) => {
                let context =
                    BTreeMap::from([(CONTEXT_KEY.to_string(), CONTACT_CONTEXT.to_string())]);
                web_request(
                    &request.url,
                    HttpVerb::Post,
                    request.headers.clone(),
                    request.body.clone(),
                    context,
                );
            }
        }
    }
}
