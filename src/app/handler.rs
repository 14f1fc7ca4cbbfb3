//! Event handling and state transitions.
//!
//! ```text
//! key / host event → Event → handle_event → AppState mutation → Vec<Action>
//!                                  ↑                                 │
//!                                  └── worker replies, web replies ──┘
//! ```
//!
//! Every listing change goes through the engine, and the row selection is
//! clamped to the new page afterwards.

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::app::state::CatalogStatus;
use crate::contact::{interpret_response, prepare_delivery, ContactError, ContactOutcome};
use crate::domain::error::Result;
use crate::domain::SortKey;
use crate::worker::WorkerResponse;

/// Events from keys, the host and the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyDown,
    KeyUp,

    NextPage,
    PrevPage,
    FirstPage,
    LastPage,

    /// Enter search mode, typing.
    SearchMode,
    FocusSearchBar,
    /// Leave typing for the results; leaves search when the query is empty.
    FocusResults,
    /// Leave search mode and clear the query.
    ExitSearch,
    Char(char),
    Backspace,
    /// Back out of the current mode.
    Escape,

    OpenTagPicker,
    /// Toggle the tag under the picker cursor.
    ToggleTag,
    ClearTags,

    Sort(SortKey),

    OpenLiveSite,
    OpenSource,

    OpenContact,
    NextField,
    PrevField,
    CycleSubject,
    SubmitContact,
    /// The mail service answered.
    ContactDelivered { status: u16, body: Vec<u8> },
    /// The request never got an answer.
    ContactTransportFailed { error: String },

    CloseFocus,
    WorkerResponse(WorkerResponse),
}

/// Applies `event` and returns whether to re-render plus the side effects.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path uniform.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown | Event::KeyUp => {
            let down = *event == Event::KeyDown;
            match state.input_mode {
                InputMode::TagPicker => state.move_tag_cursor(down),
                InputMode::Contact => {
                    if down {
                        state.contact.focus_next();
                    } else {
                        state.contact.focus_prev();
                    }
                }
                _ if down => state.move_selection_down(),
                _ => state.move_selection_up(),
            }
            Ok((true, vec![]))
        }

        Event::NextPage | Event::PrevPage | Event::FirstPage | Event::LastPage => {
            let moved = match event {
                Event::NextPage => state.engine.next_page(),
                Event::PrevPage => state.engine.prev_page(),
                Event::FirstPage => state.engine.first_page(),
                _ => state.engine.last_page(),
            };
            if moved {
                state.selected_index = 0;
                tracing::debug!(page = state.engine.page(), "page changed");
            }
            Ok((moved, vec![]))
        }

        Event::SearchMode | Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.engine.query().trim().is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.engine.query(), "exiting search");
            state.input_mode = InputMode::Normal;
            set_query(state, String::new());
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                let mut query = state.engine.query().to_string();
                query.push(*c);
                state.input_mode = InputMode::Search(SearchFocus::Typing);
                set_query(state, query);
                Ok((true, vec![]))
            }
            InputMode::Contact => {
                state.contact.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::TagPicker => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                let mut query = state.engine.query().to_string();
                query.pop();
                set_query(state, query);
                Ok((true, vec![]))
            }
            InputMode::Contact => {
                state.contact.backspace();
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::TagPicker => Ok((false, vec![])),
        },
        Event::Escape => {
            match state.input_mode {
                InputMode::Search(_) => {
                    state.input_mode = InputMode::Normal;
                    set_query(state, String::new());
                }
                InputMode::Contact => {
                    state.contact.acknowledge();
                    state.input_mode = InputMode::Normal;
                }
                InputMode::TagPicker => state.input_mode = InputMode::Normal,
                InputMode::Normal => {
                    if state.engine.query().is_empty() && state.engine.selected_tags().is_empty() {
                        return Ok((false, vec![]));
                    }
                    set_query(state, String::new());
                    state.engine.clear_tags();
                    state.clamp_selection();
                }
            }
            Ok((true, vec![]))
        }

        Event::OpenTagPicker => {
            if state.tag_options.is_empty() {
                tracing::debug!("no tags to pick from");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::TagPicker;
            Ok((true, vec![]))
        }
        Event::ToggleTag => {
            let Some(tag) = state.tag_under_cursor().map(ToString::to_string) else {
                return Ok((false, vec![]));
            };
            state.engine.toggle_tag(&tag);
            state.clamp_selection();
            tracing::debug!(tag = %tag, selected = state.engine.selected_tags().len(), "tag toggled");
            Ok((true, vec![]))
        }
        Event::ClearTags => {
            if state.engine.selected_tags().is_empty() {
                return Ok((false, vec![]));
            }
            state.engine.clear_tags();
            state.clamp_selection();
            Ok((true, vec![]))
        }

        Event::Sort(key) => {
            state.engine.request_sort(*key);
            state.clamp_selection();
            tracing::debug!(sort = ?state.engine.sort(), "sort requested");
            Ok((true, vec![]))
        }

        Event::OpenLiveSite | Event::OpenSource => {
            let Some(record) = state.selected_record() else {
                return Ok((false, vec![]));
            };
            let url = if *event == Event::OpenLiveSite {
                &record.live_url
            } else {
                &record.github_url
            };
            if url.trim().is_empty() {
                tracing::debug!(record = %record.id, "record has no such link");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::OpenUrl { url: url.clone() }]))
        }

        Event::OpenContact => {
            state.input_mode = InputMode::Contact;
            Ok((true, vec![]))
        }
        Event::NextField => {
            state.contact.focus_next();
            Ok((true, vec![]))
        }
        Event::PrevField => {
            state.contact.focus_prev();
            Ok((true, vec![]))
        }
        Event::CycleSubject => {
            state.contact.cycle_subject();
            Ok((true, vec![]))
        }
        Event::SubmitContact => {
            let Some(submission) = state.contact.begin_submit() else {
                return Ok((true, vec![]));
            };
            match prepare_delivery(&state.mail, &submission) {
                Ok(request) => {
                    tracing::info!(subject = submission.subject.value(), "sending contact message");
                    Ok((true, vec![Action::SendContact(request)]))
                }
                Err(e) => {
                    state.contact.finish(ContactOutcome::from_result(&Err(e)));
                    Ok((true, vec![]))
                }
            }
        }
        Event::ContactDelivered { status, body } => {
            let result = interpret_response(*status, body);
            let applied = state.contact.finish(ContactOutcome::from_result(&result));
            Ok((applied, vec![]))
        }
        Event::ContactTransportFailed { error } => {
            let result = Err(ContactError::Unexpected(error.clone()));
            let applied = state.contact.finish(ContactOutcome::from_result(&result));
            Ok((applied, vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { records, tags } => {
                tracing::debug!(records = records.len(), tags = tags.len(), "catalog received");
                state.apply_catalog(records.clone(), tags.clone());
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "catalog worker failed");
                state.catalog = CatalogStatus::Failed(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

fn set_query(state: &mut AppState, query: String) {
    state.engine.set_query(query);
    state.clamp_selection();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{FormStatus, MailConfig, Subject};
    use crate::domain::PortfolioRecord;
    use crate::ui::Theme;

    fn catalog() -> Vec<PortfolioRecord> {
        (1..=10)
            .map(|i| {
                let tech = if i % 2 == 0 { "Vue" } else { "React" };
                PortfolioRecord::new(i.to_string(), format!("Author {i}"), format!("Portfolio {i}"))
                    .with_tech([tech])
                    .with_links(format!("https://site{i}.dev"), String::new())
            })
            .collect()
    }

    fn loaded_state(mail: Option<MailConfig>) -> AppState {
        let mut state = AppState::new(Theme::default(), 6, mail, None);
        let response = WorkerResponse::CatalogLoaded {
            records: catalog(),
            tags: vec!["React".to_string(), "Vue".to_string()],
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        state
    }

    fn fill_contact(state: &mut AppState) {
        state.contact.name = "Ada".to_string();
        state.contact.email = "ada@example.com".to_string();
        state.contact.subject = Some(Subject::General);
        state.contact.message = "Hello".to_string();
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn catalog_load_marks_ready() {
        let state = loaded_state(None);
        assert_eq!(state.catalog, CatalogStatus::Ready);
        assert_eq!(state.engine.view().total_pages, 2);
    }

    #[test]
    fn worker_error_marks_failed() {
        let mut state = AppState::new(Theme::default(), 6, None, None);
        let response = WorkerResponse::Error { message: "boom".to_string() };
        assert!(send(&mut state, Event::WorkerResponse(response)).0);
        assert_eq!(state.catalog, CatalogStatus::Failed("boom".to_string()));
    }

    #[test]
    fn paging_resets_selection_and_reports_no_op() {
        let mut state = loaded_state(None);
        send(&mut state, Event::KeyDown);
        assert_eq!(state.selected_index, 1);

        assert_eq!(send(&mut state, Event::NextPage), (true, vec![]));
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.engine.page(), 2);
        assert_eq!(send(&mut state, Event::NextPage), (false, vec![]));
        assert!(send(&mut state, Event::FirstPage).0);
        assert_eq!(state.engine.page(), 1);
    }

    #[test]
    fn typing_filters_and_resets_page() {
        let mut state = loaded_state(None);
        send(&mut state, Event::LastPage);
        send(&mut state, Event::SearchMode);
        for c in "author 1".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.engine.page(), 1);
        assert_eq!(state.engine.view().filtered_count, 2, "Author 1 and Author 10");

        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        send(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.engine.view().filtered_count, 10);
    }

    #[test]
    fn empty_query_leaves_search_on_enter() {
        let mut state = loaded_state(None);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn chars_are_ignored_in_normal_mode() {
        let mut state = loaded_state(None);
        assert_eq!(send(&mut state, Event::Char('x')), (false, vec![]));
        assert_eq!(state.engine.query(), "");
    }

    #[test]
    fn tag_picker_toggles_under_cursor() {
        let mut state = loaded_state(None);
        send(&mut state, Event::OpenTagPicker);
        assert_eq!(state.input_mode, InputMode::TagPicker);

        send(&mut state, Event::KeyDown);
        send(&mut state, Event::ToggleTag);
        assert!(state.engine.selected_tags().contains("Vue"));
        assert_eq!(state.engine.view().filtered_count, 5);

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(send(&mut state, Event::ClearTags).0);
        assert!(!send(&mut state, Event::ClearTags).0);
    }

    #[test]
    fn sort_keeps_page_and_clamps_selection() {
        let mut state = loaded_state(None);
        send(&mut state, Event::LastPage);
        send(&mut state, Event::Sort(SortKey::Author));
        assert_eq!(state.engine.page(), 2);
        send(&mut state, Event::Sort(SortKey::Author));
        send(&mut state, Event::Sort(SortKey::Author));
        assert_eq!(
            state.engine.sort().unwrap().direction,
            crate::listing::SortDirection::Descending
        );
    }

    #[test]
    fn open_links_emit_actions() {
        let mut state = loaded_state(None);
        let (_, actions) = send(&mut state, Event::OpenLiveSite);
        assert_eq!(actions, vec![Action::OpenUrl { url: "https://site1.dev".to_string() }]);

        let (_, actions) = send(&mut state, Event::OpenSource);
        assert!(actions.is_empty(), "blank source link opens nothing");
    }

    #[test]
    fn escape_in_normal_resets_filters() {
        let mut state = loaded_state(None);
        state.engine.toggle_tag("React");
        state.engine.set_query("author");
        assert!(send(&mut state, Event::Escape).0);
        assert!(state.engine.selected_tags().is_empty());
        assert_eq!(state.engine.query(), "");
        assert!(!send(&mut state, Event::Escape).0);
    }

    #[test]
    fn unconfigured_contact_fails_without_request() {
        let mut state = loaded_state(None);
        send(&mut state, Event::OpenContact);
        fill_contact(&mut state);

        let (_, actions) = send(&mut state, Event::SubmitContact);
        assert!(actions.is_empty());
        assert!(matches!(
            state.contact.status(),
            FormStatus::Failed { message } if message.contains("not properly configured")
        ));
    }

    #[test]
    fn configured_contact_sends_once_and_completes() {
        let mail = MailConfig::new("svc", "tpl", "key", None, None);
        let mut state = loaded_state(mail);
        send(&mut state, Event::OpenContact);
        fill_contact(&mut state);

        let (_, actions) = send(&mut state, Event::SubmitContact);
        assert!(matches!(actions.as_slice(), [Action::SendContact(_)]));

        let (_, again) = send(&mut state, Event::SubmitContact);
        assert!(again.is_empty(), "no second request while one is outstanding");

        send(&mut state, Event::ContactDelivered { status: 200, body: b"OK".to_vec() });
        assert!(matches!(state.contact.status(), FormStatus::Sent { .. }));
        assert_eq!(state.contact.name, "");

        let (render, _) = send(&mut state, Event::ContactDelivered { status: 200, body: vec![] });
        assert!(!render, "a stray reply changes nothing");
    }

    #[test]
    fn transport_failure_is_terminal() {
        let mail = MailConfig::new("svc", "tpl", "key", None, None);
        let mut state = loaded_state(mail);
        send(&mut state, Event::OpenContact);
        fill_contact(&mut state);
        send(&mut state, Event::SubmitContact);

        send(&mut state, Event::ContactTransportFailed { error: "timeout".to_string() });
        assert!(matches!(state.contact.status(), FormStatus::Failed { .. }));
        assert_eq!(state.contact.name, "Ada");
    }

    #[test]
    fn contact_keys_move_focus() {
        let mut state = loaded_state(None);
        send(&mut state, Event::OpenContact);
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::Char('a'));
        assert_eq!(state.contact.email, "a");
        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn close_focus_is_an_action() {
        let mut state = loaded_state(None);
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
