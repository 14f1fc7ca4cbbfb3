//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything the UI shows: the listing
//! engine with its collection and controls, the row selection on the current
//! page, the tag picker cursor, the contact form and the catalog status. The
//! view model is recomputed from it for every frame.

use super::modes::{InputMode, SearchFocus};
use crate::contact::{ContactField, ContactForm, FormStatus, MailConfig};
use crate::domain::{PortfolioRecord, SortKey};
use crate::listing::{ListingEngine, ListingView};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, ContactFieldView, ContactPane, DisplayRow, EmptyState, FooterInfo, HeaderInfo,
    Notice, NoticeKind, PaginationInfo, SearchBarInfo, TagBarInfo, TagOption, UIViewModel,
};
use crate::worker::WorkerMessage;

pub const AUTHOR_WIDTH: usize = 22;
pub const TECH_WIDTH: usize = 34;
pub const COLUMN_GAP: usize = 2;
const MAX_BADGES: usize = 3;

/// Where the collection is in its one-time load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: ListingEngine,

    /// Tag menu offered by the picker.
    pub tag_options: Vec<String>,
    pub tag_cursor: usize,

    /// Selected row within the current page.
    pub selected_index: usize,

    pub input_mode: InputMode,
    pub theme: Theme,

    pub contact: ContactForm,
    /// Mail credentials; `None` makes every submission fail as not configured.
    pub mail: Option<MailConfig>,

    pub catalog: CatalogStatus,
    pub catalog_path: Option<String>,
}

impl AppState {
    /// Creates the state for an empty collection waiting on the worker.
    ///
    /// # Parameters
    ///
    /// * `theme` - Resolved color theme
    /// * `page_size` - Records per page
    /// * `mail` - Mail credentials, `None` when not configured
    /// * `catalog_path` - Catalog file to request, `None` for the built-in sample
    #[must_use]
    pub fn new(
        theme: Theme,
        page_size: usize,
        mail: Option<MailConfig>,
        catalog_path: Option<String>,
    ) -> Self {
        Self {
            engine: ListingEngine::new(Vec::new(), page_size),
            tag_options: Vec::new(),
            tag_cursor: 0,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            contact: ContactForm::default(),
            mail,
            catalog: CatalogStatus::Loading,
            catalog_path,
        }
    }

    /// The worker request that loads this state's catalog.
    #[must_use]
    pub fn load_request(&self) -> WorkerMessage {
        WorkerMessage::load_catalog(self.catalog_path.clone())
    }

    /// Installs a freshly loaded collection and its tag menu.
    pub fn apply_catalog(&mut self, records: Vec<PortfolioRecord>, tags: Vec<String>) {
        self.engine.load_records(records);
        self.tag_options = tags;
        self.tag_cursor = self.tag_cursor.min(self.tag_options.len().saturating_sub(1));
        self.catalog = CatalogStatus::Ready;
        self.clamp_selection();
    }

    /// Keeps the row selection inside the current page.
    pub fn clamp_selection(&mut self) {
        let len = self.engine.view().page_items.len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Moves down one row, wrapping to the top of the page.
    pub fn move_selection_down(&mut self) {
        let len = self.engine.view().page_items.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    /// Moves up one row, wrapping to the bottom of the page.
    pub fn move_selection_up(&mut self) {
        let len = self.engine.view().page_items.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    /// The record under the selection on the current page.
    #[must_use]
    pub fn selected_record(&self) -> Option<&PortfolioRecord> {
        self.engine.view().page_items.get(self.selected_index).copied()
    }

    /// Moves the tag picker cursor one entry, wrapping at either end.
    ///
    /// # Parameters
    ///
    /// * `forward` - `true` moves down the list, `false` up
    pub fn move_tag_cursor(&mut self, forward: bool) {
        let len = self.tag_options.len();
        if len == 0 {
            return;
        }
        self.tag_cursor = if forward {
            (self.tag_cursor + 1) % len
        } else {
            (self.tag_cursor + len - 1) % len
        };
    }

    /// The tag the picker cursor points at; `None` with an empty tag menu.
    #[must_use]
    pub fn tag_under_cursor(&self) -> Option<&str> {
        self.tag_options.get(self.tag_cursor).map(String::as_str)
    }

    /// Builds the view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();
        let view = self.engine.view();

        let show_table = self.input_mode != InputMode::Contact;
        let empty_state = (show_table
            && self.catalog == CatalogStatus::Ready
            && view.filtered_count == 0)
            .then(|| EmptyState {
                message: "No portfolios found".to_string(),
                subtitle: "Try adjusting your search or filter criteria to find what you're looking for."
                    .to_string(),
            });

        let mut vm = UIViewModel {
            header: HeaderInfo {
                title: format!(" Portfolio Collection ({}) ", view.total_count),
            },
            notice: self.compute_notice(),
            search_bar: self.compute_search_bar(),
            tag_bar: self.compute_tag_bar(),
            columns: self.compute_columns(cols),
            rows: if show_table { self.compute_rows(&view, cols) } else { Vec::new() },
            selected_index: self.selected_index,
            count_line: self.compute_count_line(&view),
            pagination: view.has_pagination().then(|| PaginationInfo {
                pages: (1..=view.total_pages).collect(),
                current: view.page,
                can_prev: view.page > 1,
                can_next: view.page < view.total_pages,
            }),
            empty_state,
            contact: (self.input_mode == InputMode::Contact).then(|| self.compute_contact_pane()),
            footer: self.compute_footer(),
        };
        window_rows(&mut vm, rows);
        vm
    }

    fn compute_notice(&self) -> Option<Notice> {
        match &self.catalog {
            CatalogStatus::Loading => Some(Notice {
                kind: NoticeKind::Info,
                text: "Loading portfolios…".to_string(),
            }),
            CatalogStatus::Failed(message) => Some(Notice {
                kind: NoticeKind::Error,
                text: format!("Failed to load portfolios: {message}"),
            }),
            CatalogStatus::Ready => None,
        }
    }

    /// Shown while searching, and whenever a query is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let searching = matches!(self.input_mode, InputMode::Search(_));
        (searching || !self.engine.query().is_empty()).then(|| SearchBarInfo {
            query: self.engine.query().to_string(),
            focused: self.input_mode == InputMode::Search(SearchFocus::Typing),
        })
    }

    fn compute_tag_bar(&self) -> TagBarInfo {
        let selected_tags = self.engine.selected_tags();
        let picker = (self.input_mode == InputMode::TagPicker).then(|| {
            self.tag_options
                .iter()
                .enumerate()
                .map(|(i, tag)| TagOption {
                    label: tag.clone(),
                    selected: selected_tags.contains(tag),
                    is_cursor: i == self.tag_cursor,
                })
                .collect()
        });

        TagBarInfo {
            selected: selected_tags.iter().cloned().collect(),
            picker,
        }
    }

    fn compute_columns(&self, cols: usize) -> Vec<ColumnHeader> {
        let sort = self.engine.sort();
        let arrow_for = |key: SortKey| {
            sort.filter(|s| s.key == key)
                .map(|s| s.direction.arrow())
        };

        vec![
            ColumnHeader {
                label: SortKey::Author.label().to_string(),
                width: AUTHOR_WIDTH,
                arrow: arrow_for(SortKey::Author),
            },
            ColumnHeader {
                label: "TECH STACK".to_string(),
                width: TECH_WIDTH,
                arrow: None,
            },
            ColumnHeader {
                label: SortKey::Description.label().to_string(),
                width: description_width(cols),
                arrow: arrow_for(SortKey::Description),
            },
        ]
    }

    fn compute_rows(&self, view: &ListingView<'_>, cols: usize) -> Vec<DisplayRow> {
        let query = self.engine.query();
        let description_width = description_width(cols);

        view.page_items
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let author = truncate(&record.author, AUTHOR_WIDTH - COLUMN_GAP);
                let description = truncate(&record.description, description_width);
                let extra = record.tech_stack.len().saturating_sub(MAX_BADGES);

                DisplayRow {
                    author_highlights: match_ranges(&author, query),
                    description_highlights: match_ranges(&description, query),
                    author,
                    badges: record.tech_stack.iter().take(MAX_BADGES).cloned().collect(),
                    more: (extra > 0).then(|| format!("+{extra} more")),
                    description,
                    is_selected: i == self.selected_index,
                }
            })
            .collect()
    }

    fn compute_count_line(&self, view: &ListingView<'_>) -> String {
        let mut line = format!(
            "Showing {} of {} portfolios",
            view.page_items.len(),
            view.filtered_count
        );
        if let Some(sort) = self.engine.sort() {
            if !matches!(sort.key, SortKey::Author | SortKey::Description) {
                line.push_str(&format!("  ·  sorted by {} {}", sort.key.label(), sort.direction.arrow()));
            }
        }
        line
    }

    fn compute_contact_pane(&self) -> ContactPane {
        let form = &self.contact;
        let fields = ContactField::ORDER
            .iter()
            .map(|&field| {
                let value = form.value(field);
                ContactFieldView {
                    label: field.label(),
                    is_placeholder: value.is_empty(),
                    value: if value.is_empty() {
                        field.placeholder().to_string()
                    } else {
                        value.to_string()
                    },
                    focused: form.focus() == field,
                    error: form.error_for(field).map(ToString::to_string),
                }
            })
            .collect();

        let banner = match form.status() {
            FormStatus::Idle => None,
            FormStatus::Submitting => Some(Notice {
                kind: NoticeKind::Info,
                text: "Sending…".to_string(),
            }),
            FormStatus::Sent { message, .. } => Some(Notice {
                kind: NoticeKind::Success,
                text: message.clone(),
            }),
            FormStatus::Failed { message } => Some(Notice {
                kind: NoticeKind::Error,
                text: message.clone(),
            }),
        };

        ContactPane {
            fields,
            banner,
            submitting: form.is_submitting(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: move  h/l: page  /: search  t: tags  a/d/i/u/s: sort  Enter: site  o: source  c: contact  q: quit"
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: move  h/l: page  Enter: site  o: source"
            }
            InputMode::TagPicker => "j/k: move  Space/Enter: toggle  x: clear  ESC: done",
            InputMode::Contact => {
                "Tab/↓: next field  ↑: previous  ←/→: subject  Enter: send  ESC: back"
            }
        };
        FooterInfo { keybindings: keybindings.to_string() }
    }
}

/// Lines used by everything but table rows: blank, header, border, tag bar,
/// column headers, gap, count line, pagination, border, footer.
const TABLE_CHROME_ROWS: usize = 10;

/// Drops rows that do not fit, keeping the selection visible.
fn window_rows(vm: &mut UIViewModel, rows: usize) {
    let mut chrome = TABLE_CHROME_ROWS;
    if vm.search_bar.is_some() {
        chrome += 3;
    }
    if vm.notice.is_some() {
        chrome += 1;
    }
    if let Some(picker) = &vm.tag_bar.picker {
        chrome += picker.len().max(1);
    }

    let budget = rows.saturating_sub(chrome).max(1);
    if vm.rows.len() <= budget {
        return;
    }

    let start = (vm.selected_index + 1).saturating_sub(budget);
    vm.rows = vm.rows.drain(start..start + budget).collect();
    vm.selected_index -= start;
}

/// Width left for descriptions after the fixed columns.
#[must_use]
pub const fn description_width(cols: usize) -> usize {
    cols.saturating_sub(AUTHOR_WIDTH + TECH_WIDTH + COLUMN_GAP)
}
