//! Input modes.
//!
//! The mode decides how keys are interpreted and which panes are drawn:
//!
//! - **Normal**: browse the table, sort, page, open links
//! - **Search**: edit the query (`Typing`) or move through results (`Navigating`)
//! - **TagPicker**: choose tag filters from the catalog's tag menu
//! - **Contact**: fill in and submit the contact form

/// Focus within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query.
    Typing,
    /// j/k move through the filtered page; `/` returns to typing.
    Navigating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search(SearchFocus),
    TagPicker,
    Contact,
}

impl InputMode {
    /// Whether printable keys should be delivered as text.
    #[must_use]
    pub const fn takes_text(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::Contact)
    }
}
