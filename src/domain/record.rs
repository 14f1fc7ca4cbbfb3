//! Portfolio record domain model.
//!
//! A [`PortfolioRecord`] is one entry of the portfolio collection: an author, a
//! short description, the technologies used and a few link fields. Records are
//! loaded once from the catalog and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the portfolio collection.
///
/// The serialized form uses the camelCase field names of the catalog file
/// (`techStack`, `liveUrl`, `githubUrl`). Ids may be written as JSON strings or
/// numbers; both load into the same string id.
///
/// # Examples
///
/// ```
/// use folio::domain::PortfolioRecord;
///
/// let record: PortfolioRecord = serde_json::from_str(r#"{
///     "id": 3,
///     "author": "Ada Lovelace",
///     "description": "Analytical engine notes",
///     "techStack": ["Svelte", "SCSS"],
///     "screenshot": "/shots/ada.png",
///     "liveUrl": "https://ada.dev",
///     "githubUrl": "https://github.com/ada/site"
/// }"#).unwrap();
///
/// assert_eq!(record.id, "3");
/// assert!(record.has_tag("Svelte"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub screenshot: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
}

impl PortfolioRecord {
    /// Creates a record with an id, author and description; link fields and the
    /// tech stack start empty.
    #[must_use]
    pub fn new(id: impl Into<String>, author: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            description: description.into(),
            tech_stack: Vec::new(),
            screenshot: String::new(),
            live_url: String::new(),
            github_url: String::new(),
        }
    }

    /// Builder-style helper that replaces the tech stack.
    #[must_use]
    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper that sets the live site and source links.
    #[must_use]
    pub fn with_links(mut self, live_url: impl Into<String>, github_url: impl Into<String>) -> Self {
        self.live_url = live_url.into();
        self.github_url = github_url.into();
        self
    }

    /// Returns `true` when `tag` is present in the tech stack (exact, case-sensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tech_stack.iter().any(|t| t == tag)
    }
}

/// Column a listing can be sorted by.
///
/// Every key addresses a string field of [`PortfolioRecord`]; the tech stack is a
/// list and is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Author,
    Description,
    LiveUrl,
    GithubUrl,
}

impl SortKey {
    /// Returns the field value this key sorts on.
    #[must_use]
    pub fn value<'a>(&self, record: &'a PortfolioRecord) -> &'a str {
        match self {
            Self::Id => &record.id,
            Self::Author => &record.author,
            Self::Description => &record.description,
            Self::LiveUrl => &record.live_url,
            Self::GithubUrl => &record.github_url,
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Author => "AUTHOR",
            Self::Description => "DESCRIPTION",
            Self::LiveUrl => "LIVE SITE",
            Self::GithubUrl => "SOURCE",
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_numeric_ids_both_load() {
        let a: PortfolioRecord = serde_json::from_str(r#"{"id":"p-1","author":"A"}"#).unwrap();
        let b: PortfolioRecord = serde_json::from_str(r#"{"id":42,"author":"B"}"#).unwrap();
        assert_eq!(a.id, "p-1");
        assert_eq!(b.id, "42");
        assert!(b.tech_stack.is_empty());
        assert_eq!(b.description, "");
    }

    #[test]
    fn has_tag_is_case_sensitive() {
        let r = PortfolioRecord::new("1", "A", "").with_tech(["React"]);
        assert!(r.has_tag("React"));
        assert!(!r.has_tag("react"));
    }

    #[test]
    fn sort_key_reads_the_matching_field() {
        let r = PortfolioRecord::new("9", "Grace", "compilers").with_links("https://g.dev", "https://github.com/g");
        assert_eq!(SortKey::Id.value(&r), "9");
        assert_eq!(SortKey::Author.value(&r), "Grace");
        assert_eq!(SortKey::Description.value(&r), "compilers");
        assert_eq!(SortKey::LiveUrl.value(&r), "https://g.dev");
        assert_eq!(SortKey::GithubUrl.value(&r), "https://github.com/g");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let r = PortfolioRecord::new("1", "A", "d").with_tech(["Vue"]);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("techStack").is_some());
        assert!(json.get("liveUrl").is_some());
        assert!(json.get("tech_stack").is_none());
    }
}
