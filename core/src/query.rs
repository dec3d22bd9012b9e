//! Query URI construction for a single API call.
//!
//! # Design
//! `QueryBuilder` is a value builder: every setter consumes `self` and hands
//! back the extended builder, and `build` consumes it for good. Input is
//! forgiving. Out-of-range pagination is clamped, and `None` or empty values
//! are dropped instead of being emitted as `key=`.

use crate::options::{Command, FamilyType, Flag, HotItemType, ThingType};

/// Placeholder in an endpoint template that receives the command token.
pub const COMMAND_PLACEHOLDER: &str = "{command}";

pub const MIN_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

/// Accumulates query parameters for one command and renders the final URI.
///
/// Parameters keep insertion order. Duplicate keys are kept as-is; the
/// server decides what repeats mean.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct QueryBuilder {
    base_url: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Resolve `template` for `command`, e.g.
    /// `https://boardgamegeek.com/xmlapi2/{command}` → `.../xmlapi2/thing`.
    pub fn new(template: &str, command: Command) -> Self {
        Self {
            base_url: template.replace(COMMAND_PLACEHOLDER, command.as_str()),
            params: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Accumulated `(key, encoded value)` pairs.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn id(self, id: u32) -> Self {
        self.param("id", &id.to_string())
    }

    /// String identifier, typically a comma-separated id list.
    pub fn id_str<'a>(self, id: impl Into<Option<&'a str>>) -> Self {
        self.optional("id", id.into())
    }

    /// Type filter. Several types are joined with a comma into one `type`
    /// parameter; an empty slice adds nothing.
    pub fn thing_types(self, types: &[ThingType]) -> Self {
        let joined = types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.param("type", &joined)
    }

    /// Page number, floored at 1.
    pub fn page(self, page: i32) -> Self {
        self.param("page", &page.max(1).to_string())
    }

    /// Page size, clamped to `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
    pub fn page_size(self, size: i32) -> Self {
        let clamped = size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        self.param("pagesize", &clamped.to_string())
    }

    pub fn query<'a>(self, query: impl Into<Option<&'a str>>) -> Self {
        self.optional("query", query.into())
    }

    pub fn username<'a>(self, username: impl Into<Option<&'a str>>) -> Self {
        self.optional("username", username.into())
    }

    pub fn family_type(self, kind: FamilyType) -> Self {
        self.param("type", kind.as_str())
    }

    pub fn hot_type(self, kind: HotItemType) -> Self {
        self.param("type", kind.as_str())
    }

    /// One `<flag>=1` pair per flag, in the order given.
    pub fn include(self, flags: &[Flag]) -> Self {
        flags
            .iter()
            .fold(self, |builder, flag| builder.param(flag.as_str(), "1"))
    }

    /// One `<flag>=0` pair per flag, in the order given.
    pub fn exclude(self, flags: &[Flag]) -> Self {
        flags
            .iter()
            .fold(self, |builder, flag| builder.param(flag.as_str(), "0"))
    }

    pub fn exclude_subtype(self, subtype: ThingType) -> Self {
        self.param("excludesubtype", subtype.as_str())
    }

    /// Render `base?k=v&k=v`, or the bare base URL when nothing was added.
    pub fn build(self) -> String {
        if self.params.is_empty() {
            return self.base_url;
        }
        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.base_url)
    }

    fn optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    fn param(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.params
                .push((key.to_string(), urlencoding::encode(value).into_owned()));
        }
        self
    }
}
