//! Query composition over the `posts` collection
//!
//! [`PostQuery`] describes one list request (page, page size, sort, filter,
//! expansion) and [`PostQueries`] turns it into a single backend call. The
//! derived operations used by the pages (featured, latest, related, single
//! post) are all thin, constrained calls on top of it.

mod composer;
mod error;

use std::fmt;
use std::str::FromStr;

use crate::backend::ListParams;

pub use composer::{PostQueries, POSTS};
pub use error::FetchError;

/// Sort order: one field, ascending or descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    field: String,
    descending: bool,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }

    /// Creation time, newest first
    pub fn newest_first() -> Self {
        Self::desc("created")
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::newest_first()
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

impl FromStr for Sort {
    type Err = String;

    /// Parse `-field` (descending), `+field` or `field` (ascending)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (field, descending) = match s.strip_prefix('-') {
            Some(field) => (field, true),
            None => (s.strip_prefix('+').unwrap_or(s), false),
        };
        if field.is_empty() {
            return Err(format!("empty sort field in {:?}", s));
        }
        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }
}

/// Filter expression in the backend's predicate syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(String);

impl Filter {
    /// Use an expression verbatim
    pub fn raw(expression: &str) -> Self {
        Self(expression.trim().to_string())
    }

    /// `field = "value"`
    pub fn eq(field: &str, value: &str) -> Self {
        Self(format!("{} = {}", field, quote(value)))
    }

    /// `field != "value"`
    pub fn not_eq(field: &str, value: &str) -> Self {
        Self(format!("{} != {}", field, quote(value)))
    }

    /// Both this and `other` must hold
    pub fn and(self, other: Filter) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => other,
            (_, true) => self,
            _ => Self(format!("({}) && ({})", self.0, other.0)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quote a string literal, escaping backslashes and double quotes
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Default relation expanded on post queries
pub const DEFAULT_EXPAND: &str = "author";

/// One list request against the `posts` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort: Sort,
    pub filter: Option<Filter>,
    pub expand: Option<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            sort: Sort::newest_first(),
            filter: None,
            expand: Some(DEFAULT_EXPAND.to_string()),
        }
    }
}

impl PostQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page number, clamped to at least 1
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Page size, clamped to at least 1
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Set the filter; an empty expression clears it
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    pub fn expand(mut self, relation: &str) -> Self {
        self.expand = Some(relation.to_string());
        self
    }

    pub fn no_expand(mut self) -> Self {
        self.expand = None;
        self
    }

    /// Wire parameters for the backend list call
    pub fn to_params(&self) -> ListParams {
        ListParams {
            page: self.page,
            per_page: self.per_page,
            sort: Some(self.sort.to_string()),
            filter: self.filter.as_ref().map(|f| f.to_string()),
            expand: self.expand.clone(),
        }
    }
}

/// One page of results plus totals over the whole filtered set
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub items: Vec<T>,
}

impl<T> PagedResult<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
