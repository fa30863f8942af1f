//! In-memory record store used by tests

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{Backend, BackendError, ErrorKind, ListParams, Record, RecordList};

/// Understands the subset of the PocketBase query language the blog emits:
/// single-field sort, `field = "v"` / `field != "v"` filters joined by `&&`,
/// and single-relation expansion resolved against the `users` collection.
#[derive(Default)]
pub struct MemoryBackend {
    collections: HashMap<String, Vec<Record>>,
    failures: HashMap<&'static str, ErrorKind>,
    calls: Mutex<Vec<(String, ListParams)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend where every call fails as if the host were down
    pub fn offline() -> Self {
        Self::new()
            .failing("list", ErrorKind::Transport)
            .failing("get_one", ErrorKind::Transport)
    }

    /// Make every `list` or `get_one` call fail with the given kind
    pub fn failing(mut self, operation: &'static str, kind: ErrorKind) -> Self {
        self.failures.insert(operation, kind);
        self
    }

    pub fn insert(&mut self, collection: &str, record: Record) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// List calls received so far
    pub fn list_calls(&self) -> Vec<(String, ListParams)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, operation: &str) -> Result<(), BackendError> {
        let Some(kind) = self.failures.get(operation) else {
            return Ok(());
        };
        Err(match kind {
            ErrorKind::Transport => {
                let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "offline");
                BackendError::Transport(Box::new(err))
            }
            ErrorKind::NotFound => {
                BackendError::NotFound("The requested resource wasn't found.".to_string())
            }
            ErrorKind::MalformedQuery => BackendError::MalformedQuery(
                "Something went wrong while processing your request.".to_string(),
            ),
            ErrorKind::Unexpected => BackendError::Unexpected {
                status: 500,
                message: "internal error".to_string(),
            },
        })
    }

    fn expand(&self, mut record: Record, expand: Option<&str>) -> Record {
        let Some(field) = expand.filter(|e| !e.is_empty()) else {
            return record;
        };
        let related = record
            .get(field)
            .and_then(Value::as_str)
            .and_then(|id| {
                self.collections
                    .get("users")?
                    .iter()
                    .find(|user| user["id"] == id)
                    .cloned()
            });
        if let Some(related) = related {
            let mut expanded = serde_json::Map::new();
            expanded.insert(field.to_string(), related);
            record["expand"] = Value::Object(expanded);
        }
        record
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    fn base_url(&self) -> &str {
        "http://127.0.0.1:8090"
    }

    async fn list(
        &self,
        collection: &str,
        params: &ListParams,
    ) -> Result<RecordList, BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push((collection.to_string(), params.clone()));
        self.check("list")?;

        let mut records: Vec<Record> = self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();

        if let Some(filter) = params.filter.as_deref().filter(|f| !f.is_empty()) {
            let predicates = parse_filter(filter)?;
            records.retain(|r| predicates.iter().all(|p| p.matches(r)));
        }

        if let Some(sort) = params.sort.as_deref().filter(|s| !s.is_empty()) {
            let (field, descending) = match sort.strip_prefix('-') {
                Some(field) => (field, true),
                None => (sort.trim_start_matches('+'), false),
            };
            if field.is_empty() || !field.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(BackendError::MalformedQuery(format!("invalid sort {sort}")));
            }
            records.sort_by(|a, b| {
                let a = a.get(field).map(Value::to_string).unwrap_or_default();
                let b = b.get(field).map(Value::to_string).unwrap_or_default();
                if descending {
                    b.cmp(&a)
                } else {
                    a.cmp(&b)
                }
            });
        }

        let total_items = records.len() as u64;
        let per_page = params.per_page.max(1);
        let total_pages = records.len().div_ceil(per_page as usize) as u32;
        let skip = (params.page.max(1) as usize - 1) * per_page as usize;

        let items = records
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .map(|r| self.expand(r, params.expand.as_deref()))
            .collect();

        Ok(RecordList {
            page: params.page.max(1),
            per_page,
            total_items,
            total_pages,
            items,
        })
    }

    async fn get_one(
        &self,
        collection: &str,
        id: &str,
        expand: Option<&str>,
    ) -> Result<Record, BackendError> {
        self.check("get_one")?;

        self.collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| r["id"] == id))
            .cloned()
            .map(|r| self.expand(r, expand))
            .ok_or_else(|| {
                BackendError::NotFound("The requested resource wasn't found.".to_string())
            })
    }
}

struct Predicate {
    field: String,
    value: String,
    negated: bool,
}

impl Predicate {
    fn matches(&self, record: &Record) -> bool {
        let actual = record.get(&self.field).and_then(Value::as_str);
        (actual == Some(self.value.as_str())) != self.negated
    }
}

fn parse_filter(filter: &str) -> Result<Vec<Predicate>, BackendError> {
    filter
        .split("&&")
        .map(|clause| parse_clause(clause.trim()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| BackendError::MalformedQuery(format!("invalid filter {filter}")))
}

fn parse_clause(clause: &str) -> Option<Predicate> {
    let (field, rest, negated) = match clause.split_once("!=") {
        Some((field, rest)) => (field, rest, true),
        None => {
            let (field, rest) = clause.split_once('=')?;
            (field, rest, false)
        }
    };

    let literal = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    let mut value = String::new();
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.push(chars.next()?),
            '"' => return None,
            c => value.push(c),
        }
    }

    Some(Predicate {
        field: field.trim().to_string(),
        value,
        negated,
    })
}
