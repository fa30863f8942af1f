//! Lazily constructed, process-wide backend handle

use std::sync::{Arc, OnceLock};

use super::PocketBase;

/// Hands out one shared [`PocketBase`] client, built on first use
///
/// The accessor itself is created once at startup and passed to whoever
/// needs the backend, so tests can swap in their own [`super::Backend`].
#[derive(Debug)]
pub struct ClientAccessor {
    base_url: String,
    client: OnceLock<Arc<PocketBase>>,
}

impl ClientAccessor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: OnceLock::new(),
        }
    }

    /// Base address the client is (or will be) built for
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the client, constructing it on the first call
    pub fn get(&self) -> Arc<PocketBase> {
        self.client
            .get_or_init(|| {
                tracing::debug!("Connecting backend client to {}", self.base_url);
                Arc::new(PocketBase::new(&self.base_url))
            })
            .clone()
    }

    /// Whether [`ClientAccessor::get`] has been called yet
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;

    #[test]
    fn test_lazy_and_memoized() {
        let accessor = ClientAccessor::new("http://127.0.0.1:8090");
        assert!(!accessor.is_initialized());

        let first = accessor.get();
        assert!(accessor.is_initialized());
        let second = accessor.get();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.base_url(), "http://127.0.0.1:8090");
    }

    #[test]
    fn test_concurrent_get_yields_one_client() {
        let accessor = Arc::new(ClientAccessor::new("http://127.0.0.1:8090"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let accessor = Arc::clone(&accessor);
                std::thread::spawn(move || accessor.get())
            })
            .collect();

        let clients: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for client in &clients[1..] {
            assert!(Arc::ptr_eq(&clients[0], client));
        }
    }
}
