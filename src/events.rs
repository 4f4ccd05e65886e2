//! # Client Events
//!
//! Every request made by [`LastFmClient`](crate::LastFmClient) emits events on
//! a broadcast channel shared by all clones of the client. Consumers can
//! subscribe to observe request activity, or peek at the most recent event.
//!
//! ```rust,no_run
//! use lastfm_api::{ClientEvent, LastFmClient};
//!
//! # async fn example(client: LastFmClient) {
//! let mut events = client.subscribe();
//! tokio::spawn(async move {
//!     while let Ok(event) = events.recv().await {
//!         if let ClientEvent::RequestCompleted { request, duration_ms, .. } = event {
//!             println!("{} took {duration_ms}ms", request.short_description());
//!         }
//!     }
//! });
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

/// Query parameters whose values never leave the client.
const REDACTED_PARAMS: [&str; 2] = ["api_key", "sk"];

const REDACTED: &str = "REDACTED";

/// Request information for client events.
///
/// Credentials (`api_key`, `sk`) are replaced before the request is stored,
/// so a `RequestInfo` is always safe to log.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestInfo {
    /// The HTTP method (GET, POST)
    pub method: String,
    /// The requested URI with credentials redacted
    pub uri: String,
    /// Query parameters as key-value pairs
    pub query_params: Vec<(String, String)>,
    /// Path without query parameters
    pub path: String,
}

impl RequestInfo {
    /// Create RequestInfo from a URL string and method
    pub fn from_url_and_method(url: &str, method: &str) -> Self {
        let (base, query_string) = match url.split_once('?') {
            Some((base, query)) => (base, query),
            None => (url, ""),
        };

        let query_params: Vec<(String, String)> = query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let value = if REDACTED_PARAMS.contains(&key) {
                    REDACTED
                } else {
                    value
                };
                (key.to_string(), value.to_string())
            })
            .collect();

        let path = match base.split_once("://") {
            Some((_, rest)) => rest
                .find('/')
                .map(|slash| rest[slash..].to_string())
                .unwrap_or_else(|| "/".to_string()),
            None => base.to_string(),
        };

        let uri = if query_params.is_empty() {
            base.to_string()
        } else {
            let query: Vec<String> = query_params
                .iter()
                .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{k}={v}") })
                .collect();
            format!("{base}?{}", query.join("&"))
        };

        Self {
            method: method.to_string(),
            uri,
            query_params,
            path,
        }
    }

    /// The Last.fm method being called, e.g. `artist.getTopTracks`.
    pub fn api_method(&self) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(k, _)| k == "method")
            .map(|(_, v)| v.as_str())
    }

    /// Get a short description of the request for logging
    pub fn short_description(&self) -> String {
        match self.api_method() {
            Some(api_method) => format!("{} {} [{api_method}]", self.method, self.path),
            None => format!("{} {}", self.method, self.path),
        }
    }
}

/// Event type to describe client request activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClientEvent {
    /// Request handed to the transport
    RequestStarted {
        /// Request details
        request: RequestInfo,
    },
    /// A response arrived, whatever its status
    RequestCompleted {
        /// Request details
        request: RequestInfo,
        /// HTTP status code
        status_code: u16,
        /// Duration of the request in milliseconds
        duration_ms: u64,
    },
    /// The transport failed before any response arrived
    RequestFailed {
        /// Request details
        request: RequestInfo,
        /// Transport error message
        error: String,
    },
}

/// Type alias for the broadcast receiver
pub type ClientEventReceiver = broadcast::Receiver<ClientEvent>;

/// Type alias for the watch receiver
pub type ClientEventWatcher = watch::Receiver<Option<ClientEvent>>;

/// Shared event broadcasting state that persists across client clones
#[derive(Clone)]
pub struct SharedEventBroadcaster {
    event_tx: broadcast::Sender<ClientEvent>,
    last_event_tx: watch::Sender<Option<ClientEvent>>,
}

impl SharedEventBroadcaster {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(100);
        let (last_event_tx, _) = watch::channel(None);

        Self {
            event_tx,
            last_event_tx,
        }
    }

    /// Broadcast an event to all subscribers
    pub fn broadcast_event(&self, event: ClientEvent) {
        let _ = self.event_tx.send(event.clone());
        // send_replace stores the value even when no watcher is alive
        self.last_event_tx.send_replace(Some(event));
    }

    pub fn subscribe(&self) -> ClientEventReceiver {
        self.event_tx.subscribe()
    }

    pub fn watch(&self) -> ClientEventWatcher {
        self.last_event_tx.subscribe()
    }

    pub fn latest_event(&self) -> Option<ClientEvent> {
        self.last_event_tx.borrow().clone()
    }
}

impl Default for SharedEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedEventBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedEventBroadcaster")
            .field("subscribers", &self.event_tx.receiver_count())
            .finish()
    }
}
