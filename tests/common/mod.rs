//! Mock-backed test harness.
//!
//! Builds the full client stack (API client, session synchronizer, state
//! containers) over the mock transport, identity provider and credential
//! store, allowing fast, deterministic testing without a server.

use std::sync::Arc;

use admarkt::mocks::{MemoryCredentialStore, MockHttp, MockIdentity};
use admarkt::{ApiClient, CredentialStore, ListingStore, SessionStore, SessionSynchronizer};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const BASE_URL: &str = "http://backend.test/api";

/// Initialize tracing for tests. Uses RUST_LOG if set, defaults to info
/// level with debug for this crate. Safe to call from every test.
fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,admarkt=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// All collaborators for one test, sharing state with the stack under test.
#[allow(dead_code)]
pub struct Harness {
    pub http: MockHttp,
    pub identity: MockIdentity,
    pub credentials: MemoryCredentialStore,
    pub api: Arc<ApiClient<MockHttp>>,
    pub sync: Arc<SessionSynchronizer<MockHttp>>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        init_test_tracing();

        let http = MockHttp::new();
        let identity = MockIdentity::new();
        let credentials = MemoryCredentialStore::new();

        let api = Arc::new(ApiClient::new(
            http.clone(),
            BASE_URL,
            Arc::new(credentials.clone()),
        ));
        let sync = Arc::new(SessionSynchronizer::new(
            Arc::new(identity.clone()),
            Arc::new(credentials.clone()),
            Arc::clone(&api),
        ));

        Self {
            http,
            identity,
            credentials,
            api,
            sync,
        }
    }

    /// A harness with a credential already stored, as after sign-in.
    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness
            .credentials
            .put("stored-token")
            .expect("in-memory put cannot fail");
        harness
    }

    pub fn listing_store(&self) -> ListingStore<MockHttp> {
        ListingStore::new(Arc::clone(&self.api))
    }

    pub fn session_store(&self) -> SessionStore<MockHttp> {
        SessionStore::new(Arc::clone(&self.sync))
    }
}

/// A listing as the backend serves it: snake_case keys, nested owner,
/// city and category.
#[allow(dead_code)]
pub fn wire_listing(id: i64, title: &str, price: Option<f64>) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "A fine item",
        "price": price,
        "is_featured": false,
        "image_url": format!("https://img.test/{id}.jpg"),
        "images": [format!("https://img.test/{id}.jpg")],
        "created_at": "2024-05-01T12:00:00Z",
        "user": {
            "id": "uid-seller",
            "full_name": "Sam Seller",
            "avatar_url": "https://img.test/seller.png"
        },
        "city": { "id": 1, "name": "Berlin" },
        "category": { "id": 2, "name": "Housing", "slug": "housing" }
    })
}

/// A backend user record in wire format.
#[allow(dead_code)]
pub fn wire_user(id: &str, full_name: &str, avatar_url: &str) -> Value {
    json!({
        "id": id,
        "full_name": full_name,
        "avatar_url": avatar_url
    })
}
