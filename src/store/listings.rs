//! Listings and taxonomy cache.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::warn;

use crate::api::ApiClient;
use crate::error::MarketResult;
use crate::marketplace::{Category, City, Listing, ListingFilters, NewListing};
use crate::traits::HttpTransport;

/// One published view of the listings cache.
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    pub listings: Vec<Listing>,
    pub cities: Vec<City>,
    pub categories: Vec<Category>,
    pub loading: bool,
    /// First error of the most recent operation, for display.
    pub error: Option<String>,
}

/// Application-scoped cache of listings and the city/category taxonomy.
///
/// The taxonomy is fetched once per application lifetime; listings are
/// replaced wholesale on every [`refresh`](ListingStore::refresh). The
/// store is injected where it is needed rather than living in a global.
pub struct ListingStore<H: HttpTransport> {
    api: Arc<ApiClient<H>>,
    state: Arc<RwLock<ListingSnapshot>>,
    state_tx: watch::Sender<ListingSnapshot>,
}

impl<H: HttpTransport> ListingStore<H> {
    pub fn new(api: Arc<ApiClient<H>>) -> Self {
        let (state_tx, _) = watch::channel(ListingSnapshot::default());
        Self {
            api,
            state: Arc::new(RwLock::new(ListingSnapshot::default())),
            state_tx,
        }
    }

    /// Fetch the taxonomy. Called once after construction; a failure is
    /// captured as a display error, not propagated.
    pub async fn init(&self) {
        let cities = self.api.cities().await;
        let categories = self.api.categories().await;
        match (cities, categories) {
            (Ok(cities), Ok(categories)) => {
                self.publish(|s| {
                    s.cities = cities;
                    s.categories = categories;
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!("Failed to load taxonomy: {}", e);
                self.publish(|s| {
                    s.error =
                        Some("Failed to load site data. Please try refreshing the page.".into());
                });
            }
        }
    }

    /// Replace the listing set with the server's answer for `filters`.
    ///
    /// The loading flag is set for the duration of the call; a failure is
    /// captured as a display error and the previous set is kept.
    pub async fn refresh(&self, filters: &ListingFilters) {
        self.publish(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.listings(filters).await;

        self.publish(|s| {
            match result {
                Ok(listings) => s.listings = listings,
                Err(ref e) => {
                    warn!("Failed to fetch listings: {}", e);
                    s.error = Some("Failed to fetch advertisements.".into());
                }
            }
            s.loading = false;
        });
    }

    /// Create a listing, then refresh the cached set so the new item is
    /// visible on the next render. The refresh is issued only after the
    /// create call confirms. Errors propagate to the caller.
    pub async fn create(&self, ad: &NewListing) -> MarketResult<Listing> {
        let created = self.api.create_listing(ad).await?;
        self.refresh(&ListingFilters::default()).await;
        Ok(created)
    }

    /// Delete a listing, removing it from the cached set after the server
    /// confirms. No refetch. Errors propagate to the caller.
    pub async fn delete(&self, id: i64) -> MarketResult<()> {
        self.api.delete_listing(id).await?;
        self.publish(|s| s.listings.retain(|ad| ad.id != id));
        Ok(())
    }

    /// Fetch a single listing; `None` when it does not exist.
    pub async fn listing(&self, id: i64) -> MarketResult<Option<Listing>> {
        self.api.listing(id).await
    }

    /// Fetch the signed-in user's own listings.
    pub async fn my_listings(&self) -> MarketResult<Vec<Listing>> {
        self.api.my_listings().await
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> ListingSnapshot {
        self.state.read().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<ListingSnapshot> {
        self.state_tx.subscribe()
    }

    /// Mutate the shared snapshot and publish the result as one update.
    fn publish(&self, apply: impl FnOnce(&mut ListingSnapshot)) {
        let snapshot = {
            let mut state = self.state.write();
            apply(&mut state);
            state.clone()
        };
        self.state_tx.send_replace(snapshot);
    }
}
