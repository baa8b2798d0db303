// src/geolocation.rs

//! Best-effort "where am I" lookup for the About section.
//!
//! Failures never reach the UI: they are logged and replaced with
//! [`FALLBACK_LOCATION`].

use crate::app::AppEvent;
use crate::constants::{FALLBACK_LOCATION, LOCATION_CACHE_CAPACITY};
use crate::errors::{PortfolioError, PortfolioResult};
use log::{debug, info, warn};
use lru::LruCache;
use reqwest::Client;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    fn cache_key(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    pub locality: Option<String>,
    pub principal_subdivision: Option<String>,
    pub country_name: Option<String>,
    pub city: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ReverseGeocodeResponse {
    /// `locality, subdivision, country`, or `city, country` when the finer
    /// parts are missing.
    pub fn format_address(&self) -> Option<String> {
        let country = non_blank(&self.country_name);
        match (
            non_blank(&self.locality),
            non_blank(&self.principal_subdivision),
            country,
        ) {
            (Some(locality), Some(subdivision), Some(country)) => {
                Some(format!("{}, {}, {}", locality, subdivision, country))
            }
            _ => match (non_blank(&self.city), country) {
                (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone)]
struct CachedLocation {
    label: String,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct LocationService {
    client: Client,
    base_url: String,
    ttl: Duration,
    cache: Mutex<LruCache<String, CachedLocation>>,
}

impl LocationService {
    pub fn new(base_url: impl Into<String>, timeout: Duration, ttl: Duration) -> PortfolioResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let capacity = NonZeroUsize::new(LOCATION_CACHE_CAPACITY)
            .ok_or_else(|| PortfolioError::config_error("location cache capacity must be non-zero"))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            ttl,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Human-readable place for `coords`, or the fixed fallback string.
    pub async fn resolve(&self, coords: Option<Coordinates>) -> String {
        let Some(coords) = coords else {
            debug!("no coordinates configured, using fallback location");
            return FALLBACK_LOCATION.to_string();
        };

        let key = coords.cache_key();
        if let Some(hit) = self.cached(&key).await {
            debug!("location cache hit for {}", key);
            return hit;
        }

        match self.reverse_geocode(coords).await {
            Ok(label) => {
                info!("resolved location {} -> {}", key, label);
                self.cache.lock().await.put(
                    key,
                    CachedLocation {
                        label: label.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                label
            }
            Err(e) => {
                warn!("location lookup failed, using fallback: {}", e);
                FALLBACK_LOCATION.to_string()
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<String> {
        let mut cache = self.cache.lock().await;
        match cache.get(key) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => Some(entry.label.clone()),
            Some(_) => {
                cache.pop(key);
                None
            }
            None => None,
        }
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> PortfolioResult<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::geocode_error(format!(
                "service returned {}",
                status
            )));
        }

        let body: ReverseGeocodeResponse = response.json().await?;
        body.format_address()
            .ok_or_else(|| PortfolioError::geocode_error("response had no usable place names"))
    }
}

/// Runs the lookup in the background and reports back through the event loop.
pub fn spawn_lookup(
    service: Arc<LocationService>,
    coords: Option<Coordinates>,
    events: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let label = service.resolve(coords).await;
        let _ = events.send(AppEvent::LocationResolved(label));
    })
}
