//! REST client for the hosted data store.
//!
//! Writes here are best-effort: the local catalog and mirror are the source
//! of truth, and callers record the sync outcome instead of failing the
//! whole save when the remote is down or unconfigured.

use std::time::Duration;

use tracing::{error, info};

use crate::catalog::NewProduct;
use crate::config::RemoteSettings;
use crate::error::SkinGuideError;
use crate::profile::UserProfile;

pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    /// Build a client from settings. Returns `None` when the remote is
    /// unconfigured (empty url or key), which callers treat as
    /// "local-only mode" rather than an error.
    pub fn from_settings(settings: &RemoteSettings) -> Result<Option<Self>, SkinGuideError> {
        if !settings.is_configured() {
            return Ok(None);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SkinGuideError::Remote(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Some(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }))
    }

    /// Insert the profile row into the hosted profiles table.
    pub async fn insert_profile(&self, profile: &UserProfile) -> Result<(), SkinGuideError> {
        let body = serde_json::json!({
            "id": profile.id,
            "name": profile.name,
            "email": profile.email,
            "skin_type": profile.skin_type,
            "concerns": profile.concerns,
            "level": profile.level,
            "budget": profile.budget,
        });

        self.post("profiles", &body).await?;
        info!("Pushed profile {} to remote store", profile.id);
        Ok(())
    }

    /// Insert a product row into the hosted products table.
    pub async fn insert_product(
        &self,
        user_id: &str,
        product: &NewProduct,
    ) -> Result<(), SkinGuideError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "name": product.name,
            "brand": product.brand,
            "type": product.product_type,
            "image_url": product.image_ref,
            "description": product.description,
            "usage_time": product.usage_time,
            "in_routine": false,
        });

        self.post("products", &body).await?;
        info!("Pushed product '{}' to remote store", product.name);
        Ok(())
    }

    async fn post(&self, table: &str, body: &serde_json::Value) -> Result<(), SkinGuideError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Remote write to '{}' failed: {}", table, e);
                error!("{}", msg);
                SkinGuideError::Remote(msg)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let msg = format!("Remote store rejected '{}' write: {} {}", table, status, detail);
            error!("{}", msg);
            return Err(SkinGuideError::Remote(msg));
        }
        Ok(())
    }
}
