use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::settings::models::AppSetting;
use crate::modules::upstream::{decode_page, UpstreamApi, UpstreamRequest};
use crate::shared::constants::APP_SETTINGS_KEY;

/// Source of the application settings list
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn load(&self, token: Option<&str>) -> Result<Vec<AppSetting>>;
}

/// Settings served by the upstream API
pub struct UpstreamSettings {
    upstream: Arc<dyn UpstreamApi>,
    path: String,
}

impl UpstreamSettings {
    pub fn new(upstream: Arc<dyn UpstreamApi>, path: impl Into<String>) -> Self {
        Self {
            upstream,
            path: path.into(),
        }
    }
}

#[async_trait]
impl SettingsProvider for UpstreamSettings {
    async fn load(&self, token: Option<&str>) -> Result<Vec<AppSetting>> {
        let request = UpstreamRequest::get(self.path.clone()).bearer(token);
        let envelope = self.upstream.execute(request).await?;

        if !envelope.status.is_success() {
            return Err(AppError::Rejected {
                code: envelope.status.code,
                message: envelope.status.message.unwrap_or_default(),
            });
        }

        let page = decode_page::<AppSetting>(envelope.data)?;
        Ok(page.content)
    }
}

/// Fixed settings list
pub struct StaticSettings(pub Vec<AppSetting>);

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn load(&self, _token: Option<&str>) -> Result<Vec<AppSetting>> {
        Ok(self.0.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    List(Vec<AppSetting>),
    Keyed(std::collections::HashMap<String, Vec<AppSetting>>),
}

struct SettingsCache {
    settings: Vec<AppSetting>,
    fetched_at: Instant,
}

/// Cached access to the settings list.
///
/// Settings are refetched once `ttl` has passed. When a refetch fails the
/// stale list (or the seed list, before the first successful fetch) is served
/// instead.
pub struct SettingsService {
    provider: Arc<dyn SettingsProvider>,
    seed: Vec<AppSetting>,
    ttl: Duration,
    cache: RwLock<Option<SettingsCache>>,
}

impl SettingsService {
    pub fn new(provider: Arc<dyn SettingsProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            seed: Vec::new(),
            ttl,
            cache: RwLock::new(None),
        }
    }

    pub fn with_seed(mut self, seed: Vec<AppSetting>) -> Self {
        self.seed = seed;
        self
    }

    /// Read a seed file holding either the settings array or an object with
    /// the array under `gjpb_app_settings`
    pub async fn read_seed_file(path: &Path) -> Result<Vec<AppSetting>> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("Failed to read settings seed {}: {}", path.display(), e))
        })?;

        let seed: SeedFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!("Invalid settings seed {}: {}", path.display(), e))
        })?;

        Ok(match seed {
            SeedFile::List(settings) => settings,
            SeedFile::Keyed(mut map) => map.remove(APP_SETTINGS_KEY).unwrap_or_default(),
        })
    }

    pub async fn all(&self, token: Option<&str>) -> Result<Vec<AppSetting>> {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.fetched_at.elapsed() < self.ttl {
                    return Ok(cached.settings.clone());
                }
            }
        }

        match self.provider.load(token).await {
            Ok(settings) => {
                tracing::debug!("Loaded {} application settings", settings.len());
                let mut cache = self.cache.write().await;
                *cache = Some(SettingsCache {
                    settings: settings.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(settings)
            }
            Err(e) => {
                if let Some(ref stale) = *self.cache.read().await {
                    tracing::warn!("Settings refresh failed, serving stale list: {}", e);
                    return Ok(stale.settings.clone());
                }
                if !self.seed.is_empty() {
                    tracing::warn!("Settings fetch failed, serving seed list: {}", e);
                    return Ok(self.seed.clone());
                }
                Err(e)
            }
        }
    }

    /// Options of setting `name`; empty when the setting does not exist
    pub async fn options(
        &self,
        name: &str,
        lang: Option<&str>,
        token: Option<&str>,
    ) -> Result<Vec<String>> {
        let settings = self.all(token).await?;
        match AppSetting::find(&settings, name, lang) {
            Some(setting) => Ok(setting.options()),
            None => {
                tracing::debug!("No setting named {} ({:?})", name, lang);
                Ok(Vec::new())
            }
        }
    }

    /// Drop the cached list so the next read refetches
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::upstream::UpstreamError;
    use crate::shared::test_helpers::InMemoryUpstream;
    use serde_json::json;

    const PATH: &str = "/v1/app-settings";

    fn upstream_with_settings() -> Arc<InMemoryUpstream> {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.respond_with(
            PATH,
            json!([
                {"name": "logo_tags", "value": "brand, partner", "lang": "EN"},
                {"name": "difficulty_level", "value": "easy,medium,hard"}
            ]),
        );
        upstream
    }

    fn service(upstream: &Arc<InMemoryUpstream>, ttl: Duration) -> SettingsService {
        SettingsService::new(
            Arc::new(UpstreamSettings::new(upstream.clone(), PATH)),
            ttl,
        )
    }

    #[tokio::test]
    async fn test_options_are_cached() {
        let upstream = upstream_with_settings();
        let service = service(&upstream, Duration::from_secs(300));

        let tags = service.options("logo_tags", Some("en"), Some("t")).await.unwrap();
        assert_eq!(tags, vec!["brand", "partner"]);
        let levels = service.options("difficulty_level", Some("RU"), None).await.unwrap();
        assert_eq!(levels, vec!["easy", "medium", "hard"]);
        assert!(service.options("missing", None, None).await.unwrap().is_empty());

        assert_eq!(upstream.request_count(), 1);
        assert_eq!(upstream.requests()[0].token.as_deref(), Some("t"));

        service.invalidate().await;
        service.all(None).await.unwrap();
        assert_eq!(upstream.request_count(), 2);
    }

    #[tokio::test]
    async fn test_stale_list_served_when_refresh_fails() {
        let upstream = upstream_with_settings();
        let service = service(&upstream, Duration::ZERO);

        assert_eq!(service.all(None).await.unwrap().len(), 2);
        upstream.fail_next(UpstreamError::Transport("down".to_string()));
        assert_eq!(service.all(None).await.unwrap().len(), 2);
        assert_eq!(upstream.request_count(), 2);
    }

    #[tokio::test]
    async fn test_seed_used_until_first_fetch_succeeds() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.reject_next(503, "Maintenance", None);
        let seed = vec![AppSetting {
            name: "website_tags".to_string(),
            value: "docs,news".to_string(),
            lang: None,
        }];
        let service = service(&upstream, Duration::from_secs(60)).with_seed(seed);

        let tags = service.options("website_tags", None, None).await.unwrap();
        assert_eq!(tags, vec!["docs", "news"]);

        let without_seed = SettingsService::new(
            Arc::new(UpstreamSettings::new(upstream.clone(), PATH)),
            Duration::from_secs(60),
        );
        upstream.reject_next(503, "Maintenance", None);
        let result = without_seed.all(None).await;
        assert!(matches!(result, Err(AppError::Rejected { code: 503, .. })));
    }

    #[tokio::test]
    async fn test_seed_file_formats() {
        let dir = std::env::temp_dir();
        let list = dir.join(format!("settings-list-{}.json", uuid::Uuid::now_v7()));
        let keyed = dir.join(format!("settings-keyed-{}.json", uuid::Uuid::now_v7()));
        tokio::fs::write(&list, r#"[{"name":"logo_tags","value":"a,b","lang":"EN"}]"#)
            .await
            .unwrap();
        tokio::fs::write(
            &keyed,
            r#"{"gjpb_app_settings":[{"name":"difficulty_level","value":"easy"}]}"#,
        )
        .await
        .unwrap();

        let from_list = SettingsService::read_seed_file(&list).await.unwrap();
        assert_eq!(from_list[0].lang.as_deref(), Some("EN"));
        let from_keyed = SettingsService::read_seed_file(&keyed).await.unwrap();
        assert_eq!(from_keyed[0].name, "difficulty_level");

        let _ = tokio::fs::remove_file(&list).await;
        let _ = tokio::fs::remove_file(&keyed).await;

        assert!(SettingsService::read_seed_file(Path::new("/nonexistent/settings.json"))
            .await
            .is_err());
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticSettings(vec![AppSetting {
            name: "logo_tags".to_string(),
            value: "x".to_string(),
            lang: None,
        }]);
        let loaded = tokio_test::block_on(provider.load(None)).unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
