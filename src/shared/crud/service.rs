use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::modules::upstream::{decode_page, ApiEnvelope, Page, UpstreamApi, UpstreamRequest};
use crate::shared::crud::{apply_client_side_filters, FieldErrors, FormMode, Resource};
use crate::shared::types::{Meta, PaginationQuery};

/// Create/read/update/delete for one [`Resource`] against the upstream API
pub struct CrudService<R: Resource> {
    upstream: Arc<dyn UpstreamApi>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CrudService<R> {
    pub fn new(upstream: Arc<dyn UpstreamApi>) -> Self {
        Self {
            upstream,
            _resource: PhantomData,
        }
    }

    /// Fetch one page from the upstream
    pub async fn list(
        &self,
        pagination: &PaginationQuery,
        token: Option<&str>,
    ) -> Result<Page<R::Item>> {
        let request = UpstreamRequest::get(R::PATH)
            .query(pagination.to_upstream_query())
            .bearer(token);

        let data = self.call(request).await?;
        let page = decode_page::<R::Item>(data).map_err(|e| {
            tracing::error!("Failed to decode {} list: {}", R::NAME, e);
            AppError::from(e)
        })?;

        tracing::debug!(
            "Loaded {} {} records (page {}, total {})",
            page.content.len(),
            R::NAME,
            page.page,
            page.total_elements
        );

        Ok(page)
    }

    /// Fetch one page and apply the search form to it
    pub async fn search(
        &self,
        pagination: &PaginationQuery,
        search: &R::Search,
        token: Option<&str>,
    ) -> Result<(Vec<R::Item>, Meta)> {
        let page = self.list(pagination, token).await?;
        let items = apply_client_side_filters(&page.content, search);
        let meta = page_meta(&page, items.len());
        Ok((items, meta))
    }

    pub async fn get(&self, id: i64, token: Option<&str>) -> Result<R::Item> {
        let request = UpstreamRequest::get(R::item_path(id)).bearer(token);
        let data = self.call(request).await?;

        match data {
            None | Some(Value::Null) => Err(AppError::NotFound(format!(
                "{} {} not found",
                R::NAME,
                id
            ))),
            Some(value) => ApiEnvelope::success(value)
                .decode_data::<R::Item>()
                .map_err(AppError::from),
        }
    }

    /// Normalise, validate and submit a new record
    pub async fn create(&self, form: R::Form, token: Option<&str>) -> Result<Option<R::Item>> {
        let body = Self::prepare(form, FormMode::Create)?;
        let request = UpstreamRequest::post(R::PATH).json(body).bearer(token);

        let data = self.call(request).await?;
        tracing::info!("{} created", R::NAME);
        Self::decode_optional(data)
    }

    /// Normalise, validate and submit changes to an existing record
    pub async fn update(
        &self,
        id: i64,
        form: R::Form,
        token: Option<&str>,
    ) -> Result<Option<R::Item>> {
        let body = Self::prepare(form, FormMode::Update { id })?;
        let request = UpstreamRequest::put(R::item_path(id))
            .json(body)
            .bearer(token);

        let data = self.call(request).await?;
        tracing::info!("{} {} updated", R::NAME, id);
        Self::decode_optional(data)
    }

    pub async fn delete(&self, id: i64, token: Option<&str>) -> Result<()> {
        if R::GUARDS_DELETE {
            let item = self.get(id, token).await?;
            R::guard_delete(&item)?;
        }

        let request = UpstreamRequest::delete(R::item_path(id)).bearer(token);
        self.call(request).await?;
        tracing::info!("{} {} deleted", R::NAME, id);
        Ok(())
    }

    /// Normalised and validated request body, or the field errors that block it
    pub fn prepare(form: R::Form, mode: FormMode) -> Result<Value> {
        let form = R::normalize(form);
        let errors = R::validate_form(&form, mode);
        if !errors.is_empty() {
            tracing::debug!("{} form rejected: {:?}", R::NAME, errors);
            return Err(AppError::validation(errors));
        }

        serde_json::to_value(&form)
            .map_err(|e| AppError::Internal(format!("Failed to serialize {} form: {}", R::NAME, e)))
    }

    async fn call(&self, request: UpstreamRequest) -> Result<Option<Value>> {
        let envelope = self.upstream.execute(request).await?;
        Self::interpret(envelope)
    }

    /// Turn a status envelope into data or the matching error
    fn interpret(envelope: ApiEnvelope<Value>) -> Result<Option<Value>> {
        let status = envelope.status;
        if status.is_success() {
            return Ok(envelope.data);
        }

        let message = status
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        if let (true, Some(errors)) = (status.has_field_errors(), status.errors.as_ref()) {
            return Err(AppError::Validation {
                message: message
                    .unwrap_or_else(|| "Please correct the highlighted fields".to_string()),
                errors: FieldErrors::from_server(errors, R::FORM_FIELDS),
            });
        }

        if status.code == 404 {
            return Err(AppError::NotFound(
                message.unwrap_or_else(|| format!("{} not found", R::NAME)),
            ));
        }

        Err(AppError::Rejected {
            code: status.code,
            message: message.unwrap_or_default(),
        })
    }

    fn decode_optional(data: Option<Value>) -> Result<Option<R::Item>> {
        match data {
            None | Some(Value::Null) => Ok(None),
            Some(value) => ApiEnvelope::success(value)
                .decode_data::<R::Item>()
                .map(Some)
                .map_err(|e| {
                    tracing::warn!("Unexpected {} payload after mutation: {}", R::NAME, e);
                    AppError::from(e)
                }),
        }
    }
}

/// Pagination meta for a page after client-side filtering
pub fn page_meta<T>(page: &Page<T>, filtered: usize) -> Meta {
    Meta {
        total: page.total_elements,
        page: Some(page.page + 1),
        page_size: Some(page.size),
        total_pages: Some(page.total_pages),
        filtered: Some(filtered as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::upstream::UpstreamError;
    use crate::shared::test_helpers::{
        widget, InMemoryUpstream, WidgetForm, WidgetResource, WidgetSearch, WIDGETS_PATH,
    };
    use reqwest::Method;
    use serde_json::json;

    fn service(upstream: &Arc<InMemoryUpstream>) -> CrudService<WidgetResource> {
        CrudService::new(upstream.clone())
    }

    #[tokio::test]
    async fn test_list_forwards_pagination_and_token() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(WIDGETS_PATH, (1..=5).map(|i| widget(i, "w", true)).collect());

        let pagination = PaginationQuery {
            page: 2,
            page_size: 2,
            ..Default::default()
        };
        let page = service(&upstream)
            .list(&pagination, Some("tkn"))
            .await
            .unwrap();

        assert_eq!(page.content.len(), 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_elements, 5);

        let request = &upstream.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.token.as_deref(), Some("tkn"));
        assert!(request.query.contains(&("page".to_string(), "1".to_string())));
        assert!(request.query.contains(&("size".to_string(), "2".to_string())));
    }

    #[tokio::test]
    async fn test_search_reports_filtered_meta() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(
            WIDGETS_PATH,
            vec![widget(1, "a", true), widget(2, "b", false), widget(3, "c", true)],
        );

        let search = WidgetSearch {
            name: None,
            is_active: Some("false".to_string()),
        };
        let (items, meta) = service(&upstream)
            .search(&PaginationQuery::default(), &search, None)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(meta.total, 3);
        assert_eq!(meta.page, Some(1));
        assert_eq!(meta.filtered, Some(1));
    }

    #[tokio::test]
    async fn test_create_trims_before_sending() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let created = service(&upstream)
            .create(
                WidgetForm {
                    name: "  Spaced  ".to_string(),
                    is_active: true,
                },
                None,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.name, "Spaced");
        let body = upstream.requests()[0].body.clone().unwrap();
        assert_eq!(body, json!({"name": "Spaced", "isActive": true}));
    }

    #[tokio::test]
    async fn test_business_rule_blocks_submission() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let result = service(&upstream)
            .create(
                WidgetForm {
                    name: "Forbidden".to_string(),
                    is_active: false,
                },
                None,
            )
            .await;

        match result {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors.get("name"), Some("This name is reserved"))
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(upstream.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let result = service(&upstream).get(42, None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejection_without_field_errors_is_rejected() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.reject_next(409, "Conflict with existing record", Some(json!({})));

        let result = service(&upstream).delete(1, None).await;
        match result {
            Err(AppError::Rejected { code, message }) => {
                assert_eq!(code, 409);
                assert_eq!(message, "Conflict with existing record");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_external_error() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.fail_next(UpstreamError::Transport("connection reset".to_string()));

        let result = service(&upstream).list(&PaginationQuery::default(), None).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete_roundtrip_paths() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(WIDGETS_PATH, vec![widget(9, "Before", true)]);
        let service = service(&upstream);

        let updated = service
            .update(
                9,
                WidgetForm {
                    name: "After".to_string(),
                    is_active: false,
                },
                None,
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "After");
        assert!(!updated.is_active);

        service.delete(9, None).await.unwrap();
        assert!(upstream.items(WIDGETS_PATH).is_empty());

        let paths: Vec<String> = upstream.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/v1/widgets/9", "/v1/widgets/9"]);
    }
}
