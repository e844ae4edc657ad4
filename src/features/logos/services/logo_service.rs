use crate::features::logos::dtos::{LogoForm, LogoSearch};
use crate::features::logos::models::Logo;
use crate::shared::crud::{CrudService, Resource};
use crate::shared::validation::{normalize_tags, trim};

pub struct LogoResource;

impl Resource for LogoResource {
    type Item = Logo;
    type Form = LogoForm;
    type Search = LogoSearch;

    const NAME: &'static str = "Logo";
    const PATH: &'static str = "/v1/logos";
    const FORM_FIELDS: &'static [&'static str] =
        &["name", "url", "tags", "lang", "displayOrder", "isActive"];

    fn item_id(logo: &Logo) -> i64 {
        logo.id
    }

    fn form_from_item(logo: &Logo) -> LogoForm {
        LogoForm::from(logo)
    }

    fn normalize(form: LogoForm) -> LogoForm {
        LogoForm {
            name: trim(form.name),
            url: trim(form.url),
            tags: normalize_tags(form.tags),
            lang: trim(form.lang),
            ..form
        }
    }
}

pub type LogoService = CrudService<LogoResource>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::error::AppError;
    use crate::shared::crud::{apply_client_side_filters, FormMode};
    use crate::shared::test_helpers::InMemoryUpstream;
    use crate::shared::types::PaginationQuery;
    use serde_json::json;

    fn logos() -> Vec<Logo> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Google", "url": "https://g.co/logo.png", "tags": "search,tech", "lang": "EN", "isActive": true},
            {"id": 2, "name": "Yandex", "url": "https://ya.ru/logo.png", "tags": "search", "lang": "RU", "isActive": false},
            {"id": 3, "name": "Goggles", "url": "https://x.io/l.png", "lang": "EN", "isActive": false, "createdAt": "2024-01-02 03:04:05"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_empty_search_is_identity() {
        let items = logos();
        assert_eq!(apply_client_side_filters(&items, &LogoSearch::default()), items);
    }

    #[test]
    fn test_search_combines_predicates() {
        let search = LogoSearch {
            name: Some("go".to_string()),
            lang: Some("en".to_string()),
            tags: None,
            is_active: Some("false".to_string()),
        };
        let found = apply_client_side_filters(&logos(), &search);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
        assert!(found.iter().all(|l| !l.is_active));

        let search = LogoSearch {
            tags: Some("TECH".to_string()),
            is_active: Some("whatever".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_client_side_filters(&logos(), &search)[0].id, 1);
    }

    #[test]
    fn test_form_validation_and_normalisation() {
        let form = LogoResource::normalize(LogoForm {
            name: "  Bing ".to_string(),
            url: "not a url".to_string(),
            tags: Some(" search , Search,, tech ".to_string()),
            lang: "english".to_string(),
            display_order: 10_000,
            is_active: true,
        });
        assert_eq!(form.name, "Bing");
        assert_eq!(form.tags.as_deref(), Some("search,tech"));

        let errors = LogoResource::validate_form(&form, FormMode::Create);
        assert!(errors.contains("url"));
        assert!(errors.contains("lang"));
        assert!(errors.contains("displayOrder"));
        assert!(!errors.contains("name"));
    }

    #[tokio::test]
    async fn test_server_errors_map_to_form_fields() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.reject_next(
            400,
            "Validation failed",
            Some(json!({"url": ["URL already registered"], "tenant": "Unknown tenant"})),
        );
        let service = LogoService::new(upstream.clone());

        let form = LogoForm {
            name: "Bing".to_string(),
            url: "https://bing.com/logo.png".to_string(),
            ..Default::default()
        };
        match service.create(form, Some("t")).await {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors.get("url"), Some("URL already registered"));
                assert_eq!(errors.general(), Some("Unknown tenant"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_list_accepts_plain_array_payload() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.respond_with(
            LogoResource::PATH,
            json!([{"id": "7", "name": "Seven", "url": "https://7.io/l.png"}]),
        );
        let service = LogoService::new(upstream);

        let (items, meta) = service
            .search(&PaginationQuery::default(), &LogoSearch::default(), None)
            .await
            .unwrap();
        assert_eq!(items[0].id, 7);
        assert_eq!(meta.total, 1);
    }
}
