use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::modules::upstream::Page;
use crate::shared::crud::{
    apply_client_side_filters, CrudService, DialogAction, DialogState, FieldErrors, Resource,
};
use crate::shared::types::PaginationQuery;

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record created or updated; dialog closed and page reloaded
    Saved,
    /// Record deleted; dialog closed and page reloaded
    Deleted,
    /// A view dialog was dismissed
    Closed,
    /// Field errors were recorded on the dialog
    Invalid,
    /// Any other failure; see [`ResourceController::notice`]
    Failed,
}

/// Headless state of one admin table: the loaded page, the search form
/// applied to it, the open dialog and the last notice.
///
/// Mutating calls take `&mut self`, so a submit cannot be issued twice while
/// the first one is in flight.
pub struct ResourceController<R: Resource> {
    service: Arc<CrudService<R>>,
    token: Option<String>,
    pagination: PaginationQuery,
    search: R::Search,
    page: Page<R::Item>,
    items: Vec<R::Item>,
    dialog: DialogState<R>,
    loading: bool,
    notice: Option<String>,
}

impl<R: Resource> ResourceController<R> {
    pub fn new(service: Arc<CrudService<R>>, token: Option<String>) -> Self {
        Self {
            service,
            token,
            pagination: PaginationQuery::default(),
            search: R::Search::default(),
            page: Page::default(),
            items: Vec::new(),
            dialog: DialogState::new(),
            loading: false,
            notice: None,
        }
    }

    /// Items of the loaded page that pass the search form
    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn page(&self) -> &Page<R::Item> {
        &self.page
    }

    pub fn pagination(&self) -> &PaginationQuery {
        &self.pagination
    }

    pub fn search(&self) -> &R::Search {
        &self.search
    }

    pub fn dialog(&self) -> &DialogState<R> {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut DialogState<R> {
        &mut self.dialog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Fetch the current page and reapply the search form
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;
        let result = self
            .service
            .list(&self.pagination, self.token.as_deref())
            .await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.page = page;
                self.refilter();
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.notice());
                Err(e)
            }
        }
    }

    /// Apply a new search form to the already loaded page
    pub fn set_search(&mut self, search: R::Search) {
        self.search = search;
        self.refilter();
    }

    pub fn reset_search(&mut self) {
        self.set_search(R::Search::default());
    }

    /// Move to a 1-based page and load it
    pub async fn change_page(&mut self, page: i64) -> Result<()> {
        self.pagination.page = page.max(1);
        self.load().await
    }

    /// Change the page size; goes back to the first page
    pub async fn change_page_size(&mut self, page_size: i64) -> Result<()> {
        self.pagination.page_size = page_size;
        self.pagination.page = 1;
        self.load().await
    }

    pub fn open_create(&mut self) {
        self.dialog.open_create();
    }

    pub fn open(&mut self, action: DialogAction, item: Option<R::Item>) -> Result<()> {
        self.dialog.open(action, item)
    }

    pub fn close(&mut self) {
        self.dialog.close();
    }

    /// Submit the open dialog.
    ///
    /// On success the dialog closes and the page is reloaded. Field errors
    /// (client or server) replace those of the previous attempt; anything
    /// else becomes a notice.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(action) = self.dialog.action() else {
            self.notice = Some("Nothing to submit".to_string());
            return SubmitOutcome::Failed;
        };

        // Every submit starts from a clean error map
        self.dialog.set_errors(FieldErrors::new());

        let token = self.token.clone();
        let token = token.as_deref();
        let form = self.dialog.form().clone();
        let selected_id = self.dialog.selected_id();

        self.loading = true;
        let result = match (action, selected_id) {
            (DialogAction::View, _) => {
                self.loading = false;
                self.dialog.close();
                return SubmitOutcome::Closed;
            }
            (DialogAction::Create, _) => self.service.create(form, token).await.map(|_| ()),
            (DialogAction::Edit, Some(id)) => {
                self.service.update(id, form, token).await.map(|_| ())
            }
            (DialogAction::Delete, Some(id)) => self.service.delete(id, token).await,
            (_, None) => Err(AppError::BadRequest(format!(
                "Select a {} first",
                R::NAME.to_lowercase()
            ))),
        };
        self.loading = false;

        match result {
            Ok(()) => {
                self.dialog.close();
                let outcome = if action == DialogAction::Delete {
                    self.notice = Some(format!("{} deleted successfully", R::NAME));
                    SubmitOutcome::Deleted
                } else {
                    self.notice = Some(format!("{} saved successfully", R::NAME));
                    SubmitOutcome::Saved
                };
                self.refresh_after_mutation(outcome).await;
                outcome
            }
            Err(AppError::Validation { errors, .. }) => {
                self.dialog.set_errors(errors);
                SubmitOutcome::Invalid
            }
            Err(e) => {
                tracing::warn!("{} {:?} failed: {}", R::NAME, action, e);
                self.notice = Some(e.notice());
                SubmitOutcome::Failed
            }
        }
    }

    async fn refresh_after_mutation(&mut self, outcome: SubmitOutcome) {
        // Deleting the last row of a later page steps back one page
        if outcome == SubmitOutcome::Deleted
            && self.page.content.len() <= 1
            && self.pagination.page > 1
        {
            self.pagination.page -= 1;
        }

        if let Err(e) = self.load().await {
            tracing::warn!("Refresh of {} list failed: {}", R::NAME, e);
        }
    }

    fn refilter(&mut self) {
        self.items = apply_client_side_filters(&self.page.content, &self.search);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        widget, InMemoryUpstream, Widget, WidgetResource, WidgetSearch, WIDGETS_PATH,
    };
    use serde_json::json;

    fn controller(upstream: &Arc<InMemoryUpstream>) -> ResourceController<WidgetResource> {
        let service = Arc::new(CrudService::<WidgetResource>::new(upstream.clone()));
        ResourceController::new(service, Some("token".to_string()))
    }

    #[tokio::test]
    async fn test_load_and_search_filter_loaded_page() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(
            WIDGETS_PATH,
            vec![widget(1, "Alpha", true), widget(2, "Beta", false), widget(3, "alpine", true)],
        );

        let mut controller = controller(&upstream);
        controller.load().await.unwrap();
        assert_eq!(controller.items().len(), 3);

        controller.set_search(WidgetSearch {
            name: Some("alp".to_string()),
            is_active: Some("true".to_string()),
        });
        let names: Vec<&str> = controller.items().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "alpine"]);

        controller.reset_search();
        assert_eq!(controller.items().len(), 3);
        // Searching never hits the upstream again
        assert_eq!(upstream.request_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_upstream() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let mut controller = controller(&upstream);

        controller.open_create();
        controller.dialog_mut().form_mut().name = "   ".to_string();

        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert!(controller.dialog().is_open());
        assert!(controller.dialog().errors().contains("name"));
        assert_eq!(upstream.request_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_create_closes_dialog_and_reloads() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let mut controller = controller(&upstream);
        controller.load().await.unwrap();
        assert!(controller.items().is_empty());

        controller.open_create();
        controller.dialog_mut().form_mut().name = "  Gamma ".to_string();

        assert_eq!(controller.submit().await, SubmitOutcome::Saved);
        assert!(!controller.dialog().is_open());
        assert_eq!(controller.notice(), Some("Widget saved successfully"));
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].name, "Gamma");
    }

    #[tokio::test]
    async fn test_server_field_errors_merge_into_dialog() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.reject_next(
            400,
            "Validation failed",
            Some(json!({"name": "Name already exists", "checksum": "Bad checksum"})),
        );

        let mut controller = controller(&upstream);
        controller.open_create();
        controller.dialog_mut().form_mut().name = "Dup".to_string();

        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        let errors = controller.dialog().errors();
        assert_eq!(errors.get("name"), Some("Name already exists"));
        assert_eq!(errors.general(), Some("Bad checksum"));
        assert!(controller.dialog().is_open());
    }

    #[tokio::test]
    async fn test_resubmit_replaces_previous_errors() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let mut controller = controller(&upstream);

        controller.open_create();
        controller.dialog_mut().form_mut().name = "   ".to_string();
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert_eq!(controller.dialog().errors().get("name"), Some("Name is required"));

        upstream.reject_next(
            400,
            "Validation failed",
            Some(json!({"name": "Name already exists", "checksum": "Bad checksum"})),
        );
        controller.dialog_mut().form_mut().name = "Dup".to_string();
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert_eq!(
            controller.dialog().errors().get("name"),
            Some("Name already exists")
        );

        upstream.reject_next(
            400,
            "Validation failed",
            Some(json!({"checksum": "Bad checksum"})),
        );
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        let errors = controller.dialog().errors();
        assert!(!errors.contains("name"));
        assert_eq!(errors.general(), Some("Bad checksum"));
    }

    #[tokio::test]
    async fn test_failed_submit_clears_stale_field_errors() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let mut controller = controller(&upstream);

        controller.open_create();
        controller.dialog_mut().form_mut().name = "".to_string();
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);

        upstream.reject_next(500, "Service unavailable", None);
        controller.dialog_mut().form_mut().name = "Valid".to_string();
        assert_eq!(controller.submit().await, SubmitOutcome::Failed);
        assert!(controller.dialog().errors().is_empty());
        assert_eq!(controller.notice(), Some("Service unavailable"));
    }

    #[tokio::test]
    async fn test_general_failure_becomes_notice() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(WIDGETS_PATH, vec![widget(4, "Delta", true)]);
        upstream.reject_next(500, "Service unavailable", None);

        let mut controller = controller(&upstream);
        controller
            .open(DialogAction::Delete, Some(widget_item(4, "Delta")))
            .unwrap();

        assert_eq!(controller.submit().await, SubmitOutcome::Failed);
        assert_eq!(controller.notice(), Some("Service unavailable"));
        assert!(controller.dialog().is_open());
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(WIDGETS_PATH, vec![widget(7, "Old", true)]);

        let mut controller = controller(&upstream);
        controller.load().await.unwrap();
        let item = controller.items()[0].clone();

        controller.open(DialogAction::Edit, Some(item)).unwrap();
        assert_eq!(controller.dialog().form().name, "Old");

        controller.dialog_mut().form_mut().name = "New".to_string();
        assert_eq!(controller.submit().await, SubmitOutcome::Saved);
        assert_eq!(controller.items()[0].name, "New");
    }

    #[tokio::test]
    async fn test_deleting_last_row_steps_back_a_page() {
        let upstream = Arc::new(InMemoryUpstream::new());
        upstream.seed(
            WIDGETS_PATH,
            vec![widget(1, "A", true), widget(2, "B", true), widget(3, "C", true)],
        );

        let mut controller = controller(&upstream);
        controller.change_page_size(2).await.unwrap();
        controller.change_page(2).await.unwrap();
        assert_eq!(controller.items().len(), 1);

        let last = controller.items()[0].clone();
        controller.open(DialogAction::Delete, Some(last)).unwrap();
        assert_eq!(controller.submit().await, SubmitOutcome::Deleted);
        assert_eq!(controller.pagination().page, 1);
        assert_eq!(controller.items().len(), 2);
    }

    #[tokio::test]
    async fn test_view_submit_just_closes() {
        let upstream = Arc::new(InMemoryUpstream::new());
        let mut controller = controller(&upstream);
        controller
            .open(DialogAction::View, Some(widget_item(1, "A")))
            .unwrap();
        assert_eq!(controller.submit().await, SubmitOutcome::Closed);
        assert!(!controller.dialog().is_open());
        assert_eq!(upstream.request_count(), 0);
    }

    fn widget_item(id: i64, name: &str) -> Widget {
        serde_json::from_value(widget(id, name, true)).unwrap()
    }
}
