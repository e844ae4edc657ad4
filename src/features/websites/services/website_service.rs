use crate::features::websites::dtos::{WebsiteForm, WebsiteSearch};
use crate::features::websites::models::Website;
use crate::shared::crud::{CrudService, Resource};
use crate::shared::validation::{normalize_tags, trim, trim_opt};

pub struct WebsiteResource;

impl Resource for WebsiteResource {
    type Item = Website;
    type Form = WebsiteForm;
    type Search = WebsiteSearch;

    const NAME: &'static str = "Website";
    const PATH: &'static str = "/v1/websites";
    const FORM_FIELDS: &'static [&'static str] = &[
        "name",
        "url",
        "logoUrl",
        "description",
        "tags",
        "lang",
        "displayOrder",
        "isActive",
    ];

    fn item_id(site: &Website) -> i64 {
        site.id
    }

    fn form_from_item(site: &Website) -> WebsiteForm {
        WebsiteForm::from(site)
    }

    fn normalize(form: WebsiteForm) -> WebsiteForm {
        WebsiteForm {
            name: trim(form.name),
            url: trim(form.url),
            logo_url: trim_opt(form.logo_url),
            description: trim_opt(form.description),
            tags: normalize_tags(form.tags),
            lang: trim(form.lang),
            ..form
        }
    }
}

pub type WebsiteService = CrudService<WebsiteResource>;
