use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::users::models::{AccountStatus, User};
use crate::shared::crud::{contains_ci, criterion, equals_ci, SearchFilter};
use crate::shared::validation::{COUNTRY_CODE_REGEX, MOBILE_REGEX, USERNAME_REGEX};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(
        length(min = 3, max = 50, message = "Username must be 3-50 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits, underscores or dots"
        )
    )]
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Nickname must not exceed 100 characters"))]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *COUNTRY_CODE_REGEX, message = "Country code must be 1-4 digits"))]
    pub mobile_country_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number"))]
    pub mobile_number: Option<String>,

    #[serde(default)]
    pub account_status: AccountStatus,

    /// Required on create; leave empty on update to keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 8, max = 64, message = "Password must be 8-64 characters"))]
    pub password: Option<String>,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            mobile_country_code: user.mobile_country_code.clone(),
            mobile_number: user.mobile_number.clone(),
            account_status: user.account_status,
            password: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct UserSearch {
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    /// `active`, `locked`, `suspended` or `pending_verification`
    pub account_status: Option<String>,
}

impl SearchFilter<User> for UserSearch {
    fn is_empty(&self) -> bool {
        criterion(&self.username).is_none()
            && criterion(&self.nickname).is_none()
            && criterion(&self.email).is_none()
            && criterion(&self.mobile_number).is_none()
            && criterion(&self.account_status).is_none()
    }

    fn matches(&self, user: &User) -> bool {
        contains_ci(Some(user.username.as_str()), &self.username)
            && contains_ci(user.nickname.as_deref(), &self.nickname)
            && contains_ci(user.email.as_deref(), &self.email)
            && contains_ci(user.mobile_number.as_deref(), &self.mobile_number)
            && equals_ci(Some(user.account_status.as_str()), &self.account_status)
    }
}
