use crate::features::users::dtos::{UserForm, UserSearch};
use crate::features::users::models::User;
use crate::shared::crud::{CrudService, FieldErrors, FormMode, Resource};
use crate::shared::validation::{trim, trim_opt};

pub struct UserResource;

impl Resource for UserResource {
    type Item = User;
    type Form = UserForm;
    type Search = UserSearch;

    const NAME: &'static str = "User";
    const PATH: &'static str = "/v1/users";
    const FORM_FIELDS: &'static [&'static str] = &[
        "username",
        "nickname",
        "email",
        "mobileCountryCode",
        "mobileNumber",
        "accountStatus",
        "password",
    ];

    fn item_id(user: &User) -> i64 {
        user.id
    }

    fn form_from_item(user: &User) -> UserForm {
        UserForm::from(user)
    }

    fn normalize(form: UserForm) -> UserForm {
        UserForm {
            username: trim(form.username),
            nickname: trim_opt(form.nickname),
            email: trim_opt(form.email).map(|e| e.to_lowercase()),
            mobile_country_code: trim_opt(form.mobile_country_code),
            mobile_number: trim_opt(form.mobile_number),
            // passwords are sent as typed; only an empty one is dropped
            password: form.password.filter(|p| !p.is_empty()),
            ..form
        }
    }

    fn check_rules(form: &UserForm, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if mode == FormMode::Create && form.password.is_none() {
            errors.insert("password", "Password is required");
        }
        if form.email.is_none() && form.mobile_number.is_none() {
            errors.insert("email", "Email or mobile number is required");
        }
        if form.mobile_number.is_some() && form.mobile_country_code.is_none() {
            errors.insert("mobileCountryCode", "Country code is required with a mobile number");
        }

        errors
    }
}

pub type UserService = CrudService<UserResource>;
