use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionsQuery {
    /// Language of the option list, e.g. `EN`
    pub lang: Option<String>,
}

/// Options offered by a dropdown or tag picker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingOptionsDto {
    pub name: String,
    pub lang: Option<String>,
    pub options: Vec<String>,
}
