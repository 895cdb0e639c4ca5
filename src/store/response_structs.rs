use std::collections::HashMap;

use serde::Deserialize;

use crate::serde_utils::Number;

/// Merged result of an app-details fetch, keyed by the requested app
/// identifiers rendered as decimal strings.
pub type StoreResponse = HashMap<String, AppDetailsResponse>;

/// One entry of the app-details response.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppDetailsResponse {
    pub success: bool,
    /// `None` when the storefront has no data for the requested app
    pub data: Option<AppDetails>,
}

/// Store page metadata for a single app.
///
/// Every field is optional on the wire; absent fields decode to their
/// default so partially filled store pages never fail the whole batch.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppDetails {
    #[serde(rename = "type")]
    pub type_string: String,
    pub name: String,
    pub steam_appid: Number,
    pub required_age: Number,
    pub detailed_description: String,
    pub about_the_game: String,
    pub supported_languages: String,
    pub reviews: String,
    pub header_image: String,
    pub website: Option<String>,
    pub legal_notice: String,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub dlc: Vec<Number>,
    pub packages: Vec<Number>,
    pub package_groups: Vec<PackageGroup>,
    pub pc_requirements: Requirements,
    pub mac_requirements: Requirements,
    pub linux_requirements: Requirements,
    pub platforms: HashMap<String, bool>,
    pub categories: Vec<Category>,
    pub genres: Vec<Genre>,
    pub achievements: Achievements,
    pub metacritic: Option<Metacritic>,
    pub movies: Vec<Movie>,
    pub price_overview: Option<PriceOverview>,
    pub recommendations: Recommendations,
    pub release_date: ReleaseDate,
    pub screenshots: Vec<Screenshot>,
    pub support_info: SupportInfo,
}

/// Hardware requirements for one platform.
///
/// The endpoint sends an object with `minimum`/`recommended` text when
/// requirements are listed and an empty array when they are not.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Requirements {
    Listed {
        minimum: Option<String>,
        recommended: Option<String>,
    },
    Empty(Vec<String>),
}

impl Default for Requirements {
    fn default() -> Self {
        Requirements::Empty(Vec::new())
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PackageGroup {
    pub name: String,
    pub title: String,
    pub description: String,
    pub selection_text: String,
    pub save_text: String,
    pub display_type: Number,
    pub is_recurring_subscription: String,
    pub subs: Vec<PackageSub>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PackageSub {
    pub packageid: Number,
    pub percent_savings_text: String,
    pub percent_savings: Number,
    pub option_text: String,
    pub option_description: String,
    pub can_get_free_license: Number,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Category {
    pub id: Number,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Genre {
    pub id: Number,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Achievements {
    pub highlighted: Vec<HighlightedAchievement>,
    pub total: Number,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HighlightedAchievement {
    pub name: String,
    pub path: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Metacritic {
    pub score: Number,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Movie {
    pub highlight: bool,
    pub id: Number,
    pub name: String,
    pub thumbnail: String,
    pub webm: HashMap<String, String>,
}

/// Price in the smallest unit of `currency` (cents for USD).
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PriceOverview {
    pub currency: String,
    pub initial: Number,
    #[serde(rename = "final")]
    pub final_price: Number,
    pub discount_percent: Number,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Recommendations {
    pub total: Number,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ReleaseDate {
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Screenshot {
    pub id: Number,
    pub path_full: String,
    pub path_thumbnail: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SupportInfo {
    pub email: String,
    pub url: String,
}
