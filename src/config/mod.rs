use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Path to the product catalog JSON file.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Product name to score. When unset, the CLI prints top picks instead.
    pub product: Option<String>,

    /// Topper product name blended into the base score.
    pub topper: Option<String>,

    /// Storage answer for the base product (e.g., "freezer").
    pub storage: Option<String>,

    /// Packaging-size answer (e.g., "2 Month Supply").
    pub packaging_size: Option<String>,

    /// Thawed shelf-life answer (e.g., "2 Weeks").
    pub shelf_life: Option<String>,

    /// Same three answers for the topper, when one is added.
    pub topper_storage: Option<String>,
    pub topper_packaging_size: Option<String>,
    pub topper_shelf_life: Option<String>,

    /// How many products to keep per category in recommendation mode.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_top_n() -> usize {
    5
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
