//! Catalog fixtures for the scoring pipeline tests.
//!
//! Each fixture is a raw product page the way a catalog crawl would hand it
//! to enrichment, together with the columns and score the pipeline is
//! expected to derive from it. Expected scores were traced by hand through
//! the rubric tables.

use dogfood_score::models::product::RawProductPage;

/// One raw catalog page plus its expected pipeline outcomes.
#[derive(Debug, Clone)]
pub struct CatalogFixture {
    pub brand: &'static str,
    pub product_name: &'static str,
    pub food_category: &'static str,
    pub description: &'static str,
    pub feeding_guidelines: &'static str,
    pub ingredients: &'static str,
    pub guaranteed_analysis: &'static str,
    pub dirty_dozen: &'static str,
    pub synthetic: Option<i32>,
    pub longevity: Option<i32>,
    pub expected_category: &'static str,
    pub expected_processing: &'static str,
    pub expected_sourcing: &'static str,
    pub expected_ash: &'static str,
    pub expected_score: f64,
    pub expected_classification: &'static str,
}

impl CatalogFixture {
    /// Builds the raw page that enrichment consumes.
    pub fn to_page(&self) -> RawProductPage {
        RawProductPage {
            brand: self.brand.to_string(),
            product_name: self.product_name.to_string(),
            description: self.description.to_string(),
            feeding_guidelines: self.feeding_guidelines.to_string(),
            food_category: self.food_category.to_string(),
            ingredients: self.ingredients.to_string(),
            guaranteed_analysis: self.guaranteed_analysis.to_string(),
            dirty_dozen: self.dirty_dozen.to_string(),
            synthetic: self.synthetic,
            longevity: self.longevity,
            ..RawProductPage::default()
        }
    }
}

pub const CATALOG: &[CatalogFixture] = &[
    // Frozen raw product. The name carries no processing cue, so processing
    // falls through to the description; ash is absent from the printed
    // analysis and gets the assumed value. Only deduction: flash-frozen
    // processing at -1.
    CatalogFixture {
        brand: "Wild Prairie",
        product_name: "Wild Prairie Beef Recipe",
        food_category: "Raw Food, Frozen",
        description: "Certified organic human grade beef, complete and balanced \
                      for all life stages. Raw beef patties preserved by flash freezing.",
        feeding_guidelines: "",
        ingredients: "Beef, Beef Liver, Organic Carrots, Flaxseed Oil",
        guaranteed_analysis: "Crude Protein (min) 13%, Crude Fat (min) 8%, \
                              Crude Fiber (max) 1%, Moisture (max) 70%",
        dirty_dozen: "",
        synthetic: None,
        longevity: None,
        expected_category: "Raw Food",
        expected_processing: "Uncooked (Flash Frozen)",
        expected_sourcing: "Human Grade (organic)",
        expected_ash: "6.0",
        expected_score: 99.0,
        expected_classification: "Optimal",
    },
    // Conventional kibble hitting most of the rubric: extruded dry food,
    // feed grade sourcing, 45% as-fed carbs, added dirty dozen, synthetic
    // and longevity counts. Hand-traced deductions sum to -64.
    CatalogFixture {
        brand: "Meadow Farm",
        product_name: "Meadow Farm Chicken Kibble",
        food_category: "Dry Food",
        description: "Complete and balanced dry chicken recipe with feed grade ingredients.",
        feeding_guidelines: "Feed 1 cup per 10 lbs of body weight daily.",
        ingredients: "Chicken, Chicken By-Product Meal, Corn, Wheat, Beet Pulp",
        guaranteed_analysis: "Crude Protein 24%, Crude Fat 12%, Crude Fiber 3%, \
                              Moisture 10%, Ash 6%",
        dirty_dozen: "BHA, Caramel Color",
        synthetic: Some(12),
        longevity: Some(2),
        expected_category: "Dry Food",
        expected_processing: "Extruded",
        expected_sourcing: "Feed Grade",
        expected_ash: "6",
        expected_score: 36.0,
        expected_classification: "Poor",
    },
    // Gently cooked fresh product with no catalog category column; both the
    // category and the processing label come from the product name. The
    // derived processing label sits outside the rubric's deduction map and
    // costs nothing.
    CatalogFixture {
        brand: "Garden Fresh",
        product_name: "Garden Fresh Gently Cooked Turkey",
        food_category: "",
        description: "Human grade turkey gently cooked in small batches. \
                      Complete and balanced.",
        feeding_guidelines: "",
        ingredients: "Turkey, Sweet Potato, Pumpkin, Spinach",
        guaranteed_analysis: "Crude Protein (min) 10%; Crude Fat (min) 6%; \
                              Crude Fiber (max) 1.5%; Moisture (max) 72%",
        dirty_dozen: "",
        synthetic: None,
        longevity: None,
        expected_category: "Fresh Food",
        expected_processing: "Lightly Cooked (Frozen)",
        expected_sourcing: "Human Grade",
        expected_ash: "6.0",
        expected_score: 89.0,
        expected_classification: "Optimal",
    },
];
