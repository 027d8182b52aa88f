//! Deduction rubric that turns classified product facts into a bounded
//! quality score.
//!
//! Every rule is a pure function from one input to a [`ScoringFactor`].
//! Rules never round their deductions; the final score is the clamped sum
//! of the raw values.

use crate::models::score::{MicroScore, ScoreBreakdown, ScoreClassification, ScoringFactor};

/// Per-field fallbacks applied before the deduction tables run.
#[derive(Debug, Clone)]
pub struct ScoringDefaults {
    /// Score before any deductions apply.
    pub starting_score: f64,
    /// Substituted when a product carries no sourcing claim.
    pub fallback_sourcing: String,
    /// Ash percentage assumed when the label omits it.
    pub fallback_ash_percent: f64,
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            starting_score: 100.0,
            fallback_sourcing: "Human Grade (organic)".to_string(),
            fallback_ash_percent: 6.0,
        }
    }
}

/// Everything the rubric needs to grade one product, already resolved and
/// defaulted by the caller. Quality tiers must arrive lowercased; grades
/// echo them back as given.
#[derive(Debug, Clone, Default)]
pub struct ScoringInputs {
    /// Category label, e.g. "Raw Food". Drives both the food factor and
    /// the carbohydrate basis.
    pub food_type: String,
    pub sourcing: String,
    pub processing: String,
    /// Empty when the request has no topper.
    pub topper_processing: String,
    pub adequate: bool,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub ash: f64,
    pub moisture: f64,
    pub protein_quality: String,
    pub fat_quality: String,
    pub fiber_quality: String,
    pub carbohydrate_quality: String,
    pub dirty_dozen_count: usize,
    pub synthetic_count: i32,
    pub longevity_count: i32,
    pub storage: String,
    pub topper_storage: String,
    pub packaging_size: String,
    pub topper_packaging_size: String,
    pub shelf_life: String,
    pub topper_shelf_life: String,
}

/// The deduction rubric. Stateless apart from its defaults table.
#[derive(Debug, Clone, Default)]
pub struct DogFoodScorer {
    pub defaults: ScoringDefaults,
}

impl DogFoodScorer {
    pub fn new(defaults: ScoringDefaults) -> Self {
        Self { defaults }
    }

    /// Derives the starchy-carbohydrate percentage from guaranteed-analysis
    /// numbers. Dry foods report as-fed directly; everything else converts
    /// to a dry-matter basis, with moisture > 17 as the signal when the
    /// category is unknown.
    pub fn calculate_carb_percent(
        &self,
        protein: f64,
        fat: f64,
        fiber: f64,
        ash: f64,
        moisture: f64,
        food_type: &str,
    ) -> f64 {
        let mut as_fed_carb = 100.0 - (protein + fat + fiber + ash + moisture);
        if as_fed_carb < 0.0 {
            as_fed_carb = 0.0;
        }

        if food_type.is_empty() {
            if moisture > 17.0 {
                (as_fed_carb / (100.0 - moisture)) * 100.0
            } else {
                as_fed_carb
            }
        } else if food_type == "Dry Food" {
            as_fed_carb
        } else {
            (as_fed_carb / (100.0 - moisture)) * 100.0
        }
    }

    pub fn food_deduction(&self, food_type: &str) -> ScoringFactor {
        let max_deduction = -20.0;
        let deduction = match food_type {
            "Raw Food" => 0.0,
            "Fresh Food" => -4.0,
            _ => -13.0,
        };
        ScoringFactor::new(deduction, max_deduction, food_type)
    }

    pub fn sourcing_deduction(&self, sourcing: &str) -> ScoringFactor {
        let max_deduction = -15.0;
        let sourcing = if sourcing.is_empty() {
            self.defaults.fallback_sourcing.as_str()
        } else {
            sourcing
        };
        let deduction = match sourcing {
            "Human Grade (organic)" => 0.0,
            "Human Grade" => -3.0,
            _ => -10.0,
        };
        ScoringFactor::new(deduction, max_deduction, sourcing)
    }

    fn processing_deduction(&self, method: &str) -> f64 {
        match method {
            "Uncooked (Not Frozen)" => 0.0,
            "Uncooked (Flash Frozen)" => -1.0,
            "Uncooked (Frozen)" => -2.0,
            "Lightly Cooked" => -3.0,
            "Lightly Cooked + Frozen" => -4.0,
            "Freeze Dried" => -5.0,
            "Air Dried" => -7.0,
            "Dehydrated" => -8.0,
            "Baked" => -11.0,
            "Extruded" => -15.0,
            "Retorted" => -15.0,
            _ => 0.0,
        }
    }

    /// Processing factor. A non-empty topper label blends in at a quarter
    /// of the weight; the grade always reports the base label.
    pub fn processing_base_topper(&self, base_type: &str, topper_type: &str) -> ScoringFactor {
        let max_deduction = -17.0;
        let base_deduction = self.processing_deduction(base_type);
        let deduction = if topper_type.is_empty() {
            base_deduction
        } else {
            base_deduction * 0.75 + self.processing_deduction(topper_type) * 0.25
        };
        ScoringFactor::new(deduction, max_deduction, base_type)
    }

    pub fn adequacy_deduction(&self, adequate: bool) -> ScoringFactor {
        let max_deduction = -14.0;
        let deduction = if adequate { 0.0 } else { -10.0 };
        ScoringFactor::new(deduction, max_deduction, adequate.to_string())
    }

    /// Banded carbohydrate factor. A NaN percentage fails every band
    /// comparison and lands in the worst band.
    pub fn carb_deduction(&self, carb_percent: f64) -> ScoringFactor {
        let max_deduction = -14.0;
        let (deduction, grade) = if carb_percent < 10.0 {
            (0.0, "<10%")
        } else if carb_percent <= 15.0 {
            (-2.0, "10-15% starchy carbs")
        } else if carb_percent <= 20.0 {
            (-4.0, "16-20% starchy carbs")
        } else if carb_percent <= 25.0 {
            (-6.0, "21-25% starchy carbs")
        } else if carb_percent <= 30.0 {
            (-8.0, "26-30% starchy carbs")
        } else {
            (-10.0, "Above 30% starchy carbs")
        };
        ScoringFactor::new(deduction, max_deduction, grade)
    }

    fn ingredient_quality_deduction(&self, quality: &str) -> f64 {
        match quality {
            "high" => 0.0,
            "good" => -2.0,
            "moderate" => -3.0,
            "low" => -5.0,
            _ => 0.0,
        }
    }

    /// Quality-tier factors, one per macronutrient. Tiers compare exactly,
    /// so callers hand in lowercase.
    pub fn ingredient_quality_protein_deduction(&self, protein_quality: &str) -> ScoringFactor {
        let max_deduction = -9.0;
        let deduction = self.ingredient_quality_deduction(protein_quality);
        ScoringFactor::new(deduction, max_deduction, protein_quality)
    }

    pub fn ingredient_quality_fat_deduction(&self, fat_quality: &str) -> ScoringFactor {
        let max_deduction = -9.0;
        let deduction = self.ingredient_quality_deduction(fat_quality);
        ScoringFactor::new(deduction, max_deduction, fat_quality)
    }

    pub fn ingredient_quality_fiber_deduction(&self, fiber_quality: &str) -> ScoringFactor {
        let max_deduction = -9.0;
        let deduction = self.ingredient_quality_deduction(fiber_quality);
        ScoringFactor::new(deduction, max_deduction, fiber_quality)
    }

    pub fn ingredient_quality_carbohydrate_deduction(
        &self,
        carbohydrate_quality: &str,
    ) -> ScoringFactor {
        let max_deduction = -9.0;
        let deduction = self.ingredient_quality_deduction(carbohydrate_quality);
        ScoringFactor::new(deduction, max_deduction, carbohydrate_quality)
    }

    pub fn dirty_dozen_deduction(&self, count: usize) -> ScoringFactor {
        let max_deduction = -12.0;
        let (deduction, grade) = if count == 0 {
            (0.0, "0 Added Dirty Dozen Ingredients")
        } else if count <= 2 {
            (-2.0, "1-2 Added Dirty Dozen Ingredients")
        } else if count <= 5 {
            (-5.0, "3-5 Added Dirty Dozen Ingredients")
        } else if count <= 9 {
            (-8.0, "6-9 Added Dirty Dozen Ingredients")
        } else {
            (-9.0, "10+ Added Dirty Dozen Ingredients")
        };
        ScoringFactor::new(deduction, max_deduction, grade)
    }

    pub fn synthetic_deduction(&self, count: i32) -> ScoringFactor {
        let max_deduction = -9.0;
        let (deduction, grade) = if count <= 3 {
            (0.0, "0-3 Added Synthetic Ingredients (Vitamins E & D)")
        } else if count <= 6 {
            (-2.0, "4-6 Added Synthetic Ingredients")
        } else if count <= 10 {
            (-3.0, "7-10 Added Synthetic Ingredients")
        } else {
            (-5.0, ">11 Added Synthetic Ingredients")
        };
        ScoringFactor::new(deduction, max_deduction, grade)
    }

    pub fn longevity_deduction(&self, count: i32) -> ScoringFactor {
        let max_deduction = -4.0;
        let (deduction, grade) = if count == 0 {
            (0.0, "0 Longevity Additives")
        } else if count <= 3 {
            (-2.0, "1-3 Longevity Additives")
        } else if count <= 7 {
            (-3.0, "4-7 Longevity Additives")
        } else {
            (-4.0, ">7 Longevity Additives")
        };
        ScoringFactor::new(deduction, max_deduction, grade)
    }

    fn storage_deduction_value(&self, storage: &str) -> f64 {
        match storage {
            "freezer" => 0.0,
            "refrigerator" => 0.0,
            "cool/dry space(yes)" => -1.0,
            "cool/dry space(no)" => -3.0,
            _ => 0.0,
        }
    }

    pub fn storage_deduction(&self, storage: &str, topper_storage: &str) -> ScoringFactor {
        let max_deduction = -4.0;
        let base_deduction = self.storage_deduction_value(storage);
        let deduction = if topper_storage.is_empty() {
            base_deduction
        } else {
            base_deduction * 0.75 + self.storage_deduction_value(topper_storage) * 0.25
        };
        ScoringFactor::new(deduction, max_deduction, storage)
    }

    fn packaging_deduction_value(&self, packaging_size: &str) -> f64 {
        match packaging_size {
            "1 Month or less Supply" => 0.0,
            "2 Month Supply" => -3.0,
            "3+ Month Supply" => -4.0,
            _ => 0.0,
        }
    }

    pub fn packaging_deduction(
        &self,
        packaging_size: &str,
        topper_packaging_size: &str,
    ) -> ScoringFactor {
        let max_deduction = -7.0;
        let base_deduction = self.packaging_deduction_value(packaging_size);
        let deduction = if topper_packaging_size.is_empty() {
            base_deduction
        } else {
            base_deduction * 0.75 + self.packaging_deduction_value(topper_packaging_size) * 0.25
        };
        ScoringFactor::new(deduction, max_deduction, packaging_size)
    }

    fn shelf_life_deduction_value(&self, shelf_life: &str) -> f64 {
        match shelf_life {
            "<8 Days" => 0.0,
            "2 Weeks" => -3.0,
            "1 Month" => -4.0,
            _ => 0.0,
        }
    }

    pub fn shelf_life_deduction(&self, shelf_life: &str, topper_shelf_life: &str) -> ScoringFactor {
        let max_deduction = -7.0;
        let base_deduction = self.shelf_life_deduction_value(shelf_life);
        let deduction = if topper_shelf_life.is_empty() {
            base_deduction
        } else {
            base_deduction * 0.75 + self.shelf_life_deduction_value(topper_shelf_life) * 0.25
        };
        ScoringFactor::new(deduction, max_deduction, shelf_life)
    }

    /// Sums raw deductions against the starting score and clamps.
    pub fn calculate_score(&self, deductions: &[f64]) -> f64 {
        let total: f64 = deductions.iter().sum();
        (self.defaults.starting_score + total).clamp(0.0, 100.0)
    }

    pub fn classify_score(&self, score: f64) -> ScoreClassification {
        if score >= 85.0 {
            ScoreClassification::Optimal
        } else if score >= 70.0 {
            ScoreClassification::Good
        } else if score >= 50.0 {
            ScoreClassification::Fair
        } else if score >= 30.0 {
            ScoreClassification::Poor
        } else {
            ScoreClassification::AtRisk
        }
    }

    /// Runs all fifteen factors in rubric order and assembles the final
    /// breakdown.
    pub fn score_product(&self, inputs: &ScoringInputs) -> ScoreBreakdown {
        let carb_percent = self.calculate_carb_percent(
            inputs.protein,
            inputs.fat,
            inputs.fiber,
            inputs.ash,
            inputs.moisture,
            &inputs.food_type,
        );

        let food = self.food_deduction(&inputs.food_type);
        let sourcing = self.sourcing_deduction(&inputs.sourcing);
        let processing =
            self.processing_base_topper(&inputs.processing, &inputs.topper_processing);
        let adequacy = self.adequacy_deduction(inputs.adequate);
        let carb = self.carb_deduction(carb_percent);
        let ingredient_quality_protein =
            self.ingredient_quality_protein_deduction(&inputs.protein_quality);
        let ingredient_quality_fat = self.ingredient_quality_fat_deduction(&inputs.fat_quality);
        let ingredient_quality_fiber =
            self.ingredient_quality_fiber_deduction(&inputs.fiber_quality);
        let ingredient_quality_carbohydrate =
            self.ingredient_quality_carbohydrate_deduction(&inputs.carbohydrate_quality);
        let dirty_dozen = self.dirty_dozen_deduction(inputs.dirty_dozen_count);
        let synthetic = self.synthetic_deduction(inputs.synthetic_count);
        let longevity = self.longevity_deduction(inputs.longevity_count);
        let storage = self.storage_deduction(&inputs.storage, &inputs.topper_storage);
        let packaging =
            self.packaging_deduction(&inputs.packaging_size, &inputs.topper_packaging_size);
        let shelf_life =
            self.shelf_life_deduction(&inputs.shelf_life, &inputs.topper_shelf_life);

        let deductions = vec![
            food.deduction,
            sourcing.deduction,
            processing.deduction,
            adequacy.deduction,
            carb.deduction,
            ingredient_quality_protein.deduction,
            ingredient_quality_fat.deduction,
            ingredient_quality_fiber.deduction,
            ingredient_quality_carbohydrate.deduction,
            dirty_dozen.deduction,
            synthetic.deduction,
            longevity.deduction,
            storage.deduction,
            packaging.deduction,
            shelf_life.deduction,
        ];

        let score = self.calculate_score(&deductions);
        let classification = self.classify_score(score);

        ScoreBreakdown {
            score,
            classification,
            deductions,
            carb_percent,
            micro_score: Some(MicroScore {
                food,
                sourcing,
                processing,
                adequacy,
                carb,
                ingredient_quality_protein,
                ingredient_quality_fat,
                ingredient_quality_fiber,
                ingredient_quality_carbohydrate,
                dirty_dozen,
                synthetic,
                longevity,
                storage,
                packaging,
                shelf_life,
            }),
        }
    }
}
