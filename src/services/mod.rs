pub mod adequacy;
pub mod analysis;
pub mod category;
pub mod enrichment;
pub mod ingredients;
pub mod keywords;
pub mod processing;
pub mod rubric;
pub mod scoring;
pub mod sourcing;
pub mod text;
