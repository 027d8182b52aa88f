pub mod classification;
pub mod product;
pub mod score;
