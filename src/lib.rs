//! Pet Food Scoring System
//!
//! This library provides the core functionality for the dogfood-score system,
//! which classifies pet-food label text into categorical judgments and grades
//! products on a 0-100 deduction-based quality score.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
