//! Core domain types for the BMI tracking system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Health classifications and their display ranges
//! - BMI readings (the result of one computation)
//! - Persistent history records

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Classification
// ============================================================================

/// One of the eight fixed health-category labels derived from BMI thresholds
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    SevereThinness,
    ModerateThinness,
    MildThinness,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassII,
    ObeseClassIII,
}

impl Classification {
    /// Human-readable label, as shown in result messages
    pub fn label(&self) -> &'static str {
        match self {
            Classification::SevereThinness => "Severe Thinness",
            Classification::ModerateThinness => "Moderate Thinness",
            Classification::MildThinness => "Mild Thinness",
            Classification::Normal => "Normal",
            Classification::Overweight => "Overweight",
            Classification::ObeseClassI => "Obese Class I",
            Classification::ObeseClassII => "Obese Class II",
            Classification::ObeseClassIII => "Obese Class III",
        }
    }

    /// BMI range text for the classification scale panel
    pub fn range_text(&self) -> &'static str {
        match self {
            Classification::SevereThinness => "< 16",
            Classification::ModerateThinness => "16 - 17",
            Classification::MildThinness => "17 - 18.5",
            Classification::Normal => "18.5 - 25",
            Classification::Overweight => "25 - 30",
            Classification::ObeseClassI => "30 - 35",
            Classification::ObeseClassII => "35 - 40",
            Classification::ObeseClassIII => "> 40",
        }
    }

    /// All labels in ascending threshold order
    pub fn all() -> [Classification; 8] {
        [
            Classification::SevereThinness,
            Classification::ModerateThinness,
            Classification::MildThinness,
            Classification::Normal,
            Classification::Overweight,
            Classification::ObeseClassI,
            Classification::ObeseClassII,
            Classification::ObeseClassIII,
        ]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Readings and Records
// ============================================================================

/// Result of one successful BMI computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub classification: Classification,
}

/// One historical BMI entry for a user
///
/// The natural key is (user_name, weight_kg, height_m); the store rejects
/// duplicate triples rather than overwriting them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BmiRecord {
    pub user_name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
}

impl BmiRecord {
    /// Classification of this record's stored BMI value
    pub fn classification(&self) -> Classification {
        crate::engine::classify(self.bmi)
    }
}
