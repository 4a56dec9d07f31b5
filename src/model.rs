use serde::{Deserialize, Serialize};

/// A decoded recipe as produced by the model.
///
/// Numeric fields carry implicit units agreed with the model: times are
/// minutes, calories are kcal, macros are grams. Units are a documentation
/// contract, not validated at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub preparation_time: PreparationTime,
    /// Display order, preserved verbatim from the payload.
    pub ingredients: Vec<String>,
    /// Display order, preserved verbatim from the payload.
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
}

/// Time breakdown in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationTime {
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking: Option<f64>,
}

/// Nutrition facts per serving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}
