//! Static narrative insights per personality type.
//!
//! A compiled-in lookup of descriptive material for each of the sixteen
//! types: a short epithet, a one-paragraph description, suggested careers,
//! growth tips, and the types it pairs well with. Pure reference data, no
//! inference involved.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::personality::PersonalityType;

/// Narrative material for one personality type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalityInsight {
    /// Short epithet, e.g. "The Inspector".
    pub name: String,
    pub description: String,
    pub careers: Vec<String>,
    pub growth_tips: Vec<String>,
    /// Types this one tends to pair well with.
    pub compatibility: Vec<PersonalityType>,
}

static TABLE: OnceLock<HashMap<String, PersonalityInsight>> = OnceLock::new();

fn table() -> AnalysisResult<&'static HashMap<String, PersonalityInsight>> {
    if let Some(table) = TABLE.get() {
        return Ok(table);
    }
    let parsed: HashMap<String, PersonalityInsight> =
        serde_json::from_str(include_str!("../data/insights.json"))
            .map_err(|e| AnalysisError::internal("insight data parse", e.to_string()))?;
    Ok(TABLE.get_or_init(|| parsed))
}

/// The compiled-in insight for a type.
pub fn insight_for(personality: PersonalityType) -> AnalysisResult<&'static PersonalityInsight> {
    table()?.get(&personality.to_string()).ok_or_else(|| {
        AnalysisError::internal(
            "insight lookup",
            format!("no insight entry for {}", personality),
        )
    })
}
