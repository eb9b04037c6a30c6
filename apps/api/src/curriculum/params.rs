//! Parameter model — the validated per-request configuration collected by
//! the frontend. Numeric ranges are enforced by the input widgets; the core
//! only guards the one invariant it owns: the topic must be non-empty at
//! trigger time.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    Course,
    Workshop,
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseType::Course => write!(f, "Course"),
            CourseType::Workshop => write!(f, "Workshop"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Professional,
}

impl ProficiencyLevel {
    /// Lowercased name, as interpolated into the proficiency clause.
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Professional => "professional",
        }
    }
}

/// One generation request's worth of user input. Ephemeral — built per
/// trigger, never persisted.
///
/// Widget ranges: num_modules 1–10, topics_per_module 1–8,
/// max_subtopics_per_topic 0–5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSet {
    pub course_type: CourseType,
    pub topic: String,
    pub num_modules: u8,
    pub topics_per_module: u8,
    pub max_subtopics_per_topic: u8,
    #[serde(default)]
    pub proficiency_level: Option<ProficiencyLevel>,
    #[serde(default)]
    pub primary_resource_url: Option<String>,
}

impl ParameterSet {
    /// True when the topic is empty or whitespace-only — the one condition
    /// that blocks a generation request before any external call.
    pub fn topic_is_blank(&self) -> bool {
        self.topic.trim().is_empty()
    }
}
