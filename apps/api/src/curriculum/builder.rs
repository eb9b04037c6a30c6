//! Prompt builder — pure function from a ParameterSet to the prompt string.
//! Deterministic, no I/O, never fails. Topic validation is the caller's job
//! and happens before this is invoked.

use crate::curriculum::params::{CourseType, ParameterSet};
use crate::curriculum::prompts::{COURSE_GUIDELINES, URL_NOT_PROVIDED, WORKSHOP_GUIDELINES};

/// Interpolates every parameter verbatim into the labeled input block,
/// selects the mode-specific guideline list, and appends the proficiency
/// clause only when a level was chosen.
pub fn build_prompt(params: &ParameterSet) -> String {
    let mode_guidelines = match params.course_type {
        CourseType::Workshop => WORKSHOP_GUIDELINES,
        CourseType::Course => COURSE_GUIDELINES,
    };

    let mut prompt = format!(
        "Course Type: {}\n\
         Course Topic: {}\n\
         Number of Modules: {}\n\
         Topics per Module: {}\n\
         Maximum Sub-topics per Topic: {}\n\
         Primary Resource URL: {}\n\
         \n\
         Mode-specific requirements:\n\
         {}",
        params.course_type,
        params.topic,
        params.num_modules,
        params.topics_per_module,
        params.max_subtopics_per_topic,
        params
            .primary_resource_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(URL_NOT_PROVIDED),
        mode_guidelines,
    );

    if let Some(level) = params.proficiency_level {
        prompt.push_str(&format!(
            "\n\nContent should be suitable for a {} level.",
            level.as_lowercase()
        ));
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::params::ProficiencyLevel;

    fn workshop_params() -> ParameterSet {
        ParameterSet {
            course_type: CourseType::Workshop,
            topic: "Docker Basics".to_string(),
            num_modules: 3,
            topics_per_module: 3,
            max_subtopics_per_topic: 2,
            proficiency_level: None,
            primary_resource_url: None,
        }
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let params = workshop_params();
        assert_eq!(build_prompt(&params), build_prompt(&params));
    }

    #[test]
    fn test_prompt_includes_all_parameters_verbatim() {
        let params = ParameterSet {
            course_type: CourseType::Course,
            topic: "Rust for Systems Programmers".to_string(),
            num_modules: 7,
            topics_per_module: 5,
            max_subtopics_per_topic: 4,
            proficiency_level: None,
            primary_resource_url: Some("https://doc.rust-lang.org/book/".to_string()),
        };
        let prompt = build_prompt(&params);

        assert!(prompt.contains("Course Type: Course"));
        assert!(prompt.contains("Course Topic: Rust for Systems Programmers"));
        assert!(prompt.contains("Number of Modules: 7"));
        assert!(prompt.contains("Topics per Module: 5"));
        assert!(prompt.contains("Maximum Sub-topics per Topic: 4"));
        assert!(prompt.contains("Primary Resource URL: https://doc.rust-lang.org/book/"));
    }

    #[test]
    fn test_missing_url_becomes_not_provided_marker() {
        let prompt = build_prompt(&workshop_params());
        assert!(prompt.contains("Primary Resource URL: Not provided"));
    }

    #[test]
    fn test_whitespace_url_treated_as_missing() {
        let mut params = workshop_params();
        params.primary_resource_url = Some("   ".to_string());
        let prompt = build_prompt(&params);
        assert!(prompt.contains("Primary Resource URL: Not provided"));
    }

    #[test]
    fn test_no_proficiency_clause_when_unset() {
        let prompt = build_prompt(&workshop_params());
        assert!(!prompt.contains("suitable for a"));
    }

    #[test]
    fn test_exactly_one_lowercase_proficiency_clause_when_set() {
        let mut params = workshop_params();
        params.proficiency_level = Some(ProficiencyLevel::Intermediate);
        let prompt = build_prompt(&params);

        assert_eq!(
            prompt
                .matches("Content should be suitable for a intermediate level.")
                .count(),
            1
        );
        assert!(!prompt.contains("Intermediate level"));
    }

    #[test]
    fn test_workshop_selects_one_day_guidelines() {
        let prompt = build_prompt(&workshop_params());
        assert!(prompt.contains("Mode-specific requirements:"));
        assert!(prompt.contains("- Suitable for one-day delivery"));
        assert!(!prompt.contains("- Comprehensive topic coverage"));
    }

    #[test]
    fn test_course_selects_comprehensive_guidelines() {
        let mut params = workshop_params();
        params.course_type = CourseType::Course;
        let prompt = build_prompt(&params);
        assert!(prompt.contains("- Comprehensive topic coverage"));
        assert!(!prompt.contains("- Suitable for one-day delivery"));
    }

    // Full scenario: Workshop / "Docker Basics" / 3-3-2, no proficiency, no URL.
    #[test]
    fn test_docker_basics_workshop_scenario() {
        let prompt = build_prompt(&workshop_params());
        assert!(prompt.contains("Docker Basics"));
        assert!(prompt.contains("- Suitable for one-day delivery"));
        assert!(prompt.contains("Not provided"));
        assert!(!prompt.contains("suitable for a"));
    }
}
