// All prompt constants for the curriculum pipeline.

/// Role-establishing system instruction. Sent once per request in stateless
/// mode, and once per visit as the session seed in session mode. The five
/// numbered sections are the structure the model is instructed to follow.
pub const SYSTEM_PROMPT: &str = "\
You are an expert curriculum designer in an EdTech environment.

Generate clear, well-structured, and professionally researched curricula.

Always use this structure:
1. Context and Background
2. Course Objectives
3. Module Structure (modules, topics, sub-topics)
4. Learning Outcomes
5. Resources and References (valid functional links only)

Follow industry best practices and ensure logical learning progression.";

/// Guideline block interpolated when the course type is Workshop.
pub const WORKSHOP_GUIDELINES: &str = "\
- Suitable for one-day delivery
- Focus on essential concepts
- Include quick practical activities
- Provide time allocation per module";

/// Guideline block interpolated for a full Course.
pub const COURSE_GUIDELINES: &str = "\
- Comprehensive topic coverage
- Progressive difficulty
- Include theoretical and practical elements
- Emphasize long-term learning outcomes";

/// Placeholder used when no primary resource URL was supplied, so the model
/// always sees a complete set of labeled inputs.
pub const URL_NOT_PROVIDED: &str = "Not provided";
