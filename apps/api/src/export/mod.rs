//! Document packager — wraps a generated curriculum into a downloadable
//! `.docx` with exactly three blocks: a Title-styled heading, a generation
//! timestamp paragraph, and the curriculum text verbatim as one paragraph.
//! The body is carried as plain text; its own numbering survives but is not
//! converted to rich structure.

pub mod handlers;

use std::io::Cursor;

use bytes::Bytes;
use chrono::{DateTime, Local};
use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use thiserror::Error;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Document serialization failed: {0}")]
    Serialize(String),
}

/// The three content blocks, in document order. Split out so the block
/// text can be asserted on without unpacking the docx container.
fn document_blocks(title: &str, generated_at: DateTime<Local>, body: &str) -> [String; 3] {
    [
        title.to_string(),
        format!("Generated on: {}", generated_at.format(TIMESTAMP_FORMAT)),
        body.to_string(),
    ]
}

/// Serializes the three blocks into a `.docx` byte stream. Deterministic
/// given identical inputs apart from the timestamp.
pub fn package_document(
    title: &str,
    generated_at: DateTime<Local>,
    body: &str,
) -> Result<Bytes, ExportError> {
    let [heading, timestamp_line, body_text] = document_blocks(title, generated_at, body);

    let mut buffer = Cursor::new(Vec::new());
    Docx::new()
        .add_style(
            Style::new("Title", StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(heading))
                .style("Title"),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(timestamp_line)))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(body_text)))
        .build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    Ok(Bytes::from(buffer.into_inner()))
}

/// Filesystem-safe topic slug: lowercased, whitespace runs joined with
/// underscores.
pub fn topic_slug(topic: &str) -> String {
    topic
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Suggested download filename: `curriculum_{topic_slug}_{yyyymmdd}.docx`.
pub fn download_filename(topic: &str, generated_at: DateTime<Local>) -> String {
    format!(
        "curriculum_{}_{}.docx",
        topic_slug(topic),
        generated_at.format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 29, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_blocks_in_order_title_timestamp_body() {
        let blocks = document_blocks(
            "Course: Intro to Generative AI",
            fixed_time(),
            "1. Context and Background\n...",
        );
        assert_eq!(blocks[0], "Course: Intro to Generative AI");
        assert_eq!(blocks[1], "Generated on: 2026-08-29 14:30:05");
        assert_eq!(blocks[2], "1. Context and Background\n...");
    }

    #[test]
    fn test_body_is_carried_verbatim() {
        let body = "Module 1: Basics\n  - containers\n  - images\n\nModule 2: Compose";
        let blocks = document_blocks("Workshop: Docker Basics", fixed_time(), body);
        assert_eq!(blocks[2], body);
    }

    #[test]
    fn test_package_produces_docx_container() {
        let bytes =
            package_document("Workshop: Docker Basics", fixed_time(), "generated text").unwrap();
        // A .docx is a zip archive; check the local-file-header magic
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_topic_slug_lowercases_and_underscores() {
        assert_eq!(topic_slug("Intro to Generative AI"), "intro_to_generative_ai");
        assert_eq!(topic_slug("Docker Basics"), "docker_basics");
        assert_eq!(topic_slug("  Rust   async  "), "rust_async");
    }

    #[test]
    fn test_download_filename_pattern() {
        assert_eq!(
            download_filename("Intro to Generative AI", fixed_time()),
            "curriculum_intro_to_generative_ai_20260829.docx"
        );
    }
}
