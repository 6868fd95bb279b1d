//! Document text extraction for uploaded resumes.
//!
//! Dispatches purely on the uploaded filename's extension; anything that is
//! not PDF or DOCX is treated as UTF-8 plain text.

use anyhow::{anyhow, Context, Result};

pub mod json;

/// Extracts plain text from an uploaded file based on its extension.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        extract_text_from_pdf(data)
    } else if lower.ends_with(".docx") {
        extract_text_from_docx(data)
    } else {
        String::from_utf8(data.to_vec())
            .with_context(|| format!("File '{filename}' is not valid UTF-8 text"))
    }
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| anyhow!("Failed to extract text from PDF: {e}"))
}

/// Concatenates the run text of every paragraph, one paragraph per line.
fn extract_text_from_docx(data: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(data).map_err(|e| anyhow!("Failed to read DOCX: {e}"))?;
    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for p_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = p_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
