// SPDX-License-Identifier: MPL-2.0
//! Minimal markup used by concept description files.

/// One rendered line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionBlock {
    /// `# ` line.
    Heading(String),
    /// `## ` line.
    SubHeading(String),
    /// Blank line.
    Break,
    Paragraph(String),
}

/// Splits `text` into blocks, one per line.
#[must_use]
pub fn parse(text: &str) -> Vec<DescriptionBlock> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            if let Some(rest) = line.strip_prefix("# ") {
                DescriptionBlock::Heading(rest.to_string())
            } else if let Some(rest) = line.strip_prefix("## ") {
                DescriptionBlock::SubHeading(rest.to_string())
            } else if line.trim().is_empty() {
                DescriptionBlock::Break
            } else {
                DescriptionBlock::Paragraph(line.to_string())
            }
        })
        .collect()
}
