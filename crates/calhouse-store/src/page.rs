//! Static page text.

use std::fs;
use std::path::Path;

use calhouse_core::error::{CalhouseError, Result};
use serde::Serialize;

pub const PAGE_TITLE: &str = "Predict house prices in California";

/// Markdown text of the page, split into sections on `---` lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    pub title: &'static str,
    pub sections: Vec<String>,
}

impl PageText {
    pub fn parse(markdown: &str) -> Self {
        let mut sections = vec![String::new()];
        for line in markdown.lines() {
            if line.trim() == "---" {
                sections.push(String::new());
                continue;
            }
            if let Some(current) = sections.last_mut() {
                current.push_str(line);
                current.push('\n');
            }
        }

        let sections = sections
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { title: PAGE_TITLE, sections }
    }

    /// The section shown under the title
    pub fn intro(&self) -> &str {
        self.sections.first().map(String::as_str).unwrap_or_default()
    }
}

pub fn load_page_text(path: &Path) -> Result<PageText> {
    if !path.exists() {
        return Err(CalhouseError::DatasetNotFound { path: path.to_path_buf() });
    }
    let markdown = fs::read_to_string(path)?;
    Ok(PageText::parse(&markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections() {
        let page = PageText::parse("Intro *text*\n\nmore\n---\nSecond\n ---\n\n");
        assert_eq!(page.sections, vec!["Intro *text*\n\nmore", "Second"]);
        assert_eq!(page.intro(), "Intro *text*\n\nmore");
        assert_eq!(page.title, PAGE_TITLE);
    }

    #[test]
    fn test_empty_page() {
        let page = PageText::parse("");
        assert!(page.sections.is_empty());
        assert_eq!(page.intro(), "");
    }

    #[test]
    fn test_missing_file() {
        let err = load_page_text(Path::new("/nonexistent/01_home.md")).unwrap_err();
        assert!(matches!(err, CalhouseError::DatasetNotFound { .. }));
    }
}
