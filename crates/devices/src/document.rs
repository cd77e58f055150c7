//! The document type that devices operate on.

/// A named document: an ordered list of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub pages: Vec<String>,
}

impl Document {
    /// Create a document from pre-split pages
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Create a document from a block of text, one page per line
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            pages: text.lines().map(|line| line.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_lines() {
        let doc = Document::from_text("memo", "page one\npage two");

        assert_eq!(doc.name, "memo");
        assert_eq!(doc.pages, vec!["page one", "page two"]);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::from_text("blank", "");
        assert!(doc.is_empty());
    }
}
