//! Level-2 heading detection and section extraction.
//!
//! A section starts at a `## ` heading and runs until the next level-2
//! heading or the end of the document. Deeper headings (`###` and below)
//! stay inside the section that contains them.

/// A level-2 heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Byte offset where the heading line starts.
    pub offset: usize,
    /// Byte offset of the first byte after the heading line.
    pub body_start: usize,
    /// Heading text with the `##` marker and surrounding whitespace removed.
    pub text: &'a str,
}

/// A located section. The body borrows from the report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: &'a str,
    /// Byte offset of the heading line. Everything before it is "preceding text".
    pub start: usize,
    pub body: &'a str,
}

// Up to three spaces of indentation are tolerated before the marker.
fn heading_text(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let rest = line[indent..].strip_prefix("##")?;
    if rest.starts_with('#') {
        return None;
    }

    Some(rest.trim())
}

/// Collect every level-2 heading in document order.
///
/// A byte-order mark at the start of the document is ignored.
pub fn level2_headings(content: &str) -> Vec<Heading<'_>> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for (line_no, raw) in content.split_inclusive('\n').enumerate() {
        let mut line = raw.trim_end_matches(['\n', '\r']);
        if line_no == 0 {
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }
        if let Some(text) = heading_text(line) {
            headings.push(Heading {
                offset,
                body_start: offset + raw.len(),
                text,
            });
        }
        offset += raw.len();
    }

    headings
}

/// Find the first level-2 section whose heading contains one of `synonyms`.
///
/// Matching is a case-insensitive substring test on the heading text.
/// Returns `None` when no heading matches.
pub fn locate_section<'a, S: AsRef<str>>(content: &'a str, synonyms: &[S]) -> Option<Section<'a>> {
    let wanted: Vec<String> = synonyms
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let headings = level2_headings(content);
    let index = headings.iter().position(|heading| {
        let text = heading.text.to_lowercase();
        wanted.iter().any(|w| text.contains(w.as_str()))
    })?;

    let heading = &headings[index];
    let end = headings
        .get(index + 1)
        .map(|next| next.offset)
        .unwrap_or(content.len());

    Some(Section {
        heading: heading.text,
        start: heading.offset,
        body: &content[heading.body_start..end],
    })
}
