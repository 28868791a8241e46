// parser crate

pub mod citation;
pub mod report;
pub mod section;

pub use citation::{bibliography_entries, relative_links, unique_citations, word_count};
pub use report::{read_report, Report, ReportError};
pub use section::{level2_headings, locate_section, Heading, Section};
