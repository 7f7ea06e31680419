//! File naming for exported reports.

/// Returns the Markdown file name for a project's report.
///
/// Each run of whitespace in the project name becomes a single `_`, and path
/// separators are replaced too so the name always stays a single component.
///
/// # Examples
///
/// ```
/// use taskboard::report::domain::report_file_name;
///
/// assert_eq!(report_file_name("Website Redesign"), "Website_Redesign-report.md");
/// ```
#[must_use]
pub fn report_file_name(project_name: &str) -> String {
    let mut stem = String::with_capacity(project_name.len());
    let mut in_whitespace = false;
    for ch in project_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        stem.push(if matches!(ch, '/' | '\\') { '_' } else { ch });
    }
    format!("{stem}-report.md")
}
