//! Line classification for task harvesting

use super::record::TaskKind;

/// Decides whether a line of a note is a task
///
/// Checkbox prefixes take precedence: a line starting with one is a task
/// whether or not it contains a marker. Markers match case-insensitively
/// anywhere in the line.
#[derive(Debug, Clone)]
pub struct TaskMatcher {
    checkbox_patterns: Vec<String>,
    /// Stored uppercased
    markers: Vec<String>,
}

impl TaskMatcher {
    /// Builds a matcher, dropping empty patterns and markers
    pub fn new<P, M>(checkbox_patterns: P, markers: M) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        Self {
            checkbox_patterns: checkbox_patterns
                .into_iter()
                .map(|p| p.as_ref().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_uppercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Classifies an already-trimmed line
    pub fn classify(&self, line: &str) -> Option<TaskKind> {
        if self.checkbox_patterns.iter().any(|p| line.starts_with(p.as_str())) {
            return Some(TaskKind::Checkbox);
        }

        let upper = line.to_uppercase();
        if self.markers.iter().any(|m| upper.contains(m.as_str())) {
            return Some(TaskKind::Marker);
        }

        None
    }
}
