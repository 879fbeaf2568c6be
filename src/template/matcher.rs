//! Template matching and value extraction
//!
//! Both operations run over one internal routine that walks the template's
//! fixed fragments through the path:
//! - matching enforces the leading fragment, the sub-patterns and full
//!   consumption, and yields a specificity score
//! - extraction is best-effort decomposition and ignores sub-patterns
//!
//! The score is the number of literal characters the template consumes when
//! matching the path; among competing templates, higher means more specific.

use super::Template;

/// Internal processing mode.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Match,
    Extract,
}

impl Template {
    /// Match `path` against this template.
    ///
    /// Returns the count of literal characters matched, or `None` on a
    /// miss. A literal template scores the full path length; a template
    /// that is all placeholders scores zero.
    pub fn match_score(&self, path: &str) -> Option<usize> {
        let values = self.process(path, Mode::Match)?;
        let placeholder_chars: usize = values
            .iter()
            .flatten()
            .map(|value| value.chars().count())
            .sum();
        Some(path.chars().count() - placeholder_chars)
    }

    /// Decompose `path` into placeholder values.
    ///
    /// Sub-patterns are intentionally not enforced here; extraction answers
    /// "what would each slot hold", not "does the path match". A slot
    /// swallowed by a preceding placeholder (adjacent placeholders with an
    /// empty fixed fragment between them) is reported as `None`.
    pub fn extract(&self, path: &str) -> Option<Vec<Option<String>>> {
        self.process(path, Mode::Extract)
    }

    /// Walk `path` along the fixed fragments, cutting out one placeholder
    /// value per non-empty fragment gap.
    fn process(&self, path: &str, mode: Mode) -> Option<Vec<Option<String>>> {
        let fixed = self.fixed();
        let count = self.placeholder_count();

        if mode == Mode::Match && !path.starts_with(&fixed[0]) {
            return None;
        }

        let mut values: Vec<Option<String>> = vec![None; count];
        let mut cursor = fixed[0].len();
        let mut i = 0;

        while i < count {
            // The next non-empty fixed fragment decides where this
            // placeholder value ends; empty fragments in between mean the
            // corresponding slots are consumed by this one greedy cut.
            let mut next_index = i + 1;
            let mut next_fixed: Option<&str> = None;
            while next_index <= count {
                if !fixed[next_index].is_empty() {
                    next_fixed = Some(&fixed[next_index]);
                    break;
                }
                next_index += 1;
            }

            // In extract mode the cursor may overshoot a short path.
            let remainder = path.get(cursor..)?;
            let end = match next_fixed {
                Some(fragment) => cursor + remainder.find(fragment)?,
                None => path.len(),
            };

            let value = &path[cursor..end];

            if mode == Mode::Match && !self.placeholders()[i].pattern().accepts(value) {
                return None;
            }

            values[i] = Some(value.to_string());

            match next_fixed {
                None => {
                    cursor = end;
                    break;
                }
                Some(fragment) => {
                    cursor = end + fragment.len();
                    i = next_index;
                }
            }
        }

        if cursor != path.len() {
            // Path not consumed fully.
            return None;
        }

        Some(values)
    }
}
