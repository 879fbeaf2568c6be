//! Template string parser
//!
//! Splits a template such as `/user/${id:\d+}/doc${doc}` into the literal
//! fragments surrounding its placeholders and the placeholder names and
//! sub-patterns, using the configurable delimiter triple
//! `(prefix, split, suffix)`.
//!
//! For `n` placeholders the parser produces `n + 1` fixed fragments; the
//! first and last may be empty. Concatenating
//! `fixed[0], «slot 0», fixed[1], …, «slot n-1», fixed[n]` reconstructs the
//! template up to the removed delimiter tokens.

use crate::config::TemplateConfig;
use crate::error::RouterError;

/// Raw parse result, before sub-patterns are compiled for a dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Literal fragments; always one more entry than `names`.
    pub fixed: Vec<String>,
    /// Placeholder names, in template order.
    pub names: Vec<String>,
    /// Optional sub-pattern per placeholder; `None` means "match anything".
    pub patterns: Vec<Option<String>>,
}

impl ParsedTemplate {
    pub fn placeholder_count(&self) -> usize {
        self.names.len()
    }
}

/// Parse `source` with the delimiter triple from `config`.
///
/// Fails on an opening token without a closing one and on a placeholder
/// with an empty name. An empty sub-pattern (`${id:}`) is treated as no
/// sub-pattern at all.
pub fn parse(source: &str, config: &TemplateConfig) -> Result<ParsedTemplate, RouterError> {
    let prefix = config.prefix.as_str();
    let split = config.split.as_str();
    let suffix = config.suffix.as_str();

    let mut fixed = Vec::new();
    let mut names = Vec::new();
    let mut patterns = Vec::new();

    let mut cursor = 0;
    while let Some(found) = source[cursor..].find(prefix) {
        let prefix_start = cursor + found;
        let body_start = prefix_start + prefix.len();

        let Some(found) = source[body_start..].find(suffix) else {
            return Err(RouterError::malformed(source, "unterminated placeholder"));
        };
        let suffix_start = body_start + found;

        fixed.push(source[cursor..prefix_start].to_string());

        let body = &source[body_start..suffix_start];
        let (name, pattern) = match body.find(split) {
            Some(at) => {
                let pattern = body[at + split.len()..].trim();
                let pattern = (!pattern.is_empty()).then(|| pattern.to_string());
                (body[..at].trim(), pattern)
            }
            None => (body.trim(), None),
        };

        if name.is_empty() {
            return Err(RouterError::malformed(source, "empty placeholder name"));
        }

        names.push(name.to_string());
        patterns.push(pattern);
        cursor = suffix_start + suffix.len();
    }

    fixed.push(source[cursor..].to_string());

    Ok(ParsedTemplate {
        fixed,
        names,
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_config() -> TemplateConfig {
        TemplateConfig::default()
    }

    fn angle_config() -> TemplateConfig {
        TemplateConfig {
            prefix: "<".to_string(),
            suffix: ">".to_string(),
            ..TemplateConfig::default()
        }
    }

    #[test]
    fn test_no_placeholders() {
        let parsed = parse("/some/path/no/macros", &default_config()).unwrap();
        assert_eq!(parsed.placeholder_count(), 0);
        assert_eq!(parsed.fixed, vec!["/some/path/no/macros".to_string()]);
    }

    #[test]
    fn test_single_placeholder() {
        let parsed = parse("/img-${id}.png", &default_config()).unwrap();
        assert_eq!(parsed.names, vec!["id".to_string()]);
        assert_eq!(parsed.patterns, vec![None]);
        assert_eq!(parsed.fixed, vec!["/img-".to_string(), ".png".to_string()]);
    }

    #[test]
    fn test_single_placeholder_angle_delimiters() {
        let parsed = parse("/img-<id>.png", &angle_config()).unwrap();
        assert_eq!(parsed.names, vec!["id".to_string()]);
        assert_eq!(parsed.fixed, vec!["/img-".to_string(), ".png".to_string()]);
    }

    #[test]
    fn test_leading_and_trailing_placeholders() {
        let parsed = parse("${di}/img/${id}", &default_config()).unwrap();
        assert_eq!(parsed.names, vec!["di".to_string(), "id".to_string()]);
        assert_eq!(
            parsed.fixed,
            vec![String::new(), "/img/".to_string(), String::new()]
        );
    }

    #[test]
    fn test_adjacent_placeholders_have_empty_fixed() {
        let parsed = parse("/user/${userId}${version}", &default_config()).unwrap();
        assert_eq!(
            parsed.names,
            vec!["userId".to_string(), "version".to_string()]
        );
        assert_eq!(
            parsed.fixed,
            vec!["/user/".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_sub_pattern_split_and_trim() {
        let parsed = parse("/user-${userId: 1*7?3 }", &default_config()).unwrap();
        assert_eq!(parsed.names, vec!["userId".to_string()]);
        assert_eq!(parsed.patterns, vec![Some("1*7?3".to_string())]);
    }

    #[test]
    fn test_empty_sub_pattern_is_none() {
        let parsed = parse("/${id:}", &default_config()).unwrap();
        assert_eq!(parsed.patterns, vec![None]);
    }

    #[test]
    fn test_pattern_with_repeated_split_token() {
        // Only the first split token separates name from pattern.
        let parsed = parse("/${when:[0-9]+:[0-9]+}", &default_config()).unwrap();
        assert_eq!(parsed.names, vec!["when".to_string()]);
        assert_eq!(parsed.patterns, vec![Some("[0-9]+:[0-9]+".to_string())]);
    }

    #[test]
    fn test_unterminated_placeholder() {
        let result = parse("/img-${id.png", &default_config());
        assert!(matches!(
            result,
            Err(RouterError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn test_empty_name() {
        let result = parse("/img-${}.png", &default_config());
        assert!(matches!(
            result,
            Err(RouterError::MalformedTemplate { .. })
        ));

        let result = parse("/img-${ :a*}.png", &default_config());
        assert!(matches!(
            result,
            Err(RouterError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn test_three_placeholders() {
        let parsed = parse("/user/${userId}/doc${docId}/v${version}", &default_config()).unwrap();
        assert_eq!(
            parsed.names,
            vec![
                "userId".to_string(),
                "docId".to_string(),
                "version".to_string()
            ]
        );
        assert_eq!(
            parsed.fixed,
            vec![
                "/user/".to_string(),
                "/doc".to_string(),
                "/v".to_string(),
                String::new()
            ]
        );
    }
}
