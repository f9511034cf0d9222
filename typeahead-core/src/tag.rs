//! Namespaced record type tags.
//!
//! A `ModelTag` identifies a queryable record type by the external string
//! form `"<app>.<Model>"` (e.g. `"blog.Article"`). Tags arrive in request
//! query strings and are resolved against the model registry at request
//! time; parsing enforces the shape here so the registry never sees a
//! malformed key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Namespaced identifier for a registered record type.
///
/// Comparison is exact and case-sensitive on both segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelTag {
    app_label: String,
    model_name: String,
}

impl ModelTag {
    /// Parse a `"<app>.<Model>"` tag.
    ///
    /// Requires exactly one `.` separator and non-empty segments on both
    /// sides.
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        let mut parts = tag.split('.');
        let (app, model) = match (parts.next(), parts.next(), parts.next()) {
            (Some(app), Some(model), None) => (app, model),
            _ => {
                return Err(TagError::MissingSeparator {
                    tag: tag.to_string(),
                })
            }
        };

        if app.is_empty() || model.is_empty() {
            return Err(TagError::EmptySegment {
                tag: tag.to_string(),
            });
        }

        Ok(Self {
            app_label: app.to_string(),
            model_name: model.to_string(),
        })
    }

    /// The namespace segment, e.g. `"blog"` in `"blog.Article"`.
    pub fn app_label(&self) -> &str {
        &self.app_label
    }

    /// The model segment, e.g. `"Article"` in `"blog.Article"`.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl FromStr for ModelTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app_label, self.model_name)
    }
}

impl TryFrom<String> for ModelTag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ModelTag> for String {
    fn from(tag: ModelTag) -> Self {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tag() {
        let tag = ModelTag::parse("blog.Article").unwrap();
        assert_eq!(tag.app_label(), "blog");
        assert_eq!(tag.model_name(), "Article");
        assert_eq!(tag.to_string(), "blog.Article");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = ModelTag::parse("Article").unwrap_err();
        assert!(matches!(err, TagError::MissingSeparator { .. }));
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        let err = ModelTag::parse("cms.blog.Article").unwrap_err();
        assert!(matches!(err, TagError::MissingSeparator { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(matches!(
            ModelTag::parse(".Article").unwrap_err(),
            TagError::EmptySegment { .. }
        ));
        assert!(matches!(
            ModelTag::parse("blog.").unwrap_err(),
            TagError::EmptySegment { .. }
        ));
        assert!(matches!(
            ModelTag::parse(".").unwrap_err(),
            TagError::EmptySegment { .. }
        ));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let upper = ModelTag::parse("blog.Article").unwrap();
        let lower = ModelTag::parse("blog.article").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_from_str_round_trip() {
        let tag: ModelTag = "cms.Page".parse().unwrap();
        let round: ModelTag = tag.to_string().parse().unwrap();
        assert_eq!(tag, round);
    }

    #[test]
    fn test_serde_round_trip() {
        let tag = ModelTag::parse("blog.Article").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"blog.Article\"");

        let back: ModelTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let result: Result<ModelTag, _> = serde_json::from_str("\"not-a-tag\"");
        assert!(result.is_err());
    }
}
