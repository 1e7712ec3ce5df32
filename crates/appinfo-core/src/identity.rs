//! Static application identity supplied by the host application.

use serde::{Deserialize, Serialize};

/// Static identity information about the host application.
///
/// Created once at startup by the caller and treated as immutable
/// afterwards. Everything here is caller-supplied; nothing is detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    /// Full display name (e.g. "HSTL Photo Metadata Framework").
    pub name: String,
    /// Abbreviation shown in titles (e.g. "HPM").
    pub short_name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable build / commit date.
    pub commit_date: String,
    /// Author or organization name.
    pub author: String,
    /// One-line description of the application.
    pub description: String,
    /// Optional bullet-point feature list, in display order.
    pub features: Vec<String>,
}

impl AppIdentity {
    /// Create an identity with only a display name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: String::new(),
            version: String::new(),
            commit_date: String::new(),
            author: String::new(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    /// Set the abbreviated name shown in titles.
    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Set the version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the commit / build date.
    #[must_use]
    pub fn with_commit_date(mut self, commit_date: impl Into<String>) -> Self {
        self.commit_date = commit_date.into();
        self
    }

    /// Set the author or organization name.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the one-line description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a single feature line.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Replace the whole feature list.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Display title: the full name, with the short name appended when set.
    ///
    /// Examples: `"My App"`, `"My App [ MA ]"`.
    pub fn title(&self) -> String {
        if self.short_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} [ {} ]", self.name, self.short_name)
        }
    }
}
