//! Semantic version parsing and display variants
//!
//! Validates input against the full SemVer grammar and derives the
//! tag-friendly string forms (prerelease head, permutations).
//! According to semver.org: https://semver.org/

use crate::error::{Result, SemverToolError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Regexp from here:
// https://github.com/semver/semver/issues/232#issuecomment-405596809
static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver grammar pattern compiles")
});

/// Semantic version fields, kept as the matched text.
///
/// The numeric components stay as strings on purpose: the grammar already
/// rejects leading zeros, and converting to an integer type is left to
/// whoever needs arithmetic. Only ever constructed from a full-grammar
/// match, so every field satisfies the SemVer identifier rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
    pub patch: String,
    /// Empty when the input carried no prerelease part
    pub pre_release: String,
    /// Empty when the input carried no build metadata part
    pub build_metadata: String,
}

impl VersionInfo {
    /// Parse a version string into its semantic version fields.
    ///
    /// The whole input must match the grammar; a substring match is not
    /// enough. Optional sections default to the empty string.
    ///
    /// # Arguments
    /// * `input` - Version string to parse (e.g., "1.2.3" or "3.4.0-dev.4+build1")
    ///
    /// # Returns
    /// * `Ok(VersionInfo)` - Fields extracted exactly as matched
    /// * `Err` - If the input is not valid SemVer
    ///
    /// # Example
    /// ```ignore
    /// let info = VersionInfo::parse("3.4.0-dev.4")?;
    /// assert_eq!(info.major, "3");
    /// assert_eq!(info.pre_release, "dev.4");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let caps = SEMVER_RE
            .captures(input)
            .ok_or_else(|| SemverToolError::invalid_version(input))?;

        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Ok(VersionInfo {
            major: group("major"),
            minor: group("minor"),
            patch: group("patch"),
            pre_release: group("prerelease"),
            build_metadata: group("buildmetadata"),
        })
    }

    /// Return the first part of the prerelease only, the part before any
    /// `.` char. Useful for prerelease values like `dev.10` to get just
    /// `dev`.
    ///
    /// An empty prerelease yields an empty string. If no leading
    /// alphanumeric run exists (the grammar admits identifiers starting
    /// with `-`), the raw prerelease is returned unchanged.
    pub fn pre_release_head(&self) -> &str {
        let head_len = self
            .pre_release
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(self.pre_release.len());

        if head_len == 0 {
            // no head to extract
            return &self.pre_release;
        }
        &self.pre_release[..head_len]
    }

    /// Return the major / minor / patch string permutations, each with a
    /// `-<head>` suffix when a prerelease head exists. E.g. "1.2.3" gives
    /// "1", "1.2" and "1.2.3"; "2.4.5-beta" gives "2-beta", "2.4-beta" and
    /// "2.4.5-beta".
    ///
    /// The order is part of the contract: shortest to longest, never
    /// re-sorted. These are meant for tagging artifacts such as Docker
    /// images; aliases like `latest` are out of scope here.
    pub fn permutations(&self) -> Vec<String> {
        let with_head = |version: String, head: &str| {
            if head.is_empty() {
                version
            } else {
                format!("{}-{}", version, head)
            }
        };

        let head = self.pre_release_head();
        let major_minor = format!("{}.{}", self.major, self.minor);
        let major_minor_patch = format!("{}.{}", major_minor, self.patch);

        vec![
            with_head(self.major.clone(), head),
            with_head(major_minor, head),
            with_head(major_minor_patch, head),
        ]
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}
