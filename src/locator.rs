use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Selector strategy used to find an element, mirroring the classic
/// WebDriver locator families. The set is closed: every kind lowers to
/// exactly one native CDP query (see [`Locator::query`]).
///
/// Serialized under the traditional uppercase names (`"XPATH"`, `"ID"`,
/// `"LINK_TEXT"`, ...) so locators can live in test data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorKind {
    #[serde(rename = "XPATH")]
    Xpath,
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "NAME")]
    Name,
    #[serde(rename = "TAG")]
    Tag,
    #[serde(rename = "CLASS")]
    Class,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "LINK_TEXT")]
    LinkText,
}

impl LocatorKind {
    pub const ALL: [LocatorKind; 7] = [
        LocatorKind::Xpath,
        LocatorKind::Id,
        LocatorKind::Name,
        LocatorKind::Tag,
        LocatorKind::Class,
        LocatorKind::Css,
        LocatorKind::LinkText,
    ];

    /// The uppercase wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorKind::Xpath => "XPATH",
            LocatorKind::Id => "ID",
            LocatorKind::Name => "NAME",
            LocatorKind::Tag => "TAG",
            LocatorKind::Class => "CLASS",
            LocatorKind::Css => "CSS",
            LocatorKind::LinkText => "LINK_TEXT",
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocatorKind {
    type Err = Error;

    /// Parse an uppercase wire name. Anything outside the closed set is a
    /// caller defect and fails immediately, before any wait is attempted.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "XPATH" => Ok(LocatorKind::Xpath),
            "ID" => Ok(LocatorKind::Id),
            "NAME" => Ok(LocatorKind::Name),
            "TAG" => Ok(LocatorKind::Tag),
            "CLASS" => Ok(LocatorKind::Class),
            "CSS" => Ok(LocatorKind::Css),
            "LINK_TEXT" => Ok(LocatorKind::LinkText),
            other => Err(Error::UnknownLocatorKind(other.to_string())),
        }
    }
}

/// A (kind, value) pair identifying one element in the current DOM.
///
/// Locators are never cached and never hold element handles: every action
/// re-resolves, since the underlying node may have been replaced since the
/// last call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub kind: LocatorKind,
    pub value: String,
}

impl Locator {
    pub fn new(kind: LocatorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Build a locator from an uppercase kind name, failing with
    /// [`Error::UnknownLocatorKind`] for names outside the closed set.
    pub fn parse(kind: &str, value: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(kind.parse()?, value))
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Xpath, value)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Id, value)
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Name, value)
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Tag, value)
    }

    pub fn class(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Class, value)
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::Css, value)
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Self::new(LocatorKind::LinkText, value)
    }

    /// Lower this locator to the native query the driver understands.
    pub fn query(&self) -> Query {
        match self.kind {
            LocatorKind::Xpath => Query::XPath(self.value.clone()),
            LocatorKind::Id => Query::Css(format!(r#"[id="{}"]"#, css_escape(&self.value))),
            LocatorKind::Name => Query::Css(format!(r#"[name="{}"]"#, css_escape(&self.value))),
            LocatorKind::Tag => Query::Css(self.value.clone()),
            LocatorKind::Class => Query::Css(format!(".{}", self.value)),
            LocatorKind::Css => Query::Css(self.value.clone()),
            LocatorKind::LinkText => Query::XPath(format!(
                "//a[normalize-space(.)={}]",
                xpath_literal(&self.value)
            )),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}

/// Native query a locator lowers to. CSS covers ID, NAME, TAG, CLASS and
/// raw CSS; XPath covers XPATH and LINK_TEXT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Css(String),
    XPath(String),
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
fn css_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render a string as an XPath 1.0 literal. XPath has no escape syntax, so
/// text containing both quote kinds must be split with concat().
fn xpath_literal(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    let parts: Vec<String> = value
        .split('"')
        .map(|part| format!("\"{part}\""))
        .collect();
    format!("concat({})", parts.join(", '\"', "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_lowers_to_exactly_one_query() {
        for kind in LocatorKind::ALL {
            let locator = Locator::new(kind, "x");
            match locator.query() {
                Query::Css(_) | Query::XPath(_) => {}
            }
        }
    }

    #[test]
    fn id_and_name_lower_to_attribute_selectors() {
        assert_eq!(
            Locator::id("save-button").query(),
            Query::Css(r#"[id="save-button"]"#.into())
        );
        assert_eq!(
            Locator::name("frequency").query(),
            Query::Css(r#"[name="frequency"]"#.into())
        );
    }

    #[test]
    fn tag_and_css_pass_through() {
        assert_eq!(Locator::tag("input").query(), Query::Css("input".into()));
        assert_eq!(
            Locator::css("div > a.primary").query(),
            Query::Css("div > a.primary".into())
        );
    }

    #[test]
    fn class_lowers_to_class_selector() {
        assert_eq!(
            Locator::class("menu-item").query(),
            Query::Css(".menu-item".into())
        );
    }

    #[test]
    fn xpath_passes_through_verbatim() {
        assert_eq!(
            Locator::xpath("//input[@data-id='field-source-name']").query(),
            Query::XPath("//input[@data-id='field-source-name']".into())
        );
    }

    #[test]
    fn link_text_lowers_to_anchor_xpath() {
        assert_eq!(
            Locator::link_text("More information").query(),
            Query::XPath(r#"//a[normalize-space(.)="More information"]"#.into())
        );
    }

    #[test]
    fn id_values_are_css_escaped() {
        assert_eq!(
            Locator::id(r#"odd"id"#).query(),
            Query::Css(r#"[id="odd\"id"]"#.into())
        );
    }

    #[test]
    fn xpath_literal_handles_both_quote_kinds() {
        assert_eq!(xpath_literal("plain"), r#""plain""#);
        assert_eq!(xpath_literal(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(
            xpath_literal(r#"it's "fine""#),
            r#"concat("it's ", '"', "fine", '"', "")"#
        );
    }

    #[test]
    fn parse_accepts_wire_names() {
        let locator = Locator::parse("LINK_TEXT", "Next").unwrap();
        assert_eq!(locator.kind, LocatorKind::LinkText);
        assert_eq!(locator.value, "Next");
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = Locator::parse("PARTIAL_LINK_TEXT", "Next").unwrap_err();
        assert!(matches!(err, Error::UnknownLocatorKind(ref name) if name == "PARTIAL_LINK_TEXT"));
    }

    #[test]
    fn serde_uses_uppercase_wire_names() {
        let json = serde_json::to_string(&Locator::xpath("//div")).unwrap();
        assert_eq!(json, r#"{"kind":"XPATH","value":"//div"}"#);

        let parsed: Locator = serde_json::from_str(r#"{"kind":"LINK_TEXT","value":"Next"}"#).unwrap();
        assert_eq!(parsed, Locator::link_text("Next"));
    }
}
