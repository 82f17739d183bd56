//! Head element descriptors and their HTML serialization.

use serde::{Deserialize, Serialize};

use crate::mapping::Mapping;

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Content of a non-void element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Body {
    /// Text content, escaped on output.
    Text(String),
    /// Inline script source, written verbatim.
    Script(String),
}

/// One child of the document `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub attributes: Mapping<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

impl HeadElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Mapping::new(),
            body: None,
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Add an attribute only when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Body::Text(text.into()));
        self
    }

    pub fn script(mut self, source: impl Into<String>) -> Self {
        self.body = Some(Body::Script(source.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Value of the `class` attribute.
    pub fn class(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in self.attributes.iter() {
            html.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
        }
        if self.is_void() {
            html.push_str("/>");
            return html;
        }
        html.push('>');
        match &self.body {
            Some(Body::Text(text)) => html.push_str(&html_escape(text)),
            Some(Body::Script(source)) => html.push_str(source),
            None => {}
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}
