//! The document head component.

use serde::Serialize;

use crate::config::HeadConfig;
use crate::element::{html_escape, HeadElement};
use crate::error::Result;
use crate::fallback::fallback_script;
use crate::globals::global_assignment;
use crate::viewport::viewport_content;

/// Class carried by the `<head>` element and prefix of every child class.
pub const HEAD_CLASS: &str = "the-head";

/// Result of rendering a [`HeadConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedHead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub class_name: String,
    pub children: Vec<HeadElement>,
}

impl RenderedHead {
    /// The opening `<head ...>` tag with id and class.
    pub fn open_tag(&self) -> String {
        let mut html = String::from("<head");
        if let Some(id) = &self.id {
            html.push_str(&format!(r#" id="{}""#, html_escape(id)));
        }
        html.push_str(&format!(r#" class="{}">"#, html_escape(&self.class_name)));
        html
    }

    /// Serialize the whole `<head>` element to HTML.
    pub fn to_html(&self) -> String {
        let mut html = self.open_tag();
        for child in &self.children {
            html.push_str(&child.to_html());
        }
        html.push_str("</head>");
        html
    }
}

/// Renders the children of `<head>` from a [`HeadConfig`].
#[derive(Clone, Debug)]
pub struct DocumentHead<'a> {
    config: &'a HeadConfig,
    extra_children: Vec<HeadElement>,
}

impl<'a> DocumentHead<'a> {
    pub fn new(config: &'a HeadConfig) -> Self {
        Self {
            config,
            extra_children: Vec::new(),
        }
    }

    /// Append pass-through children after those listed in the config.
    pub fn with_children(mut self, children: impl IntoIterator<Item = HeadElement>) -> Self {
        self.extra_children.extend(children);
        self
    }

    /// Render the head. Output order is fixed and unset fields emit nothing.
    pub fn render(&self) -> Result<RenderedHead> {
        let config = self.config;
        let resolver = config.resolver();
        let mut children = Vec::new();

        if let Some(char_set) = present(&config.char_set) {
            children.push(child("meta", "charset").attr("charset", char_set));
        }
        if let Some(base) = present(&config.base) {
            children.push(
                child("base", "base")
                    .attr("href", base)
                    .attr_opt("target", present(&config.base_target)),
            );
        }
        if let Some(title) = present(&config.title) {
            children.push(child("title", "title").text(title));
        }
        if let Some(icon) = present(&config.icon) {
            children.push(
                child("link", "icon")
                    .attr("rel", "icon")
                    .attr("href", resolver.resolve(icon)?),
            );
        }
        if let Some(view_port) = &config.view_port {
            children.push(
                child("meta", "viewport")
                    .attr("name", "viewport")
                    .attr("content", viewport_content(view_port)),
            );
        }
        for (name, content) in config.meta_contents.iter() {
            children.push(
                child("meta", "meta-content")
                    .attr("name", name)
                    .attr("content", content.as_str()),
            );
        }
        for (name, property) in config.meta_properties.iter() {
            children.push(
                child("meta", "meta-property")
                    .attr("name", name)
                    .attr("property", property.as_str()),
            );
        }
        // Content comes from meta_contents under the same key.
        for name in config.item_props.keys() {
            children.push(
                child("meta", "item-prop")
                    .attr("itemprop", name)
                    .attr_opt("content", config.meta_contents.get(name).map(String::as_str)),
            );
        }
        if let Some(color) = present(&config.color) {
            children.push(
                child("meta", "theme-color")
                    .attr("name", "theme-color")
                    .attr("content", color),
            );
        }
        // The manifest link points at the color value, kept for compatibility.
        if present(&config.manifest).is_some() {
            children.push(
                child("link", "manifest")
                    .attr("rel", "manifest")
                    .attr_opt("href", present(&config.color)),
            );
        }
        for url in config.css.iter() {
            children.push(
                child("link", "css")
                    .attr("rel", "stylesheet")
                    .attr("type", "text/css")
                    .attr("href", resolver.resolve(url)?),
            );
        }
        for (name, value) in config.globals.iter() {
            children.push(
                child("script", "globals")
                    .attr("type", "text/javascript")
                    .script(global_assignment(name, Some(value))?),
            );
        }
        for url in config.js.iter() {
            children.push(
                child("script", "js")
                    .attr("type", "text/javascript")
                    .attr("src", resolver.resolve(url)?),
            );
        }
        if let Some(flag) = present(&config.fallback_unless) {
            children.push(HeadElement::new("script").script(fallback_script(
                flag,
                &config.css,
                &config.js,
                &resolver,
            )));
        }

        let generated = children.len();
        children.extend(config.children.iter().cloned());
        children.extend(self.extra_children.iter().cloned());

        tracing::debug!(
            generated,
            pass_through = children.len() - generated,
            cdn = config.cdn.is_some(),
            "rendered document head"
        );

        Ok(RenderedHead {
            id: present(&config.id).map(str::to_string),
            class_name: head_class(present(&config.class_name)),
            children,
        })
    }
}

/// Render a config with no extra children.
pub fn render_head(config: &HeadConfig) -> Result<RenderedHead> {
    DocumentHead::new(config).render()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn child(tag: &str, kind: &str) -> HeadElement {
    HeadElement::new(tag).attr("class", format!("{HEAD_CLASS}-{kind}"))
}

fn head_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{HEAD_CLASS} {extra}"),
        None => HEAD_CLASS.to_string(),
    }
}
