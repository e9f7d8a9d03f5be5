//! Page templates, embedded in the binary and rendered with Tera.

use std::collections::HashMap;

use derive_more::Display;
use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::errors::AppError;

/// Template identifiers for the public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Page {
    #[display("index")]
    Home,
    #[display("about")]
    About,
    #[display("projects")]
    Projects,
    #[display("contact")]
    Contact,
    #[display("blog")]
    Blog,
    #[display("gallery")]
    Gallery,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Contact,
        Page::Blog,
        Page::Gallery,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Projects => "projects.html",
            Page::Contact => "contact.html",
            Page::Blog => "blog.html",
            Page::Gallery => "gallery.html",
        }
    }
}

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Loads the embedded templates. `static_url` and `media_url` prefix asset paths.
    pub fn new(static_url: &str, media_url: &str) -> Result<Self, AppError> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("html/base.html")),
            ("index.html", include_str!("html/index.html")),
            ("about.html", include_str!("html/about.html")),
            ("projects.html", include_str!("html/projects.html")),
            ("contact.html", include_str!("html/contact.html")),
            ("blog.html", include_str!("html/blog.html")),
            ("gallery.html", include_str!("html/gallery.html")),
        ])?;

        tera.register_function("static_url", prefixed_url("static_url", static_url));
        tera.register_function("media_url", prefixed_url("media_url", media_url));
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Renders `page` with the serialized `context` as its template variables.
    pub fn render<C: Serialize>(&self, page: Page, context: &C) -> Result<String, AppError> {
        let context = Context::from_serialize(context)?;
        Ok(self.tera.render(page.template_name(), &context)?)
    }
}

/// Tera function `name(path="...")` joining `base` and `path`.
fn prefixed_url(
    name: &'static str,
    base: &str,
) -> impl Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync + 'static {
    let base = base.to_string();
    move |args: &HashMap<String, Value>| {
        let path = match args.get("path") {
            Some(val) => tera::try_get_value!(name, "path", String, val),
            None => return Err(tera::Error::msg(format!("`{name}` requires a `path` argument"))),
        };
        Ok(Value::String(format!("{}{}", base, path.trim_start_matches('/'))))
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };

    if s.chars().count() <= length {
        Ok(Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(Value::String(format!("{}…", truncated.trim_end())))
    }
}
