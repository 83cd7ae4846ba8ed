//! Form components for the sign-in page and the author dashboard.
//!
//! Every dashboard form posts back to the app and carries the session's
//! CSRF token via [`HiddenInput::csrf`].

use maud::{html, Markup, Render};

/// `<form>` posting to one of the app's own handlers.
#[derive(Debug)]
pub struct Form<'a> {
    pub action: &'a str,
    pub method: &'a str,
    pub content: Markup,
    /// Set for the media upload form.
    pub multipart: bool,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self {
            action,
            method: "post",
            content,
            multipart: false,
        }
    }

    #[must_use]
    pub fn multipart(mut self) -> Self {
        self.multipart = true;
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form
                action=(self.action)
                method=(self.method)
                enctype=[self.multipart.then_some("multipart/form-data")]
            {
                (self.content)
            }
        }
    }
}

/// Single-line field: credentials, post title, media id or upload.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub value: Option<&'a str>,
    pub required: bool,
    pub id: Option<&'a str>,
    pub autocomplete: Option<&'a str>,
    pub accept: Option<&'a str>,
}

impl<'a> Input<'a> {
    fn of_kind(name: &'a str, kind: &'a str) -> Self {
        Self {
            name,
            kind,
            value: None,
            required: false,
            id: None,
            autocomplete: None,
            accept: None,
        }
    }

    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::of_kind(name, "text")
    }

    #[must_use]
    pub fn password(name: &'a str) -> Self {
        Self::of_kind(name, "password")
    }

    #[must_use]
    pub fn file(name: &'a str) -> Self {
        Self::of_kind(name, "file")
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    /// Restrict an upload picker, e.g. `image/*`.
    #[must_use]
    pub fn accept(mut self, accept: &'a str) -> Self {
        self.accept = Some(accept);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.kind)
                name=(self.name)
                value=[self.value]
                required[self.required]
                id=[self.id]
                autocomplete=[self.autocomplete]
                accept=[self.accept];
        }
    }
}

/// Post body editor. The value is escaped, so raw HTML round-trips.
#[derive(Debug)]
pub struct TextArea<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub rows: Option<u32>,
    pub id: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            rows: None,
            id: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea name=(self.name) rows=[self.rows] id=[self.id] {
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Dropdown for a post's category or status.
#[derive(Debug)]
pub struct Select<'a> {
    pub name: &'a str,
    pub options: Vec<SelectOption>,
    /// Value of the option to preselect.
    pub selected: Option<&'a str>,
    pub id: Option<&'a str>,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select name=(self.name) id=[self.id] {
                @for choice in &self.options {
                    option
                        value=(choice.value)
                        selected[self.selected == Some(choice.value.as_str())]
                    {
                        (choice.label)
                    }
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct HiddenInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> HiddenInput<'a> {
    #[must_use]
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    /// The session's CSRF token, checked by every dashboard handler.
    #[must_use]
    pub fn csrf(token: &'a str) -> Self {
        Self::new("csrf_token", token)
    }
}

impl Render for HiddenInput<'_> {
    fn render(&self) -> Markup {
        html! {
            input type="hidden" name=(self.name) value=(self.value);
        }
    }
}

/// Labelled field with optional help text below it.
#[derive(Debug)]
pub struct FormGroup<'a> {
    pub label: &'a str,
    /// Must match the wrapped field's `id`.
    pub id: &'a str,
    pub field: Markup,
    pub help: Option<&'a str>,
}

impl<'a> FormGroup<'a> {
    #[must_use]
    pub fn new(label: &'a str, id: &'a str, field: Markup) -> Self {
        Self {
            label,
            id,
            field,
            help: None,
        }
    }

    #[must_use]
    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="form-group" {
                label for=(self.id) { (self.label) }
                (self.field)
                @if let Some(help) = self.help {
                    small { (help) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_form() {
        let html = Form::post("/dashboard/media", html! { "x" })
            .multipart()
            .render()
            .into_string();
        assert_eq!(
            html,
            r#"<form action="/dashboard/media" method="post" enctype="multipart/form-data">x</form>"#
        );
    }

    #[test]
    fn test_input_attributes() {
        let html = Input::password("password")
            .id("password")
            .required()
            .autocomplete("current-password")
            .render()
            .into_string();
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(" required"));
        assert!(html.contains(r#"autocomplete="current-password""#));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_textarea_escapes_value() {
        let html = TextArea::new("content")
            .value("<p>Body</p>")
            .rows(10)
            .render()
            .into_string();
        assert_eq!(
            html,
            r#"<textarea name="content" rows="10">&lt;p&gt;Body&lt;/p&gt;</textarea>"#
        );
    }

    #[test]
    fn test_select_marks_selected() {
        let html = Select::new("status")
            .option("draft", "Draft")
            .option("publish", "Published")
            .selected("publish")
            .render()
            .into_string();
        assert!(html.contains(r#"<option value="draft">Draft</option>"#));
        assert!(html.contains(r#"<option value="publish" selected>Published</option>"#));
    }

    #[test]
    fn test_form_group_help() {
        let html = FormGroup::new("Title", "title", Input::text("title").id("title").render())
            .help("Shown on the front page.")
            .render()
            .into_string();
        assert!(html.starts_with(r#"<div class="form-group"><label for="title">Title</label>"#));
        assert!(html.contains("<small>Shown on the front page.</small>"));
    }

    #[test]
    fn test_csrf_hidden_input() {
        let html = HiddenInput::csrf("tok").render().into_string();
        assert_eq!(html, r#"<input type="hidden" name="csrf_token" value="tok">"#);
    }
}
