//! Sign-in and access pages.

use maud::{html, Markup};

use super::layout;
use crate::auth::Session;
use crate::components::{Alert, BaseLayout, Form, FormGroup, HiddenInput, Input};

/// Render the sign-in page.
///
/// `next` is carried through the form so a successful sign-in returns to
/// the page that asked for it.
#[must_use]
pub fn render_signin_page(error: Option<&str>, next: Option<&str>) -> Markup {
    let fields = html! {
        @if let Some(next) = next {
            (HiddenInput::new("next", next))
        }
        (FormGroup::new(
            "Username or email",
            "username",
            html! { (Input::text("username").id("username").required().autocomplete("username")) },
        ))
        (FormGroup::new(
            "Password",
            "password",
            html! { (Input::password("password").id("password").required().autocomplete("current-password")) },
        ))
        button type="submit" { "Sign in" }
    };

    let content = html! {
        div class="auth-container" {
            h1 { "Sign in" }
            p { "Sign in with your Maple Epoch author account." }
            @if let Some(error) = error {
                (Alert::error(error))
            }
            (Form::post("/auth/signin", fields))
        }
    };

    BaseLayout::new("Sign in", None).render(content)
}

#[must_use]
pub fn render_unauthorized_page(session: Option<&Session>) -> Markup {
    let content = html! {
        div class="auth-container" {
            h1 { "Access denied" }
            p { "The author dashboard is only available to accounts with the author role." }
            @if session.is_none() {
                p { a href="/auth/signin" { "Sign in" } " with an author account to continue." }
            }
            p { a href="/" { "Back to the front page" } }
        }
    };

    layout("Access denied", session).render(content)
}

#[must_use]
pub fn render_not_found_page(session: Option<&Session>, message: &str) -> Markup {
    let content = html! {
        h1 { "Not found" }
        p { (message) }
        p { a href="/" { "Back to the front page" } }
    };

    layout("Not found", session).render(content)
}
