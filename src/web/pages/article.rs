//! Article page.
//!
//! The body is CMS-authored HTML and is rendered unescaped.

use maud::{html, Markup, PreEscaped};

use super::layout;
use crate::auth::Session;
use crate::components::{ArticleCard, ArticleMeta, CategoryBadge, FlagBadge, OpenGraphMetadata};
use crate::content::DisplayPost;

#[derive(Debug, Clone)]
pub struct ArticlePageParams<'a> {
    pub post: &'a DisplayPost,
    pub related: &'a [DisplayPost],
    pub session: Option<&'a Session>,
}

#[must_use]
pub fn render_article_page(params: &ArticlePageParams<'_>) -> Markup {
    let post = params.post;
    let related: Vec<&DisplayPost> = params.related.iter().filter(|p| p.id != post.id).collect();

    let content = html! {
        article class="article-detail" {
            header {
                div class="article-badges" {
                    (CategoryBadge::new(&post.category))
                    @if post.featured {
                        (FlagBadge::featured())
                    }
                    @if post.is_breaking {
                        (FlagBadge::breaking())
                    }
                    @if post.is_trending {
                        (FlagBadge::trending())
                    }
                }
                h1 { (post.title) }
                p class="lead" { (post.excerpt) }
                (ArticleMeta::new(post))
            }
            figure {
                img src=(post.image) alt=(post.title);
            }
            div class="article-body" {
                (PreEscaped(&post.content))
            }
            @if !post.tags.is_empty() {
                footer class="tags" {
                    @for tag in &post.tags {
                        span class="tag" { "#" (tag) }
                    }
                }
            }
        }

        @if !related.is_empty() {
            section class="related" {
                h2 { "More in " (post.category) }
                div class="article-grid" {
                    @for p in related {
                        (ArticleCard::new(p).compact())
                    }
                }
            }
        }
    };

    layout(&post.title, params.session)
        .with_og_metadata(OpenGraphMetadata::for_article(post))
        .render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{fallback_post, fallback_posts};

    #[test]
    fn test_article_page_renders_body_unescaped() {
        let post = fallback_post(4).unwrap();
        let html = render_article_page(&ArticlePageParams {
            post,
            related: &[],
            session: None,
        })
        .into_string();

        assert!(html.contains("<h2>Record Participation</h2>"));
        assert!(html.contains(&format!("<h1>{}</h1>", post.title)));
        assert!(html.contains("#olympics"));
        assert!(html.contains(r#"property="og:type" content="article""#));
        assert!(!html.contains("More in"));
    }

    #[test]
    fn test_related_excludes_current_article() {
        let post = fallback_post(1).unwrap();
        let html = render_article_page(&ArticlePageParams {
            post,
            related: fallback_posts(),
            session: None,
        })
        .into_string();

        assert!(html.contains("More in Politics"));
        assert!(html.contains(r#"href="/article/6""#));
        assert!(!html.contains(r#"<a href="/article/1">"#));
    }
}
