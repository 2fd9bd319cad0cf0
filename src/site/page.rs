use crate::assets::AssetResolver;
use crate::config::Config;
use crate::content::Post;
use crate::document::extract_summary;
use crate::render::render_document;
use crate::site::share::{share_links, share_links_html};

/// Display size of the hero image at the top of a post page
const HERO_WIDTH: u32 = 800;
const HERO_HEIGHT: u32 = 450;

/// Length cap for the meta description derived from the post body
const SUMMARY_LENGTH: usize = 160;

/// Render a complete HTML page for one post.
///
/// The shell is deliberately minimal: document metadata, the hero image
/// when one resolves, the rendered article, and share links. All visual
/// styling belongs to the consuming site.
pub fn render_post_page(config: &Config, post: &Post, resolver: &dyn AssetResolver) -> String {
    let doc = post.document();
    let summary = extract_summary(&doc, SUMMARY_LENGTH);
    let description = if summary.is_empty() { post.title.clone() } else { summary };
    let body_html = render_document(&doc, &config.toc, resolver);

    let page_url = config.post_url(&post.slug.current);
    let page_title = format!("{} | {}", post.title, config.title);
    let links = share_links(&post.title, &page_url);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(&page_title)
    ));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        html_escape::encode_double_quoted_attribute(&description)
    ));
    html.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        html_escape::encode_double_quoted_attribute(&post.title)
    ));
    html.push_str("<meta property=\"og:type\" content=\"article\">\n");
    html.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        html_escape::encode_double_quoted_attribute(&page_url)
    ));
    if let Some(published) = &post.published_at {
        html.push_str(&format!(
            "<meta property=\"article:published_time\" content=\"{}\">\n",
            published.to_rfc3339()
        ));
    }
    if let Some(hero) = post.hero_image() {
        if let Some(url) = resolver.image_url(&hero, 1200, 630) {
            html.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(&url)
            ));
        }
    }
    html.push_str("</head>\n<body>\n<article>\n");

    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1>{}</h1>\n",
        html_escape::encode_text(&post.title)
    ));
    if let Some(published) = &post.published_at {
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time>\n",
            published.to_rfc3339(),
            published.format("%B %e, %Y")
        ));
    }
    html.push_str("</header>\n");

    if let Some(hero) = post.hero_image() {
        if let Some(url) = resolver.image_url(&hero, HERO_WIDTH, HERO_HEIGHT) {
            html.push_str(&format!(
                "<img class=\"hero\" src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(&url),
                html_escape::encode_double_quoted_attribute(
                    hero.alt.as_deref().unwrap_or(&post.title)
                ),
                HERO_WIDTH,
                HERO_HEIGHT
            ));
        }
    }

    html.push_str(&body_html);
    html.push_str(&share_links_html(&links));
    html.push_str("</article>\n</body>\n</html>\n");

    html
}

/// Fallback page shown when a slug resolves to no document
pub fn render_not_found_page(config: &Config) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Post not found | {}</title>\n</head>\n<body>\n\
         <main>\n<h1>Post not found</h1>\n\
         <p>The post you are looking for does not exist or is no longer published.</p>\n\
         <p><a href=\"{}\">Back to all posts</a></p>\n</main>\n</body>\n</html>\n",
        html_escape::encode_text(&config.title),
        html_escape::encode_double_quoted_attribute(&config.base_url)
    )
}
