use crate::config::Config;
use crate::content::PostSummary;

/// Render sitemap.xml for every published post
pub fn render_sitemap(config: &Config, posts: &[PostSummary]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    // The index page first
    xml.push_str(&format!(
        "<url><loc>{}</loc></url>\n",
        config.base_url.trim_end_matches('/')
    ));

    for post in posts {
        xml.push_str("<url>");
        xml.push_str(&format!("<loc>{}</loc>", config.post_url(&post.slug.current)));
        if let Some(published) = &post.published_at {
            xml.push_str(&format!("<lastmod>{}</lastmod>", published.format("%Y-%m-%d")));
        }
        xml.push_str("</url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sitemap_lists_posts_with_lastmod() {
        let mut config = Config::default();
        config.base_url = "https://blog.example.com".to_string();

        let posts: Vec<PostSummary> = serde_json::from_value(json!([
            { "title": "One", "slug": { "current": "one" }, "publishedAt": "2024-06-01T09:00:00Z" },
            { "title": "Two", "slug": { "current": "two" } }
        ]))
        .unwrap();

        let xml = render_sitemap(&config, &posts);
        assert!(xml.contains("<loc>https://blog.example.com</loc>"));
        assert!(xml.contains("<loc>https://blog.example.com/one</loc>"));
        assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
        assert!(xml.contains("<loc>https://blog.example.com/two</loc>"));
    }
}
