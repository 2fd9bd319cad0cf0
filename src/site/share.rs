use urlencoding::encode;

/// Social share links for one post page.
///
/// These are plain intent URLs; the presentation layer decides how to
/// display them.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinks {
    pub x: String,
    pub facebook: String,
    pub line: String,
}

/// Build share intent URLs for a post
pub fn share_links(title: &str, url: &str) -> ShareLinks {
    let encoded_title = encode(title);
    let encoded_url = encode(url);

    ShareLinks {
        x: format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encoded_title, encoded_url
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encoded_url
        ),
        line: format!(
            "https://social-plugins.line.me/lineit/share?url={}",
            encoded_url
        ),
    }
}

/// Render the share links as an HTML fragment
pub fn share_links_html(links: &ShareLinks) -> String {
    let mut html = String::from("<div class=\"share-buttons\">\n");
    for (label, url) in [
        ("Share on X", &links.x),
        ("Share on Facebook", &links.facebook),
        ("Share on LINE", &links.line),
    ] {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            html_escape::encode_double_quoted_attribute(url),
            label
        ));
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links_encode_title_and_url() {
        let links = share_links("Hello & Welcome", "https://blog.example.com/hello");
        assert_eq!(
            links.x,
            "https://twitter.com/intent/tweet?text=Hello%20%26%20Welcome&url=https%3A%2F%2Fblog.example.com%2Fhello"
        );
        assert!(links.facebook.ends_with("u=https%3A%2F%2Fblog.example.com%2Fhello"));
        assert!(links.line.contains("share?url=https%3A%2F%2F"));
    }
}
