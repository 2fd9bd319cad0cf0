use crate::document::{InlineSpan, ListKind, Mark};
use crate::render::tree::RenderNode;
use crate::toc::TocEntry;

/// Render a sequence of render nodes as an HTML fragment
pub fn render_html(nodes: &[RenderNode]) -> String {
    let mut html = String::new();
    for node in nodes {
        render_node_html(node, &mut html);
    }
    html
}

fn render_node_html(node: &RenderNode, html: &mut String) {
    match node {
        RenderNode::Paragraph { spans } => {
            html.push_str("<p>");
            html.push_str(&render_spans(spans));
            html.push_str("</p>\n");
        }
        RenderNode::Heading { level, anchor_id, spans } => {
            match anchor_id {
                Some(id) => html.push_str(&format!(
                    "<h{} id=\"{}\">",
                    level,
                    html_escape::encode_double_quoted_attribute(id)
                )),
                None => html.push_str(&format!("<h{}>", level)),
            }
            html.push_str(&render_spans(spans));
            html.push_str(&format!("</h{}>\n", level));
        }
        RenderNode::List { kind, items } => {
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Number => "ol",
            };
            html.push_str(&format!("<{}>\n", tag));
            for item in items {
                // Nesting is carried as data, not as nested list elements
                html.push_str(&format!(
                    "<li data-level=\"{}\">{}</li>\n",
                    item.level,
                    render_spans(&item.spans)
                ));
            }
            html.push_str(&format!("</{}>\n", tag));
        }
        RenderNode::Blockquote { spans } => {
            html.push_str("<blockquote><p>");
            html.push_str(&render_spans(spans));
            html.push_str("</p></blockquote>\n");
        }
        RenderNode::Image { url, alt, caption, width, height } => {
            html.push_str("<figure class=\"article-image\">\n");
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(url),
                html_escape::encode_double_quoted_attribute(alt),
                width,
                height
            ));
            if let Some(caption) = caption {
                html.push_str(&format!(
                    "<figcaption>{}</figcaption>\n",
                    html_escape::encode_text(caption)
                ));
            }
            html.push_str("</figure>\n");
        }
        RenderNode::Table { header, rows, theme_color } => {
            render_table(header, rows, theme_color.as_deref(), html);
        }
        RenderNode::CodeBlock { code, language, filename } => {
            if let Some(filename) = filename {
                html.push_str(&format!(
                    "<div class=\"code-filename\">{}</div>\n",
                    html_escape::encode_text(filename)
                ));
            }
            let language = language.as_deref().unwrap_or("text");
            html.push_str(&format!(
                "<pre><code class=\"language-{}\">{}</code></pre>\n",
                html_escape::encode_double_quoted_attribute(language),
                html_escape::encode_text(code)
            ));
        }
        RenderNode::TableOfContents { entries } => {
            render_toc(entries, html);
        }
    }
}

fn render_table(header: &[String], rows: &[Vec<String>], theme_color: Option<&str>, html: &mut String) {
    html.push_str("<div class=\"table-wrapper\">\n<table>\n<thead");
    if let Some(color) = theme_color {
        html.push_str(&format!(
            " style=\"background-color: {}\"",
            html_escape::encode_double_quoted_attribute(color)
        ));
    }
    html.push_str(">\n<tr>");
    for cell in header {
        html.push_str(&format!("<th>{}</th>", html_escape::encode_text(cell)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", html_escape::encode_text(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn render_toc(entries: &[TocEntry], html: &mut String) {
    if entries.is_empty() {
        return;
    }

    html.push_str("<nav class=\"table-of-contents\" role=\"navigation\">\n");
    html.push_str("<h2>Table of Contents</h2>\n<ul>\n");
    for entry in entries {
        html.push_str(&format!(
            "<li data-level=\"{}\"><a href=\"#{}\">{}</a></li>\n",
            entry.level,
            html_escape::encode_double_quoted_attribute(&entry.anchor_id),
            html_escape::encode_text(&entry.text)
        ));
    }
    html.push_str("</ul>\n</nav>\n");
}

/// Render a run of inline spans with their marks.
///
/// Marks nest in a fixed order with the link wrap always outermost, so a
/// linked span wraps all of its other decorations, never the reverse.
pub fn render_spans(spans: &[InlineSpan]) -> String {
    let mut out = String::new();

    for span in spans {
        let mut rendered = html_escape::encode_text(&span.text).to_string();

        // Innermost decorations first
        for (mark, tag) in [
            (Mark::Code, "code"),
            (Mark::StrikeThrough, "s"),
            (Mark::Underline, "u"),
            (Mark::Em, "em"),
            (Mark::Strong, "strong"),
        ] {
            if span.marks.contains(&mark) {
                rendered = format!("<{}>{}</{}>", tag, rendered, tag);
            }
        }

        if let Some(href) = &span.link {
            rendered = format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                html_escape::encode_double_quoted_attribute(href),
                rendered
            );
        }

        out.push_str(&rendered);
    }

    out
}
