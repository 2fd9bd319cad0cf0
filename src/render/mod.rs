pub mod tree;
pub mod transformer;
pub mod html;

pub use tree::{RenderListItem, RenderNode};
pub use transformer::transform;
pub use html::{render_html, render_spans};

use crate::assets::AssetResolver;
use crate::document::ContentNode;
use crate::toc::{build_outline, TocOptions};

/// Run the full render pipeline for one document: build the outline, then
/// transform and emit HTML in a single pass over the classified nodes.
pub fn render_document(
    doc: &[ContentNode],
    options: &TocOptions,
    resolver: &dyn AssetResolver,
) -> String {
    let outline = build_outline(doc, options);
    let tree = transform(doc, &outline, resolver);
    render_html(&tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NullResolver;
    use crate::document::classify_document;
    use serde_json::json;

    fn block(key: &str, style: &str, text: &str) -> serde_json::Value {
        json!({
            "_type": "block", "_key": key, "style": style,
            "children": [{ "_type": "span", "_key": format!("{}-s", key), "text": text, "marks": [] }]
        })
    }

    fn bullet(key: &str, text: &str) -> serde_json::Value {
        json!({
            "_type": "block", "_key": key, "style": "normal", "listItem": "bullet",
            "children": [{ "_type": "span", "_key": format!("{}-s", key), "text": text, "marks": [] }]
        })
    }

    #[test]
    fn test_full_pipeline_with_toc_and_grouped_list() {
        let body = vec![
            block("h-intro", "h2", "Intro"),
            bullet("li-x", "x"),
            bullet("li-y", "y"),
            block("h-next", "h2", "Next"),
        ];

        let doc = classify_document(&body);
        let html = render_document(&doc, &TocOptions::default(), &NullResolver);

        // Two h2 entries, so the outline is shown, spliced before the first
        let toc_pos = html.find("table-of-contents").unwrap();
        let intro_pos = html.find("<h2 id=\"intro\">Intro</h2>").unwrap();
        let next_pos = html.find("<h2 id=\"next\">Next</h2>").unwrap();
        assert!(toc_pos < intro_pos);
        assert!(intro_pos < next_pos);

        // Both adjacent bullets render as one list
        assert_eq!(html.matches("<ul>").count(), 2); // article list + TOC list
        assert!(html.contains("<li data-level=\"0\">x</li>"));
        assert!(html.contains("<li data-level=\"0\">y</li>"));
    }

    #[test]
    fn test_full_pipeline_tolerates_unknown_nodes() {
        let body = vec![
            block("p1", "normal", "before"),
            json!({ "_type": "futureWidget", "_key": "w1", "payload": { "anything": true } }),
            block("p2", "normal", "after"),
        ];

        let doc = classify_document(&body);
        let html = render_document(&doc, &TocOptions::default(), &NullResolver);

        assert!(html.contains("<p>before</p>"));
        assert!(html.contains("<p>after</p>"));
        assert!(!html.contains("futureWidget"));
    }

    #[test]
    fn test_rerender_reproduces_identical_output() {
        let body = vec![
            block("a", "h2", "Setup"),
            block("b", "h2", "Setup"),
            block("c", "normal", "text"),
        ];

        let doc = classify_document(&body);
        let options = TocOptions::default();
        let first = render_document(&doc, &options, &NullResolver);
        let second = render_document(&doc, &options, &NullResolver);
        assert_eq!(first, second);
        assert!(first.contains("id=\"setup\""));
        assert!(first.contains("id=\"setup-2\""));
    }
}
