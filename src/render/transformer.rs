use crate::assets::AssetResolver;
use crate::document::{ContentNode, ListKind, TextStyle};
use crate::render::tree::{RenderListItem, RenderNode};
use crate::toc::Outline;

/// Display size requested for article images
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 450;

/// Open list accumulator for the run-length grouping scan.
///
/// The source stores list items flat; adjacent items of the same kind are
/// regrouped here into a single list node. The scan is a two-state machine
/// (no open list / a list of one kind open) and always flushes at end of
/// input, so no accumulator outlives the transform.
struct OpenList {
    kind: ListKind,
    items: Vec<RenderListItem>,
}

fn flush_list(open: &mut Option<OpenList>, out: &mut Vec<RenderNode>) {
    if let Some(list) = open.take() {
        out.push(RenderNode::List {
            kind: list.kind,
            items: list.items,
        });
    }
}

/// Transform a classified document into the render tree.
///
/// List items are run-length grouped, headings get their pre-computed
/// anchors attached, and when the outline qualifies for display it is
/// spliced in immediately before the first level-2 heading.
pub fn transform(
    doc: &[ContentNode],
    outline: &Outline,
    resolver: &dyn AssetResolver,
) -> Vec<RenderNode> {
    let show_toc = outline.should_display();
    let mut toc_inserted = false;

    let mut out = Vec::with_capacity(doc.len());
    let mut open: Option<OpenList> = None;

    for node in doc {
        if let ContentNode::ListItem(item) = node {
            let rendered = RenderListItem {
                level: item.level,
                spans: item.spans.clone(),
            };
            match open.as_mut() {
                // Same kind: the item joins the open list
                Some(list) if list.kind == item.kind => list.items.push(rendered),
                // Kind change or no open list: start a fresh one
                _ => {
                    flush_list(&mut open, &mut out);
                    open = Some(OpenList {
                        kind: item.kind,
                        items: vec![rendered],
                    });
                }
            }
            continue;
        }

        // Any non-list node interrupts an open list
        flush_list(&mut open, &mut out);

        // The outline goes in just before the first level-2 heading
        if show_toc && !toc_inserted && is_h2(node) {
            out.push(RenderNode::TableOfContents {
                entries: outline.visible_entries(),
            });
            toc_inserted = true;
        }

        if let Some(rendered) = render_node(node, outline, resolver) {
            out.push(rendered);
        }
    }

    flush_list(&mut open, &mut out);

    out
}

fn is_h2(node: &ContentNode) -> bool {
    matches!(node, ContentNode::Text(block) if block.style == TextStyle::H2)
}

/// Dispatch a single non-list node to its handler. Nodes that cannot
/// produce visual output (unresolvable image, empty table or code block)
/// degrade to nothing instead of failing the render.
fn render_node(
    node: &ContentNode,
    outline: &Outline,
    resolver: &dyn AssetResolver,
) -> Option<RenderNode> {
    match node {
        ContentNode::Text(block) => {
            if let Some(level) = block.style.heading_level() {
                return Some(RenderNode::Heading {
                    level,
                    anchor_id: outline.anchor_for(&block.key).map(str::to_string),
                    spans: block.spans.clone(),
                });
            }
            match block.style {
                TextStyle::Blockquote => Some(RenderNode::Blockquote {
                    spans: block.spans.clone(),
                }),
                _ => Some(RenderNode::Paragraph {
                    spans: block.spans.clone(),
                }),
            }
        }
        ContentNode::Image(image) => {
            let url = resolver.image_url(image, IMAGE_WIDTH, IMAGE_HEIGHT)?;
            Some(RenderNode::Image {
                url,
                alt: image.alt.clone().unwrap_or_default(),
                caption: image.caption.clone(),
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT,
            })
        }
        ContentNode::Table(table) => {
            let mut rows = table.rows.iter().map(|r| r.cells.clone());
            let header = rows.next()?;
            Some(RenderNode::Table {
                header,
                rows: rows.collect(),
                theme_color: table.theme_color.clone(),
            })
        }
        ContentNode::Code(code) => {
            if code.code.is_empty() {
                return None;
            }
            Some(RenderNode::CodeBlock {
                code: code.code.clone(),
                language: code.language.clone(),
                filename: code.filename.clone(),
            })
        }
        // List items are handled by the grouping scan, never dispatched here
        ContentNode::ListItem(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NullResolver;
    use crate::document::{InlineSpan, ListItemBlock, TextBlock};
    use crate::toc::{build_outline, TocOptions};

    fn text(key: &str, style: TextStyle, s: &str) -> ContentNode {
        ContentNode::Text(TextBlock {
            key: key.to_string(),
            style,
            spans: vec![InlineSpan::plain(s)],
        })
    }

    fn list_item(key: &str, kind: ListKind, s: &str) -> ContentNode {
        ContentNode::ListItem(ListItemBlock {
            key: key.to_string(),
            kind,
            level: 0,
            spans: vec![InlineSpan::plain(s)],
        })
    }

    fn transform_default(doc: &[ContentNode]) -> Vec<RenderNode> {
        let outline = build_outline(doc, &TocOptions::default());
        transform(doc, &outline, &NullResolver)
    }

    #[test]
    fn test_adjacent_same_kind_items_group_into_one_list() {
        let doc = vec![
            list_item("a", ListKind::Bullet, "one"),
            list_item("b", ListKind::Bullet, "two"),
        ];

        let out = transform_default(&doc);
        assert_eq!(out.len(), 1);
        match &out[0] {
            RenderNode::List { kind, items } => {
                assert_eq!(*kind, ListKind::Bullet);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_change_starts_a_new_list() {
        let doc = vec![
            list_item("a", ListKind::Bullet, "1"),
            list_item("b", ListKind::Bullet, "2"),
            list_item("c", ListKind::Number, "3"),
            list_item("d", ListKind::Number, "4"),
            list_item("e", ListKind::Bullet, "5"),
        ];

        let out = transform_default(&doc);
        let shapes: Vec<(ListKind, usize)> = out
            .iter()
            .map(|n| match n {
                RenderNode::List { kind, items } => (*kind, items.len()),
                other => panic!("expected list, got {:?}", other),
            })
            .collect();

        assert_eq!(
            shapes,
            vec![
                (ListKind::Bullet, 2),
                (ListKind::Number, 2),
                (ListKind::Bullet, 1),
            ]
        );
    }

    #[test]
    fn test_non_list_node_interrupts_a_list() {
        let doc = vec![
            list_item("a", ListKind::Bullet, "1"),
            text("p", TextStyle::Normal, "break"),
            list_item("b", ListKind::Bullet, "2"),
        ];

        let out = transform_default(&doc);
        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], RenderNode::List { .. }));
        assert!(matches!(out[1], RenderNode::Paragraph { .. }));
        assert!(matches!(out[2], RenderNode::List { .. }));
    }

    #[test]
    fn test_trailing_list_is_flushed() {
        let doc = vec![
            text("p", TextStyle::Normal, "intro"),
            list_item("a", ListKind::Number, "last"),
        ];

        let out = transform_default(&doc);
        assert!(matches!(out.last(), Some(RenderNode::List { .. })));
    }

    #[test]
    fn test_toc_inserted_before_first_h2() {
        let doc = vec![
            text("t", TextStyle::H1, "Title"),
            text("a", TextStyle::H2, "A"),
            text("p", TextStyle::Normal, "body"),
            text("b", TextStyle::H2, "B"),
        ];

        let out = transform_default(&doc);
        assert!(matches!(out[0], RenderNode::Heading { level: 1, .. }));
        assert!(matches!(out[1], RenderNode::TableOfContents { .. }));
        assert!(matches!(out[2], RenderNode::Heading { level: 2, .. }));
        // Only one outline even though two h2 headings exist
        let toc_count = out
            .iter()
            .filter(|n| matches!(n, RenderNode::TableOfContents { .. }))
            .count();
        assert_eq!(toc_count, 1);
    }

    #[test]
    fn test_suppressed_toc_is_not_inserted() {
        let doc = vec![
            text("a", TextStyle::H2, "Only"),
            text("p", TextStyle::Normal, "body"),
        ];

        let out = transform_default(&doc);
        assert!(!out.iter().any(|n| matches!(n, RenderNode::TableOfContents { .. })));
    }

    #[test]
    fn test_headings_carry_anchors_from_outline() {
        let doc = vec![
            text("a", TextStyle::H2, "Setup"),
            text("b", TextStyle::H2, "Setup"),
        ];

        let out = transform_default(&doc);
        let anchors: Vec<Option<&str>> = out
            .iter()
            .filter_map(|n| match n {
                RenderNode::Heading { anchor_id, .. } => Some(anchor_id.as_deref()),
                _ => None,
            })
            .collect();
        assert_eq!(anchors, vec![Some("setup"), Some("setup-2")]);
    }

    #[test]
    fn test_unresolvable_image_renders_nothing() {
        let doc = vec![
            text("p", TextStyle::Normal, "before"),
            ContentNode::Image(crate::document::ImageRef {
                key: "i".to_string(),
                asset_ref: "image-abc-100x100-png".to_string(),
                alt: None,
                caption: None,
            }),
            text("q", TextStyle::Normal, "after"),
        ];

        let out = transform_default(&doc);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|n| matches!(n, RenderNode::Paragraph { .. })));
    }
}
