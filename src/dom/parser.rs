use crate::dom::{DomNode, DomTree};
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

/// Tags whose children should be stripped (invisible/script content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse raw HTML into a DomTree
pub fn parse_html(html: &str) -> DomTree {
    let document = Html::parse_document(html);

    // Extract <title>
    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let root = convert_element(document.root_element());

    DomTree {
        root,
        title: title.trim().to_string(),
    }
}

fn convert_element(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // Skip children of invisible elements
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return DomNode::element(tag, attributes, Vec::new());
    }

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(DomNode::text(s));
                }
            }
            _ => {}
        }
    }

    DomNode::element(tag, attributes, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_orbit_markup() {
        let html = r#"
        <html>
            <head><title>Solar System</title></head>
            <body>
                <div id="solar-system">
                    <div class="earth-orbit orbit" style="width: 240px; height: 190px">
                        <div id="planet-earth" class="planet"
                             data-info="Earth: Third planet from the Sun"></div>
                    </div>
                </div>
            </body>
        </html>
        "#;

        let tree = parse_html(html);
        assert_eq!(tree.title, "Solar System");
        let stage = tree.root.find_by_id("solar-system");
        assert!(stage.is_some());
        let planet = tree.root.find_by_id("planet-earth");
        match planet {
            Some(node) => {
                assert_eq!(node.attr("data-info"), Some("Earth: Third planet from the Sun"));
            }
            None => panic!("expected planet-earth in parsed tree"),
        }
    }

    #[test]
    fn strips_script_children() {
        let html = r#"
        <html><body>
            <p>Visible</p>
            <script>alert("hidden");</script>
        </body></html>
        "#;

        let tree = parse_html(html);
        let text = tree.root.collect_text();
        assert!(text.contains("Visible"));
        assert!(!text.contains("alert"));
    }

    #[test]
    fn keeps_style_attributes_while_dropping_style_tags() {
        let html = r#"
        <html><body>
            <style>.orbit { border: 1px solid; }</style>
            <div class="mars-orbit" style="width: 300px; height: 240px"></div>
        </body></html>
        "#;

        let tree = parse_html(html);
        let orbit = tree.root.find_by_class("mars-orbit");
        match orbit {
            Some(node) => assert_eq!(node.attr("style"), Some("width: 300px; height: 240px")),
            None => panic!("expected mars-orbit in parsed tree"),
        }
        assert!(!tree.root.collect_text().contains("border"));
    }
}
