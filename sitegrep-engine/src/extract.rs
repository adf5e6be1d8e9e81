use scraper::{Html, Selector};
use url::Url;

/// Elements whose subtree text never reaches the rendered-text view.
const EXCLUDED_ELEMENTS: &[&str] = &[
    "script", "style", "meta", "noscript", "head", "header", "footer",
];

/// Title and normalized visible text of a fetched page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub title: String,
    pub text: String,
}

/// Extract the page title and its visible text. Link discovery runs
/// separately on the same parsed document, see [`extract_links`].
pub fn extract(document: &Html) -> PageContent {
    PageContent {
        title: extract_title(document),
        text: visible_text(document),
    }
}

fn extract_title(document: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Concatenate text nodes outside the excluded subtrees, collapsing every
/// whitespace run to a single space.
fn visible_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| EXCLUDED_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        words.extend(text.split_whitespace());
    }
    words.join(" ")
}

/// Absolute outbound links of a page, in document order.
///
/// Every `href` of an anchor element is resolved against the page URL;
/// values that fail to resolve are skipped. Queries and fragments are
/// kept verbatim, matching the engine's no-canonicalization rule.
pub fn extract_links(document: &Html, page_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(page_url) else {
        return Vec::new();
    };
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|url| url.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_title_trimmed() {
        let content = extract(&doc(
            "<html><head><title>  Hello World \n</title></head><body></body></html>",
        ));
        assert_eq!(content.title, "Hello World");
    }

    #[test]
    fn test_missing_title_is_empty() {
        let content = extract(&doc("<html><body><p>no title</p></body></html>"));
        assert_eq!(content.title, "");
    }

    #[test]
    fn test_script_and_style_excluded() {
        let html = r#"<html><head><style>p { color: red }</style></head>
            <body><script>var hidden = 1;</script><p>visible words</p>
            <noscript>enable js</noscript></body></html>"#;
        let content = extract(&doc(html));
        assert_eq!(content.text, "visible words");
    }

    #[test]
    fn test_header_and_footer_excluded() {
        let html = r#"<html><body>
            <header>site nav</header>
            <p>article body</p>
            <footer>copyright</footer>
        </body></html>"#;
        let content = extract(&doc(html));
        assert_eq!(content.text, "article body");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<html><body><p>one\n\n  two</p> <div>three\t four</div></body></html>";
        let content = extract(&doc(html));
        assert_eq!(content.text, "one two three four");
    }

    #[test]
    fn test_links_in_document_order() {
        let html = r#"<html><body>
            <a href="/b">B</a>
            <a href="http://other.com/x">X</a>
            <a href="/a">A</a>
        </body></html>"#;
        let links = extract_links(&doc(html), "http://example.com/");
        assert_eq!(
            links,
            vec![
                "http://example.com/b",
                "http://other.com/x",
                "http://example.com/a",
            ]
        );
    }

    #[test]
    fn test_relative_link_resolution() {
        let html = r#"<a href="../up">Up</a><a href="sib">Sib</a>"#;
        let links = extract_links(&doc(html), "http://example.com/dir/page/");
        assert_eq!(
            links,
            vec!["http://example.com/dir/up", "http://example.com/dir/page/sib"]
        );
    }

    #[test]
    fn test_query_and_fragment_kept() {
        let html = r#"<a href="/p?q=1">Q</a><a href="/p#frag">F</a>"#;
        let links = extract_links(&doc(html), "http://example.com/");
        assert_eq!(
            links,
            vec!["http://example.com/p?q=1", "http://example.com/p#frag"]
        );
    }

    #[test]
    fn test_non_http_hrefs_resolve_as_is() {
        // mailto: resolves to an absolute non-http URL; scope filtering
        // rejects it later because it has no authority.
        let html = r#"<a href="mailto:x@y.z">Mail</a>"#;
        let links = extract_links(&doc(html), "http://example.com/");
        assert_eq!(links, vec!["mailto:x@y.z"]);
    }
}
