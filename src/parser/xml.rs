//! Small navigation helpers over roxmltree nodes
//!
//! PubMed records are looked up by element name only (no namespaces), either
//! among direct children or anywhere below a node.

use roxmltree::Node;

/// First element with the given name anywhere below `node`
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// All elements with the given name anywhere below `node`, in document order
pub fn descendants_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// First direct child element with the given name
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// Direct child elements with the given name
pub fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Leading text of an element, trimmed; None when absent or blank
pub fn own_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// All text below an element (inline markup included), whitespace-collapsed
pub fn full_text(node: Node<'_, '_>) -> Option<String> {
    let raw: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Leading text of the named child, trimmed
pub fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    find_child(node, name).and_then(own_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_find_descendant_skips_self() {
        let doc = Document::parse("<A><B><A>inner</A></B></A>").unwrap();
        let root = doc.root_element();
        let inner = find_descendant(root, "A").unwrap();
        assert_eq!(own_text(inner).as_deref(), Some("inner"));
    }

    #[test]
    fn test_full_text_includes_markup() {
        let doc = Document::parse("<T>Effects of <i>E. coli</i>\n  on   mice</T>").unwrap();
        assert_eq!(
            full_text(doc.root_element()).as_deref(),
            Some("Effects of E. coli on mice")
        );
    }

    #[test]
    fn test_child_text_blank_is_none() {
        let doc = Document::parse("<R><X>  </X><Y> y </Y></R>").unwrap();
        let root = doc.root_element();
        assert_eq!(child_text(root, "X"), None);
        assert_eq!(child_text(root, "Y").as_deref(), Some("y"));
        assert_eq!(child_text(root, "Z"), None);
    }

    #[test]
    fn test_children_named_direct_only() {
        let doc = Document::parse("<R><C/><D><C/></D><C/></R>").unwrap();
        assert_eq!(children_named(doc.root_element(), "C").count(), 2);
        assert_eq!(descendants_named(doc.root_element(), "C").count(), 3);
    }
}
