// tests/unit_graph.rs
//! Title resolution, redirect resolution and link graph construction.

use std::collections::BTreeSet;
use wikigraph_core::graph::{resolve_titles, LinkGraph, RedirectMap};
use wikigraph_core::tables::page::{PageIndex, PageRecord};
use wikigraph_core::tables::pagelinks::LinkRecord;
use wikigraph_core::tables::redirect::RedirectRecord;
use wikigraph_core::tables::MAIN_NAMESPACE;
use wikigraph_core::DuplicatePolicy;

fn index(records: Vec<PageRecord>) -> PageIndex {
    PageIndex::from_records(records, DuplicatePolicy::Overwrite).unwrap()
}

fn redirect(from_id: u64, to_title: &str) -> RedirectRecord {
    RedirectRecord {
        from_id,
        to_namespace: MAIN_NAMESPACE,
        to_title: to_title.to_string(),
    }
}

fn ids(items: &[u64]) -> BTreeSet<u64> {
    items.iter().copied().collect()
}

#[test]
fn test_unknown_titles_are_omitted() {
    let pages = index(vec![PageRecord::new(1, "Dog", false), PageRecord::new(3, "Cat", false)]);

    let resolved = resolve_titles(["Dog", "Unicorn", "Cat"], &pages);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.get("Dog"), Some(&1));
    assert!(!resolved.contains_key("Unicorn"));
}

#[test]
fn test_titles_in_other_namespaces_do_not_resolve() {
    let mut category = PageRecord::new(40, "Animals", false);
    category.namespace = 14;
    let pages = index(vec![category]);

    assert!(resolve_titles(["Animals"], &pages).is_empty());
}

#[test]
fn test_single_hop_redirect_resolves() {
    let pages = index(vec![PageRecord::new(1, "Dog", false), PageRecord::new(2, "Canine", true)]);

    let map = RedirectMap::resolve(&pages, vec![redirect(2, "Dog")]);

    assert_eq!(map.target(2), Some(1));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_double_redirect_is_dropped() {
    let pages = index(vec![
        PageRecord::new(10, "Old_name", true),
        PageRecord::new(11, "Middle_name", true),
        PageRecord::new(12, "Final_name", false),
    ]);

    let map = RedirectMap::resolve(&pages, vec![redirect(10, "Middle_name"), redirect(11, "Final_name")]);

    assert_eq!(map.target(11), Some(12));
    assert_eq!(map.target(10), None, "redirect to a redirect must not resolve");
}

#[test]
fn test_redirect_outside_main_namespace_is_ignored() {
    let pages = index(vec![PageRecord::new(1, "Dog", false)]);
    let mut record = redirect(5, "Dog");
    record.to_namespace = 4;

    assert!(RedirectMap::resolve(&pages, vec![record]).is_empty());
}

#[test]
fn test_link_through_redirect_reaches_target() {
    // A -> B, B -> R, R redirects to C.
    let pages = index(vec![
        PageRecord::new(1, "A", false),
        PageRecord::new(2, "B", false),
        PageRecord::new(3, "C", false),
        PageRecord::new(4, "R", true),
    ]);
    let redirects = RedirectMap::resolve(&pages, vec![redirect(4, "C")]);
    let links = vec![LinkRecord::main(1, "B"), LinkRecord::main(2, "R")];

    let graph = LinkGraph::build(&ids(&[1, 2, 3]), links, &pages, &redirects);

    assert_eq!(graph.outlinks(1), Some(&[2][..]));
    assert_eq!(graph.outlinks(2), Some(&[3][..]));
    assert_eq!(graph.linkers_of(3), vec![2]);
}

#[test]
fn test_isolated_page_gets_empty_entry() {
    let pages = index(vec![PageRecord::new(1, "A", false), PageRecord::new(2, "B", false)]);

    let graph = LinkGraph::build(&ids(&[1, 2]), Vec::new(), &pages, &RedirectMap::default());

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.outlinks(2), Some(&[][..]));
    assert_eq!(graph.outlinks(99), None);
}

#[test]
fn test_unresolvable_redirect_destination_is_dropped() {
    let pages = index(vec![PageRecord::new(1, "A", false), PageRecord::new(4, "Broken", true)]);
    let links = vec![LinkRecord::main(1, "Broken")];

    let graph = LinkGraph::build(&ids(&[1]), links, &pages, &RedirectMap::default());

    assert_eq!(graph.outlinks(1), Some(&[][..]));
}

#[test]
fn test_links_leaving_target_set_are_excluded() {
    let pages = index(vec![
        PageRecord::new(1, "A", false),
        PageRecord::new(2, "B", false),
        PageRecord::new(3, "Outside", false),
    ]);
    let links = vec![
        LinkRecord::main(1, "B"),
        LinkRecord::main(1, "Outside"),
        LinkRecord::main(3, "A"),
    ];

    let graph = LinkGraph::build(&ids(&[1, 2]), links, &pages, &RedirectMap::default());

    assert_eq!(graph.outlinks(1), Some(&[2][..]));
    assert!(graph.linkers_of(1).is_empty());
}

#[test]
fn test_non_main_links_are_skipped() {
    let pages = index(vec![PageRecord::new(1, "A", false), PageRecord::new(2, "B", false)]);
    let mut talk_link = LinkRecord::main(1, "B");
    talk_link.from_namespace = 1;

    let graph = LinkGraph::build(&ids(&[1, 2]), vec![talk_link], &pages, &RedirectMap::default());

    assert_eq!(graph.link_count(), 0);
}

#[test]
fn test_repeated_links_are_preserved_in_page_order() {
    let pages = index(vec![
        PageRecord::new(1, "A", false),
        PageRecord::new(3, "C", false),
        PageRecord::new(2, "B", false),
    ]);
    // Duplicates stay; order follows the page table, not the link table.
    let links = vec![
        LinkRecord::main(1, "B"),
        LinkRecord::main(1, "C"),
        LinkRecord::main(1, "B"),
    ];

    let graph = LinkGraph::build(&ids(&[1, 2, 3]), links, &pages, &RedirectMap::default());

    assert_eq!(graph.outlinks(1), Some(&[3, 2, 2][..]));
    assert_eq!(graph.linkers_of(2), vec![1, 1]);
}
