// src/crawl/extract.rs
// =============================================================================
// This module extracts the links the crawler follows from an article.
//
// Two groups of links are collected, always in this order:
// 1. In-body links: every <a> that is a direct child of a <p>
// 2. "See also" links: every <a> inside the first <ul> after the
//    "See also" heading
//
// Wikipedia has shipped two heading layouts over the years:
//   legacy:  <h2><span class="mw-headline" id="See_also">See also</span></h2>
//   current: <div class="mw-heading mw-heading2"><h2 id="See_also">See also</h2></div>
// Both are recognised. In the current layout the list is a sibling of the
// wrapping <div>, not of the <h2>.
//
// Rust concepts:
// - Lifetimes: ElementRef<'a> borrows from the parsed document
// - Option chaining with ? inside functions returning Option
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use super::source::LinkDescriptor;

// Extracts the ordered link descriptors from an article's HTML
//
// Anchors without an href are dropped here. Anchors without a title are
// kept; deciding what to do with them is the crawler's job.
//
// Example:
//   html = "<p><a href='/wiki/Graph' title='Graph'>graph</a></p>"
//   result = [LinkDescriptor { title: Some("Graph"), href: "/wiki/Graph" }]
pub fn extract_links(html: &str) -> Vec<LinkDescriptor> {
    let document = Html::parse_document(html);

    // Constant selectors: a parse failure is a programmer error
    let body_selector = Selector::parse("p > a").expect("valid selector");
    let anchor_selector = Selector::parse("a").expect("valid selector");

    let mut links: Vec<LinkDescriptor> = document
        .select(&body_selector)
        .filter_map(to_descriptor)
        .collect();

    if let Some(list) = find_see_also_list(&document) {
        links.extend(list.select(&anchor_selector).filter_map(to_descriptor));
    }

    links
}

// Finds the <ul> that follows the "See also" heading, if the page has one
fn find_see_also_list(document: &Html) -> Option<ElementRef<'_>> {
    let marker_selector =
        Selector::parse("span.mw-headline#See_also, h2#See_also").expect("valid selector");

    let marker = document.select(&marker_selector).next()?;

    // Legacy layout: the marker is a <span> inside the <h2>
    let mut heading = if marker.value().name() == "span" {
        marker
            .parent()
            .and_then(ElementRef::wrap)
            .filter(|parent| parent.value().name() == "h2")?
    } else {
        marker
    };

    // Current layout: the <h2> is wrapped in div.mw-heading
    if let Some(wrapper) = heading.parent().and_then(ElementRef::wrap) {
        if wrapper.value().classes().any(|class| class == "mw-heading") {
            heading = wrapper;
        }
    }

    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "ul")
}

fn to_descriptor(element: ElementRef<'_>) -> Option<LinkDescriptor> {
    let href = element.value().attr("href")?;
    Some(LinkDescriptor {
        title: element.value().attr("title").map(str::to_string),
        href: href.to_string(),
    })
}
