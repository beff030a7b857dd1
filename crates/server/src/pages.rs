//! # HTML Pages
//!
//! Server-side rendering for every view. One shared shell (header, sidebar,
//! footer) wraps the overview, list, detail, and not-found pages, and the
//! donut chart collaborator turns category counts into inline SVG.

use patternbook_core::highlight::escape_html;
use patternbook_core::{slugify, Catalog, Category, Highlighter, PageMeta, PatternRecord, View};

/// Donut segment colors, one per category in [`Category::ALL`] order.
const CHART_COLORS: [&str; 3] = ["#fde68a", "#a5b4fc", "#fca5a5"];

const FOOTER_TEXT: &str = "\u{a9} 2025 JavaScript Design Patterns Guide. All rights reserved.";

/// Sidebar navigation: every record's name linking to its detail page, in
/// declaration order, with the active slug highlighted.
pub(crate) fn sidebar(catalog: &Catalog, active_slug: Option<&str>) -> String {
    let mut items = String::new();
    for record in catalog.iter() {
        let slug = slugify(record.name);
        let class = if active_slug == Some(slug.as_str()) {
            " class=\"active\""
        } else {
            ""
        };
        items.push_str(&format!(
            "<li><a href=\"/patterns/{slug}\"{class}>{}</a></li>\n",
            escape_html(record.name)
        ));
    }
    format!(
        "<aside>\n<a class=\"sidebar-title\" href=\"/\">Patterns</a>\n<nav><ul>\n{items}</ul></nav>\n</aside>"
    )
}

/// The one page shell every view shares.
fn page_shell(catalog: &Catalog, active_slug: Option<&str>, meta: &PageMeta, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="stylesheet" href="/style.css">
</head>
<body>
<header><h1>JavaScript Design Patterns</h1></header>
<main>
{sidebar}
<section class="content">
{main}
</section>
</main>
<footer>{footer}</footer>
</body>
</html>
"#,
        title = escape_html(&meta.title),
        description = escape_html(&meta.description),
        sidebar = sidebar(catalog, active_slug),
        footer = FOOTER_TEXT,
    )
}

/// Render category counts as an SVG donut with a legend.
///
/// Input contract: non-negative counts keyed by the three fixed category
/// labels. A zero-count category contributes no arc but stays in the legend.
pub(crate) fn donut_chart(counts: &[(Category, usize); 3]) -> String {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let radius = 68.0_f64;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    let mut segments = String::new();
    let mut offset = 0.0_f64;
    for ((category, count), color) in counts.iter().zip(CHART_COLORS) {
        if total == 0 || *count == 0 {
            continue;
        }
        let length = (*count as f64 / total as f64) * circumference;
        segments.push_str(&format!(
            "<circle class=\"segment-{name}\" cx=\"100\" cy=\"100\" r=\"{radius:.1}\" fill=\"none\" \
             stroke=\"{color}\" stroke-width=\"24\" stroke-dasharray=\"{length:.3} {circumference:.3}\" \
             stroke-dashoffset=\"{offset:.3}\" transform=\"rotate(-90 100 100)\"/>\n",
            name = slugify(category.display_name()),
        ));
        offset -= length;
    }

    let mut legend = String::new();
    for ((category, count), color) in counts.iter().zip(CHART_COLORS) {
        legend.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background:{color}\"></span>{} ({count})</li>\n",
            category.display_name()
        ));
    }

    format!(
        "<div class=\"chart-container\">\n\
         <svg viewBox=\"0 0 200 200\" role=\"img\" aria-label=\"Pattern category distribution\">\n\
         {segments}</svg>\n\
         <ul class=\"legend\">\n{legend}</ul>\n\
         </div>"
    )
}

/// Landing page: intro copy plus the category distribution chart.
pub(crate) fn overview_page(catalog: &Catalog) -> String {
    let meta = View::for_slug(catalog, None).meta();
    let chart = donut_chart(&catalog.category_counts());
    let main = format!(
        r#"<h2>Welcome to the Interactive Design Patterns Guide</h2>
<p>This single-page application is designed to help you easily explore and
understand common JavaScript design patterns. On the left, you'll find a list
of all patterns. Simply click on a pattern name to load its detailed
explanation and code examples here.</p>
<p>Each pattern comes with a brief explanation, a more comprehensive code
example, and a simplified version to highlight the core concept. The goal is
to provide a clear, concise, and interactive resource for learning these
fundamental software design principles.</p>
<hr>
<h2>Design Patterns Overview</h2>
<p>This chart visually represents the distribution of the design patterns
across their main categories: Creational, Structural, and Behavioral. It
offers a quick way to understand the proportion of patterns in each
category.</p>
{chart}"#
    );
    page_shell(catalog, None, &meta, &main)
}

/// Full pattern list, every record exactly once in declaration order.
pub(crate) fn list_page(catalog: &Catalog) -> String {
    let meta = PageMeta {
        title: "All Patterns | JavaScript Design Patterns".to_string(),
        description: "Browse all JavaScript design patterns.".to_string(),
    };
    let mut items = String::new();
    for record in catalog.iter() {
        items.push_str(&format!(
            "<li><a href=\"/patterns/{}\">{}</a></li>\n",
            slugify(record.name),
            escape_html(record.name)
        ));
    }
    let main = format!("<h2>All Design Patterns</h2>\n<ul class=\"pattern-list\">\n{items}</ul>");
    page_shell(catalog, None, &meta, &main)
}

/// Detail page: explanation plus both highlighted code samples.
pub(crate) fn detail_page(
    catalog: &Catalog,
    record: &PatternRecord,
    highlighter: &dyn Highlighter,
) -> String {
    let slug = slugify(record.name);
    let meta = View::Detail(record).meta();
    let main = format!(
        r#"<h2>{name}</h2>
<p class="category-badge">{category}</p>
<p>{explanation}</p>
<details open>
<summary>Brief Code Example</summary>
<pre><code class="language-js">{brief}</code></pre>
</details>
<details>
<summary>Simplest Code</summary>
<pre><code class="language-js">{simplest}</code></pre>
</details>"#,
        name = escape_html(record.name),
        category = record.category.display_name(),
        explanation = escape_html(record.explanation),
        brief = highlighter.highlight(record.brief_code),
        simplest = highlighter.highlight(record.simplest_code),
    );
    page_shell(catalog, Some(&slug), &meta, &main)
}

/// 404 page for slugs that resolve to nothing.
pub(crate) fn not_found_page(catalog: &Catalog) -> String {
    let meta = View::NotFound.meta();
    let main = "<h2>Pattern Not Found</h2>\n\
                <p>No pattern matches that address. Browse the full list of \
                patterns instead.</p>\n\
                <p><a href=\"/patterns\">All Design Patterns</a></p>";
    page_shell(catalog, None, &meta, main)
}
