//! HTML fragment rendering for the guide collection.
//!
//! Produces the same markup the guide site serves: a table of contents
//! followed by one section per category, or a synthetic "search results"
//! category. Rendering is presentation glue over the search core; guide
//! text is emitted as-is.

use crate::model::{Attachment, Category, Guide};
use crate::search::IndexedGuide;

fn obsolete_banner(guide: &Guide) -> String {
    match guide.obsolete.as_deref() {
        Some(note) if !note.is_empty() => format!(
            concat!(
                r#"<div class="obsolete">"#,
                r#"<div class="obsolete-left"><i class="bi bi-x-circle-fill"></i></div>"#,
                r#"<div class="obsolete-center"><strong>Obsolete</strong><br />{}</div>"#,
                r#"<div class="obsolete-right"><i class="bi bi-x-circle-fill"></i></div>"#,
                "</div>"
            ),
            note
        ),
        _ => String::new(),
    }
}

fn name_list(label: &str, names: &[String]) -> String {
    if names.is_empty() {
        return String::new();
    }
    format!("<div><em>{}:</em> {}</div>", label, names.join(", "))
}

fn attachment_item(attachment: &Attachment) -> String {
    match attachment {
        Attachment::File {
            filename,
            contenttype,
        } => format!(
            r#"<li class="attachment-item"><i class="bi bi-card-image"></i> <a href="responses/{filename}" target="_BLANK">{filename}</a> <span class="att-type">({contenttype})</span></li>"#
        ),
        Attachment::Markdown { filename } => format!(
            r#"<li class="attachment-item"><i class="bi bi-file-earmark-text-fill"></i> <a href="responses/{filename}" target="_BLANK">{filename}</a> <span class="att-type">(markdown/text)</span></li>"#
        ),
        Attachment::Link { link } => format!(
            r#"<li class="attachment-item"><i class="bi bi-box-arrow-up-right"></i> <a href="{link}" target="_BLANK">{link}</a> <span class="att-type">(external link)</span></li>"#
        ),
    }
}

fn attachment_list(guide: &Guide) -> String {
    if guide.attachments.is_empty() {
        return String::new();
    }
    let items: String = guide.attachments.iter().map(attachment_item).collect();
    format!("<ul>{items}</ul>")
}

/// Renders one guide list item. `category_name` is shown only on search
/// results, where guides from different categories mix.
pub fn render_guide(guide: &Guide, category_name: Option<&str>) -> String {
    let category_line = match category_name {
        Some(name) => format!("<div>Category: {name}</div>"),
        None => String::new(),
    };

    let mut out = String::new();
    out.push_str(r#"<li class="guide-item">"#);
    out.push_str(&format!(r#"<div class="guide-name">{}</div>"#, guide.name));
    out.push_str(&obsolete_banner(guide));
    out.push_str(&name_list("Fams", &guide.fams));
    out.push_str(&name_list("Builds", &guide.builds));
    out.push_str(&category_line);
    out.push_str(&attachment_list(guide));
    out.push_str("</li>");
    out
}

fn category_section(anchor: &str, title: &str, description: &str, items: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(r##"<h2 id="{anchor}">{title}</h2>"##));
    out.push_str(&format!(
        r#"<div class="category-description">{description}</div>"#
    ));
    out.push_str(&format!("<ul>{items}</ul>"));
    out
}

/// Renders one category section anchored on its raw name.
pub fn render_category(category: &Category) -> String {
    let items: String = category
        .guides
        .iter()
        .map(|guide| render_guide(guide, None))
        .collect();
    category_section(
        &category.name,
        &category.display_name(),
        &category.description,
        &items,
    )
}

fn render_table_of_contents(categories: &[&Category]) -> String {
    let items: String = categories
        .iter()
        .map(|category| {
            format!(
                r##"<li><a href="#{}">{}</a>"##,
                category.name,
                category.display_name()
            )
        })
        .collect();
    format!(
        r#"<div class="table-of-contents"><h2>Table of Contents</h2><ol>{items}</ol></div>"#
    )
}

/// Renders the full listing: table of contents plus every category,
/// ordered by display name.
pub fn render_full(categories: &[Category]) -> String {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by_key(|category| category.display_name());

    let mut out = render_table_of_contents(&sorted);
    for category in sorted {
        out.push_str(&render_category(category));
    }
    out
}

/// Renders search matches as a synthetic category, with each guide's
/// owning category shown inline.
pub fn render_search_results(query: &str, matches: &[&IndexedGuide]) -> String {
    let items: String = matches
        .iter()
        .map(|m| render_guide(&m.guide, Some(&m.category_name)))
        .collect();
    let title = format!("Results for &ldquo;{query}&rdquo;");
    category_section("search-results", &title, "", &items)
}

/// Renders an error bubble, e.g. "no results" or "search term too short".
pub fn render_search_error(message: &str) -> String {
    format!(
        concat!(
            r#"<div class="bubble search-error">"#,
            r#"<i class="bi bi-exclamation-circle-fill"></i>"#,
            r#"<div class="bubble-message">{}</div>"#,
            r#"<i class="bi bi-exclamation-circle-fill"></i>"#,
            "</div>"
        ),
        message
    )
}

/// Process-lifetime cache for the rendered full listing.
///
/// The collection never changes after load, so there is no invalidation:
/// once populated, the cached markup is served for the rest of the
/// process. Owned by the rendering layer, not the search core.
#[derive(Debug, Default)]
pub struct RenderCache {
    full: Option<String>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached full listing, rendering it on first use.
    pub fn full(&mut self, categories: &[Category]) -> &str {
        if self.full.is_none() {
            tracing::debug!("rendering full guide listing ({} categories)", categories.len());
            self.full = Some(render_full(categories));
        }
        self.full.as_deref().unwrap_or_default()
    }
}
