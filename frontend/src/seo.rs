use web_sys::{window, Document, Element};

const DESCRIPTION_MAX_CHARS: usize = 160;

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn set_meta_name(name: &str, content: &str) {
    let selector = format!("meta[name=\"{}\"]", name);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("name", name);
    let _ = element.set_attribute("content", content);
}

pub(crate) fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    let compact = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= max_chars {
        return compact;
    }
    let mut out: String = compact.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

pub fn set_canonical_link(url: &str) {
    let Some(element) = upsert_head_element("link[rel=\"canonical\"]", "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

/// Browser chrome color (`<meta name="theme-color">`).
pub fn set_theme_color(color: &str) {
    set_meta_name("theme-color", color);
}

pub fn set_meta_description(description: &str) {
    set_meta_name("description", &normalize_meta_text(description, DESCRIPTION_MAX_CHARS));
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}
