/// Case-insensitive containment test of a keyword against extracted page
/// text. An empty or absent keyword matches every page, which is the
/// pass-through mode used by unfiltered crawls.
pub fn matches(text: &str, keyword: Option<&str>) -> bool {
    match keyword {
        None => true,
        Some(k) if k.is_empty() => true,
        Some(k) => text.to_lowercase().contains(&k.to_lowercase()),
    }
}
