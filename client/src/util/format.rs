//! Text formatting for cards, tables and headers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Characters of body text shown on a post card.
pub const EXCERPT_CHARS: usize = 160;

/// Strip markup from `content` and cut it to the card excerpt, always
/// followed by an ellipsis.
pub fn excerpt(content: &str) -> String {
    let mut out = strip_tags(content);
    if let Some((idx, _)) = out.char_indices().nth(EXCERPT_CHARS) {
        out.truncate(idx);
    }
    out.push_str("...");
    out
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Avatar letter: first character of `name`, uppercased.
pub fn initial(name: &str) -> String {
    name.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}

/// `2024-03-07T10:00:00.000Z` -> `3/7/2024`. Unparseable input is returned
/// as-is; a missing timestamp renders empty.
pub fn format_date(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return String::new();
    };
    let date = raw.get(..10).unwrap_or(raw);
    let mut parts = date.splitn(3, '-').map(str::parse::<u32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(year)), Some(Ok(month)), Some(Ok(day))) if (1..=12).contains(&month) && (1..=31).contains(&day) => {
            format!("{month}/{day}/{year}")
        }
        _ => raw.to_owned(),
    }
}

/// Split post content into display paragraphs, one per line.
pub fn paragraphs(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_owned).collect()
}

/// `"1 post total"` / `"3 posts total"`.
pub fn post_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} post{plural} total")
}
