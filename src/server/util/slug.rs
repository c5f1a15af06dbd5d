/// Turns a display name into a lowercase, hyphen-separated URL slug.
///
/// Runs of anything other than ASCII letters and digits collapse into a single
/// hyphen; leading and trailing hyphens are dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '\'' {
            // "Luckenbach's" -> "luckenbachs"
            continue;
        } else {
            pending_dash = true;
        }
    }

    slug
}
