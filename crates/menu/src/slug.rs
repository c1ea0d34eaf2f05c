/// Derives a category id from its display name.
///
/// Leading and trailing whitespace is ignored, so `" Suppen "` and `"Suppen"`
/// share an id. The rest is lowercased, whitespace runs collapse into a single
/// `-` and the German umlauts `ä`, `ö`, `ü` as well as `ß` are spelled out
/// (`ß` becomes `ss`). Other accented characters and symbols are kept as they are.
pub fn category_slug(name: &str) -> String {
    let name = name.trim();
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }

        in_whitespace = false;

        match c {
            'ä' => slug.push_str("ae"),
            'ö' => slug.push_str("oe"),
            'ü' => slug.push_str("ue"),
            'ß' => slug.push_str("ss"),
            _ => slug.push(c),
        }
    }

    slug
}
