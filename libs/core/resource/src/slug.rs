/// Derive a URL-safe identifier from a display name.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single hyphen. Leading and trailing
/// separators are dropped, so a name without any alphanumerics yields an
/// empty string.
///
/// ```
/// use core_resource::slugify;
///
/// assert_eq!(slugify("Uzumaki Naruto"), "uzumaki-naruto");
/// assert_eq!(slugify("Ōtsutsuki Kaguya"), "otsutsuki-kaguya");
/// ```
pub fn slugify(name: &str) -> String {
    let ascii = deunicode::deunicode(name);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
