//! URL slug generation for product names.
//!
//! Convention: lowercase ASCII alphanumeric runs joined by single hyphens.
//! Products are looked up by slug everywhere outside the admin API, and the
//! column carries a unique constraint.

/// Generate a slug from a product name.
///
/// ```
/// use hemline_core::slug::slugify;
///
/// assert_eq!(slugify("Oxford Shirt"), "oxford-shirt");
/// assert_eq!(slugify("  Slim-Fit  Joggers (v2) "), "slim-fit-joggers-v2");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
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
