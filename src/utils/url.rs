// src/utils/url.rs

//! URL manipulation utilities.

/// Resolve an image `src` attribute against the site origin.
///
/// Absolute http(s) URLs are returned as-is and root-relative paths are
/// prefixed with `origin`. Anything else (relative paths, protocol-relative
/// and `data:` URLs) is rejected.
///
/// # Examples
/// ```
/// use lddb_lookup::utils::url::resolve_image_src;
///
/// assert_eq!(
///     resolve_image_src(Some("https://www.lddb.com"), "/cover/1.jpg"),
///     Some("https://www.lddb.com/cover/1.jpg".to_string())
/// );
/// ```
pub fn resolve_image_src(origin: Option<&str>, src: &str) -> Option<String> {
    let src = src.trim();

    // Already absolute
    if src.starts_with("http://") || src.starts_with("https://") {
        return Some(src.to_string());
    }

    // Root-relative path - combine with site origin
    if src.starts_with('/') && !src.starts_with("//") {
        let origin = origin?.trim_end_matches('/');
        return Some(format!("{origin}{src}"));
    }

    None
}
