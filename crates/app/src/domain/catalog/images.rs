//! Bundled product imagery that takes precedence over stored image URLs.

/// Static image shipped with the site for `slug`, if there is one.
pub(crate) fn static_image_for(slug: &str) -> Option<&'static str> {
    match slug {
        "kitchen-cabinets-custom" => Some("/cabinet.png"),
        "quartz-countertops" => Some("/quartz.png"),
        "closets-wardrobes-custom" => Some("/closet.png"),
        "bathroom-vanities" => Some("/vanity.png"),
        "kitchen-sinks" => Some("/sink.png"),
        "faucets" => Some("/faucet.png"),
        "kitchen-chimneys-range-hoods" => Some("/hood.png"),
        "renovation-packages" => Some("/package.png"),
        _ => None,
    }
}

/// Resolve the image URL served for a product.
pub(crate) fn resolve_image_url(slug: &str, stored: Option<String>) -> Option<String> {
    static_image_for(slug).map(str::to_owned).or(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_image_overrides_stored_url() {
        let url = resolve_image_url("faucets", Some("https://cdn.example.com/f.jpg".to_owned()));

        assert_eq!(url.as_deref(), Some("/faucet.png"));
    }

    #[test]
    fn stored_url_kept_for_unknown_slug() {
        let url = resolve_image_url("vanity-a", Some("https://cdn.example.com/v.jpg".to_owned()));

        assert_eq!(url.as_deref(), Some("https://cdn.example.com/v.jpg"));
    }

    #[test]
    fn no_image_when_neither_source_has_one() {
        assert_eq!(resolve_image_url("vanity-a", None), None);
    }
}
