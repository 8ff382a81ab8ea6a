//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Collapse catalog slugs so metric and span labels stay bounded.
fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let template = match segments.as_slice() {
        ["api", "products", _] => "/api/products/{slug}",
        ["api", "collections", _] => "/api/collections/{slug}",
        ["api", "collections", _, "products"] => "/api/collections/{slug}/products",
        _ => return format!("/{}", segments.join("/")),
    };

    template.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_slugs_are_templated() {
        assert_eq!(route_template("/api/products/lazy-susan"), "/api/products/{slug}");
        assert_eq!(
            route_template("/api/collections/kitchen-cabinets/products/"),
            "/api/collections/{slug}/products"
        );
        assert_eq!(route_template("/api/collections/closets"), "/api/collections/{slug}");
    }

    #[test]
    fn fixed_routes_pass_through() {
        assert_eq!(route_template("/api/checkout"), "/api/checkout");
        assert_eq!(route_template("/"), "/");

        let names = request_span_name("POST", "/api/contact");

        assert_eq!(names.otel_span_name, "POST /api/contact");
    }
}
