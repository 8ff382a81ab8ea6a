//! Notification rendering.

use crate::domain::contact::models::{ContactRequest, FormType};

const LABEL_STYLE: &str =
    "padding: 12px; border-bottom: 1px solid #eee; font-weight: bold; color: #666;";
const VALUE_STYLE: &str = "padding: 12px; border-bottom: 1px solid #eee; color: #333;";

const OMITTED_VALUE: &str = "N/A";
const DEFAULT_MESSAGE: &str = "No additional message";

/// Subject line for the shop inbox.
#[must_use]
pub fn subject(request: &ContactRequest) -> String {
    match request.form_type {
        FormType::ProductInterest => {
            format!("Product Interest: {} from {}", request.product, request.name)
        }
        FormType::CustomOrder => format!("Custom Order Request from {}", request.name),
    }
}

/// HTML body for the shop inbox. All submitted text is escaped.
#[must_use]
pub fn html(request: &ContactRequest, from_name: &str) -> String {
    let (heading, product_label) = match request.form_type {
        FormType::ProductInterest => ("New Product Interest", "Product:"),
        FormType::CustomOrder => ("New Custom Order Request", "Collection:"),
    };

    let name = escape_html(&request.name);
    let phone = escape_html(&request.phone);
    let email = escape_html(&request.email);
    let product = escape_html(&request.product);

    let mut out = String::with_capacity(2048);

    out.push_str(r#"<div style="font-family: Arial, sans-serif; max-width: 600px;">"#);
    out.push_str(&format!(
        r#"<h2 style="color: #1F3A5F; border-bottom: 2px solid #E3A008; padding-bottom: 10px;">{heading}</h2>"#
    ));
    out.push_str(r#"<table style="border-collapse: collapse; width: 100%;">"#);

    out.push_str(&format!(
        r#"<tr><td style="{LABEL_STYLE} width: 140px;">Name:</td><td style="{VALUE_STYLE}">{name}</td></tr>"#
    ));
    out.push_str(&format!(
        r#"<tr><td style="{LABEL_STYLE}">Phone:</td><td style="{VALUE_STYLE}"><a href="tel:{phone}" style="color: #1F3A5F;">{phone}</a></td></tr>"#
    ));
    out.push_str(&format!(
        r#"<tr><td style="{LABEL_STYLE}">Email:</td><td style="{VALUE_STYLE}"><a href="mailto:{email}" style="color: #1F3A5F;">{email}</a></td></tr>"#
    ));
    out.push_str(&format!(
        r#"<tr><td style="{LABEL_STYLE}">{product_label}</td><td style="{VALUE_STYLE} font-weight: 500;">{product}</td></tr>"#
    ));

    if let Some(size) = optional(request.size.as_deref()) {
        push_row(&mut out, "Size/Dimensions:", &escape_html(size));
    }

    if let Some(material) = optional(request.material.as_deref()) {
        push_row(&mut out, "Material:", &escape_html(material));
    }

    if let Some(message) = optional(request.message.as_deref()).filter(|m| *m != DEFAULT_MESSAGE) {
        let message = escape_html(message).replace('\n', "<br>");
        out.push_str(&format!(
            r#"<tr><td style="{LABEL_STYLE} vertical-align: top;">Message:</td><td style="{VALUE_STYLE}">{message}</td></tr>"#
        ));
    }

    out.push_str("</table>");

    let count = request.attachments.len();
    if count > 0 {
        let plural = if count > 1 { "s" } else { "" };
        out.push_str(&format!(
            r#"<p style="margin-top: 20px; padding: 10px; background: #f5f5f5; border-radius: 5px; color: #666;"><strong>{count} image{plural} attached</strong> (rough design{plural})</p>"#
        ));
    }

    out.push_str(&format!(
        r#"<p style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; color: #999; font-size: 12px;">This email was sent from the {} website contact form.</p>"#,
        escape_html(from_name)
    ));
    out.push_str("</div>");

    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        r#"<tr><td style="{LABEL_STYLE}">{label}</td><td style="{VALUE_STYLE}">{value}</td></tr>"#
    ));
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty() && *value != OMITTED_VALUE)
}

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }

    escaped
}
