//! Contact Models

use serde::Deserialize;

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormType {
    ProductInterest,
    #[default]
    CustomOrder,
}

impl FormType {
    /// Anything other than `"product-interest"` is a custom order request.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("product-interest") => Self::ProductInterest,
            _ => Self::CustomOrder,
        }
    }
}

/// An image the shopper attached, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactAttachment {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub content_type: String,

    #[serde(default)]
    pub data: String,
}

/// Raw lead-capture submission as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub product: Option<String>,
    pub message: Option<String>,
    pub size: Option<String>,
    pub material: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachments: Vec<ContactAttachment>,
    pub form_type: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ContactAttachment>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ContactAttachment>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A submission with every required field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    /// Shopper name
    pub name: String,
    /// Shopper phone number
    pub phone: String,
    /// Shopper email, used as the reply-to address.
    pub email: String,
    /// Product or design the enquiry is about.
    pub product: String,
    /// Free-text message
    pub message: Option<String>,
    /// Requested size, for custom orders.
    pub size: Option<String>,
    /// Requested material, for custom orders.
    pub material: Option<String>,
    /// Images to attach to the notification.
    pub attachments: Vec<ContactAttachment>,
    /// Which form the submission came from.
    pub form_type: FormType,
}

impl ContactSubmission {
    /// Check the required fields, returning `None` if any is missing or empty.
    #[must_use]
    pub fn into_request(self) -> Option<ContactRequest> {
        Some(ContactRequest {
            name: required(self.name)?,
            phone: required(self.phone)?,
            email: required(self.email)?,
            product: required(self.product)?,
            message: self.message,
            size: self.size,
            material: self.material,
            attachments: self.attachments,
            form_type: FormType::from_raw(self.form_type.as_deref()),
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn form_type_defaults_to_custom_order() {
        assert_eq!(FormType::from_raw(Some("product-interest")), FormType::ProductInterest);
        assert_eq!(FormType::from_raw(Some("custom-order")), FormType::CustomOrder);
        assert_eq!(FormType::from_raw(Some("anything")), FormType::CustomOrder);
        assert_eq!(FormType::from_raw(None), FormType::CustomOrder);
    }

    #[test]
    fn submission_with_all_required_fields_is_accepted() -> TestResult {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{
                "name": "Ada",
                "phone": "555-0100",
                "email": "ada@example.org",
                "product": "Shaker Vanity",
                "formType": "product-interest",
                "attachments": [{ "name": "a.png", "type": "image/png", "data": "AAAA" }]
            }"#,
        )?;

        let request = submission.into_request();

        assert!(request.is_some(), "expected request to be accepted");

        let request = request.ok_or("missing request")?;

        assert_eq!(request.form_type, FormType::ProductInterest);
        assert_eq!(request.attachments.len(), 1);

        Ok(())
    }

    #[test]
    fn empty_required_field_is_rejected() -> TestResult {
        let submission: ContactSubmission = serde_json::from_str(
            r#"{ "name": "Ada", "phone": "", "email": "ada@example.org", "product": "Vanity" }"#,
        )?;

        assert!(submission.into_request().is_none(), "expected rejection");

        Ok(())
    }

    #[test]
    fn null_attachments_count_as_none() -> TestResult {
        let submission: ContactSubmission = serde_json::from_str(r#"{ "attachments": null }"#)?;

        assert!(submission.attachments.is_empty(), "expected no attachments");

        Ok(())
    }
}
