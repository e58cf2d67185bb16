use super::{mailbox, optional};
use crate::error::Result;

/// Free-form template data. The notification service defines its shape, so
/// values may be any JSON value: primitives, arrays or nested objects.
pub type TemplateData = serde_json::Map<String, serde_json::Value>;

/// A single email notification.
///
/// Only the recipient address is required. Optional fields left unset are
/// omitted from the request body rather than sent as `null` or `""`.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationRequest {
    recipient_email: String,
    recipient_name: Option<String>,
    app_name: Option<String>,
    template: Option<String>,
    template_data: Option<TemplateData>,
}

impl NotificationRequest {
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the recipient address is empty
    /// or not a valid email address.
    pub fn new(recipient_email: impl Into<String>) -> Result<Self> {
        Ok(Self {
            recipient_email: mailbox("recipient_email", recipient_email)?,
            recipient_name: None,
            app_name: None,
            template: None,
            template_data: None,
        })
    }

    #[must_use]
    pub fn with_recipient_name(mut self, recipient_name: impl Into<String>) -> Self {
        self.recipient_name = optional(recipient_name);
        self
    }

    /// Name of the application the notification is sent on behalf of.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = optional(app_name);
        self
    }

    /// Template content rendered by the service instead of its default
    /// welcome template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = optional(template);
        self
    }

    #[must_use]
    pub fn with_template_data(mut self, template_data: TemplateData) -> Self {
        self.template_data = (!template_data.is_empty()).then_some(template_data);
        self
    }

    #[must_use]
    pub fn recipient_email(&self) -> &str { &self.recipient_email }

    #[must_use]
    pub fn recipient_name(&self) -> Option<&str> { self.recipient_name.as_deref() }

    #[must_use]
    pub fn app_name(&self) -> Option<&str> { self.app_name.as_deref() }

    #[must_use]
    pub fn template(&self) -> Option<&str> { self.template.as_deref() }

    #[must_use]
    pub const fn template_data(&self) -> Option<&TemplateData> { self.template_data.as_ref() }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Error;

    #[test]
    fn test_only_recipient() {
        let request = NotificationRequest::new("r@example.com").unwrap();
        assert_eq!(request.recipient_email(), "r@example.com");
        assert_eq!(request.recipient_name(), None);
        assert_eq!(request.app_name(), None);
        assert_eq!(request.template(), None);
        assert_eq!(request.template_data(), None);
    }

    #[test]
    fn test_recipient_is_required() {
        for recipient in ["", "   "] {
            let err = NotificationRequest::new(recipient).unwrap_err();
            assert!(matches!(err, Error::Validation { field: "recipient_email", .. }));
        }

        let err = NotificationRequest::new("jane.example.com").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "recipient_email", .. }));
    }

    #[test]
    fn test_blank_optionals_are_absent() {
        let request = NotificationRequest::new("recipient@example.com")
            .unwrap()
            .with_recipient_name("")
            .with_app_name("  ")
            .with_template("")
            .with_template_data(TemplateData::new());

        assert_eq!(request.recipient_name(), None);
        assert_eq!(request.app_name(), None);
        assert_eq!(request.template(), None);
        assert_eq!(request.template_data(), None);
    }

    #[test]
    fn test_nested_template_data() {
        let serde_json::Value::Object(data) =
            json!({ "order": { "id": 42, "items": ["a", "b"] }, "paid": true })
        else {
            unreachable!("literal is an object")
        };

        let request = NotificationRequest::new("recipient@example.com")
            .unwrap()
            .with_recipient_name("Jane Doe")
            .with_template_data(data.clone());

        assert_eq!(request.recipient_name(), Some("Jane Doe"));
        assert_eq!(request.template_data(), Some(&data));
    }
}
