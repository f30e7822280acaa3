//! Window navigation and the enquiry form's button/field view.

use web_sys::{HtmlButtonElement, HtmlInputElement};

use crate::enquiry::EnquiryView;
use crate::error::ControllerError;
use crate::ports::Navigator;

/// `window.open` / `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_new_context(&self, url: &str) -> Result<(), ControllerError> {
        let failed = |reason: String| ControllerError::OpenFailed { url: url.to_owned(), reason };
        let window = web_sys::window().ok_or_else(|| failed("no window".to_owned()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(failed("blocked by the browser".to_owned())),
            Err(e) => Err(failed(format!("{e:?}"))),
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window for alert: {message}");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
}

/// Submit button plus the optional email input of one enquiry form.
pub struct FormView {
    pub button: HtmlButtonElement,
    pub email: Option<HtmlInputElement>,
}

impl EnquiryView for FormView {
    fn show_busy(&self, label: &str) -> Result<(), ControllerError> {
        self.button
            .set_inner_html(&format!(r#"<span class="loading"></span> {label}"#));
        self.button.set_disabled(true);
        Ok(())
    }

    fn show_redirecting(&self, label: &str, background: &str) -> Result<(), ControllerError> {
        self.button.set_text_content(Some(label));
        self.button.style().set_property("background", background)?;
        Ok(())
    }

    fn restore(&self, label: &str) -> Result<(), ControllerError> {
        self.button.set_text_content(Some(label));
        self.button.set_disabled(false);
        self.button.style().remove_property("background")?;
        Ok(())
    }

    fn clear_email(&self) -> Result<(), ControllerError> {
        if let Some(email) = &self.email {
            email.set_value("");
        }
        Ok(())
    }
}
