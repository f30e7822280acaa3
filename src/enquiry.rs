//! Enquiry form: email validation and the simulated submission flow.
//!
//! DESIGN
//! ======
//! A submission is one async task of awaited delays:
//! busy -> redirecting -> messaging handoff -> restore. The task is wrapped in
//! [`futures::future::Abortable`]; starting a new submission aborts the stale
//! one through [`SubmissionSlot`], so two timer chains never race on the same
//! button. The button's original label is captured when no submission is in
//! flight, which keeps a superseding run from "restoring" the busy label.
//!
//! On a mid-sequence failure the button is restored before the generic alert
//! is shown, so it is never left disabled.

#[cfg(test)]
#[path = "enquiry_test.rs"]
mod enquiry_test;

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration};

use crate::config::{EnquiryConfig, MessagingConfig};
use crate::consts::{GENERIC_FAILURE_ALERT, SUBMIT_BUSY_LABEL, SUBMIT_REDIRECT_LABEL, SUBMIT_SUCCESS_BACKGROUND};
use crate::deep_link;
use crate::error::ControllerError;
use crate::ports::Navigator;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a `.` in the
/// domain with at least one character on each side.
///
/// Whitespace is the set a browser regex `\s` matches, see
/// [`is_pattern_whitespace`].
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_pattern_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Characters matched by `\s` in a browser regex: whitespace plus line
/// terminators. Unlike [`char::is_whitespace`] this includes U+FEFF and
/// excludes U+0085.
#[must_use]
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Validate an optional email field. Absent or empty values are accepted.
pub fn validate_email(value: Option<&str>) -> Result<(), ControllerError> {
    match value {
        Some(email) if !email.is_empty() && !is_valid_email(email) => Err(ControllerError::InvalidEmail),
        _ => Ok(()),
    }
}

/// The submit button and email field the flow drives.
pub trait EnquiryView {
    /// Disable the button and show the busy label.
    fn show_busy(&self, label: &str) -> Result<(), ControllerError>;
    fn show_redirecting(&self, label: &str, background: &str) -> Result<(), ControllerError>;
    /// Re-enable the button, restore `label`, and clear the background.
    fn restore(&self, label: &str) -> Result<(), ControllerError>;
    fn clear_email(&self) -> Result<(), ControllerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed,
    Failed,
}

/// Run the busy/redirect/handoff/restore sequence.
///
/// `sleep` yields a future that resolves after the given number of
/// milliseconds.
pub async fn run_submission<V, N, S, F>(
    view: &V,
    navigator: &N,
    messaging: &MessagingConfig,
    timing: &EnquiryConfig,
    original_label: &str,
    sleep: S,
) -> Result<(), ControllerError>
where
    V: EnquiryView,
    N: Navigator,
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    view.show_busy(SUBMIT_BUSY_LABEL)?;
    sleep(timing.busy_ms).await;

    view.show_redirecting(SUBMIT_REDIRECT_LABEL, SUBMIT_SUCCESS_BACKGROUND)?;
    sleep(timing.redirect_ms).await;

    deep_link::hand_off(navigator, messaging);
    sleep(timing.reset_ms).await;

    view.restore(original_label)?;
    view.clear_email()
}

/// [`run_submission`] with the feature-boundary error handling applied.
pub async fn submit<V, N, S, F>(
    view: &V,
    navigator: &N,
    messaging: &MessagingConfig,
    timing: &EnquiryConfig,
    original_label: &str,
    sleep: S,
) -> SubmissionOutcome
where
    V: EnquiryView,
    N: Navigator,
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    match run_submission(view, navigator, messaging, timing, original_label, sleep).await {
        Ok(()) => SubmissionOutcome::Completed,
        Err(e) => {
            log::error!("error in form submission: {e}");
            if let Err(restore_err) = view.restore(original_label) {
                log::error!("could not restore submit button: {restore_err}");
            }
            navigator.alert(GENERIC_FAILURE_ALERT);
            SubmissionOutcome::Failed
        }
    }
}

/// Handle for one started submission.
#[derive(Debug)]
pub struct SubmissionTicket {
    pub id: u64,
    pub original_label: String,
    pub registration: AbortRegistration,
}

/// Tracks the in-flight submission so a new one can supersede it.
#[derive(Debug, Default)]
pub struct SubmissionSlot {
    next_id: u64,
    current: Option<(u64, AbortHandle)>,
    original_label: String,
}

impl SubmissionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission, aborting any stale one.
    ///
    /// `current_label` is the button text right now; it becomes the restore
    /// label only when nothing is in flight.
    pub fn begin(&mut self, current_label: &str) -> SubmissionTicket {
        match self.current.take() {
            Some((stale_id, handle)) => {
                log::debug!("superseding submission {stale_id}");
                handle.abort();
            }
            None => current_label.clone_into(&mut self.original_label),
        }
        self.next_id += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some((self.next_id, handle));
        SubmissionTicket { id: self.next_id, original_label: self.original_label.clone(), registration }
    }

    /// Mark submission `id` as done. Ignored if it has been superseded.
    pub fn finish(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            self.current = None;
        }
    }

    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

/// What a submit event should do, decided before any view change.
#[derive(Debug)]
pub enum Prepared {
    /// The form has no submit button; nothing runs.
    NoButton,
    /// The email field holds an invalid address; the slot is left untouched.
    Rejected,
    Started(SubmissionTicket),
}

/// Decide a submit event.
///
/// `button_label` is the submit button's current text, or `None` when the
/// form has no button. The button check comes first, then the email check;
/// only a submission that passes both claims the slot.
pub fn prepare(button_label: Option<&str>, email: Option<&str>, slot: &mut SubmissionSlot) -> Prepared {
    let Some(label) = button_label else {
        return Prepared::NoButton;
    };
    if validate_email(email).is_err() {
        return Prepared::Rejected;
    }
    Prepared::Started(slot.begin(label))
}
