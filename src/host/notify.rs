//! User-facing notifications.
//!
//! Two messages ever leave the gallery: the raw error text of a failed file
//! move, and a confirmation after a successful delete. The toast widget
//! itself belongs to the UI layer; this seam carries only the message.

/// Shows a short transient message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints notifications to the terminal — the CLI's toast.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}
