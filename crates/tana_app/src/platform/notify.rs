use clip_logging::{clip_info, clip_warn};

/// Shows the short success/failure message after a clip.
pub trait Notifier {
    fn notify(&mut self, message: &str, is_error: bool);
}

/// Prints notifications on stderr so stdout carries only the outline.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str, is_error: bool) {
        if is_error {
            clip_warn!("Notification: {}", message);
            eprintln!("tana-paste: error: {message}");
        } else {
            clip_info!("Notification: {}", message);
            eprintln!("tana-paste: {message}");
        }
    }
}
