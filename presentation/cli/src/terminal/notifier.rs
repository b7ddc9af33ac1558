use business::domain::interaction::Notifier;

/// Prints notifications as single lines: successes on stdout, errors on stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✔ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {}", message);
    }
}
