//! Spinner shown while a single archive is being verified.

use std::time::Duration;

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressDrawTarget;
use indicatif::ProgressStyle;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner on stderr for the archive currently under test.
///
/// Cleared automatically on drop, so the next result line starts on a clean
/// terminal row.
pub struct UnitSpinner {
    bar: ProgressBar,
}

impl UnitSpinner {
    /// Starts a spinner labelled with `message`.
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

        // Template: "⠋ verifying backup.7z.001 (3s)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);

        Self { bar }
    }

    /// Checks if we should show a spinner (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for UnitSpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
