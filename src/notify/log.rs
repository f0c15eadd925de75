//! Log listener: forwards messages to `tracing`.

use super::{Channel, Listener};

/// Emits a `warn` level event per message, tagged with the channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

impl Listener for LogListener {
    fn notify(&mut self, channel: Channel, message: &str) {
        tracing::warn!(%channel, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::notify::{ListenerKind, Notifications, Notifier};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emits_warning_tagged_with_channel() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let mut notifications = Notifications::new();
        notifications.subscribe_boxed(
            Channel::General,
            ListenerKind::Log.build(std::path::Path::new("answers.txt"), "ERROR"),
        );
        tracing::subscriber::with_default(subscriber, || {
            notifications.general("cannot access expressions.txt");
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "got: {output}");
        assert!(output.contains("channel=general"), "got: {output}");
        assert!(output.contains("cannot access expressions.txt"), "got: {output}");
    }

    #[test]
    fn without_subscriber_is_silent() {
        let mut listener = LogListener;
        listener.notify(Channel::Calculation, "line 1: division by zero");
    }
}
