//! Notification sink: classified, fire-and-forget error reporting.
//!
//! Two channels exist. [`Channel::General`] carries file access problems and
//! phase aborts; [`Channel::Calculation`] carries per-expression failures.
//! Each channel has its own ordered list of listeners, so the two can be
//! wired independently (console on one, an answers-file marker on the other).

pub mod console;
pub mod log;
pub mod marker;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use console::ConsoleListener;
pub use log::LogListener;
pub use marker::AnswerMarker;

/// Which stream a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// File access failures and phase aborts.
    General,
    /// Expression evaluation failures.
    Calculation,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::General => write!(f, "general"),
            Channel::Calculation => write!(f, "calculation"),
        }
    }
}

/// A subscriber on one channel.
pub trait Listener {
    fn notify(&mut self, channel: Channel, message: &str);
}

impl<F> Listener for F
where
    F: FnMut(Channel, &str),
{
    fn notify(&mut self, channel: Channel, message: &str) {
        self(channel, message)
    }
}

/// Reporting interface with one method per channel.
pub trait Notifier {
    fn general(&mut self, message: &str);
    fn calculation(&mut self, message: &str);
}

/// Registry of listeners per channel.
///
/// Messages are delivered to every listener of the channel in registration
/// order. A channel with no listeners drops its messages.
#[derive(Default)]
pub struct Notifications {
    general: Vec<Box<dyn Listener>>,
    calculation: Vec<Box<dyn Listener>>,
    general_sent: usize,
    calculation_sent: usize,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` to `channel` after any already registered.
    pub fn subscribe(&mut self, channel: Channel, listener: impl Listener + 'static) -> &mut Self {
        self.listeners_mut(channel).push(Box::new(listener));
        self
    }

    /// Attach an already boxed listener (as built from configuration).
    pub fn subscribe_boxed(&mut self, channel: Channel, listener: Box<dyn Listener>) -> &mut Self {
        self.listeners_mut(channel).push(listener);
        self
    }

    /// Number of listeners on `channel`.
    pub fn listener_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::General => self.general.len(),
            Channel::Calculation => self.calculation.len(),
        }
    }

    /// Number of messages sent on `channel` so far, delivered or not.
    pub fn sent(&self, channel: Channel) -> usize {
        match channel {
            Channel::General => self.general_sent,
            Channel::Calculation => self.calculation_sent,
        }
    }

    /// Deliver `message` to every listener on `channel`.
    pub fn notify(&mut self, channel: Channel, message: &str) {
        match channel {
            Channel::General => self.general_sent += 1,
            Channel::Calculation => self.calculation_sent += 1,
        }
        for listener in self.listeners_mut(channel).iter_mut() {
            listener.notify(channel, message);
        }
    }

    fn listeners_mut(&mut self, channel: Channel) -> &mut Vec<Box<dyn Listener>> {
        match channel {
            Channel::General => &mut self.general,
            Channel::Calculation => &mut self.calculation,
        }
    }
}

impl Notifier for Notifications {
    fn general(&mut self, message: &str) {
        self.notify(Channel::General, message);
    }

    fn calculation(&mut self, message: &str) {
        self.notify(Channel::Calculation, message);
    }
}

impl fmt::Debug for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifications")
            .field("general", &self.general.len())
            .field("calculation", &self.calculation.len())
            .finish()
    }
}

/// Built-in listener kinds, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListenerKind {
    /// Colored line on stderr.
    Console,
    /// `tracing` warning event.
    Log,
    /// Literal marker line appended to the answers file.
    AnswerMarker,
}

impl ListenerKind {
    /// Construct the listener. `answers` and `marker` are only used by
    /// [`ListenerKind::AnswerMarker`].
    pub fn build(self, answers: &Path, marker: &str) -> Box<dyn Listener> {
        match self {
            ListenerKind::Console => Box::new(ConsoleListener),
            ListenerKind::Log => Box::new(LogListener),
            ListenerKind::AnswerMarker => Box::new(AnswerMarker::new(answers, marker)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder(log: Log, tag: &'static str) -> impl Listener + 'static {
        move |channel: Channel, message: &str| {
            log.borrow_mut().push(format!("{tag}:{channel}:{message}"));
        }
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let log: Log = Rc::default();
        let mut notifications = Notifications::new();
        notifications
            .subscribe(Channel::Calculation, recorder(Rc::clone(&log), "first"))
            .subscribe(Channel::Calculation, recorder(Rc::clone(&log), "second"));

        notifications.calculation("division by zero");

        assert_eq!(
            *log.borrow(),
            vec![
                "first:calculation:division by zero",
                "second:calculation:division by zero",
            ]
        );
    }

    #[test]
    fn channels_are_independent() {
        let log: Log = Rc::default();
        let mut notifications = Notifications::new();
        notifications.subscribe(Channel::General, recorder(Rc::clone(&log), "io"));

        notifications.calculation("ignored");
        notifications.general("file not found");

        assert_eq!(*log.borrow(), vec!["io:general:file not found"]);
        assert_eq!(notifications.sent(Channel::Calculation), 1);
        assert_eq!(notifications.sent(Channel::General), 1);
    }

    #[test]
    fn no_listeners_is_fine() {
        let mut notifications = Notifications::new();
        notifications.general("nobody hears this");
        assert_eq!(notifications.listener_count(Channel::General), 0);
        assert_eq!(notifications.sent(Channel::General), 1);
    }

    #[test]
    fn listener_kind_parses_from_config_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kinds: Vec<ListenerKind>,
        }
        let w: Wrapper = toml::from_str(r#"kinds = ["console", "log", "answer-marker"]"#).unwrap();
        assert_eq!(
            w.kinds,
            vec![
                ListenerKind::Console,
                ListenerKind::Log,
                ListenerKind::AnswerMarker
            ]
        );
    }

    #[test]
    fn listener_kind_builds_boxed_listeners() {
        let dir = tempfile::tempdir().unwrap();
        let answers = dir.path().join("answers.txt");
        let mut notifications = Notifications::new();
        notifications.subscribe_boxed(
            Channel::Calculation,
            ListenerKind::AnswerMarker.build(&answers, "ERROR"),
        );
        notifications.calculation("line 1: division by zero");
        assert_eq!(std::fs::read_to_string(&answers).unwrap(), "ERROR\n");
    }
}
