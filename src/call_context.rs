use log::info;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Scoped logger of one computation. A labelled context logs its start and,
/// when dropped, how long it took. The default context is anonymous and only
/// forwards messages.
pub struct CallContext {
    label: String,
    start_time: Instant,
}

impl Default for CallContext {
    fn default() -> CallContext {
        CallContext {
            label: String::new(),
            start_time: Instant::now(),
        }
    }
}

impl CallContext {
    pub fn new(label: &str) -> Self {
        let context = CallContext {
            label: label.to_string(),
            start_time: Instant::now(),
        };
        info!("-> {context}");
        context
    }

    pub fn log_message(&self, message: &str) {
        if self.label.is_empty() {
            info!("{message}");
        } else {
            info!("   {self} {message}");
        }
    }
}

impl Drop for CallContext {
    fn drop(&mut self) {
        if self.label.is_empty() {
            return;
        }
        let call_duration = self.start_time.elapsed().as_millis();
        info!("<- {self} (took {call_duration} ms)");
    }
}

impl Display for CallContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label)
    }
}
