use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Stop request shared between the SIGINT handler and the polling loop.
#[derive(Clone, Default)]
pub struct StopFlag {
    stopped: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag when the process receives SIGINT.
    ///
    /// Can be installed once per process.
    pub fn install_sigint_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.request_stop())
    }

    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn keep_running(&self) -> bool {
        !self.stopped.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flag_keeps_running() {
        assert!(StopFlag::new().keep_running());
    }

    #[test]
    fn stop_request_is_seen_through_clones() {
        let flag = StopFlag::new();
        let handler_side = flag.clone();

        handler_side.request_stop();
        assert!(!flag.keep_running());
    }
}
