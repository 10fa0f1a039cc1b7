use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A cooperative cancellation flag shared between a host and a search.
///
/// The host keeps a clone and may set it at any time, typically from a
/// timeout or signal handler thread. The forward-checking solver polls the
/// token at the top of every recursion frame and never inside inner loops;
/// it only ever reads the flag. A cancelled search reports "no solution",
/// so a host that needs to tell cancellation from unsatisfiability checks
/// its clone of the token after the solver returns.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Irrevocable for the lifetime of the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let host_side = token.clone();
        assert!(!token.is_cancelled());

        host_side.cancel();
        assert!(token.is_cancelled());
        assert!(host_side.is_cancelled());
    }
}
