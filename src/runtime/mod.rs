//! Time, timers, and identifiers.
//!
//! DESIGN
//! ======
//! Every side effect the state machine needs from its environment goes through
//! a small trait here. The browser build plugs in `js_sys` time and
//! `gloo-timers`; native builds and tests drive virtual time by hand.

pub mod clock;
pub mod scheduler;

/// Generate a fresh opaque identifier for inventory items and chat messages.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::new_id;

    #[test]
    fn new_id_does_not_repeat_in_tight_loop() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
