mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::StreamExt;

use common::identity;
use yoga_studio::SessionState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holder_is_anonymous() {
        let state = SessionState::new();

        assert!(!state.is_logged());
        assert!(!state.is_admin());
        assert_eq!(state.identity(), None);
    }

    #[test]
    fn test_log_in_stores_identity_and_log_out_clears_it() {
        let state = SessionState::new();
        let admin = identity(42, true);

        state.log_in(admin.clone());
        assert!(state.is_logged());
        assert!(state.is_admin());
        assert_eq!(state.identity(), Some(admin));

        state.log_out();
        assert!(!state.is_logged());
        assert!(!state.is_admin());
        assert_eq!(state.identity(), None);
    }

    #[test]
    fn test_log_in_overwrites_previous_identity() {
        let state = SessionState::new();

        state.log_in(identity(1, true));
        state.log_in(identity(2, false));

        assert_eq!(state.identity().map(|i| i.id), Some(2));
        assert!(!state.is_admin());
    }

    #[tokio::test]
    async fn test_stream_replays_current_flag_to_late_subscribers() {
        let state = SessionState::new();
        state.log_in(identity(42, true));

        let mut late = Box::pin(state.is_logged_stream());
        assert_eq!(late.next().await, Some(true));

        state.log_out();
        let mut later = Box::pin(state.is_logged_stream());
        assert_eq!(later.next().await, Some(false));
        assert_eq!(late.next().await, Some(false));
    }

    #[tokio::test]
    async fn test_stream_emits_each_change() {
        let state = SessionState::new();
        let mut stream = Box::pin(state.is_logged_stream());

        assert_eq!(stream.next().await, Some(false));

        state.log_in(identity(1, false));
        assert_eq!(stream.next().await, Some(true));

        state.log_out();
        assert_eq!(stream.next().await, Some(false));
    }

    #[tokio::test]
    async fn test_stream_waits_for_a_change_after_replay() {
        let state = SessionState::new();
        let mut stream = Box::pin(state.is_logged_stream());
        assert_eq!(stream.next().await, Some(false));

        let pending = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
        assert!(pending.is_err(), "no value expected without a state change");
    }

    #[tokio::test]
    async fn test_stream_ends_when_holder_is_dropped() {
        let state = SessionState::new();
        let mut stream = Box::pin(state.is_logged_stream());
        assert_eq!(stream.next().await, Some(false));

        drop(state);
        assert_eq!(stream.next().await, None);
    }

    #[test]
    fn test_observer_is_notified_synchronously() {
        let state = SessionState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let _subscription = state.subscribe(move |logged| sink.lock().unwrap().push(logged));

        state.log_in(identity(1, false));
        assert_eq!(*seen.lock().unwrap(), vec![false, true]);

        state.log_out();
        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
    }

    #[test]
    fn test_observer_attaching_after_login_sees_true_first() {
        let state = SessionState::new();
        state.log_in(identity(1, false));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = state.subscribe(move |logged| sink.lock().unwrap().push(logged));

        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_dropping_subscription_stops_notifications() {
        let state = SessionState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let subscription = state.subscribe(move |logged| sink.lock().unwrap().push(logged));
        drop(subscription);

        state.log_in(identity(1, false));
        assert_eq!(*seen.lock().unwrap(), vec![false]);
    }

    #[test]
    fn test_observer_may_log_out_from_inside_a_notification() {
        let state = Arc::new(SessionState::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let holder = Arc::downgrade(&state);
        let _subscription = state.subscribe(move |logged| {
            sink.lock().unwrap().push(logged);
            if logged {
                if let Some(state) = holder.upgrade() {
                    state.log_out();
                }
            }
        });

        state.log_in(identity(1, false));

        assert!(!state.is_logged());
        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
    }

    #[test]
    fn test_observer_may_subscribe_and_unsubscribe_while_notified() {
        let state = Arc::new(SessionState::new());
        let nested_seen = Arc::new(Mutex::new(Vec::new()));
        let own: Arc<Mutex<Option<yoga_studio::Subscription>>> = Arc::new(Mutex::new(None));
        let nested: Arc<Mutex<Vec<yoga_studio::Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let holder = Arc::downgrade(&state);
        let own_slot = own.clone();
        let nested_slot = nested.clone();
        let sink = nested_seen.clone();
        let subscription = state.subscribe(move |logged| {
            if !logged {
                return;
            }
            if let Some(state) = holder.upgrade() {
                let sink = sink.clone();
                let inner = state.subscribe(move |logged| sink.lock().unwrap().push(logged));
                nested_slot.lock().unwrap().push(inner);
            }
            own_slot.lock().unwrap().take();
        });
        *own.lock().unwrap() = Some(subscription);

        state.log_in(identity(1, false));
        assert!(own.lock().unwrap().is_none());
        assert_eq!(*nested_seen.lock().unwrap(), vec![true]);

        // the outer observer is gone; only the nested one reacts
        state.log_out();
        state.log_in(identity(1, false));
        assert_eq!(nested.lock().unwrap().len(), 1);
        assert_eq!(*nested_seen.lock().unwrap(), vec![true, false, true]);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let first = SessionState::new();
        let second = SessionState::new();

        first.log_in(identity(1, true));

        assert!(first.is_logged());
        assert!(!second.is_logged());
    }
}
