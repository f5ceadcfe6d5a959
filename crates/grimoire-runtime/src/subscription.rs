#![forbid(unsafe_code)]

//! Timer subscriptions with managed lifecycles.
//!
//! A model declares the subscriptions it wants after every update; the
//! runtime reconciles that declaration against what is running, starting
//! new subscriptions and stopping undeclared ones. Stopping is prompt
//! (condvar signal, then join), so no timer callback can outlive the
//! model that asked for it — the start-on-mount / cancel-on-unmount
//! discipline every animated panel relies on.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

/// Unique identifier for a subscription, used for reconciliation.
pub type SubId = u64;

/// A source of messages running on a background thread.
pub trait Subscription<M: Send + 'static>: Send {
    /// Identifier for deduplication. Subscriptions with the same ID are
    /// considered the same and are not restarted across updates.
    fn id(&self) -> SubId;

    /// Produce messages until the channel closes or `stop` fires.
    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal);
}

/// Cooperative stop flag a subscription polls or waits on.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        (
            Self {
                inner: inner.clone(),
            },
            StopTrigger { inner },
        )
    }

    /// Whether the stop has been requested.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        lock.lock().map(|s| *s).unwrap_or(true)
    }

    /// Block for up to `duration` or until stopped. Returns `true` if
    /// stopped. Loops to absorb spurious wakeups.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let Ok(mut stopped) = lock.lock() else {
            return true;
        };
        let start = std::time::Instant::now();
        loop {
            if *stopped {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            match cvar.wait_timeout(stopped, duration - elapsed) {
                Ok((guard, _)) => stopped = guard,
                Err(_) => return true,
            }
        }
    }
}

/// Runtime-side handle that fires the stop signal.
pub(crate) struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        if let Ok(mut stopped) = lock.lock() {
            *stopped = true;
        }
        cvar.notify_all();
    }
}

struct Running {
    id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl Running {
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        // Signal without joining; joining in drop could block teardown.
        self.trigger.stop();
    }
}

/// Owns running subscriptions and the channel they send into.
pub struct SubscriptionManager<M: Send + 'static> {
    active: Vec<Running>,
    sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
}

impl<M: Send + 'static> SubscriptionManager<M> {
    /// Create an empty manager.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            active: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Bring the running set in line with `declared`: stop undeclared
    /// subscriptions (signal + join), start new ones, leave matching IDs
    /// untouched.
    pub fn reconcile(&mut self, declared: Vec<Box<dyn Subscription<M>>>) {
        let wanted: HashSet<SubId> = declared.iter().map(|s| s.id()).collect();

        let mut kept = Vec::new();
        for running in self.active.drain(..) {
            if wanted.contains(&running.id) {
                kept.push(running);
            } else {
                tracing::debug!(sub_id = running.id, "stopping subscription");
                running.stop();
            }
        }
        self.active = kept;

        let mut live: HashSet<SubId> = self.active.iter().map(|r| r.id).collect();
        for sub in declared {
            let id = sub.id();
            if !live.insert(id) {
                continue;
            }
            tracing::debug!(sub_id = id, "starting subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();
            let thread = thread::spawn(move || sub.run(sender, signal));
            self.active.push(Running {
                id,
                trigger,
                thread: Some(thread),
            });
        }
    }

    /// Pull every message currently queued.
    pub fn drain_messages(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }

    /// Number of running subscriptions.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Stop everything, joining each thread.
    pub fn stop_all(&mut self) {
        for running in self.active.drain(..) {
            running.stop();
        }
    }
}

impl<M: Send + 'static> Default for SubscriptionManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> Drop for SubscriptionManager<M> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

// --- Built-in subscriptions ---

/// Fires a message on a fixed interval until stopped.
pub struct Every<M: Send + 'static> {
    id: SubId,
    interval: Duration,
    make_msg: Box<dyn Fn() -> M + Send + Sync>,
}

impl<M: Send + 'static> Every<M> {
    /// Create an interval subscription. The ID derives from the interval
    /// so identical declarations deduplicate across updates.
    pub fn new(interval: Duration, make_msg: impl Fn() -> M + Send + Sync + 'static) -> Self {
        let id = interval.as_nanos() as u64 ^ 0x5449_434b;
        Self::with_id(id, interval, make_msg)
    }

    /// Create an interval subscription with an explicit ID.
    pub fn with_id(
        id: SubId,
        interval: Duration,
        make_msg: impl Fn() -> M + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            interval,
            make_msg: Box::new(make_msg),
        }
    }
}

impl<M: Send + 'static> Subscription<M> for Every<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal) {
        loop {
            if stop.wait_timeout(self.interval) {
                break;
            }
            if sender.send((self.make_msg)()).is_err() {
                break;
            }
        }
    }
}

/// Test subscription: sends its queued messages immediately, then ends.
pub struct MockSubscription<M: Send + 'static> {
    id: SubId,
    messages: Vec<M>,
}

impl<M: Send + Clone + 'static> MockSubscription<M> {
    /// Create a mock sending `messages` once started.
    pub fn new(id: SubId, messages: Vec<M>) -> Self {
        Self { id, messages }
    }
}

impl<M: Send + Clone + 'static> Subscription<M> for MockSubscription<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, _stop: StopSignal) {
        for msg in &self.messages {
            if sender.send(msg.clone()).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMsg {
        Tick,
        Value(i32),
    }

    #[test]
    fn stop_signal_starts_unset() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn stop_signal_fires() {
        let (signal, trigger) = StopSignal::new();
        trigger.stop();
        assert!(signal.is_stopped());
        assert!(signal.wait_timeout(Duration::from_millis(100)));
    }

    #[test]
    fn wait_timeout_expires_when_not_stopped() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.wait_timeout(Duration::from_millis(5)));
    }

    #[test]
    fn mock_subscription_delivers_messages() {
        let mut mgr: SubscriptionManager<TestMsg> = SubscriptionManager::new();
        mgr.reconcile(vec![Box::new(MockSubscription::new(
            1,
            vec![TestMsg::Value(1), TestMsg::Value(2)],
        ))]);
        // The mock sends immediately; give its thread a moment.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(
            mgr.drain_messages(),
            vec![TestMsg::Value(1), TestMsg::Value(2)]
        );
    }

    #[test]
    fn every_ticks_until_stopped() {
        let mut mgr: SubscriptionManager<TestMsg> = SubscriptionManager::new();
        mgr.reconcile(vec![Box::new(Every::new(Duration::from_millis(10), || {
            TestMsg::Tick
        }))]);
        std::thread::sleep(Duration::from_millis(80));
        let before = mgr.drain_messages().len();
        assert!(before >= 2, "expected several ticks, got {before}");

        // Declaring nothing stops the timer; no callbacks fire afterward.
        mgr.reconcile(vec![]);
        assert_eq!(mgr.active_count(), 0);
        let _ = mgr.drain_messages();
        std::thread::sleep(Duration::from_millis(60));
        assert!(
            mgr.drain_messages().is_empty(),
            "stopped subscription kept ticking"
        );
    }

    #[test]
    fn reconcile_keeps_matching_ids() {
        let mut mgr: SubscriptionManager<TestMsg> = SubscriptionManager::new();
        let make = || {
            Box::new(Every::with_id(7, Duration::from_millis(10), || {
                TestMsg::Tick
            })) as Box<dyn Subscription<TestMsg>>
        };
        mgr.reconcile(vec![make()]);
        assert_eq!(mgr.active_count(), 1);
        mgr.reconcile(vec![make()]);
        assert_eq!(mgr.active_count(), 1);
    }

    #[test]
    fn duplicate_ids_start_once() {
        let mut mgr: SubscriptionManager<TestMsg> = SubscriptionManager::new();
        let make = || {
            Box::new(Every::with_id(9, Duration::from_millis(10), || {
                TestMsg::Tick
            })) as Box<dyn Subscription<TestMsg>>
        };
        mgr.reconcile(vec![make(), make()]);
        assert_eq!(mgr.active_count(), 1);
    }

    #[test]
    fn stop_all_halts_everything() {
        let mut mgr: SubscriptionManager<TestMsg> = SubscriptionManager::new();
        mgr.reconcile(vec![
            Box::new(Every::with_id(1, Duration::from_millis(10), || {
                TestMsg::Tick
            })),
            Box::new(Every::with_id(2, Duration::from_millis(10), || {
                TestMsg::Tick
            })),
        ]);
        assert_eq!(mgr.active_count(), 2);
        mgr.stop_all();
        assert_eq!(mgr.active_count(), 0);
        let _ = mgr.drain_messages();
        std::thread::sleep(Duration::from_millis(40));
        assert!(mgr.drain_messages().is_empty());
    }
}
