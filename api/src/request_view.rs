//! Polling owner of a [`ViewState`].
//!
//! A mounted [`RequestView`] runs one tokio task that fetches `/echo` right
//! away and then on every interval tick. Each fetch is awaited before the next
//! tick is taken, so results are applied in the order they were requested.

use std::{
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use tokio::{
    sync::Notify,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use crate::{
    domain::{
        record::RequestRecord,
        view::{View, ViewState},
    },
    EchoApi, FetchError,
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
}
impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

type UpdateHook = Arc<dyn Fn() + Send + Sync>;

struct Slot {
    state: ViewState,
    view: Arc<View>,
    mounted: bool,
}
impl Slot {
    fn new() -> Self {
        let state = ViewState::default();
        let view = Arc::new(state.render());
        Slot {
            state,
            view,
            mounted: true,
        }
    }
}

pub struct RequestView {
    slot: Arc<RwLock<Slot>>,
    refresh: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl RequestView {
    /// Starts polling. Must be called from within a tokio runtime.
    ///
    /// `on_update` runs on the poll task after every applied result; the gui
    /// uses it to schedule a repaint.
    pub fn mount<F>(api: EchoApi, options: PollOptions, on_update: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        info!(
            "polling {} every {}ms",
            api.echo_url(),
            options.interval.as_millis()
        );
        let slot = Arc::new(RwLock::new(Slot::new()));
        let refresh = Arc::new(Notify::new());
        let task = tokio::spawn(poll_loop(
            api,
            options,
            Arc::clone(&slot),
            Arc::clone(&refresh),
            Arc::new(on_update),
        ));
        RequestView {
            slot,
            refresh,
            task: Some(task),
        }
    }

    /// Polls now instead of waiting for the next tick. The interval restarts
    /// from this poll.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    pub fn is_mounted(&self) -> bool {
        read_slot(&self.slot).mounted
    }

    pub fn snapshot(&self) -> ViewState {
        read_slot(&self.slot).state.clone()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        read_slot(&self.slot).state.last_updated
    }

    /// The view built when the last poll was applied.
    pub fn render(&self) -> Arc<View> {
        Arc::clone(&read_slot(&self.slot).view)
    }

    /// Stops polling. Once this returns no poll result is applied, including
    /// one already in flight.
    pub fn unmount(&mut self) {
        if let Some(task) = self.task.take() {
            write_slot(&self.slot).mounted = false;
            task.abort();
            info!("request view unmounted");
        }
    }
}

impl Drop for RequestView {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn poll_loop(
    api: EchoApi,
    options: PollOptions,
    slot: Arc<RwLock<Slot>>,
    refresh: Arc<Notify>,
    on_update: UpdateHook,
) {
    let mut ticker = interval(options.interval.max(MIN_POLL_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                debug!("manual refresh");
                ticker.reset();
            }
        }
        let outcome = api.fetch_requests().await;
        if !apply(&slot, outcome) {
            break;
        }
        on_update();
    }
}

fn apply(slot: &RwLock<Slot>, outcome: Result<Vec<RequestRecord>, FetchError>) -> bool {
    let mut slot = write_slot(slot);
    if !slot.mounted {
        debug!("dropping poll result after unmount");
        return false;
    }
    match outcome {
        Ok(requests) => slot.state.record_success(requests),
        Err(err) => {
            warn!("poll failed: {}", err);
            slot.state.record_failure(err.to_string());
        }
    }
    slot.view = Arc::new(slot.state.render());
    true
}

fn read_slot(slot: &RwLock<Slot>) -> RwLockReadGuard<'_, Slot> {
    slot.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_slot(slot: &RwLock<Slot>) -> RwLockWriteGuard<'_, Slot> {
    slot.write().unwrap_or_else(PoisonError::into_inner)
}
