//! Cached profile projection kept fresh by `ProfileChanged` broadcasts.
//!
//! Each mounted `ProfileSync` owns its copy of the identity slice and a
//! subscription on the event bus. A broadcast queues one re-fetch per mounted
//! instance; the fetch itself runs on a background task because the bus
//! delivers synchronously. Fetch failures are logged and otherwise ignored,
//! leaving the previous values on display.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;

use crate::api::ApiGateway;
use crate::error::ClientError;
use crate::events::{EventBus, ProfileChanged, Subscription};
use crate::models::{Profile, ProfileUpdate, ProfileView};

/// Where profile data comes from
#[async_trait]
pub trait ProfileSource: Send + Sync + 'static {
    async fn fetch_profile(&self) -> Result<Profile, ClientError>;
}

#[async_trait]
impl ProfileSource for ApiGateway {
    async fn fetch_profile(&self) -> Result<Profile, ClientError> {
        self.get_profile().await
    }
}

pub struct ProfileSync {
    view: Arc<RwLock<Option<ProfileView>>>,
    fetches: Arc<AtomicUsize>,
    fetched: Arc<Notify>,
    worker: JoinHandle<()>,
    _subscription: Subscription<ProfileChanged>,
}

impl ProfileSync {
    /// Fetch once, then keep listening for invalidations until dropped.
    /// Must be called inside a tokio runtime.
    pub async fn mount<S: ProfileSource>(source: Arc<S>, bus: &EventBus<ProfileChanged>) -> Self {
        let view = Arc::new(RwLock::new(None));
        let fetches = Arc::new(AtomicUsize::new(0));
        let fetched = Arc::new(Notify::new());

        refresh(source.as_ref(), &view, &fetches, &fetched).await;

        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let subscription = bus.subscribe(move |_: &ProfileChanged| {
            // Receiver only goes away after the subscription is dropped
            let _ = tx.send(());
        });

        let worker = {
            let view = view.clone();
            let fetches = fetches.clone();
            let fetched = fetched.clone();
            tokio::spawn(async move {
                while rx.recv().await.is_some() {
                    refresh(source.as_ref(), &view, &fetches, &fetched).await;
                }
            })
        };

        Self {
            view,
            fetches,
            fetched,
            worker,
            _subscription: subscription,
        }
    }

    /// Last successfully fetched identity, if any fetch has succeeded
    pub fn view(&self) -> Option<ProfileView> {
        match self.view.read() {
            Ok(view) => view.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Completed fetch attempts so far, successful or not
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` fetches have completed. False on timeout.
    pub async fn wait_for_fetches(&self, count: usize, within: Duration) -> bool {
        tokio::time::timeout(within, async {
            loop {
                let notified = self.fetched.notified();
                if self.fetch_count() >= count {
                    break;
                }
                notified.await;
            }
        })
        .await
        .is_ok()
    }
}

impl Drop for ProfileSync {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

async fn refresh<S: ProfileSource + ?Sized>(
    source: &S,
    view: &RwLock<Option<ProfileView>>,
    fetches: &AtomicUsize,
    fetched: &Notify,
) {
    match source.fetch_profile().await {
        Ok(profile) => {
            let fresh = ProfileView::from(&profile);
            match view.write() {
                Ok(mut slot) => *slot = Some(fresh),
                Err(poisoned) => *poisoned.into_inner() = Some(fresh),
            }
        }
        Err(e) => tracing::debug!("Profile refresh failed, keeping cached values: {}", e),
    }

    fetches.fetch_add(1, Ordering::SeqCst);
    fetched.notify_waiters();
}

/// Update the profile and, on success, tell every mounted `ProfileSync`
pub async fn save_profile(
    gateway: &ApiGateway,
    bus: &EventBus<ProfileChanged>,
    update: &ProfileUpdate,
) -> Result<Profile, ClientError> {
    let profile = gateway.update_profile(update).await?;
    let notified = bus.publish(&ProfileChanged);
    tracing::debug!("Profile updated, {} view(s) invalidated", notified);
    Ok(profile)
}
