use crate::controller::{generate_campaign, Controller};
use crate::history::Storage;
use crate::service::ContentService;
use crate::{Error, Result, Strategy};
use std::sync::Arc;
use tokio::sync::Mutex;

/// An async-friendly front end over a [`Controller`].
///
/// Remote calls run on tokio's blocking pool while the controller lock is
/// released, so a full submission and regenerations of different poster
/// slots can be in flight at the same time. Outcomes are committed through
/// the controller's ticket API, which drops regenerations that finish after
/// the displayed campaign changed.
pub struct Studio<S: Storage + Send + 'static> {
    service: Arc<dyn ContentService>,
    controller: Arc<Mutex<Controller<S>>>,
}

impl<S: Storage + Send + 'static> Clone for Studio<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            controller: self.controller.clone(),
        }
    }
}

impl<S: Storage + Send + 'static> Studio<S> {
    pub fn new(service: Arc<dyn ContentService>, controller: Controller<S>) -> Self {
        Self {
            service,
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run a full generation and commit it.
    ///
    /// The begin, call and commit steps run as one spawned task, so dropping
    /// the returned future never leaves the controller in `Generating`.
    pub async fn submit(&self, strategy: Strategy) -> Result<()> {
        let service = self.service.clone();
        let controller = self.controller.clone();
        let task = tokio::spawn(async move {
            let ticket = {
                let mut guard = controller.lock().await;
                guard.begin_submit(strategy)?
            };
            let strategy = ticket.strategy().clone();
            let outcome = tokio::task::spawn_blocking(move || generate_campaign(service.as_ref(), &strategy))
                .await
                .map_err(|e| Error::Other(format!("Generation task failed: {}", e)))
                .and_then(|res| res);
            let mut guard = controller.lock().await;
            guard.complete_submit(ticket, outcome)
        });
        task.await
            .map_err(|e| Error::Other(format!("Generation task failed: {}", e)))?
    }

    /// Regenerate poster `index`. `Ok(false)` means the result arrived
    /// after the displayed campaign changed and was dropped. Like
    /// [`Studio::submit`], the slot is always released even if the caller
    /// stops waiting.
    pub async fn regenerate(&self, index: usize) -> Result<bool> {
        let service = self.service.clone();
        let controller = self.controller.clone();
        let task = tokio::spawn(async move {
            let ticket = {
                let mut guard = controller.lock().await;
                guard.begin_regenerate(index)?
            };
            let strategy = ticket.strategy().clone();
            let outcome = tokio::task::spawn_blocking(move || service.generate_background(&strategy))
                .await
                .map_err(|e| Error::Other(format!("Regeneration task failed: {}", e)))
                .and_then(|res| res);
            let mut guard = controller.lock().await;
            guard.complete_regenerate(ticket, outcome)
        });
        task.await
            .map_err(|e| Error::Other(format!("Regeneration task failed: {}", e)))?
    }

    /// Run `f` against the controller, e.g. to read display state or reset.
    pub async fn with_controller<R>(&self, f: impl FnOnce(&mut Controller<S>) -> R) -> R {
        let mut guard = self.controller.lock().await;
        f(&mut guard)
    }
}
