use crate::checkout::{CheckoutRemindersReport, SendCheckoutRemindersUseCase};
use crate::shared::usecase::execute;
use concierge_infra::ConciergeContext;
use std::sync::Arc;
use tokio::{
    sync::{oneshot, OwnedSemaphorePermit, Semaphore},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{error, info, warn};

/// Allows at most one checkout reminder sweep at a time
#[derive(Clone)]
pub struct SweepGuard {
    permits: Arc<Semaphore>,
}

impl SweepGuard {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// `None` while another sweep holds the guard
    pub fn try_begin(&self) -> Option<OwnedSemaphorePermit> {
        self.permits.clone().try_acquire_owned().ok()
    }
}

impl Default for SweepGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one sweep and logs the outcome. Errors stop here.
pub async fn run_sweep(ctx: &ConciergeContext) -> Option<CheckoutRemindersReport> {
    match execute(SendCheckoutRemindersUseCase {}, ctx).await {
        Ok(report) => {
            info!(
                sent = report.sent,
                failed = report.failed,
                "Checkout reminder sweep finished"
            );
            Some(report)
        }
        Err(e) => {
            error!("Checkout reminder sweep failed: {:?}", e);
            None
        }
    }
}

/// Owns the timer driving the checkout reminder sweep.
///
/// The first sweep runs right after `start`, then one every
/// `checkout_reminder_interval`. A tick arriving while the previous sweep is
/// still running is skipped.
pub struct CheckoutReminderScheduler {
    ctx: ConciergeContext,
    guard: SweepGuard,
    running: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl CheckoutReminderScheduler {
    pub fn new(ctx: ConciergeContext) -> Self {
        Self {
            ctx,
            guard: SweepGuard::new(),
            running: None,
        }
    }

    pub fn guard(&self) -> SweepGuard {
        self.guard.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Must be called from within the actix runtime. Does nothing if already started.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let ctx = self.ctx.clone();
        let guard = self.guard.clone();
        let period = ctx.config.checkout_reminder_interval;

        let handle = actix_web::rt::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => spawn_sweep(&ctx, &guard),
                    _ = &mut shutdown_rx => break,
                }
            }
            info!("Checkout reminder scheduler stopped");
        });
        info!(interval_secs = period.as_secs(), "Checkout reminder scheduler started");
        self.running = Some((shutdown_tx, handle));
    }

    /// Stops the timer. A sweep already in flight is left to finish.
    pub async fn stop(&mut self) {
        if let Some((shutdown_tx, handle)) = self.running.take() {
            let _ = shutdown_tx.send(());
            if let Err(e) = handle.await {
                error!("Checkout reminder scheduler did not shut down cleanly: {:?}", e);
            }
        }
    }
}

fn spawn_sweep(ctx: &ConciergeContext, guard: &SweepGuard) {
    let permit = match guard.try_begin() {
        Some(permit) => permit,
        None => {
            warn!("Previous checkout reminder sweep is still running, skipping this tick");
            return;
        }
    };
    let ctx = ctx.clone();
    actix_web::rt::spawn(async move {
        run_sweep(&ctx).await;
        drop(permit);
    });
}
