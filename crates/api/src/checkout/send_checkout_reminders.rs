use crate::error::ConciergeError;
use crate::job_schedulers::SweepGuard;
use crate::shared::{
    auth::protect_staff_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use concierge_api_structs::run_checkout_reminders::APIResponse;
use concierge_infra::ConciergeContext;
use tracing::{error, info, warn};

pub type CheckoutRemindersReport = APIResponse;

pub async fn send_checkout_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<ConciergeContext>,
    guard: web::Data<SweepGuard>,
) -> Result<HttpResponse, ConciergeError> {
    let user = protect_staff_route(&http_req, &ctx).await?;
    let _permit = guard.try_begin().ok_or_else(|| {
        ConciergeError::Conflict("A checkout reminder sweep is already running".into())
    })?;
    info!(user_id = %user.id, "Checkout reminder sweep triggered manually");

    execute(SendCheckoutRemindersUseCase {}, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(report))
        .map_err(ConciergeError::from)
}

/// One sweep: reminds every unreminded reservation checking out within the
/// configured window from now.
///
/// A reservation is only marked as reminded after its notification was
/// dispatched, so a failed dispatch is retried by the next sweep.
#[derive(Debug)]
pub struct SendCheckoutRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendCheckoutRemindersUseCase {
    type Response = CheckoutRemindersReport;
    type Error = UseCaseError;

    const NAME: &'static str = "SendCheckoutReminders";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let until = now + ctx.config.checkout_reminder_window;

        let due = ctx
            .repos
            .checkouts
            .find_due_for_reminder(now, until)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        let mut report = CheckoutRemindersReport::default();
        for reservation in due {
            let notification = reservation.fields.checkout_reminder(reservation.id);
            if let Err(e) = ctx.notifier.notify(&notification).await {
                error!(
                    reservation_id = %reservation.id,
                    "Unable to dispatch checkout reminder: {:?}", e
                );
                report.failed += 1;
                continue;
            }

            match ctx.repos.checkouts.mark_reminded(reservation.id).await {
                Ok(true) => report.sent += 1,
                Ok(false) => {
                    warn!(
                        reservation_id = %reservation.id,
                        "Reservation was already marked as reminded by someone else"
                    );
                    report.sent += 1;
                }
                Err(e) => {
                    error!(
                        reservation_id = %reservation.id,
                        "Checkout reminder was dispatched but the reservation could not be marked: {:?}", e
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use concierge_domain::{Notification, Record, Reservation, ID};
    use concierge_infra::{INotifier, ListQuery, StaticTimeSys};
    use std::sync::Arc;

    /// Fails for reservations in `failing`, stores everything else
    struct FlakyNotifier {
        inner: Arc<dyn INotifier>,
        failing: Vec<ID>,
    }

    #[async_trait::async_trait]
    impl INotifier for FlakyNotifier {
        async fn notify(&self, notification: &Notification) -> anyhow::Result<Record<Notification>> {
            match notification.reservation_id {
                Some(id) if self.failing.contains(&id) => {
                    Err(anyhow::Error::msg("push gateway unavailable"))
                }
                _ => self.inner.notify(notification).await,
            }
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap()
    }

    fn setup_ctx() -> ConciergeContext {
        let mut ctx = ConciergeContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(now().timestamp_millis()));
        ctx.config.checkout_reminder_window = Duration::minutes(60);
        ctx
    }

    async fn book(ctx: &ConciergeContext, guest: &str, checkout_at: DateTime<Utc>) -> ID {
        let reservation = Reservation {
            room_id: ID::new(301),
            user_id: Some(ID::new(7)),
            guest_name: guest.into(),
            check_in_at: checkout_at - Duration::days(2),
            checkout_at,
            reminded: false,
        };
        ctx.repos.reservations.insert(&reservation).await.unwrap().id
    }

    async fn notifications(ctx: &ConciergeContext) -> Vec<Record<Notification>> {
        ctx.repos
            .notifications
            .find_many(ListQuery::default())
            .await
            .unwrap()
    }

    async fn is_reminded(ctx: &ConciergeContext, id: ID) -> bool {
        ctx.repos
            .reservations
            .find(id)
            .await
            .unwrap()
            .expect("To find reservation")
            .fields
            .reminded
    }

    #[actix_web::test]
    async fn reminds_due_reservation_exactly_once() {
        let ctx = setup_ctx();
        let id = book(&ctx, "Ada", now() + Duration::minutes(45)).await;

        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report, CheckoutRemindersReport { sent: 1, failed: 0 });
        assert!(is_reminded(&ctx, id).await);

        let sent = notifications(&ctx).await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].fields.reservation_id, Some(id));
        assert_eq!(sent[0].fields.user_id, Some(ID::new(7)));
        assert_eq!(sent[0].fields.room_id, Some(ID::new(301)));

        // Second sweep right after finds nothing new
        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report, CheckoutRemindersReport::default());
        assert_eq!(notifications(&ctx).await.len(), 1);
    }

    #[actix_web::test]
    async fn ignores_reservations_outside_window() {
        let ctx = setup_ctx();
        let later = book(&ctx, "Grace", now() + Duration::minutes(61)).await;
        let past = book(&ctx, "Alan", now() - Duration::minutes(1)).await;

        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report, CheckoutRemindersReport::default());
        assert!(notifications(&ctx).await.is_empty());
        assert!(!is_reminded(&ctx, later).await);
        assert!(!is_reminded(&ctx, past).await);
    }

    #[actix_web::test]
    async fn failed_dispatch_does_not_stop_the_sweep() {
        let mut ctx = setup_ctx();
        let failing = book(&ctx, "Edsger", now() + Duration::minutes(10)).await;
        let first = book(&ctx, "Barbara", now() + Duration::minutes(20)).await;
        let second = book(&ctx, "Donald", now() + Duration::minutes(30)).await;
        ctx.notifier = Arc::new(FlakyNotifier {
            inner: ctx.notifier.clone(),
            failing: vec![failing],
        });

        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report, CheckoutRemindersReport { sent: 2, failed: 1 });
        assert!(!is_reminded(&ctx, failing).await);
        assert!(is_reminded(&ctx, first).await);
        assert!(is_reminded(&ctx, second).await);

        let reminded: Vec<_> = notifications(&ctx)
            .await
            .into_iter()
            .filter_map(|n| n.fields.reservation_id)
            .collect();
        assert!(reminded.contains(&first));
        assert!(reminded.contains(&second));
        assert!(!reminded.contains(&failing));
    }

    #[actix_web::test]
    async fn failed_reservation_is_retried_next_sweep() {
        let mut ctx = setup_ctx();
        let id = book(&ctx, "Edsger", now() + Duration::minutes(10)).await;
        let store = ctx.notifier.clone();
        ctx.notifier = Arc::new(FlakyNotifier {
            inner: store.clone(),
            failing: vec![id],
        });
        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report.failed, 1);

        ctx.notifier = store;
        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report, CheckoutRemindersReport { sent: 1, failed: 0 });
        assert!(is_reminded(&ctx, id).await);
    }

    #[actix_web::test]
    async fn rescheduled_checkout_is_reminded_again() {
        let ctx = setup_ctx();
        let id = book(&ctx, "Ada", now() + Duration::minutes(15)).await;
        execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();

        let mut reservation = ctx.repos.reservations.find(id).await.unwrap().unwrap().fields;
        reservation.checkout_at = now() + Duration::minutes(50);
        ctx.repos.reservations.save(id, &reservation).await.unwrap();

        let report = execute(SendCheckoutRemindersUseCase {}, &ctx).await.unwrap();
        assert_eq!(report.sent, 1);
        assert_eq!(notifications(&ctx).await.len(), 2);
    }
}
