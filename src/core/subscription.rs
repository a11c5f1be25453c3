//! Subscription store - plan enrollment and payment method.
//!
//! One subscription per user, rehydrated from the `subscription_<uid>`
//! snapshot; a first-time user is seeded with an active 30-day basic-plan
//! enrollment. Plan changes overwrite the record in place and reset a fresh
//! 30-day window with no proration. Cancelling deactivates but retains the
//! record so plan and term remain displayable.

use crate::catalog::{Catalog, Plan};
use crate::entities::{PaymentMethod, PaymentMethodType, PlanId, Subscription};
use crate::errors::Result;
use crate::id;
use crate::remote::RemoteCall;
use crate::session::Session;
use crate::storage::{self, SnapshotStore, keys};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::debug;

/// Length of one billing term.
const TERM_DAYS: i64 = 30;

/// Owner of the current user's plan enrollment.
pub struct SubscriptionStore {
    session: Arc<Session>,
    storage: Arc<dyn SnapshotStore>,
    remote: Arc<dyn RemoteCall>,
    catalog: Arc<Catalog>,
    current: Option<Subscription>,
    loading: bool,
}

impl SubscriptionStore {
    /// Loads the subscription for the session's user, seeding the default
    /// basic-plan enrollment on a first-time user.
    pub fn load(
        session: Arc<Session>,
        storage: Arc<dyn SnapshotStore>,
        remote: Arc<dyn RemoteCall>,
        catalog: Arc<Catalog>,
    ) -> Result<Self> {
        let key = keys::subscription(session.user_id());
        let current = match storage::load_snapshot::<Subscription>(storage.as_ref(), &key)? {
            Some(subscription) => Some(subscription),
            None => {
                let demo = default_subscription();
                storage::save_snapshot(storage.as_ref(), &key, &demo)?;
                debug!(user_id = %session.user_id(), "seeded default subscription");
                Some(demo)
            }
        };
        Ok(Self {
            session,
            storage,
            remote,
            catalog,
            current,
            loading: false,
        })
    }

    /// The current enrollment, if any.
    #[must_use]
    pub const fn current_subscription(&self) -> Option<&Subscription> {
        self.current.as_ref()
    }

    /// The static plan catalog.
    #[must_use]
    pub fn available_plans(&self) -> &[Plan] {
        &self.catalog.plans
    }

    /// Whether an operation is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Enrolls in a plan, replacing any existing subscription wholesale:
    /// fresh id, start now, a 30-day term, active.
    pub async fn subscribe_to_plan(
        &mut self,
        plan_id: PlanId,
        payment_method: PaymentMethod,
    ) -> Result<Subscription> {
        self.loading = true;
        let result = self.do_subscribe(plan_id, payment_method).await;
        self.loading = false;
        result
    }

    /// Switches the current enrollment to another plan and resets a fresh
    /// 30-day window, keeping the enrollment id. No proration. A missing
    /// subscription makes this a no-op.
    pub async fn change_plan(&mut self, new_plan_id: PlanId) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        self.loading = true;
        let result = self.do_change_plan(new_plan_id).await;
        self.loading = false;
        result
    }

    /// Deactivates the current enrollment. The record is retained, not
    /// deleted. A missing subscription makes this a no-op.
    pub async fn cancel_subscription(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        self.loading = true;
        let result = self.do_cancel().await;
        self.loading = false;
        result
    }

    /// Replaces only the payment method sub-record. A missing subscription
    /// makes this a no-op.
    pub async fn update_payment_method(&mut self, payment_method: PaymentMethod) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        self.loading = true;
        let result = self.do_update_payment(payment_method).await;
        self.loading = false;
        result
    }

    async fn do_subscribe(
        &mut self,
        plan_id: PlanId,
        payment_method: PaymentMethod,
    ) -> Result<Subscription> {
        self.remote.perform("subscription.subscribe").await?;

        let now = Utc::now();
        let subscription = Subscription {
            id: id::generate(),
            plan_id,
            start_date: now,
            end_date: now + Duration::days(TERM_DAYS),
            is_active: true,
            payment_method,
        };
        self.current = Some(subscription.clone());
        self.persist()?;
        debug!(user_id = %self.session.user_id(), plan = %plan_id, "subscribed to plan");
        Ok(subscription)
    }

    async fn do_change_plan(&mut self, new_plan_id: PlanId) -> Result<()> {
        self.remote.perform("subscription.change_plan").await?;

        let now = Utc::now();
        if let Some(subscription) = self.current.as_mut() {
            subscription.plan_id = new_plan_id;
            subscription.start_date = now;
            subscription.end_date = now + Duration::days(TERM_DAYS);
            debug!(plan = %new_plan_id, "changed plan");
        }
        self.persist()
    }

    async fn do_cancel(&mut self) -> Result<()> {
        self.remote.perform("subscription.cancel").await?;

        if let Some(subscription) = self.current.as_mut() {
            subscription.is_active = false;
            debug!("cancelled subscription");
        }
        self.persist()
    }

    async fn do_update_payment(&mut self, payment_method: PaymentMethod) -> Result<()> {
        self.remote.perform("subscription.update_payment").await?;

        if let Some(subscription) = self.current.as_mut() {
            subscription.payment_method = payment_method;
        }
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let key = keys::subscription(self.session.user_id());
        match &self.current {
            Some(subscription) => {
                storage::save_snapshot(self.storage.as_ref(), &key, subscription)
            }
            None => self.storage.remove(&key),
        }
    }
}

/// The seeded enrollment for a first-time user: active basic plan, 30-day
/// term from now, a credit card ending 4242.
fn default_subscription() -> Subscription {
    let now = Utc::now();
    Subscription {
        id: id::generate(),
        plan_id: PlanId::Basic,
        start_date: now,
        end_date: now + Duration::days(TERM_DAYS),
        is_active: true,
        payment_method: PaymentMethod {
            kind: PaymentMethodType::CreditCard,
            last_four: "4242".to_string(),
        },
    }
}
