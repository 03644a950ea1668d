//! Purchasable plan catalogue.

use serde::{Deserialize, Serialize};

use crate::node::NodeHandle;

/// A single purchasable plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    /// Product handle used when requesting a payment URL.
    pub product: NodeHandle,
    /// Subscription length in months.
    pub months: u32,
    /// Storage quota granted, in gigabytes.
    pub storage_gb: u32,
    /// Transfer quota granted, in gigabytes.
    pub transfer_gb: u32,
    /// Price in the smallest currency unit (e.g. cents).
    pub amount_cents: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Human-readable plan description.
    pub description: String,
}

/// Catalogue of plans available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Pricing {
    /// Available plans, in the order reported by the service.
    pub plans: Vec<PricingPlan>,
}

impl Pricing {
    /// Look up a plan by its product handle.
    #[must_use]
    pub fn plan_for(&self, product: NodeHandle) -> Option<&PricingPlan> {
        self.plans.iter().find(|plan| plan.product == product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan(product: u64) -> PricingPlan {
        PricingPlan {
            product: NodeHandle::new(product),
            months: 1,
            storage_gb: 400,
            transfer_gb: 1024,
            amount_cents: 499,
            currency: "EUR".into(),
            description: "Pro Lite".into(),
        }
    }

    #[test]
    fn plan_lookup_by_product_handle() {
        let pricing = Pricing {
            plans: vec![sample_plan(1), sample_plan(2)],
        };
        assert!(pricing.plan_for(NodeHandle::new(2)).is_some());
        assert!(pricing.plan_for(NodeHandle::new(9)).is_none());
    }
}
