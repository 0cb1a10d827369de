//! Tiffin subscription pricing: plan construction, combination and addons.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Meal types on offer, each with a fixed per-day rate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Veg,
    NonVeg,
    Jain,
}

impl MealType {
    pub fn daily_rate(self) -> u64 {
        match self {
            MealType::Veg => 80,
            MealType::NonVeg => 120,
            MealType::Jain => 90,
        }
    }
}

impl Default for MealType {
    fn default() -> Self {
        MealType::Veg
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Veg => write!(f, "veg"),
            MealType::NonVeg => write!(f, "nonveg"),
            MealType::Jain => write!(f, "jain"),
        }
    }
}

/// A plan order as placed by a customer. Meal type and duration fall back to
/// the house defaults when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub name: String,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    30
}

impl Default for PlanRequest {
    fn default() -> Self {
        PlanRequest {
            name: String::new(),
            meal_type: MealType::default(),
            days: default_days(),
        }
    }
}

/// A priced subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiffinPlan {
    pub name: String,
    pub meal_type: MealType,
    pub days: u32,
    pub daily_rate: u64,
    pub total_cost: u64,
}

/// Price a plan request. A request without a customer name is refused.
pub fn create_tiffin_plan(request: PlanRequest) -> Option<TiffinPlan> {
    if request.name.is_empty() {
        return None;
    }

    let daily_rate = request.meal_type.daily_rate();

    Some(TiffinPlan {
        name: request.name,
        meal_type: request.meal_type,
        days: request.days,
        daily_rate,
        total_cost: daily_rate * u64::from(request.days),
    })
}

/// Rollup over a batch of plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_customers: usize,
    pub total_revenue: u64,
    pub meal_breakdown: HashMap<MealType, usize>,
}

/// Combine any number of plans into one summary. No plans, no summary.
pub fn combine_plans(plans: &[TiffinPlan]) -> Option<PlanSummary> {
    if plans.is_empty() {
        return None;
    }

    Some(PlanSummary {
        total_customers: plans.len(),
        total_revenue: plans.iter().map(|p| p.total_cost).sum(),
        meal_breakdown: plans.iter().counts_by(|p| p.meal_type),
    })
}

/// An extra item added on top of the daily tiffin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub name: String,
    pub price: u64,
}

/// A plan with addons priced in, keeping the names of what was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradedPlan {
    #[serde(flatten)]
    pub plan: TiffinPlan,
    pub addon_names: Vec<String>,
}

/// Reprice a plan with addons applied to the daily rate. Produces a new plan;
/// the original is untouched.
pub fn apply_addons(plan: &TiffinPlan, addons: &[Addon]) -> UpgradedPlan {
    let daily_rate = plan.daily_rate + addons.iter().map(|a| a.price).sum::<u64>();

    UpgradedPlan {
        plan: TiffinPlan {
            name: plan.name.clone(),
            meal_type: plan.meal_type,
            days: plan.days,
            daily_rate,
            total_cost: daily_rate * u64::from(plan.days),
        },
        addon_names: addons.iter().map(|a| a.name.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(name: &str, meal_type: MealType) -> TiffinPlan {
        create_tiffin_plan(PlanRequest {
            name: name.to_string(),
            meal_type,
            days: 30,
        })
        .unwrap()
    }

    #[test]
    fn defaults_price_a_thirty_day_veg_plan() {
        let request: PlanRequest = serde_json::from_str(r#"{"name": "Rahul"}"#).unwrap();
        let plan = create_tiffin_plan(request).unwrap();

        assert_eq!(plan.meal_type, MealType::Veg);
        assert_eq!(plan.days, 30);
        assert_eq!(plan.daily_rate, 80);
        assert_eq!(plan.total_cost, 2400);
    }

    #[test]
    fn nameless_request_is_refused() {
        assert!(create_tiffin_plan(PlanRequest::default()).is_none());
    }

    #[test]
    fn rates_follow_the_meal_type() {
        assert_eq!(plan_for("A", MealType::NonVeg).total_cost, 3600);
        assert_eq!(plan_for("B", MealType::Jain).total_cost, 2700);
    }

    #[test]
    fn combine_rolls_up_revenue_and_breakdown() {
        let plans = vec![
            plan_for("Rahul", MealType::Veg),
            plan_for("Meera", MealType::Veg),
            plan_for("Arjun", MealType::NonVeg),
        ];

        let summary = combine_plans(&plans).unwrap();
        assert_eq!(summary.total_customers, 3);
        assert_eq!(summary.total_revenue, 2400 + 2400 + 3600);
        assert_eq!(summary.meal_breakdown.get(&MealType::Veg), Some(&2));
        assert_eq!(summary.meal_breakdown.get(&MealType::NonVeg), Some(&1));
        assert_eq!(summary.meal_breakdown.get(&MealType::Jain), None);
    }

    #[test]
    fn combine_of_nothing_is_nothing() {
        assert!(combine_plans(&[]).is_none());
    }

    #[test]
    fn addons_reprice_without_touching_the_original() {
        let plan = plan_for("Rahul", MealType::Veg);
        let upgraded = apply_addons(
            &plan,
            &[
                Addon { name: "raita".to_string(), price: 15 },
                Addon { name: "papad".to_string(), price: 5 },
            ],
        );

        assert_eq!(upgraded.plan.daily_rate, 100);
        assert_eq!(upgraded.plan.total_cost, 3000);
        assert_eq!(upgraded.addon_names, vec!["raita", "papad"]);

        // Original plan unchanged.
        assert_eq!(plan.daily_rate, 80);
        assert_eq!(plan.total_cost, 2400);
    }
}
