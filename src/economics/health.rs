//! Health verdict over the derived unit economics

use serde::{Deserialize, Serialize};

use super::DerivedMetrics;

/// LTV:CAC at or above this is considered healthy
pub const TARGET_LTV_CAC: f64 = 3.0;

/// Payback periods longer than this many months are flagged
pub const MAX_PAYBACK_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Healthy,
    Caution,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Healthy => {
                "Healthy economics. Each customer returns more than 3x its acquisition cost, \
                 so acquisition spend can be increased."
            }
            Verdict::Caution => {
                "Caution. LTV:CAC is low. Lower CAC, reduce churn, or raise pricing to improve margins."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicsHealth {
    pub verdict: Verdict,
    pub ltv_cac_alert: bool,
    pub payback_alert: bool,
    pub message: String,
}

impl EconomicsHealth {
    pub fn assess(metrics: &DerivedMetrics) -> Self {
        let verdict = if metrics.ltv_cac_ratio >= TARGET_LTV_CAC {
            Verdict::Healthy
        } else {
            Verdict::Caution
        };

        Self {
            verdict,
            ltv_cac_alert: metrics.ltv_cac_ratio < TARGET_LTV_CAC,
            payback_alert: metrics.payback_period_months > MAX_PAYBACK_MONTHS,
            message: verdict.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economics::calculate;
    use crate::params::ParameterSet;

    #[test]
    fn test_default_parameters_are_healthy() {
        let health = EconomicsHealth::assess(&calculate(&ParameterSet::default()));
        assert_eq!(health.verdict, Verdict::Healthy);
        assert!(!health.ltv_cac_alert);
        assert!(!health.payback_alert);
    }

    #[test]
    fn test_expensive_acquisition_is_flagged() {
        let params = ParameterSet { cac: 5000.0, ..Default::default() };
        let health = EconomicsHealth::assess(&calculate(&params));
        assert_eq!(health.verdict, Verdict::Caution);
        assert!(health.ltv_cac_alert);
        assert!(health.payback_alert);
        assert_eq!(health.message, Verdict::Caution.message());
    }

    #[test]
    fn test_zero_churn_reads_as_caution() {
        // LTV saturates to 0 without churn, so the ratio does too
        let params = ParameterSet { monthly_churn_rate: 0.0, ..Default::default() };
        let health = EconomicsHealth::assess(&calculate(&params));
        assert_eq!(health.verdict, Verdict::Caution);
    }
}
