//! Pre-expiry inspection checklists, picked by depreciation curve.

use crate::valuation::DepreciationCurve;

use super::{InspectionCheck, InspectionChecklist};

fn checklist(checks: &[(&str, &str)], tip: &str) -> InspectionChecklist {
    InspectionChecklist {
        checks: checks
            .iter()
            .map(|(title, detail)| InspectionCheck {
                title: title.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
        tip: tip.to_string(),
    }
}

/// Checklist to run through before the warranty of an item on `curve` lapses.
///
/// Non-depreciating and generic items share the general checklist.
pub fn inspection_checklist(curve: DepreciationCurve) -> InspectionChecklist {
    match curve {
        DepreciationCurve::Electronics => checklist(
            &[
                ("Check the battery", "Test battery life and look for swelling"),
                ("Inspect the screen", "Look for dead pixels, stains or discoloration"),
                ("Test every port", "USB, audio jack and other connectors"),
                ("Test the sensors", "Touch, camera, microphone and speakers"),
                ("Software", "Update to the latest available version"),
                ("Back up your data", "Before handing it in for service"),
            ],
            "Even small defects can be covered by the warranty. Better to check now than pay for repairs later.",
        ),
        DepreciationCurve::Appliances => checklist(
            &[
                ("Full test", "Run every program and mode"),
                ("Strange noises", "Listen carefully while it runs"),
                ("Leaks", "Check for water or fluid leaks"),
                ("Efficiency", "Check consumption and performance"),
                ("Filters", "Clean them and check they work"),
                ("Paperwork", "Keep the receipt and manual at hand"),
            ],
            "Appliances often show problems after one or two years. A check now can avoid costly repairs.",
        ),
        DepreciationCurve::Vehicles => checklist(
            &[
                ("Full test", "Try brakes, acceleration and gear changes"),
                ("Suspicious noises", "While driving, cornering and braking"),
                ("Battery", "Range and charging, if electric"),
                ("Suspension", "Shock absorbers, springs and fork"),
                ("Electrics", "Lights, display and sensors"),
                ("Preventive service", "Ask the dealer for a free check-up"),
            ],
            "Many dealers offer a free check-up before the warranty ends. Take advantage of it.",
        ),
        DepreciationCurve::Generic | DepreciationCurve::None => checklist(
            &[
                ("Visual inspection", "Look for cracks, breakage or unusual wear"),
                ("Functional test", "Check everything works as on the day of purchase"),
                ("Materials", "Check seams, joints and moving parts"),
                ("Hidden defects", "Some problems are not obvious at first"),
                ("Paperwork", "Keep the receipt and certificates at hand"),
                ("Contact the seller", "Ask whether they offer a pre-expiry check"),
            ],
            "You are entitled to have manufacturing defects fixed under warranty. Do not wait until it expires.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_curve_has_a_checklist() {
        for curve in DepreciationCurve::ALL {
            let list = inspection_checklist(curve);
            assert_eq!(list.checks.len(), 6, "curve {}", curve);
            assert!(!list.tip.is_empty());
        }
    }

    #[test]
    fn test_non_depreciating_uses_general_checklist() {
        assert_eq!(
            inspection_checklist(DepreciationCurve::None),
            inspection_checklist(DepreciationCurve::Generic)
        );
        assert_ne!(
            inspection_checklist(DepreciationCurve::Electronics),
            inspection_checklist(DepreciationCurve::Generic)
        );
    }
}
