use crate::model::{IndicatorConstraint, LinearConstraint, Model, Sense};

/// Replace an indicator constraint by equivalent big-M rows.
///
/// The big-M of each row is the largest violation the constraint expression can reach within
/// the variable bounds of `model`, so the rows are void when the indicator is inactive.
/// Rows that can never be violated are omitted.
pub fn linearize_indicator(model: &Model, indicator: &IndicatorConstraint) -> Vec<LinearConstraint> {
    let IndicatorConstraint {
        control,
        active_when,
        constraint,
    } = indicator;
    let (low, high) = model.expression_range(&constraint.expression);
    let lower_side = matches!(constraint.sense, Sense::AtLeast | Sense::Equal);
    let upper_side = matches!(constraint.sense, Sense::AtMost | Sense::Equal);

    let mut rows = Vec::new();
    if lower_side && low < constraint.rhs {
        let big_m = constraint.rhs - low;
        let row = if *active_when {
            // expr >= rhs - M * (1 - z)
            constraint
                .expression
                .clone()
                .term(*control, -big_m)
                .at_least(constraint.rhs - big_m)
        } else {
            // expr >= rhs - M * z
            constraint
                .expression
                .clone()
                .term(*control, big_m)
                .at_least(constraint.rhs)
        };
        rows.push(row);
    }
    if upper_side && high > constraint.rhs {
        let big_m = high - constraint.rhs;
        let row = if *active_when {
            // expr <= rhs + M * (1 - z)
            constraint
                .expression
                .clone()
                .term(*control, big_m)
                .at_most(constraint.rhs + big_m)
        } else {
            // expr <= rhs + M * z
            constraint
                .expression
                .clone()
                .term(*control, -big_m)
                .at_most(constraint.rhs)
        };
        rows.push(row);
    }

    if let Some(name) = &constraint.name {
        rows = rows.into_iter().map(|row| row.named(name.clone())).collect();
    }
    rows
}
