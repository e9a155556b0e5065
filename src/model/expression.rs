use crate::model::VarId;

/// A linear expression `Σ cᵢ·xᵢ + constant`.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    AtLeast,
    AtMost,
    Equal,
}

/// `expression (>=|<=|==) rhs`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearConstraint {
    pub name: Option<String>,
    pub expression: LinearExpr,
    pub sense: Sense,
    pub rhs: f64,
}

impl LinearExpr {
    pub fn new() -> LinearExpr {
        LinearExpr::default()
    }

    /// The sum of the given variables, each with coefficient 1.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> LinearExpr {
        LinearExpr {
            terms: vars.into_iter().map(|var| (var, 1.0)).collect(),
            constant: 0.0,
        }
    }

    pub fn term(mut self, var: VarId, coefficient: f64) -> LinearExpr {
        self.terms.push((var, coefficient));
        self
    }

    pub fn constant_term(mut self, constant: f64) -> LinearExpr {
        self.constant += constant;
        self
    }

    /// Add every term of `other` multiplied by `factor`.
    pub fn add_scaled(mut self, other: &LinearExpr, factor: f64) -> LinearExpr {
        self.terms
            .extend(other.terms.iter().map(|(var, c)| (*var, c * factor)));
        self.constant += other.constant * factor;
        self
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn evaluate(&self, value: impl Fn(VarId) -> f64) -> f64 {
        self.terms
            .iter()
            .map(|(var, c)| c * value(*var))
            .sum::<f64>()
            + self.constant
    }

    pub fn at_least(self, rhs: f64) -> LinearConstraint {
        LinearConstraint::new(self, Sense::AtLeast, rhs)
    }

    pub fn at_most(self, rhs: f64) -> LinearConstraint {
        LinearConstraint::new(self, Sense::AtMost, rhs)
    }

    pub fn equal_to(self, rhs: f64) -> LinearConstraint {
        LinearConstraint::new(self, Sense::Equal, rhs)
    }
}

impl LinearConstraint {
    pub fn new(expression: LinearExpr, sense: Sense, rhs: f64) -> LinearConstraint {
        LinearConstraint {
            name: None,
            expression,
            sense,
            rhs,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> LinearConstraint {
        self.name = Some(name.into());
        self
    }

    /// Check the constraint against a variable assignment with tolerance `epsilon`.
    pub fn is_satisfied(&self, value: impl Fn(VarId) -> f64, epsilon: f64) -> bool {
        let lhs = self.expression.evaluate(value);
        match self.sense {
            Sense::AtLeast => lhs >= self.rhs - epsilon,
            Sense::AtMost => lhs <= self.rhs + epsilon,
            Sense::Equal => (lhs - self.rhs).abs() <= epsilon,
        }
    }
}
