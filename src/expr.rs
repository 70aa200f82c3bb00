//! Symbolic arithmetic expressions over event probabilities.
//!
//! Just enough algebra to differentiate the top-event probability polynomial
//! `1 - ∏ₖ (1 - ∏ⱼ xⱼ)`: constants, variables, sums, differences and products.
//! The smart constructors fold constants and drop neutral elements, which
//! keeps derivatives of large products small.
//!
//! # Examples
//!
//! ```
//! use fta_rs::expr::Expr;
//!
//! // f = 1 - (1 - x0)(1 - x1)
//! let f = Expr::top_event(&[vec![0], vec![1]]);
//! let df = f.derivative(0);
//! assert_eq!(df.to_string(), "(0 - -1*(1 - x1))");
//! let value = df.eval(&[0.1, 0.2]).unwrap();
//! assert!((value - 0.8).abs() < 1e-12);
//! ```

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var(usize),
    Add(Vec<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Vec<Expr>),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Const(value)
    }

    pub fn var(index: usize) -> Self {
        Expr::Var(index)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(c) if *c == 0.0)
    }

    pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Self {
        let mut constant = 0.0;
        let mut rest = Vec::new();
        for term in terms {
            match term {
                Expr::Const(c) => constant += c,
                Expr::Add(inner) => rest.extend(inner),
                other => rest.push(other),
            }
        }
        if constant != 0.0 || rest.is_empty() {
            rest.insert(0, Expr::Const(constant));
        }
        if rest.len() == 1 {
            rest.pop().unwrap_or(Expr::Const(0.0))
        } else {
            Expr::Add(rest)
        }
    }

    pub fn sub(lhs: Self, rhs: Self) -> Self {
        match (lhs, rhs) {
            (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
            (lhs, rhs) if rhs.is_zero() => lhs,
            (lhs, rhs) => Expr::Sub(Box::new(lhs), Box::new(rhs)),
        }
    }

    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        let mut constant = 1.0;
        let mut rest = Vec::new();
        for factor in factors {
            match factor {
                Expr::Const(c) => constant *= c,
                Expr::Mul(inner) => rest.extend(inner),
                other => rest.push(other),
            }
        }
        if constant == 0.0 {
            return Expr::Const(0.0);
        }
        if constant != 1.0 || rest.is_empty() {
            rest.insert(0, Expr::Const(constant));
        }
        if rest.len() == 1 {
            rest.pop().unwrap_or(Expr::Const(1.0))
        } else {
            Expr::Mul(rest)
        }
    }

    /// `1 - ∏ₖ (1 - ∏_{j ∈ Cₖ} xⱼ)` for cut sets given as variable indices.
    pub fn top_event(cut_sets: &[Vec<usize>]) -> Self {
        let survivals = cut_sets.iter().map(|cs| {
            let joint = Expr::product(cs.iter().map(|&j| Expr::var(j)));
            Expr::sub(Expr::constant(1.0), joint)
        });
        Expr::sub(Expr::constant(1.0), Expr::product(survivals))
    }
}

impl Expr {
    /// Partial derivative with respect to variable `var`.
    pub fn derivative(&self, var: usize) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var(j) => Expr::Const(if *j == var { 1.0 } else { 0.0 }),
            Expr::Add(terms) => Expr::sum(terms.iter().map(|t| t.derivative(var))),
            Expr::Sub(a, b) => Expr::sub(a.derivative(var), b.derivative(var)),
            Expr::Mul(factors) => {
                // Product rule: Σₖ f'ₖ · ∏_{l≠k} fₗ
                let terms = factors.iter().enumerate().filter_map(|(k, f)| {
                    let df = f.derivative(var);
                    if df.is_zero() {
                        return None;
                    }
                    let others = factors
                        .iter()
                        .enumerate()
                        .filter(|&(l, _)| l != k)
                        .map(|(_, g)| g.clone());
                    Some(Expr::product(std::iter::once(df).chain(others)))
                });
                Expr::sum(terms.collect::<Vec<_>>())
            }
        }
    }

    /// Evaluates with `values[j]` substituted for `x_j`.
    ///
    /// Returns `None` if the expression mentions a variable past the end of `values`.
    pub fn eval(&self, values: &[f64]) -> Option<f64> {
        match self {
            Expr::Const(c) => Some(*c),
            Expr::Var(j) => values.get(*j).copied(),
            Expr::Add(terms) => terms.iter().try_fold(0.0, |acc, t| Some(acc + t.eval(values)?)),
            Expr::Sub(a, b) => Some(a.eval(values)? - b.eval(values)?),
            Expr::Mul(factors) => factors.iter().try_fold(1.0, |acc, f| Some(acc * f.eval(values)?)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{}", c),
            Expr::Var(j) => write!(f, "x{}", j),
            Expr::Add(terms) => {
                write!(f, "(")?;
                for (i, t) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", t)?;
                }
                write!(f, ")")
            }
            Expr::Sub(a, b) => write!(f, "({} - {})", a, b),
            Expr::Mul(factors) => {
                for (i, x) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    write!(f, "{}", x)?;
                }
                Ok(())
            }
        }
    }
}
