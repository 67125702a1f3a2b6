//! # Derivation Traces
//!
//! Every analysis step returns, next to its numbers, the chain of formulas
//! that produced them. A presentation layer can print the trace as plain
//! text (`Display`) or typeset it (`to_latex`). The set and order of lines is
//! fixed by each calculation; the notation is not.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::derivation::{Derivation, DerivationLine, Expr, Step};
//! use beam_core::units::Unit;
//!
//! let trace = Derivation::Steps(vec![
//!     DerivationLine::heading("Cantilever Beam:"),
//!     DerivationLine::Step(
//!         Step::new(Expr::same("V_a"), 12.5, Unit::KiloNewton)
//!             .with_formula(Expr::new("ΣP", r"\sum P")),
//!     ),
//! ]);
//!
//! assert_eq!(trace.to_string(), "Cantilever Beam:\nV_a = ΣP = 12.50 kN");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Format a number the way every trace shows it (two decimals, no `-0.00`)
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let text = format!("{:.2}", value);
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

/// A piece of notation with a plain-text and a LaTeX spelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub plain: String,
    pub latex: String,
}

impl Expr {
    /// Notation with distinct plain and LaTeX forms
    pub fn new(plain: impl Into<String>, latex: impl Into<String>) -> Self {
        Expr {
            plain: plain.into(),
            latex: latex.into(),
        }
    }

    /// Notation spelled identically in both forms
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Expr {
            plain: text.clone(),
            latex: text,
        }
    }

    /// A fraction `numerator / denominator` of two numbers
    pub fn fraction(numerator: f64, denominator: f64) -> Self {
        let (n, d) = (format_number(numerator), format_number(denominator));
        Expr {
            plain: format!("{} / {}", n, d),
            latex: format!(r"\frac{{{}}}{{{}}}", n, d),
        }
    }
}

/// One computed quantity: `symbol = formula = substitution = value unit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub symbol: Expr,
    pub formula: Option<Expr>,
    pub substitution: Option<Expr>,
    pub value: f64,
    pub unit: Unit,
}

impl Step {
    pub fn new(symbol: Expr, value: f64, unit: Unit) -> Self {
        Step {
            symbol,
            formula: None,
            substitution: None,
            value,
            unit,
        }
    }

    pub fn with_formula(mut self, formula: Expr) -> Self {
        self.formula = Some(formula);
        self
    }

    pub fn with_substitution(mut self, substitution: Expr) -> Self {
        self.substitution = Some(substitution);
        self
    }

    fn parts(&self) -> impl Iterator<Item = &Expr> {
        std::iter::once(&self.symbol)
            .chain(self.formula.iter())
            .chain(self.substitution.iter())
    }

    fn to_latex(&self) -> String {
        let value = format!(r"{} \, {}", format_number(self.value), self.unit.latex());
        let mut out: Vec<&str> = self.parts().map(|e| e.latex.as_str()).collect();
        out.push(&value);
        out.join(" = ")
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.parts() {
            write!(f, "{} = ", part.plain)?;
        }
        write!(f, "{} {}", format_number(self.value), self.unit)
    }
}

/// A single line in a derivation trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum DerivationLine {
    /// Bold title line
    Heading(String),
    /// Explanatory text
    Text(String),
    /// A computed quantity
    Step(Step),
}

impl DerivationLine {
    pub fn heading(text: impl Into<String>) -> Self {
        DerivationLine::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        DerivationLine::Text(text.into())
    }

    /// `symbol = value unit`, the form used by diagram traces
    pub fn value(symbol: impl Into<String>, value: f64, unit: Unit) -> Self {
        DerivationLine::Step(Step::new(Expr::same(symbol), value, unit))
    }

    fn to_latex(&self) -> String {
        match self {
            DerivationLine::Heading(text) => format!(r"\textbf{{{}}}", text),
            DerivationLine::Text(text) => format!(r"\text{{{}}}", text),
            DerivationLine::Step(step) => step.to_latex(),
        }
    }
}

impl fmt::Display for DerivationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationLine::Heading(text) | DerivationLine::Text(text) => f.write_str(text),
            DerivationLine::Step(step) => fmt::Display::fmt(step, f),
        }
    }
}

/// Justification attached to a calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Derivation {
    /// Plain message returned instead of a trace (e.g. zero span)
    Diagnostic(String),
    /// Formatted trace lines
    Steps(Vec<DerivationLine>),
}

impl Derivation {
    /// Trace lines (empty for a diagnostic)
    pub fn lines(&self) -> &[DerivationLine] {
        match self {
            Derivation::Diagnostic(_) => &[],
            Derivation::Steps(lines) => lines.as_slice(),
        }
    }

    /// Computed quantities in trace order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.lines().iter().filter_map(|line| match line {
            DerivationLine::Step(step) => Some(step),
            _ => None,
        })
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Derivation::Diagnostic(_))
    }

    /// Render for mathematical typesetting, rows separated by `\\`
    pub fn to_latex(&self) -> String {
        match self {
            Derivation::Diagnostic(message) => format!(r"\text{{{}}}", message),
            Derivation::Steps(lines) => lines
                .iter()
                .map(DerivationLine::to_latex)
                .collect::<Vec<_>>()
                .join("\\\\\n"),
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Diagnostic(message) => f.write_str(message),
            Derivation::Steps(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}
