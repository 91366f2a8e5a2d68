use std::fmt;

use itertools::Itertools;

use crate::{
    ast::{Expr, LiteralValue},
    interpreter::value::Value,
};

/// Renders an expression tree in fully parenthesized prefix form.
///
/// Unary and binary nodes print as `(<operator> <operands>...)`, groupings as
/// `(group <inner>)` and ternaries as `(ternary <condition> <then> <else>)`.
/// String literals keep their quotes; other literals print the way their
/// runtime value would.
///
/// # Example
/// ```
/// use lumen::interpreter::{parser::core::parse, printer::print, scanner::scan};
///
/// let expr = parse(&scan("-(1 + 2) > 3 ? \"yes\" : nil").tokens).unwrap();
///
/// assert_eq!(print(&expr), "(ternary (> (- (group (+ 1 2))) 3) \"yes\" nil)");
/// ```
#[must_use]
pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value: LiteralValue::Str(s) } => format!("\"{s}\""),
        Expr::Literal { value } => Value::from(value).to_string(),
        Expr::Unary { operator, operand } => parenthesize(&operator.lexeme, &[operand.as_ref()]),
        Expr::Binary { left,
                       operator,
                       right, } => {
            parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()])
        },
        Expr::Grouping { inner } => parenthesize("group", &[inner.as_ref()]),
        Expr::Ternary { condition,
                        then_branch,
                        else_branch, } => parenthesize("ternary",
                                                       &[condition.as_ref(),
                                                         then_branch.as_ref(),
                                                         else_branch.as_ref()]),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    format!("({name} {})", exprs.iter().map(|e| print(e)).join(" "))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", print(self))
    }
}
