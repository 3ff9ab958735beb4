//! Noyau entier
//!
//! Organisation interne :
//! - erreur.rs      : taxonomie unique des échecs (ErreurCalc)
//! - validation.rs  : alphabet autorisé + retrait des espaces
//! - parentheses.rs : appariement (compteur de profondeur)
//! - jetons.rs      : tokenisation + table des opérateurs
//! - rpn.rs         : shunting-yard + évaluation de la RPN
//! - eval.rs        : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod parentheses;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{eval_expression, run};
