//! Noyau calculatrice
//!
//! Organisation interne :
//! - accumulateur.rs : machine à états d'entrée (jetons UI -> affichage)
//! - jetons.rs       : tokenisation arithmétique
//! - rpn.rs          : shunting-yard (infixe -> RPN)
//! - eval.rs         : pipeline complet
//! - format.rs       : rendu décimal exact / tronqué

pub mod accumulateur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::{Accumulateur, Affichage, Jeton, Operateur};
pub use eval::eval_expression;
