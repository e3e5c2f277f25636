//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pliage de pile sur rationnels exacts -> rendu décimal
//!
//! Contrat : `eval_expression` accepte la grammaire arithmétique stricte
//! (décimaux, + - * /, parenthèses, moins unaire en tête ou après '(')
//! et rien d'autre. Tout échec (syntaxe, déséquilibre, division par zéro)
//! retourne Err ; l'appelant les replie sur un seul état d'erreur.

use num_rational::BigRational;
use num_traits::Zero;

use super::format::format_decimal;
use super::jetons::{tokenize, Tok};
use super::rpn::to_rpn;

/// API publique : évalue une expression arithmétique et retourne son
/// rendu décimal (entier sans point, décimal fini exact, ou tronqué).
pub fn eval_expression(expr_str: &str) -> Result<String, String> {
    Ok(format_decimal(&eval_rationnel(expr_str)?))
}

/// Pipeline complet jusqu'au rationnel exact.
pub fn eval_rationnel(expr_str: &str) -> Result<BigRational, String> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    eval_rpn(&rpn)
}

/// Plie une RPN sur une pile de rationnels.
fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, String> {
    let mut pile: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => pile.push(r.clone()),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or("expression invalide")?;
                let a = pile.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b.is_zero() {
                            return Err("division par zéro".into());
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if pile.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(pile.pop().unwrap())
}
