// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok infixe en RPN (postfix)
// - Priorités conventionnelles : * / au-dessus de + -, associativité gauche
//
// Règles:
// - Moins unaire:
//    - admis seulement en tête d'expression ou juste après '(' ;
//      on injecte 0 : "-x" => "0 x -"
//    - ailleurs sans valeur à gauche : expression rejetée
// - Parenthèses:
//    - ')' sans '(' correspondante : rejet immédiat
//    - '(' jamais refermée : rejet en fin de conversion

use num_rational::BigRational;
use num_traits::Zero;

use super::jetons::Tok;

/// Ce qui précède le jeton courant, pour classer '-' (binaire ou unaire)
/// et rejeter les opérateurs mal placés.
#[derive(Clone, Copy, PartialEq)]
enum Precedent {
    Debut,
    Valeur,
    Operateur,
    Ouvrante,
}

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(3), Plus, Num(4), RPar, Star, Num(2)]
///   rpn:    [Num(3), Num(4), Plus, Num(2), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();
    let mut precedent = Precedent::Debut;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                precedent = Precedent::Valeur;
            }

            Tok::LPar => {
                ops.push(tok);
                precedent = Precedent::Ouvrante;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                precedent = Precedent::Valeur;
            }

            Tok::Plus | Tok::Star | Tok::Slash => {
                // binaire pur : exige une valeur à gauche
                if precedent != Precedent::Valeur {
                    return Err("opérateur mal placé".into());
                }
                depiler_prioritaires(&mut out, &mut ops, &tok);
                ops.push(tok);
                precedent = Precedent::Operateur;
            }

            Tok::Minus => {
                match precedent {
                    Precedent::Valeur => {} // moins binaire
                    Precedent::Debut | Precedent::Ouvrante => {
                        // moins unaire : injecte 0 ("-x" => "0 x -")
                        out.push(Tok::Num(BigRational::zero()));
                    }
                    Precedent::Operateur => {
                        return Err("opérateur mal placé".into());
                    }
                }
                depiler_prioritaires(&mut out, &mut ops, &Tok::Minus);
                ops.push(Tok::Minus);
                precedent = Precedent::Operateur;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers `out` tant que l'opérateur au sommet a une priorité
/// supérieure ou égale (associativité gauche), sans traverser '('.
fn depiler_prioritaires(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }
        if precedence(top) >= precedence(tok) {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}
