// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Chiffres de troncature pour les rationnels sans écriture décimale finie
/// (ex: 1/3).
const DIGITS_LECTURE: usize = 20;

/// Garde-fou : au-delà, même une écriture finie passe en troncature
/// (anti-gel sur dénominateurs 10^k démesurés).
const DECIMALES_MAX: usize = 100;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits) (troncature vers zéro).
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Nombre de décimales d'une écriture finie : Some(max(a,b)) si le
/// dénominateur réduit vaut 2^a * 5^b, None sinon.
fn decimales_finies(denom: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = denom.clone();
    let mut a = 0usize;
    let mut b = 0usize;

    while (&reste % &deux).is_zero() {
        reste /= &deux;
        a += 1;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        b += 1;
    }

    if reste.is_one() {
        Some(a.max(b))
    } else {
        None
    }
}

/* ------------------------ Rendu public ------------------------ */

/// Rendu décimal déterministe d'un rationnel réduit :
/// - entier -> pas de point ("4", "-12")
/// - écriture finie -> exacte, sans zéros superflus ("0.5", "-0.07")
/// - sinon -> tronqué vers zéro à DIGITS_LECTURE décimales, zéros de
///   queue coupés
///
/// Stabilité : tout rendu se re-tokenise en décimal fini dont la dernière
/// décimale est non nulle, donc dont le rendu est identique (ré-entrée du
/// résultat dans l'accumulateur, Égal idempotent).
pub fn format_decimal(r: &BigRational) -> String {
    if r.is_integer() {
        return r.numer().to_string();
    }

    match decimales_finies(r.denom()) {
        // Dénominateur réduit : la dernière décimale est non nulle.
        Some(digits) if digits <= DECIMALES_MAX => {
            scaled_to_decimal(rational_scaled(r, digits), digits)
        }
        _ => couper_zeros_de_queue(scaled_to_decimal(
            rational_scaled(r, DIGITS_LECTURE),
            DIGITS_LECTURE,
        )),
    }
}

/// Coupe les zéros de queue d'une écriture tronquée (17/21 tronqué à 20
/// décimales finit par "…380") ; sans eux, la dernière décimale est non
/// nulle et la ré-entrée redonne le même texte. Un texte qui se vide
/// entièrement retombe sur "0".
fn couper_zeros_de_queue(mut s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s.is_empty() || s == "-" || s == "-0" {
        s = "0".to_string();
    }
    s
}
