// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

#[derive(Clone, Debug)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons arithmétiques.
/// Supporte:
/// - entiers (ex: 12) et décimaux (ex: 3.5, .5, 1.)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout littéral décimal devient un rationnel exact (dénominateur 10^k) ;
/// aucun flottant n'entre dans le pipeline.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : chiffres, un point optionnel, chiffres.
        // Un point nu ("." sans aucun chiffre) est rejeté par lire_nombre.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte: String = chars[start..i].iter().collect();
            let rat = lire_nombre(&texte).ok_or(format!("nombre invalide: '{texte}'"))?;
            out.push(Tok::Num(rat));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Lit un littéral décimal signé ("12", "-7", "3.5", ".5", "1.") en
/// rationnel exact. Refuse tout le reste (None), y compris le point nu
/// et un deuxième point.
///
/// Sert aussi au jeton Pourcent, qui doit accepter exactement « un
/// nombre » et rien d'autre (pas une sous-expression).
pub fn lire_nombre(s: &str) -> Option<BigRational> {
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let mut morceaux = corps.splitn(2, '.');
    let entiere = morceaux.next().unwrap_or("");
    let fraction = morceaux.next().unwrap_or("");

    if entiere.is_empty() && fraction.is_empty() {
        return None;
    }
    // Un deuxième '.' resterait dans `fraction` et échoue ici.
    if !entiere.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let chiffres = format!("{entiere}{fraction}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(fraction.len() as u32);

    let r = BigRational::new(n, d);
    Some(if negatif { -r } else { r })
}
