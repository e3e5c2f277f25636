//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'accumulateur et l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro)
//! - invariants clés :
//!     * même expression => même rendu (déterminisme)
//!     * ré-évaluer un rendu redonne le même rendu (stabilité ré-entrée)
//!     * l'accumulateur ne panique jamais et repart toujours propre

use std::time::{Duration, Instant};

use super::accumulateur::{Accumulateur, Jeton, Operateur};
use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(msg: &str) -> bool {
    // Seule erreur *normale* sur des expressions générées bien formées :
    // un dénominateur qui tombe sur zéro.
    msg.contains("division par zéro")
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "7".to_string(),
        4 => "12".to_string(),
        5 => "0.5".to_string(),
        _ => "3.25".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(6) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        _ => format!("(-{})", gen_expr(rng, depth - 1)),
    }
}

fn gen_jeton(rng: &mut Rng) -> Jeton {
    match rng.pick(12) {
        0..=3 => Jeton::Chiffre(rng.pick(10) as u8),
        4 => Jeton::DoubleZero,
        5 => Jeton::Point,
        6 => Jeton::Operateur(match rng.pick(4) {
            0 => Operateur::Plus,
            1 => Operateur::Moins,
            2 => Operateur::Fois,
            _ => Operateur::Divise,
        }),
        7 => Jeton::ParOuvrante,
        8 => Jeton::ParFermante,
        9 => Jeton::Pourcent,
        10 => Jeton::Retour,
        _ => Jeton::Egal,
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_deterministe_et_stable() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match eval_expression(&expr) {
            Ok(rendu) => {
                // déterminisme strict
                assert_eq!(eval_expression(&expr).as_deref(), Ok(rendu.as_str()));
                // stabilité : le rendu se ré-évalue en lui-même
                assert_eq!(
                    eval_expression(&rendu).as_deref(),
                    Ok(rendu.as_str()),
                    "ré-entrée de {expr:?}"
                );
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // Le générateur ne produit que des expressions bien formées : tout
    // doit aboutir, sauf division par zéro (déjà filtrée ci-dessus).
    assert_eq!(seen_ok + seen_err, 150);
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");

    // Le chemin division par zéro reste couvert explicitement.
    assert_eq!(
        eval_expression("1/(2-2)"),
        Err("division par zéro".to_string())
    );
}

#[test]
fn fuzz_safe_accumulateur_total() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut acc = Accumulateur::default();

    for _ in 0..2000 {
        budget(t0, max);

        let jeton = gen_jeton(&mut rng);
        let affichage = acc.appliquer(jeton);

        // Après Égal, la ligne haute est toujours repliée.
        if jeton == Jeton::Egal {
            assert_eq!(affichage.expression, "");
        }

        // De temps en temps : C doit toujours restaurer l'état initial.
        if rng.pick(40) == 0 {
            let a = acc.appliquer(Jeton::Effacer);
            assert_eq!(a.expression, "");
            assert_eq!(a.entree, "0");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    let rendu = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(rendu, "800");
}
