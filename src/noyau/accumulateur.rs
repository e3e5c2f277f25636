//! src/noyau/accumulateur.rs
//!
//! Machine à états d'entrée (sans vue, sans egui).
//!
//! Rôle : transformer une suite de jetons UI (clic ou touche clavier) en
//! deux chaînes affichables : l'expression déjà validée (ligne haute) et
//! l'entrée en cours de frappe (ligne basse).
//!
//! Contrats :
//! - Chaque jeton est consommé exactement une fois ; `appliquer` retourne
//!   toujours un `Affichage` valide, jamais d'erreur propagée.
//! - L'expression complète vue par l'évaluateur est toujours
//!   `expression_totale + entree_courante`.
//! - Aucune validation de forme ici : les états intermédiaires malformés
//!   (opérateur final, parenthèses déséquilibrées) échouent à l'évaluation.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::eval::eval_expression;
use super::format::format_decimal;
use super::jetons::lire_nombre;

/// Entrée courante au démarrage et après remise à zéro.
const ENTREE_INITIALE: &str = "0";

/// Texte transitoire affiché sur échec d'évaluation (jamais relu).
const TEXTE_ERREUR: &str = "Error";

/// Les quatre opérateurs binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

/// Jeton d'entrée : une unité classifiée produite par la couche UI
/// (bouton cliqué ou caractère tapé) et consommée par l'accumulateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Chiffre(u8), // 0..=9
    DoubleZero,  // touche "00"
    Point,
    Operateur(Operateur),
    ParOuvrante,
    ParFermante,
    Pourcent,
    Effacer,  // C / Échap
    Retour,   // Backspace
    Egal,     // = / Entrée
}

impl Jeton {
    /// Classifie un caractère clavier. Retourne None pour tout le reste
    /// (les touches Entrée/Backspace/Échap passent par des événements clavier
    /// dédiés, pas par du texte).
    pub fn depuis_car(c: char) -> Option<Jeton> {
        match c {
            '0'..='9' => Some(Jeton::Chiffre(c as u8 - b'0')),
            '.' => Some(Jeton::Point),
            '+' => Some(Jeton::Operateur(Operateur::Plus)),
            '-' => Some(Jeton::Operateur(Operateur::Moins)),
            '*' => Some(Jeton::Operateur(Operateur::Fois)),
            '/' => Some(Jeton::Operateur(Operateur::Divise)),
            '(' => Some(Jeton::ParOuvrante),
            ')' => Some(Jeton::ParFermante),
            '%' => Some(Jeton::Pourcent),
            _ => None,
        }
    }
}

/// Demande de rendu : les deux zones de texte que la vue doit afficher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    /// Ligne haute : expression validée (peut finir par un opérateur).
    pub expression: String,
    /// Ligne basse : entrée en cours (ou "Error", transitoire).
    pub entree: String,
}

/// État de l'accumulateur : les deux chaînes, rien d'autre.
///
/// Une seule instance vit dans l'état de l'application ; toutes les
/// mutations passent par `appliquer` / `reinitialiser`.
#[derive(Clone, Debug)]
pub struct Accumulateur {
    expression_totale: String,
    entree_courante: String,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            expression_totale: String::new(),
            entree_courante: ENTREE_INITIALE.to_string(),
        }
    }
}

impl Accumulateur {
    /// Remise à zéro (jeton C, aussi exposée pour l'initialisation).
    pub fn reinitialiser(&mut self) -> Affichage {
        self.expression_totale.clear();
        self.entree_courante = ENTREE_INITIALE.to_string();
        self.affichage()
    }

    /// Applique un jeton et retourne les textes à afficher.
    /// Totale : aucune erreur ne franchit cette frontière.
    pub fn appliquer(&mut self, jeton: Jeton) -> Affichage {
        match jeton {
            Jeton::Chiffre(d) => self.saisir_chiffre(d),
            Jeton::DoubleZero => self.saisir_double_zero(),
            Jeton::Point => self.entree_courante.push('.'),
            Jeton::ParOuvrante => self.entree_courante.push('('),
            Jeton::ParFermante => self.entree_courante.push(')'),
            Jeton::Operateur(op) => self.saisir_operateur(op),
            Jeton::Pourcent => return self.appliquer_pourcent(),
            Jeton::Retour => self.retour_arriere(),
            Jeton::Effacer => return self.reinitialiser(),
            Jeton::Egal => return self.evaluer(),
        }
        self.affichage()
    }

    /// Textes courants, sans mutation.
    pub fn affichage(&self) -> Affichage {
        Affichage {
            expression: self.expression_totale.clone(),
            entree: self.entree_courante.clone(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    fn saisir_chiffre(&mut self, d: u8) {
        let c = (b'0' + d) as char;
        if self.entree_courante == ENTREE_INITIALE {
            // "0" puis un chiffre : le zéro de tête saute.
            self.entree_courante = c.to_string();
        } else {
            self.entree_courante.push(c);
        }
    }

    fn saisir_double_zero(&mut self) {
        // "00" sur "0" : sans effet ; sinon on concatène (y compris sur
        // entrée vide, juste après un opérateur).
        if self.entree_courante != ENTREE_INITIALE {
            self.entree_courante.push_str("00");
        }
    }

    fn saisir_operateur(&mut self, op: Operateur) {
        if !self.entree_courante.is_empty() {
            // Valide l'entrée courante : elle rejoint l'expression totale,
            // suivie de l'opérateur.
            self.expression_totale.push_str(&self.entree_courante);
            self.expression_totale.push(op.symbole());
            self.entree_courante.clear();
        } else if self.expression_totale.ends_with(['+', '-', '*', '/']) {
            // Entrée vide + opérateur répété : le dernier tapé gagne.
            self.expression_totale.pop();
            self.expression_totale.push(op.symbole());
        }
        // Sinon : aucune expression commencée, jeton ignoré.
    }

    fn retour_arriere(&mut self) {
        if self.entree_courante.is_empty() {
            return;
        }
        self.entree_courante.pop();
        if self.entree_courante.is_empty() {
            self.entree_courante = ENTREE_INITIALE.to_string();
        }
    }

    /* ------------------------ Pourcent / Égal ------------------------ */

    fn appliquer_pourcent(&mut self) -> Affichage {
        if self.entree_courante.is_empty() {
            return self.affichage();
        }
        match lire_nombre(&self.entree_courante) {
            Some(v) => {
                let cent = BigRational::from_integer(BigInt::from(100));
                self.entree_courante = format_decimal(&(v / cent));
                self.affichage()
            }
            // L'entrée n'est pas un nombre (ex: "(3") : même chemin d'erreur
            // qu'une évaluation ratée.
            None => self.affichage_erreur(),
        }
    }

    fn evaluer(&mut self) -> Affichage {
        if self.entree_courante.is_empty() && self.expression_totale.is_empty() {
            return self.affichage();
        }

        let expression = format!("{}{}", self.expression_totale, self.entree_courante);
        match eval_expression(&expression) {
            Ok(resultat) => {
                self.expression_totale.clear();
                self.entree_courante = resultat;
                self.affichage()
            }
            Err(_) => self.affichage_erreur(),
        }
    }

    /// Affiche "Error" un seul cycle de rendu ; l'état repart propre, la
    /// frappe suivante démarre comme au lancement.
    fn affichage_erreur(&mut self) -> Affichage {
        self.expression_totale.clear();
        self.entree_courante = ENTREE_INITIALE.to_string();
        Affichage {
            expression: String::new(),
            entree: TEXTE_ERREUR.to_string(),
        }
    }
}
