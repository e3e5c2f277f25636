//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l'unique accumulateur de la session et le dernier
//! affichage qu'il a demandé. Toute la logique de saisie/évaluation vit
//! dans le noyau ; ici on ne fait que relayer les jetons et retenir le
//! résultat du rendu.

use crate::noyau::{Accumulateur, Affichage, Jeton};

#[derive(Clone, Debug)]
pub struct AppCalc {
    accumulateur: Accumulateur,
    affichage: Affichage,
}

impl Default for AppCalc {
    fn default() -> Self {
        let mut accumulateur = Accumulateur::default();
        // Initialisation = remise à zéro : même chemin que le bouton C.
        let affichage = accumulateur.reinitialiser();
        Self {
            accumulateur,
            affichage,
        }
    }
}

impl AppCalc {
    /// Relaye un jeton (clic ou clavier) et retient l'affichage demandé.
    pub fn appliquer_jeton(&mut self, jeton: Jeton) {
        self.affichage = self.accumulateur.appliquer(jeton);
    }

    /// Textes courants des deux lignes (haut: expression, bas: entrée).
    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }
}
