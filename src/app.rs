// src/app.rs
//
// Calculatrice Vibrante — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Tout le clavier passe par ici (un événement = un jeton), la vue ne
//   traite que les clics. Un seul chemin de mutation : appliquer_jeton.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Jeton;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier -> jetons, dans l'ordre des événements de la frame.
        // Entrée = évaluer, Backspace = effacer un caractère, Échap = C ;
        // les caractères (chiffres, opérateurs, parenthèses, '.', '%')
        // passent par le texte tapé.
        let jetons = ctx.input(|i| jetons_du_clavier(i));
        for jeton in jetons {
            self.appliquer_jeton(jeton);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(vue::FOND))
            .show(ctx, |ui| {
                self.ui(ui); // méthode publique (dans vue.rs)
            });
    }
}

/// Traduit les événements clavier d'une frame en jetons.
fn jetons_du_clavier(entrees: &egui::InputState) -> Vec<Jeton> {
    let mut out = Vec::new();

    for evenement in &entrees.events {
        match evenement {
            egui::Event::Text(texte) => {
                for c in texte.chars() {
                    if let Some(jeton) = Jeton::depuis_car(c) {
                        out.push(jeton);
                    }
                }
            }
            egui::Event::Key {
                key,
                pressed: true,
                ..
            } => match key {
                egui::Key::Enter => out.push(Jeton::Egal),
                egui::Key::Backspace => out.push(Jeton::Retour),
                egui::Key::Escape => out.push(Jeton::Effacer),
                _ => {}
            },
            _ => {}
        }
    }

    out
}
