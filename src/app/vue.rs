// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : expression validée (haut, petit) + entrée (bas, gros)
// - Pavé 4x5 : C ( ) /  ·  7 8 9 *  ·  4 5 6 -  ·  1 2 3 +  ·  00 0 . =
// - Palette sombre par famille de touche, avec nuance de survol
//   (le survol/enfoncé passe par les visuals egui, jamais par l'état)
//
// Note :
// - Le clavier est traité dans app.rs (update) ; ici, uniquement les clics.

use eframe::egui::{self, Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Jeton, Operateur};

/* ------------------------ Palette ------------------------ */

/// Fond de fenêtre.
pub const FOND: Color32 = Color32::from_rgb(0x2E, 0x34, 0x40);

const AFFICHAGE_FOND: Color32 = Color32::from_rgb(0x3B, 0x42, 0x52);
const AFFICHAGE_TEXTE: Color32 = Color32::from_rgb(0xEC, 0xEF, 0xF4);

const NUM_FOND: Color32 = Color32::from_rgb(0x43, 0x4C, 0x5E);
const NUM_TEXTE: Color32 = Color32::from_rgb(0xE5, 0xE9, 0xF0);
const NUM_SURVOL: Color32 = Color32::from_rgb(0x4C, 0x56, 0x6A);

const OP_FOND: Color32 = Color32::from_rgb(0x5E, 0x81, 0xAC);
const OP_TEXTE: Color32 = Color32::from_rgb(0xE5, 0xE9, 0xF0);
const OP_SURVOL: Color32 = Color32::from_rgb(0x81, 0xA1, 0xC1);

const SPECIAL_FOND: Color32 = Color32::from_rgb(0xBF, 0x61, 0x6A);
const SPECIAL_TEXTE: Color32 = Color32::from_rgb(0xEC, 0xEF, 0xF4);
const SPECIAL_SURVOL: Color32 = Color32::from_rgb(0xD0, 0x87, 0x70);

const EGAL_FOND: Color32 = Color32::from_rgb(0xA3, 0xBE, 0x8C);
const EGAL_TEXTE: Color32 = Color32::from_rgb(0x2E, 0x34, 0x40);
const EGAL_SURVOL: Color32 = Color32::from_rgb(0xB4, 0x8E, 0xAD);

/// Famille visuelle d'une touche (fond / texte / survol).
#[derive(Clone, Copy, Debug)]
enum Touche {
    Num,
    Op,
    Special,
    Egal,
}

impl Touche {
    fn couleurs(self) -> (Color32, Color32, Color32) {
        match self {
            Touche::Num => (NUM_FOND, NUM_TEXTE, NUM_SURVOL),
            Touche::Op => (OP_FOND, OP_TEXTE, OP_SURVOL),
            Touche::Special => (SPECIAL_FOND, SPECIAL_TEXTE, SPECIAL_SURVOL),
            Touche::Egal => (EGAL_FOND, EGAL_TEXTE, EGAL_SURVOL),
        }
    }
}

/// Taille d'une touche (4 colonnes dans une fenêtre de 380).
const TAILLE_TOUCHE: [f32; 2] = [82.0, 58.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let affichage = self.affichage();

        egui::Frame::group(ui.style())
            .fill(AFFICHAGE_FOND)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne haute : expression validée (peut être vide).
                    ui.label(
                        RichText::new(ligne_ou_blanc(&affichage.expression))
                            .size(14.0)
                            .color(AFFICHAGE_TEXTE),
                    );
                    // Ligne basse : entrée en cours (ou "Error", transitoire).
                    ui.label(
                        RichText::new(ligne_ou_blanc(&affichage.entree))
                            .size(28.0)
                            .strong()
                            .color(AFFICHAGE_TEXTE),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Touche::Special, Jeton::Effacer);
                self.touche(ui, "(", Touche::Special, Jeton::ParOuvrante);
                self.touche(ui, ")", Touche::Special, Jeton::ParFermante);
                self.touche(ui, "/", Touche::Op, Jeton::Operateur(Operateur::Divise));
                ui.end_row();

                self.touche(ui, "7", Touche::Num, Jeton::Chiffre(7));
                self.touche(ui, "8", Touche::Num, Jeton::Chiffre(8));
                self.touche(ui, "9", Touche::Num, Jeton::Chiffre(9));
                self.touche(ui, "*", Touche::Op, Jeton::Operateur(Operateur::Fois));
                ui.end_row();

                self.touche(ui, "4", Touche::Num, Jeton::Chiffre(4));
                self.touche(ui, "5", Touche::Num, Jeton::Chiffre(5));
                self.touche(ui, "6", Touche::Num, Jeton::Chiffre(6));
                self.touche(ui, "-", Touche::Op, Jeton::Operateur(Operateur::Moins));
                ui.end_row();

                self.touche(ui, "1", Touche::Num, Jeton::Chiffre(1));
                self.touche(ui, "2", Touche::Num, Jeton::Chiffre(2));
                self.touche(ui, "3", Touche::Num, Jeton::Chiffre(3));
                self.touche(ui, "+", Touche::Op, Jeton::Operateur(Operateur::Plus));
                ui.end_row();

                self.touche(ui, "00", Touche::Num, Jeton::DoubleZero);
                self.touche(ui, "0", Touche::Num, Jeton::Chiffre(0));
                self.touche(ui, ".", Touche::Num, Jeton::Point);
                self.touche(ui, "=", Touche::Egal, Jeton::Egal);
                ui.end_row();
            });
    }

    /// Une touche du pavé : couleurs par famille, nuance au survol et à
    /// l'enfoncement, jeton émis au clic.
    fn touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, jeton: Jeton) {
        let (fond, texte, survol) = touche.couleurs();

        let resp = ui
            .scope(|ui| {
                let visuels = &mut ui.style_mut().visuals.widgets;
                visuels.inactive.weak_bg_fill = fond;
                visuels.hovered.weak_bg_fill = survol;
                visuels.active.weak_bg_fill = survol;

                ui.add_sized(
                    TAILLE_TOUCHE,
                    egui::Button::new(RichText::new(label).size(18.0).color(texte)),
                )
            })
            .inner;

        if resp.clicked() {
            self.appliquer_jeton(jeton);
        }
    }
}

/// Un label vide s'écrase verticalement ; on réserve la ligne.
fn ligne_ou_blanc(texte: &str) -> &str {
    if texte.is_empty() {
        " "
    } else {
        texte
    }
}
