// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression en attente (petit) + valeur courante (gros)
// - Grille 4 colonnes : C ÷ × ← / 7 8 9 - / 4 5 6 + / 1 2 3 = / 0 .
// - Tactile : gros boutons, "0" sur deux colonnes
//
// La vue ne lit que l’état exposé par le noyau et n’envoie que des libellés.

use eframe::egui;
use egui::Color32;

use super::etat::AppCalc;
use crate::noyau::jetons::{format_jetons, Jeton};
use crate::noyau::reglages::{LONGUEUR_MAX, PRECISION_MAX};
use crate::noyau::Etat;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Genre {
    Chiffre,
    Operateur,
    Controle,
    Egal,
}

const GRILLE: &[&[(&str, Genre)]] = &[
    &[
        ("C", Genre::Controle),
        ("÷", Genre::Operateur),
        ("×", Genre::Operateur),
        ("←", Genre::Controle),
    ],
    &[
        ("7", Genre::Chiffre),
        ("8", Genre::Chiffre),
        ("9", Genre::Chiffre),
        ("-", Genre::Operateur),
    ],
    &[
        ("4", Genre::Chiffre),
        ("5", Genre::Chiffre),
        ("6", Genre::Chiffre),
        ("+", Genre::Operateur),
    ],
    &[
        ("1", Genre::Chiffre),
        ("2", Genre::Chiffre),
        ("3", Genre::Chiffre),
        ("=", Genre::Egal),
    ],
    &[("0", Genre::Chiffre), (".", Genre::Chiffre)],
];

const ACCENT: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);

fn couleurs(genre: Genre) -> (Color32, Color32) {
    match genre {
        Genre::Chiffre => (Color32::from_rgb(0xf0, 0xf0, 0xf0), Color32::from_rgb(0x22, 0x22, 0x22)),
        Genre::Operateur | Genre::Egal => (ACCENT, Color32::WHITE),
        Genre::Controle => (Color32::from_rgb(0xe3, 0xea, 0xf4), Color32::from_rgb(0x2d, 0x45, 0x68)),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("EasyCalc");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_grille(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);

                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne du haut : ce qui attend "="
                    let attente = format_jetons(self.calc.expression());
                    ui.monospace(if attente.is_empty() { " ".to_string() } else { attente });

                    ui.label(
                        egui::RichText::new(self.calc.affichage())
                            .monospace()
                            .size(36.0)
                            .strong(),
                    );
                });
            });

        if let Some(e) = self.calc.derniere_erreur() {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }

    fn ui_grille(&mut self, ui: &mut egui::Ui) {
        let espace = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - 3.0 * espace) / 4.0).max(48.0);
        let hauteur = 48.0;

        for rangee in GRILLE {
            ui.horizontal(|ui| {
                for &(libelle, genre) in rangee.iter() {
                    let w = if libelle == "0" {
                        2.0 * largeur + espace
                    } else {
                        largeur
                    };

                    let (fond, texte) = couleurs(genre);
                    let mut bouton =
                        egui::Button::new(egui::RichText::new(libelle).size(22.0).color(texte))
                            .fill(fond);
                    if genre == Genre::Operateur && self.operateur_en_attente(libelle) {
                        bouton = bouton.stroke(egui::Stroke::new(2.0, Color32::WHITE));
                    }

                    if ui.add_sized([w, hauteur], bouton).clicked() {
                        self.libelle(libelle);
                    }
                }
            });
        }
    }

    /// Vrai si `libelle` est l’opérateur qui vient d’être pressé.
    fn operateur_en_attente(&self, libelle: &str) -> bool {
        if self.calc.etat() != Etat::AttenteOperande {
            return false;
        }
        match self.calc.expression().last() {
            Some(Jeton::Operateur(op)) => libelle.starts_with(op.glyphe()),
            _ => false,
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label("Précision :");
            let mut p = self.calc.reglages().precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=PRECISION_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }

            ui.separator();

            ui.label("Saisie max :");
            let mut l = self.calc.reglages().longueur_max as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut l)
                    .speed(1)
                    .range(1..=LONGUEUR_MAX as u32)
                    .suffix(" car."),
            );
            if resp.changed() {
                self.set_longueur_max(l as usize);
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.calc.demarche() {
                Some(d) => {
                    Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                    Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                    Self::champ_demarche(ui, "Valeur exacte", "demarche_valeur", &d.valeur);
                }
                None => {
                    ui.monospace("aucun résultat");
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
