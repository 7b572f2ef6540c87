// src/app.rs
//
// EasyCalc — module App (racine)
// ------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, aucun champ texte à l’écran) :
// - chiffres, '.' ou ',', + - * / × ÷, '='
// - Enter = "=", Backspace = "←", Escape/Delete = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Événements d’une frame -> touches, dans l’ordre de frappe.
pub fn touches_depuis_evenements(evenements: &[egui::Event]) -> Vec<Touche> {
    let mut touches = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(t) => touches.extend(t.chars().filter_map(Touche::depuis_texte)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => touches.push(Touche::Egal),
                egui::Key::Backspace => touches.push(Touche::Retour),
                egui::Key::Escape | egui::Key::Delete => touches.push(Touche::Effacer),
                _ => {}
            },
            _ => {}
        }
    }
    touches
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Un DragValue en édition garde ses frappes pour lui.
        if !ctx.wants_keyboard_input() {
            let touches = ctx.input(|i| touches_depuis_evenements(&i.events));
            for t in touches {
                self.touche(t);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
