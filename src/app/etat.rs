//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UNE session de calcul (`Calculatrice`) et traduire les
//! libellés reçus de la vue en touches du noyau.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `Calculatrice::appuyer`.
//! - Une session = une instance, jamais partagée.

use tracing::debug;

use crate::noyau::{Calculatrice, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche(&mut self, touche: Touche) {
        self.calc.appuyer(touche);
    }

    /// Bouton de la grille (par libellé).
    pub fn libelle(&mut self, libelle: &str) {
        match Touche::depuis_libelle(libelle) {
            Some(t) => self.touche(t),
            None => debug!(libelle, "libellé sans touche"),
        }
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn set_precision(&mut self, precision: usize) {
        self.calc.reglages_mut().set_precision(precision);
    }

    pub fn set_longueur_max(&mut self, longueur: usize) {
        self.calc.reglages_mut().set_longueur_max(longueur);
    }
}
