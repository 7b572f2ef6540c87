//! Réglages de la calculatrice.
//!
//! Pas de fichier, pas de persistance : des valeurs par défaut et des
//! bornes.

/// Décimales affichées après une évaluation.
pub const PRECISION_DEFAUT: usize = 8;

/// Garde-fou : au-delà, l’affichage déborde de toute façon.
pub const PRECISION_MAX: usize = 15;

/// Caractères maximum dans l’opérande en cours de saisie.
pub const LONGUEUR_DEFAUT: usize = 16;

pub const LONGUEUR_MAX: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub precision: usize,
    pub longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            longueur_max: LONGUEUR_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.min(PRECISION_MAX);
    }

    pub fn set_longueur_max(&mut self, longueur: usize) {
        self.longueur_max = longueur.clamp(1, LONGUEUR_MAX);
    }
}
