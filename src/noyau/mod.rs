//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : ErreurCalcul (division par zéro, expression malformée)
//! - jetons.rs   : opérateurs, opérandes, lecture exacte des décimaux
//! - rpn.rs      : shunting-yard + réduction sur pile (pur)
//! - format.rs   : rationnel -> affichage arrondi
//! - eval.rs     : pipeline complet (pur)
//! - reglages.rs : précision, garde-fou de longueur
//! - touches.rs  : événements envoyés par la vue
//! - saisie.rs   : machine de saisie (état d’une session)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reglages;
pub mod rpn;
pub mod saisie;
pub mod touches;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use saisie::{Calculatrice, Etat};
pub use touches::Touche;
