//! Noyau — évaluation (pipeline pur)
//!
//! suite de jetons -> (opérateur final retiré) -> RPN -> valeur exacte -> affichage
//!
//! Aucun état UI ici : la machine de saisie fournit la suite et décide quoi
//! faire de l’erreur.

use tracing::debug;

use super::erreur::{ErreurCalcul, Result};
use super::format::{format_rat, format_resultat};
use super::jetons::{format_jetons, Jeton};
use super::rpn::{reduire_rpn, vers_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    /// Valeur exacte avant arrondi (n ou n/d).
    pub valeur: String,
}

/// API publique : évalue une suite opérande/opérateur et retourne
/// - la valeur d’affichage (arrondie à `precision` décimales)
/// - la démarche (jetons, rpn, valeur exacte)
pub fn evaluer_sequence(sequence: &[Jeton], precision: usize) -> Result<(String, DemarcheNoyau)> {
    // 1) "5 +" puis "=" : l’opérateur orphelin est ignoré
    let sequence = match sequence.split_last() {
        Some((dernier, reste)) if dernier.est_operateur() => reste,
        _ => sequence,
    };
    if sequence.is_empty() {
        return Err(ErreurCalcul::malformee("expression vide"));
    }

    // 2) RPN
    let rpn = vers_rpn(sequence)?;

    // 3) Réduction exacte
    let valeur = reduire_rpn(&rpn)?;

    // 4) Affichage
    let affichage = format_resultat(&valeur, precision);

    let d = DemarcheNoyau {
        jetons: format_jetons(sequence),
        rpn: format_jetons(&rpn),
        valeur: format_rat(&valeur),
    };
    debug!(jetons = %d.jetons, rpn = %d.rpn, %affichage, "évaluation");

    Ok((affichage, d))
}
