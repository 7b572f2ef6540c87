//! Machine de saisie.
//!
//! Possède tout l’état d’une session de calcul :
//! - `affichage`        : opérande en cours, résultat, ou "Error"
//! - `expression`       : suite alternée opérande/opérateur pas encore évaluée
//! - `attente_operande` : le prochain chiffre démarre un nouvel opérande
//!
//! Politique de chaînage : différée. Un opérateur n’évalue rien ; `evaluer`
//! réduit toute l’expression avec précédence (× ÷ avant + -).
//!
//! Aucune erreur ne sort d’ici : tout échec devient l’affichage "Error",
//! dont on sort par `effacer`, `evaluer` ou un opérateur (les trois remettent à "0"),
//! ou par une saisie de chiffre qui remplace l’affichage.

use tracing::{debug, warn};

use super::erreur::ErreurCalcul;
use super::eval::{evaluer_sequence, DemarcheNoyau};
use super::jetons::{Jeton, Operateur};
use super::reglages::Reglages;
use super::touches::Touche;

/// Valeur d’affichage en cas d’échec.
pub const ERREUR: &str = "Error";

const ZERO: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Saisie,
    AttenteOperande,
    Erreur,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    affichage: String,
    expression: Vec<Jeton>,
    attente_operande: bool,

    reglages: Reglages,

    // Diagnostic : cause du dernier "Error", démarche du dernier résultat.
    derniere_erreur: Option<ErreurCalcul>,
    demarche: Option<DemarcheNoyau>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            affichage: ZERO.to_string(),
            expression: Vec::new(),
            attente_operande: false,
            reglages,
            derniere_erreur: None,
            demarche: None,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Seule valeur dont la vue a besoin.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn expression(&self) -> &[Jeton] {
        &self.expression
    }

    pub fn etat(&self) -> Etat {
        if self.est_en_erreur() {
            Etat::Erreur
        } else if self.attente_operande {
            Etat::AttenteOperande
        } else {
            Etat::Saisie
        }
    }

    pub fn est_en_erreur(&self) -> bool {
        self.affichage == ERREUR
    }

    pub fn derniere_erreur(&self) -> Option<&ErreurCalcul> {
        self.derniere_erreur.as_ref()
    }

    pub fn demarche(&self) -> Option<&DemarcheNoyau> {
        self.demarche.as_ref()
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn reglages_mut(&mut self) -> &mut Reglages {
        &mut self.reglages
    }

    /* ------------------------ Événements ------------------------ */

    /// Point d’entrée unique de la vue : une touche, puis l’affichage à jour.
    pub fn appuyer(&mut self, touche: Touche) -> &str {
        debug!(?touche, affichage = %self.affichage, "touche");

        match touche {
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Virgule => self.saisir_virgule(),
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Egal => {
                self.evaluer();
            }
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour_arriere(),
        }

        &self.affichage
    }

    /// Chiffre 0..=9 (au-delà : ignoré).
    pub fn saisir_chiffre(&mut self, chiffre: u8) {
        if let Some(c) = char::from_digit(u32::from(chiffre), 10) {
            self.saisir(c);
        }
    }

    pub fn saisir_virgule(&mut self) {
        self.saisir('.');
    }

    fn saisir(&mut self, c: char) {
        // Nouvel opérande : après un opérateur, ou pour sortir de "Error".
        if self.est_en_erreur() || self.attente_operande {
            self.affichage = if c == '.' {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.attente_operande = false;
            self.derniere_erreur = None;
            return;
        }

        // Un seul point par opérande.
        if c == '.' && self.affichage.contains('.') {
            return;
        }

        // Pas de zéros de tête.
        if self.affichage == ZERO && c != '.' {
            self.affichage = c.to_string();
            return;
        }

        if self.affichage.len() >= self.reglages.longueur_max {
            debug!(longueur = self.affichage.len(), "saisie ignorée: opérande plein");
            return;
        }

        self.affichage.push(c);
    }

    /// Opérateur : empile l’opérande affiché, ou remplace l’opérateur
    /// précédent si aucun opérande n’a été saisi depuis.
    pub fn saisir_operateur(&mut self, op: Operateur) {
        if self.est_en_erreur() {
            // après une erreur, un opérateur remet à zéro au lieu d’enchaîner
            self.effacer();
            return;
        }

        match self.expression.last_mut() {
            Some(Jeton::Operateur(dernier)) if self.attente_operande => {
                debug!(ancien = %dernier, nouveau = %op, "opérateur remplacé");
                *dernier = op;
            }
            _ => {
                self.expression
                    .push(Jeton::Operande(self.affichage.clone()));
                self.expression.push(Jeton::Operateur(op));
            }
        }

        self.attente_operande = true;
    }

    /// "=" : réduit expression + affichage, puis repart de ce résultat.
    pub fn evaluer(&mut self) -> &str {
        if self.est_en_erreur() {
            self.effacer();
            return &self.affichage;
        }

        let mut sequence = std::mem::take(&mut self.expression);
        sequence.push(Jeton::Operande(self.affichage.clone()));

        match evaluer_sequence(&sequence, self.reglages.precision) {
            Ok((affichage, demarche)) => {
                self.affichage = affichage;
                self.demarche = Some(demarche);
                self.derniere_erreur = None;
            }
            Err(e) => {
                warn!(erreur = %e, "évaluation impossible");
                self.affichage = ERREUR.to_string();
                self.demarche = None;
                self.derniere_erreur = Some(e);
            }
        }

        self.attente_operande = false;
        &self.affichage
    }

    /// C : remise à zéro complète (les réglages restent).
    pub fn effacer(&mut self) {
        self.affichage = ZERO.to_string();
        self.expression.clear();
        self.attente_operande = false;
        self.derniere_erreur = None;
        self.demarche = None;
    }

    /// ← : retire le dernier caractère ; jamais en dessous de "0".
    pub fn retour_arriere(&mut self) {
        if self.est_en_erreur() || self.affichage.chars().count() <= 1 {
            self.affichage = ZERO.to_string();
            self.derniere_erreur = None;
            return;
        }

        self.affichage.pop();

        // "-5" -> "-" n’est pas un nombre
        if matches!(self.affichage.as_str(), "-" | "-0") {
            self.affichage = ZERO.to_string();
        }
    }
}
