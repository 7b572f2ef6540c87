//! Erreurs du noyau.
//!
//! Deux familles seulement. Côté machine de saisie, les deux se replient
//! sur le même affichage "Error" ; la cause reste lisible pour la vue.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression malformée : {0}")]
    ExpressionMalformee(String),
}

impl ErreurCalcul {
    pub fn malformee(msg: impl Into<String>) -> Self {
        Self::ExpressionMalformee(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ErreurCalcul>;
