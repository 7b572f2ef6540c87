// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la suite alternée opérande/opérateur en RPN (postfix)
// - Puis la réduire sur une pile d’opérandes, en exact
//
// Règles:
// - deux niveaux de précédence : × ÷ (2) au-dessus de + - (1)
// - associativité à gauche : un opérateur entrant sort tout opérateur
//   de précédence >= déjà sur la pile, donc × et ÷ sont résolus dès qu’on
//   croise un + ou un - qui les suit
// - aucune parenthèse, aucun moins unaire (le signe fait partie de l’opérande)

use num_rational::BigRational;

use super::erreur::{ErreurCalcul, Result};
use super::jetons::{parse_operande, Jeton, Operateur};

/// Convertit une suite alternée de jetons en RPN.
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Operateur> = Vec::new();

    // true au début et après chaque opérateur
    let mut attend_operande = true;

    for jeton in jetons {
        match jeton {
            Jeton::Operande(_) => {
                if !attend_operande {
                    return Err(ErreurCalcul::malformee("deux opérandes consécutifs"));
                }
                out.push(jeton.clone());
                attend_operande = false;
            }

            Jeton::Operateur(op) => {
                if attend_operande {
                    return Err(ErreurCalcul::malformee(format!(
                        "opérateur {op} sans opérande à gauche"
                    )));
                }

                while let Some(&haut) = ops.last() {
                    if haut.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Jeton::Operateur(haut));
                    ops.pop();
                }

                ops.push(*op);
                attend_operande = true;
            }
        }
    }

    if jetons.is_empty() {
        return Err(ErreurCalcul::malformee("expression vide"));
    }
    if attend_operande {
        return Err(ErreurCalcul::malformee("opérateur final sans opérande"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Jeton::Operateur(op));
    }

    Ok(out)
}

/// Réduit une RPN sur une pile d’opérandes.
///
/// La première division par zéro interrompt toute la réduction.
pub fn reduire_rpn(rpn: &[Jeton]) -> Result<BigRational> {
    let mut pile: Vec<BigRational> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Operande(s) => pile.push(parse_operande(s)?),

            Jeton::Operateur(op) => {
                let b = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::malformee("pile d’opérandes vide"))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::malformee("pile d’opérandes vide"))?;
                pile.push(op.appliquer(&a, &b)?);
            }
        }
    }

    let valeur = pile
        .pop()
        .ok_or_else(|| ErreurCalcul::malformee("aucune valeur"))?;
    if !pile.is_empty() {
        return Err(ErreurCalcul::malformee("opérandes en trop"));
    }
    Ok(valeur)
}
