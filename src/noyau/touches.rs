// src/noyau/touches.rs
//
// Touches : les seuls événements que la vue envoie au noyau.
// Une touche = une opération de la machine de saisie.

use super::jetons::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
}

impl Touche {
    /// Libellé de bouton -> touche.
    /// Libellés de la grille : 0-9 . + - × ÷ = C ← (alias : * / DEL).
    pub fn depuis_libelle(libelle: &str) -> Option<Touche> {
        match libelle {
            "=" => Some(Touche::Egal),
            "C" => Some(Touche::Effacer),
            "←" | "DEL" => Some(Touche::Retour),
            _ => {
                let mut cs = libelle.chars();
                match (cs.next(), cs.next()) {
                    (Some(c), None) => Touche::depuis_texte(c),
                    _ => None,
                }
            }
        }
    }

    /// Caractère tapé au clavier -> touche.
    /// La virgule est acceptée comme séparateur décimal.
    pub fn depuis_texte(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Touche::Chiffre(d as u8)),
            '.' | ',' => Some(Touche::Virgule),
            '=' => Some(Touche::Egal),
            _ => Operateur::from_glyph(c).map(Touche::Operateur),
        }
    }
}
