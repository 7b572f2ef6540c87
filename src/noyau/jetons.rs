// src/noyau/jetons.rs
//
// Jetons de la calculatrice : opérandes (texte affiché) et opérateurs.
// La saisie produit déjà une suite alternée ; on ne tokenize donc pas une
// chaîne libre, on convertit chaque opérande en rationnel exact.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{ErreurCalcul, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe affiché sur le bouton.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Accepte les glyphes de la grille et les alias clavier `*` et `/`.
    pub fn from_glyph(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    /// a op b, en exact. Seule la division peut échouer.
    pub fn appliquer(self, a: &BigRational, b: &BigRational) -> Result<BigRational> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyphe())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Opérande tel qu’affiché (ex: "12", "0.5", "-3").
    Operande(String),
    Operateur(Operateur),
}

impl Jeton {
    pub fn est_operateur(&self) -> bool {
        matches!(self, Jeton::Operateur(_))
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Operande(s) => f.write_str(s),
            Jeton::Operateur(op) => write!(f, "{op}"),
        }
    }
}

/// Convertit un opérande décimal en rationnel exact.
///
/// Forme acceptée : `-?chiffres[.chiffres]`, au moins un chiffre.
/// `"5."` et `".5"` passent (saisie en cours), `"-"` et `"1.2.3"` non.
pub fn parse_operande(s: &str) -> Result<BigRational> {
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (entier, frac) = corps.split_once('.').unwrap_or((corps, ""));

    if entier.is_empty() && frac.is_empty() {
        return Err(ErreurCalcul::malformee(format!("opérande vide: {s:?}")));
    }
    let tout_chiffres = |t: &str| t.chars().all(|c| c.is_ascii_digit());
    if !tout_chiffres(entier) || !tout_chiffres(frac) {
        return Err(ErreurCalcul::malformee(format!("opérande non numérique: {s:?}")));
    }

    // 12.34 -> 1234 / 10^2
    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::malformee(format!("opérande invalide: {s:?}")))?;
    let d = BigInt::from(10).pow(frac.len() as u32);

    let r = BigRational::new(n, d);
    Ok(if negatif { -r } else { r })
}

/// Format utilitaire (journal / “démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
