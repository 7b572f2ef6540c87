// src/noyau/format.rs
//
// Rationnel exact -> texte d’affichage.
// Arrondi à `precision` décimales (moitié loin de zéro), zéros finaux retirés,
// jamais de "-0" ni de point final.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^precision) en texte décimal compact.
fn scaled_to_decimal(scaled: &BigInt, precision: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(precision);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let mut out = int_part.to_string();

    if !frac_part.is_zero() {
        let mut frac = frac_part.to_str_radix(10);
        while frac.len() < precision {
            frac.insert(0, '0');
        }
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    if neg {
        out.insert(0, '-');
    }
    out
}

/// Résultat exact -> valeur d’affichage.
pub fn format_resultat(r: &BigRational, precision: usize) -> String {
    let scaled = (r * BigRational::from_integer(pow10(precision)))
        .round()
        .to_integer();
    scaled_to_decimal(&scaled, precision)
}

/// Rationnel lisible (démarche) : n ou n/d.
pub fn format_rat(r: &BigRational) -> String {
    if r.is_integer() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}
