//! Scénarios boutons : une suite de libellés de la grille, un affichage attendu.
//!
//! On passe par `Touche::depuis_libelle` pour tester exactement le chemin
//! qu’emprunte la vue.

use super::saisie::{Calculatrice, ERREUR};
use super::touches::Touche;

fn clique(calc: &mut Calculatrice, libelles: &[&str]) {
    for l in libelles {
        let t = Touche::depuis_libelle(l).unwrap_or_else(|| panic!("libellé inconnu {l:?}"));
        calc.appuyer(t);
    }
}

fn affiche(libelles: &[&str]) -> String {
    let mut calc = Calculatrice::default();
    clique(&mut calc, libelles);
    calc.affichage().to_string()
}

fn assert_affiche(libelles: &[&str], attendu: &str) {
    assert_eq!(affiche(libelles), attendu, "séquence={libelles:?}");
}

/* ------------------------ Quatre opérations ------------------------ */

#[test]
fn addition() {
    assert_affiche(&["5", "+", "6", "="], "11");
}

#[test]
fn soustraction() {
    assert_affiche(&["8", "-", "3", "="], "5");
}

#[test]
fn multiplication() {
    assert_affiche(&["7", "×", "6", "="], "42");
}

#[test]
fn division() {
    assert_affiche(&["1", "2", "÷", "4", "="], "3");
}

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn precedence_respectee() {
    assert_affiche(&["2", "+", "3", "×", "4", "="], "14");
    assert_affiche(&["2", "×", "3", "+", "4", "="], "10");
    assert_affiche(&["1", "0", "-", "2", "÷", "4", "="], "9.5");
}

#[test]
fn plusieurs_operations_sans_egal() {
    assert_affiche(&["2", "+", "2", "+", "2", "="], "6");
}

#[test]
fn substitution_d_operateur() {
    assert_affiche(&["9", "+", "-", "5", "="], "4");
}

#[test]
fn nouvel_operande_apres_operateur() {
    assert_affiche(&["3", "+", "5"], "5");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn zeros_de_tete() {
    assert_affiche(&["0", "0", "1", "2"], "12");
}

#[test]
fn decimales() {
    assert_affiche(&["3", ".", "5", "+", "2", ".", "2", "="], "5.7");
}

#[test]
fn un_seul_point_par_nombre() {
    assert_affiche(&["1", ".", "2", ".", "3"], "1.23");
}

#[test]
fn entier_ou_decimal_selon_resultat() {
    let mut calc = Calculatrice::default();
    clique(&mut calc, &["7", "÷", "2", "="]);
    assert_eq!(calc.affichage(), "3.5");
    clique(&mut calc, &["C", "8", "÷", "4", "="]);
    assert_eq!(calc.affichage(), "2");
}

#[test]
fn pas_d_artefact_flottant() {
    assert_affiche(&["0", ".", "1", "+", "0", ".", "2", "="], "0.3");
    assert_affiche(&["1", "÷", "3", "="], "0.33333333");
}

/* ------------------------ C / ← ------------------------ */

#[test]
fn effacer_remet_a_zero() {
    let mut calc = Calculatrice::default();
    clique(&mut calc, &["9", "+", "1", "="]);
    assert_eq!(calc.affichage(), "10");
    clique(&mut calc, &["C"]);
    assert_eq!(calc.affichage(), "0");
}

#[test]
fn retour_efface_le_dernier_chiffre() {
    let mut calc = Calculatrice::default();
    clique(&mut calc, &["1", "2", "3"]);
    assert_eq!(calc.affichage(), "123");
    for attendu in ["12", "1", "0", "0"] {
        clique(&mut calc, &["←"]);
        assert_eq!(calc.affichage(), attendu);
    }
}

/* ------------------------ Erreur ------------------------ */

#[test]
fn division_par_zero() {
    assert_affiche(&["4", "÷", "0", "="], ERREUR);
}

#[test]
fn erreur_effacee_par_c() {
    assert_affiche(&["5", "÷", "0", "=", "C"], "0");
}

#[test]
fn egal_apres_erreur() {
    assert_affiche(&["5", "÷", "0", "=", "="], "0");
}

#[test]
fn operateur_apres_erreur_n_enchaine_pas() {
    assert_affiche(&["5", "÷", "0", "=", "+", "3", "="], "3");
}

#[test]
fn division_par_zero_au_milieu() {
    assert_affiche(&["1", "+", "6", "÷", "0", "×", "2", "="], ERREUR);
}
