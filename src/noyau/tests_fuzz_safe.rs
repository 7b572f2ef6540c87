//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine de saisie avec des touches au hasard.
//! - RNG déterministe (seed fixe)
//! - nombre de touches borné
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::jetons::{Jeton, Operateur};
use super::saisie::{Calculatrice, Etat, ERREUR};
use super::touches::Touche;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // pondéré : surtout des chiffres, un peu de tout le reste
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(rng.pick(10) as u8),
        10 | 11 => Touche::Virgule,
        12..=15 => Touche::Operateur(Operateur::TOUS[rng.pick(4) as usize]),
        16 | 17 => Touche::Egal,
        18 => Touche::Retour,
        _ => Touche::Effacer,
    }
}

fn gen_touche_sans_effacer(rng: &mut Rng) -> Touche {
    loop {
        let t = gen_touche(rng);
        if !matches!(t, Touche::Effacer | Touche::Retour) {
            return t;
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_affichage(aff: &str) {
    if aff == ERREUR {
        return;
    }
    let corps = aff.strip_prefix('-').unwrap_or(aff);
    assert!(!corps.is_empty(), "affichage vide ou '-' seul: {aff:?}");
    assert!(
        corps.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "caractère inattendu: {aff:?}"
    );
    assert!(
        corps.matches('.').count() <= 1,
        "plus d’un point: {aff:?}"
    );
    assert!(
        corps.chars().next().is_some_and(|c| c.is_ascii_digit()),
        "doit commencer par un chiffre: {aff:?}"
    );
    if corps.len() > 1 && !corps.starts_with("0.") {
        assert!(!corps.starts_with('0'), "zéro de tête: {aff:?}");
    }
}

fn check_expression(expr: &[Jeton]) {
    // alternance stricte, en commençant par un opérande, finissant par un opérateur
    for (i, j) in expr.iter().enumerate() {
        assert_eq!(
            j.est_operateur(),
            i % 2 == 1,
            "alternance cassée: {expr:?}"
        );
    }
    assert!(expr.len() % 2 == 0, "expression sans opérateur final: {expr:?}");
}

fn check_etat(calc: &Calculatrice) {
    check_affichage(calc.affichage());
    check_expression(calc.expression());

    match calc.etat() {
        Etat::Erreur => {
            assert!(calc.expression().is_empty());
            assert!(calc.derniere_erreur().is_some());
        }
        Etat::AttenteOperande => assert!(!calc.expression().is_empty()),
        Etat::Saisie => {}
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_par_touche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_erreur = 0usize;
    let mut vu_resultat = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut calc = Calculatrice::default();
        for _ in 0..40 {
            let t = gen_touche(&mut rng);
            calc.appuyer(t);
            check_etat(&calc);

            if t == Touche::Egal {
                if calc.est_en_erreur() {
                    vu_erreur += 1;
                } else {
                    vu_resultat += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_resultat > 50, "trop peu de résultats: {vu_resultat}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut calc = Calculatrice::default();
        let mut trace = Vec::new();
        for _ in 0..300 {
            trace.push(calc.appuyer(gen_touche(&mut rng)).to_string());
        }
        trace
    };

    assert_eq!(rejoue(0xBADC0DE), rejoue(0xBADC0DE));
}

#[test]
fn fuzz_safe_effacer_toujours_retour_initial() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let mut calc = Calculatrice::default();
        for _ in 0..(rng.pick(30) + 1) {
            calc.appuyer(gen_touche_sans_effacer(&mut rng));
        }

        calc.effacer();
        assert_eq!(calc.affichage(), "0");
        assert!(calc.expression().is_empty());
        assert_eq!(calc.etat(), Etat::Saisie);

        // idempotence
        calc.effacer();
        assert_eq!(calc.affichage(), "0");
        assert!(calc.expression().is_empty());
    }
}

#[test]
fn fuzz_safe_retour_jamais_sous_zero() {
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..100 {
        let mut calc = Calculatrice::default();
        for _ in 0..(rng.pick(20) + 1) {
            calc.appuyer(gen_touche_sans_effacer(&mut rng));
        }
        for _ in 0..40 {
            calc.retour_arriere();
            check_affichage(calc.affichage());
        }
        assert_eq!(calc.affichage(), "0");
    }
}
