//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - erreurs acceptées : division par zéro, dépassement, exposant négatif
//! - invariant clé : jamais de panic, jamais d’erreur "défensive" (InvalidToken)

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::run;

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

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalc) -> bool {
    matches!(
        e,
        ErreurCalc::DivisionByZero | ErreurCalc::Overflow | ErreurCalc::NegativeExponent
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers, incluant 0 (utile pour les divisions)
    rng.pick(12).to_string()
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("({a}*{b})"),
        4 => format!("({a}/{b})"),
        // exposant borné pour rester dans i64 la plupart du temps
        5 => format!("({a}^{})", rng.pick(4)),
        _ => format!("{a} + {b}"),
    }
}

/// Bruit : caractères pris dans l’alphabet + espace (syntaxe souvent fausse).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const SYMBOLES: &[char] = &[
        '0', '1', '7', '9', '+', '-', '*', '/', '^', '(', ')', ' ',
    ];
    (0..len)
        .map(|_| SYMBOLES[rng.pick(SYMBOLES.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match run(&expr) {
            Ok(v) => {
                assert_eq!(run(&expr), Ok(v), "non déterministe: expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_jamais_de_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(16) as usize;
        let expr = gen_bruit(&mut rng, len);

        // Après validation + parenthèses, la conversion ne doit jamais voir de jeton inconnu.
        if let Err(e) = run(&expr) {
            assert!(
                !matches!(e, ErreurCalc::InvalidToken(_) | ErreurCalc::InvalidCharacter { .. }),
                "erreur incohérente: expr={expr:?} err={e}"
            );
        }
    }
}
