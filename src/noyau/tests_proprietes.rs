//! Tests de propriétés (campagne) : invariants du pipeline sur des familles d’entrées.
//!
//! - alphabet : tout caractère hors alphabet => InvalidCharacter, jamais un nombre
//! - parenthèses : imbrications générées équilibrées => acceptées
//! - déterminisme : deux conversions de la même expression => même RPN, même valeur
//! - budget temps global, tailles bornées

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::erreur::ErreurCalc;
use super::eval::run;
use super::parentheses::parentheses_equilibrees;
use super::rpn::{evaluate, to_postfix};

fn eval_ok(expr: &str) -> i64 {
    run(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Alphabet ------------------------ */

#[test]
fn prop_hors_alphabet_jamais_un_nombre() {
    let intrus = ['a', 'x', '.', ',', '%', '=', '[', ']', '√', 'π', '_', '!'];
    let gabarits = ["{}", "1+{}", "({})*2", "2^3{}", "{}{}{}"];

    for c in intrus {
        for g in gabarits {
            let expr = g.replace("{}", &c.to_string());
            match run(&expr) {
                Err(ErreurCalc::InvalidCharacter { caractere, .. }) => {
                    assert_eq!(caractere, c, "expr={expr:?}")
                }
                autre => panic!("expr={expr:?} : attendu InvalidCharacter, obtenu {autre:?}"),
            }
        }
    }
}

/* ------------------------ Parenthèses ------------------------ */

fn imbrication(profondeur: usize) -> String {
    format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur))
}

#[test]
fn prop_imbrications_equilibrees() {
    for p in 0..64 {
        let e = imbrication(p);
        assert!(parentheses_equilibrees(&e), "e={e:?}");
        assert_eq!(eval_ok(&e), 1);

        // juxtaposition : ((1))+((1))
        let j = format!("{e}+{e}");
        assert!(parentheses_equilibrees(&j), "j={j:?}");
        assert_eq!(eval_ok(&j), 2);
    }
}

#[test]
fn prop_une_parenthese_en_trop_refusee() {
    for p in 1..32 {
        let e = imbrication(p);
        assert_eq!(run(&format!("({e}")), Err(ErreurCalc::UnmatchedParen));
        assert_eq!(run(&format!("{e})")), Err(ErreurCalc::UnmatchedParen));
        assert_eq!(run(&format!("){e}(")), Err(ErreurCalc::UnmatchedParen));
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn prop_conversion_deterministe() {
    for e in ["10-2*3+(4/2)", "2^3^2", "((7))", "1+2*3-4/5^1", "8-3-2"] {
        let a = to_postfix(e).unwrap();
        let b = to_postfix(e).unwrap();
        assert_eq!(a, b, "e={e:?}");
        assert_eq!(evaluate(&a), evaluate(&b), "e={e:?}");
        assert_eq!(evaluate(&a).ok(), Some(eval_ok(e)), "e={e:?}");
    }
}

/* ------------------------ Identités arithmétiques ------------------------ */

#[test]
fn prop_identites_entieres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for a in 0..30i64 {
        budget(t0, max);
        for b in 1..30i64 {
            // a = (a/b)*b + (a - (a/b)*b)
            let q = eval_ok(&format!("{a}/{b}"));
            let r = eval_ok(&format!("{a}-({a}/{b})*{b}"));
            assert_eq!(q * b + r, a, "a={a} b={b}");

            // soustraction associative à gauche
            assert_eq!(eval_ok(&format!("{a}-{b}-1")), a - b - 1);

            // distributivité
            assert_eq!(
                eval_ok(&format!("{a}*({b}+3)")),
                eval_ok(&format!("{a}*{b}+{a}*3"))
            );
        }
    }
}

#[test]
fn prop_puissance_droite_vs_parenthesee() {
    // a^b^c = a^(b^c) ; (a^b)^c peut différer
    for (a, b, c) in [(2, 3, 2), (3, 2, 2), (2, 2, 3), (1, 5, 9)] {
        let droite = eval_ok(&format!("{a}^{b}^{c}"));
        let explicite = eval_ok(&format!("{a}^({b}^{c})"));
        assert_eq!(droite, explicite, "a={a} b={b} c={c}");
    }
    assert_ne!(eval_ok("2^3^2"), eval_ok("(2^3)^2"));
}

/* ------------------------ Limites ------------------------ */

#[test]
fn prop_longue_somme_sans_pile_profonde() {
    let t0 = Instant::now();
    let expr = vec!["1"; 5000].join("+");
    assert_eq!(eval_ok(&expr), 5000);
    budget(t0, Duration::from_millis(500));
}

#[test]
fn prop_depassement_toujours_type() {
    for e in [
        "9223372036854775807*2",
        "3^40",
        "0-9223372036854775807-2",
        "9223372036854775808",
        "(0-9223372036854775807-1)/(0-1)",
    ] {
        assert_eq!(run(e), Err(ErreurCalc::Overflow), "e={e:?}");
    }
}
