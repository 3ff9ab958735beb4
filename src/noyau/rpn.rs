// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans parenthèses
// - Puis évaluer la RPN avec une pile d’opérandes
//
// Règles:
// - '+', '-', '*', '/' : associatifs à gauche
// - '^' : associatif à droite (2^3^2 = 2^(3^2) = 512)
// - pas de moins unaire : "-5" est une expression mal formée
// - grammaire infixe stricte : opérande et opérateur alternent,
//   "3 3+" ou "(1)(2)" sont mal formés (pas de juxtaposition)

use num_traits::{checked_pow, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

use super::erreur::ErreurCalc;
use super::jetons::{tokenize, Associativite, Entier, Operateur, Tok};

/// Doit-on sortir `top` de la pile avant d’empiler `op` ?
fn doit_depiler(top: &Tok, op: Operateur) -> bool {
    let p_top = top.precedence();
    let p_op = op.precedence();

    match op.associativite() {
        Associativite::Gauche => p_top >= p_op,
        Associativite::Droite => p_top > p_op,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(+), Num(4)]
///   rpn:    [Num(3), Num(4), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true : on attend un nombre ou '(' ; false : un opérateur ou ')'
    let mut attend_operande = true;

    for &tok in tokens {
        let est_operande = matches!(tok, Tok::Num(_) | Tok::LPar);
        if est_operande != attend_operande {
            return Err(ErreurCalc::MalformedExpression);
        }

        match tok {
            Tok::Num(_) => {
                out.push(tok);
                attend_operande = false;
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide sans '(' => non appariée
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::UnmatchedParen),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || !doit_depiler(top, op) {
                        break;
                    }
                    out.extend(ops.pop());
                }
                ops.push(tok);
                attend_operande = true;
            }
        }
    }

    // fin sur un opérateur (ou entrée vide)
    if attend_operande {
        return Err(ErreurCalc::MalformedExpression);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ErreurCalc::UnmatchedParen);
        }
        out.push(top);
    }

    Ok(out)
}

/// Texte infixe -> RPN (tokenize + shunting-yard).
pub fn to_postfix(expression: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let jetons = tokenize(expression)?;
    to_rpn(&jetons)
}

/// Applique un opérateur binaire ; tout dépassement est une erreur typée.
fn appliquer(op: Operateur, a: Entier, b: Entier) -> Result<Entier, ErreurCalc> {
    let r = match op {
        Operateur::Plus => CheckedAdd::checked_add(&a, &b),
        Operateur::Minus => CheckedSub::checked_sub(&a, &b),
        Operateur::Star => CheckedMul::checked_mul(&a, &b),
        Operateur::Slash => {
            if b == 0 {
                return Err(ErreurCalc::DivisionByZero);
            }
            // troncature vers zéro ; i64::MIN / -1 => None
            CheckedDiv::checked_div(&a, &b)
        }
        Operateur::Caret => {
            if b < 0 {
                return Err(ErreurCalc::NegativeExponent);
            }
            let exp = usize::try_from(b).map_err(|_| ErreurCalc::Overflow)?;
            checked_pow(a, exp)
        }
    };

    r.ok_or(ErreurCalc::Overflow)
}

/// Évalue une RPN.
///
/// - Num(n) : empile n
/// - Op : dépile droite puis gauche, empile le résultat
/// - Fin : exactement une valeur doit rester
pub fn evaluate(rpn: &[Tok]) -> Result<Entier, ErreurCalc> {
    let mut st: Vec<Entier> = Vec::new();

    for tok in rpn {
        match *tok {
            Tok::Num(n) => st.push(n),

            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurCalc::MalformedExpression)?;
                let a = st.pop().ok_or(ErreurCalc::MalformedExpression)?;
                st.push(appliquer(op, a, b)?);
            }

            Tok::LPar => return Err(ErreurCalc::InvalidToken('(')),
            Tok::RPar => return Err(ErreurCalc::InvalidToken(')')),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalc::MalformedExpression),
    }
}
