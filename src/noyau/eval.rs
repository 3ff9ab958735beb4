//! Noyau — évaluation (pipeline réel)
//!
//! espaces retirés -> alphabet -> parenthèses -> tokenize -> RPN -> valeur
//!
//! Remarque : l’alphabet et les parenthèses sont vérifiés sur la forme SANS espaces
//! (la position d’un caractère refusé reste celle du texte saisi),
//! mais la conversion lit le texte d’origine : "3 3" reste deux nombres (=> mal formée),
//! jamais "33".

use log::{debug, warn};

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize, Entier};
use super::parentheses::parentheses_equilibrees;
use super::rpn::{evaluate, to_postfix};
use super::validation::{est_valide, premier_invalide, sans_espaces};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne la valeur + la démarche
/// (jetons, RPN). Aucune valeur partielle en cas d’échec.
pub fn eval_expression(expr_str: &str) -> Result<(Entier, DemarcheNoyau), ErreurCalc> {
    let resultat = pipeline(expr_str);
    if let Err(e) = &resultat {
        warn!("échec d’évaluation de {expr_str:?}: {e}");
    }
    resultat
}

/// Forme courte : seulement la valeur.
pub fn run(expression: &str) -> Result<Entier, ErreurCalc> {
    eval_expression(expression).map(|(v, _d)| v)
}

fn pipeline(expr_str: &str) -> Result<(Entier, DemarcheNoyau), ErreurCalc> {
    let compact = sans_espaces(expr_str);

    // 1) Alphabet (position rapportée dans le texte saisi, espaces compris)
    if !est_valide(&compact) {
        if let Some((position, caractere)) = premier_invalide(expr_str) {
            return Err(ErreurCalc::InvalidCharacter {
                caractere,
                position,
            });
        }
    }

    // 2) Parenthèses
    if !parentheses_equilibrees(&compact) {
        return Err(ErreurCalc::UnmatchedParen);
    }

    // 3) Jetons (démarche seulement)
    let jetons_txt = format_tokens(&tokenize(expr_str)?);
    debug!("jetons: {jetons_txt}");

    // 4) RPN
    let rpn = to_postfix(expr_str)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 5) Valeur
    let valeur = evaluate(&rpn)?;

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };

    Ok((valeur, d))
}
