// src/noyau/erreur.rs
//
// Taxonomie unique des échecs du noyau.
// Chaque étape (validation, parenthèses, conversion, évaluation) renvoie
// un `Result<_, ErreurCalc>` : aucun panic, aucune erreur "texte libre".

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Caractère hors alphabet `0-9 + - * / ^ ( )` (position dans le texte saisi).
    #[error("caractère invalide '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("parenthèses non appariées")]
    UnmatchedParen,

    /// Défensif : ne devrait pas arriver après validation.
    #[error("jeton inattendu: '{0}'")]
    InvalidToken(char),

    #[error("division par zéro")]
    DivisionByZero,

    /// Pile d’opérandes incohérente (ex: "+5", "5 5", entrée vide).
    #[error("expression mal formée")]
    MalformedExpression,

    #[error("dépassement de capacité (entier 64 bits)")]
    Overflow,

    #[error("exposant négatif (puissance entière seulement)")]
    NegativeExponent,
}
