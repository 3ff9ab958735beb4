// src/noyau/validation.rs
//
// Filtre d’alphabet : purement syntaxique, ne garantit pas une expression lisible.
// Politique espaces : le pipeline retire les espaces AVANT (voir `sans_espaces`),
// la validation reste donc stricte (un espace ici = caractère invalide).

/// Alphabet autorisé.
/// Pas de '.' : pas de décimaux, et tout ce qui passe ce filtre est un jeton
/// connu de `tokenize` (InvalidToken reste inatteignable après validation).
pub const ALPHABET: &str = "0123456789+-*/()^";

fn est_autorise(c: char) -> bool {
    ALPHABET.contains(c)
}

/// true si tous les caractères sont dans l’alphabet.
pub fn est_valide(expression: &str) -> bool {
    expression.chars().all(est_autorise)
}

/// Premier caractère refusé hors espaces : (position en caractères dans le texte
/// tel que saisi, caractère).
pub fn premier_invalide(expression: &str) -> Option<(usize, char)> {
    expression
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_whitespace() && !est_autorise(*c))
}

/// Retire tous les espaces (y compris tabulations, Unicode).
pub fn sans_espaces(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
