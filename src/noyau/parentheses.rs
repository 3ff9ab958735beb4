// src/noyau/parentheses.rs
//
// Appariement des parenthèses par compteur de profondeur (O(n)).
// Les autres caractères sont ignorés.

/// true ssi la profondeur ne devient jamais négative et revient à 0 en fin de chaîne.
pub fn parentheses_equilibrees(expression: &str) -> bool {
    let mut profondeur: usize = 0;

    for c in expression.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                // ")" sans "(" ouvrante : échec immédiat
                match profondeur.checked_sub(1) {
                    Some(p) => profondeur = p,
                    None => return false,
                }
            }
            _ => {}
        }
    }

    profondeur == 0
}
