// src/console.rs
//
// Coquille console (boucle de lecture)
// ------------------------------------
// - Une ligne = une expression (rognée)
// - "exit" termine, "help" affiche le manuel (insensible à la casse)
// - Chaque réponse est suivie d’une ligne vide
// - Aucune erreur du noyau ne termine le processus

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::noyau;

const TITRE: &str = "Calculatrice entière";

fn ecrire_manuel<W: Write>(sortie: &mut W) -> io::Result<()> {
    writeln!(sortie, "{TITRE}")?;
    writeln!(sortie, "{}\n", "=".repeat(100))?;
    writeln!(sortie, "Supporte [0-9], [()], [+-*/], [^]")?;
    writeln!(sortie, "Tapez 'exit' pour quitter")?;
    writeln!(sortie, "Tapez 'help' pour afficher ce manuel")?;
    writeln!(
        sortie,
        "Note : pas d’opérations décimales (entiers 64 bits seulement)."
    )?;
    Ok(())
}

/// Ce que la boucle doit faire d’une ligne lue.
#[derive(Debug, PartialEq, Eq)]
enum Commande<'a> {
    Quitter,
    Aide,
    Vide,
    Expression(&'a str),
}

fn interpreter(ligne: &str) -> Commande<'_> {
    let s = ligne.trim();
    let minuscule = s.to_lowercase();

    if minuscule.contains("exit") {
        Commande::Quitter
    } else if minuscule.contains("help") {
        Commande::Aide
    } else if s.is_empty() {
        Commande::Vide
    } else {
        Commande::Expression(s)
    }
}

/// Boucle de lecture : générique pour être testée sans terminal.
pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W) -> io::Result<()> {
    ecrire_manuel(&mut sortie)?;

    let mut lignes = entree.lines();

    loop {
        write!(sortie, "Expression :\n> ")?;
        sortie.flush()?;

        // fin d’entrée (Ctrl-D) = sortie propre
        let Some(ligne) = lignes.next() else {
            writeln!(sortie)?;
            info!("fin d’entrée");
            break;
        };
        let ligne = ligne?;

        match interpreter(&ligne) {
            Commande::Quitter => {
                writeln!(sortie, "Au revoir !")?;
                break;
            }
            Commande::Aide => ecrire_manuel(&mut sortie)?,
            Commande::Vide => writeln!(sortie, "Erreur : expression vide.\n")?,
            Commande::Expression(s) => {
                debug!("console: {s:?}");
                match noyau::run(s) {
                    Ok(v) => writeln!(sortie, "{v}\n")?,
                    Err(e) => writeln!(sortie, "Erreur : {e}.\n")?,
                }
            }
        }
    }

    sortie.flush()
}

/// Point d’entrée console (stdin/stdout).
pub fn lancer() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    boucle(stdin.lock(), stdout.lock())
}
