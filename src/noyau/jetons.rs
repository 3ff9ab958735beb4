// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

/// Entier à largeur fixe du noyau.
pub type Entier = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Discriminant = indice dans `TABLE_OPERATEURS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus = 0,
    Minus = 1,
    Star = 2,
    Slash = 3,
    Caret = 4, // ^
}

#[derive(Debug)]
pub struct EntreeTable {
    pub op: Operateur,
    pub symbole: char,
    pub precedence: u8,
    pub assoc: Associativite,
}

/// Précédence sentinelle de '(' et ')' : jamais comparée aux vrais opérateurs.
pub const PRECEDENCE_PARENTHESE: u8 = 0;

/// Table des opérateurs : immuable, partagée par tout le processus.
pub static TABLE_OPERATEURS: [EntreeTable; 5] = [
    EntreeTable {
        op: Operateur::Plus,
        symbole: '+',
        precedence: 1,
        assoc: Associativite::Gauche,
    },
    EntreeTable {
        op: Operateur::Minus,
        symbole: '-',
        precedence: 1,
        assoc: Associativite::Gauche,
    },
    EntreeTable {
        op: Operateur::Star,
        symbole: '*',
        precedence: 2,
        assoc: Associativite::Gauche,
    },
    EntreeTable {
        op: Operateur::Slash,
        symbole: '/',
        precedence: 2,
        assoc: Associativite::Gauche,
    },
    EntreeTable {
        op: Operateur::Caret,
        symbole: '^',
        precedence: 3,
        assoc: Associativite::Droite,
    },
];

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        TABLE_OPERATEURS
            .iter()
            .find(|e| e.symbole == c)
            .map(|e| e.op)
    }

    fn entree(self) -> &'static EntreeTable {
        &TABLE_OPERATEURS[self as usize]
    }

    pub fn symbole(self) -> char {
        self.entree().symbole
    }

    pub fn precedence(self) -> u8 {
        self.entree().precedence
    }

    pub fn associativite(self) -> Associativite {
        self.entree().assoc
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Entier),
    Op(Operateur),
    LPar,
    RPar,
}

impl Tok {
    pub fn precedence(&self) -> u8 {
        match self {
            Tok::Op(op) => op.precedence(),
            _ => PRECEDENCE_PARENTHESE,
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers sans signe (ex: 12) ; dépassement i64 => Overflow
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            // que des chiffres : seul échec possible = trop grand
            let n = txt.parse::<Entier>().map_err(|_| ErreurCalc::Overflow)?;
            out.push(Tok::Num(n));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => Tok::Op(op),
                None => return Err(ErreurCalc::InvalidToken(c)),
            },
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => n.to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
