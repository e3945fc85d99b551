// src/noyau/journal.rs

/// Une entrée du journal (l'enregistrement durable de ce que l'utilisateur
/// a tapé, dans l'ordre).
///
/// Invariants :
/// - append-only : on n'édite jamais une entrée existante
///   (seules exceptions : `annuler` retire la dernière, `effacer` vide tout)
/// - le `texte` d'un opérande est figé au moment de l'ajout
///   (voir format.rs — le rejouage ne re-formate jamais)
#[derive(Clone, Debug, PartialEq)]
pub enum Entree {
    Operande { valeur: f64, texte: String },
    Operation(String),
    Variable(String),
}
