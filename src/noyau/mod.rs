//! Noyau séquentiel
//!
//! Organisation interne :
//! - journal.rs       : journal d'entrées (append-only)
//! - format.rs        : texte d'opérande (≤6 décimales, pur)
//! - operations.rs    : table des opérations (somme fermée de pointeurs fn)
//! - verifications.rs : contrôles non fatals (racine négative, division par zéro)
//! - eval.rs          : rejouage du journal (attente binaire + description)
//! - cerveau.rs       : API publique (Cerveau)

pub mod cerveau;
pub mod eval;
pub mod format;
pub mod journal;
pub mod operations;
pub mod verifications;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use cerveau::Cerveau;
pub use eval::Evaluation;
