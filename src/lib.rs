// src/lib.rs
//
// Calculatrice séquentielle — cœur de calcul (sans UI)
// ----------------------------------------------------
// But:
// - Journal d'entrées (opérandes, variables, symboles) rejoué à la demande
// - Résultat courant + opération en attente + description lisible + erreur
// - Aucune UI ici : clavier, affichage et traçage de courbes sont des
//   consommateurs externes de `evaluer`.
//
// IMPORTANT (structure projet):
// - Toute la logique vit dans src/noyau/ (même découpage que d'habitude:
//   un fichier par préoccupation + campagnes de tests séparées).
// - Ici: déclaration + ré-exports seulement.

pub mod noyau;

// Ré-export pratique : `use calculatrice_sequentielle::Cerveau;`
pub use noyau::{Cerveau, Evaluation};
