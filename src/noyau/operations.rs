// src/noyau/operations.rs

use std::collections::HashMap;
use std::f64::consts::{E, PI};

use super::verifications::{division_par_zero, racine_negative};

/* ------------------------ Signatures des opérations ------------------------ */

pub type FnNullaire = fn() -> f64;
pub type FnUnaire = fn(f64) -> f64;
pub type FnBinaire = fn(f64, f64) -> f64;

/// Contrôle non fatal : `Some(message)` si l'opérande est problématique.
pub type FnVerification = fn(f64) -> Option<String>;

/// Une opération de la table, somme fermée de pointeurs de fonction.
/// Pas de dispatch dynamique : les sortes d'opérations sont connues et
/// closes (constante, nullaire, unaire ± contrôle, binaire ± contrôle, égal).
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Nullaire(FnNullaire),
    Unaire(FnUnaire),
    UnaireVerifiee(FnVerification, FnUnaire),
    Binaire(FnBinaire),
    BinaireVerifiee(FnVerification, FnBinaire),
    Egal,
}

/* ------------------------ Table par défaut ------------------------ */

/// Table par défaut, immuable après construction (seul ajout permis ensuite :
/// `Cerveau::ajouter_operation_unaire`).
pub fn table_defaut() -> HashMap<String, Operation> {
    use Operation::*;

    let entrees: [(&str, Operation); 16] = [
        ("π", Constante(PI)),
        ("e", Constante(E)),
        ("Rand", Nullaire(|| rand::random::<f64>())),
        ("√", UnaireVerifiee(racine_negative, f64::sqrt)),
        ("∛", Unaire(|x| x.powf(1.0 / 3.0))),
        ("sin", Unaire(f64::sin)),
        ("cos", Unaire(f64::cos)),
        ("±", Unaire(|x| -x)),
        ("%", Unaire(|x| x / 100.0)),
        ("x²", Unaire(|x| x * x)),
        ("x³", Unaire(|x| x * x * x)),
        ("×", Binaire(|a, b| a * b)),
        ("÷", BinaireVerifiee(division_par_zero, |a, b| a / b)),
        ("+", Binaire(|a, b| a + b)),
        ("-", Binaire(|a, b| a - b)),
        ("=", Egal),
    ];

    entrees
        .into_iter()
        .map(|(symbole, op)| (symbole.to_string(), op))
        .collect()
}
