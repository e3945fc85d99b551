// src/noyau/verifications.rs
//
// Contrôles non fatals : un contrôle qui "tire" dépose un message lisible
// à côté du résultat numérique, il n'interrompt jamais le rejouage.
// Le calcul flottant continue (NaN / inf sont des sorties valides).

use super::format::format_operande;

/// Racine d'un opérande négatif : non réelle.
pub fn racine_negative(operande: f64) -> Option<String> {
    // NaN ne tire pas
    if operande >= 0.0 || operande.is_nan() {
        return None;
    }
    Some(format!(
        "Erreur ! racine de {} non réelle",
        format_operande(operande)
    ))
}

/// Division dont le diviseur est zéro.
pub fn division_par_zero(diviseur: f64) -> Option<String> {
    if diviseur != 0.0 {
        return None;
    }
    Some("Erreur ! division par zéro".to_string())
}
