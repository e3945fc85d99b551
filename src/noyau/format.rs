// src/noyau/format.rs

/// Décimales maximum pour un opérande non entier.
const DECIMALES_MAX: usize = 6;

/// Texte d'un opérande, figé au moment de l'ajout au journal.
///
/// Règles :
/// - valeur entière  -> 0 décimale ("8", "-3")
/// - sinon           -> au plus 6 décimales, zéros de fin retirés ("0.5")
/// - toujours au moins 1 chiffre entier ("0.25", jamais ".25")
/// - NaN / ±inf      -> affichage std ("NaN", "inf", "-inf")
///
/// Fonction pure : pas de formateur partagé, pas d'état.
pub fn format_operande(valeur: f64) -> String {
    if !valeur.is_finite() {
        return valeur.to_string();
    }

    if valeur.fract() == 0.0 {
        return format!("{valeur:.0}");
    }

    // {:.6} garantit le chiffre entier ; on retire les zéros de fin,
    // puis le point si l'arrondi a tout mangé (0.9999999 -> "1").
    let mut texte = format!("{valeur:.prec$}", prec = DECIMALES_MAX);
    while texte.ends_with('0') {
        texte.pop();
    }
    if texte.ends_with('.') {
        texte.pop();
    }
    texte
}
