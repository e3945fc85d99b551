//! Noyau — rejouage du journal
//!
//! journal -> (valeur courante, opération en attente, description, erreur)
//!
//! Le rejouage repart de zéro à chaque appel : aucune machine à états
//! persistée, le journal est la seule vérité. Coût O(n), n = taille du
//! journal (rythme interactif, donc petit).

use std::collections::HashMap;

use super::journal::Entree;
use super::operations::{FnBinaire, FnUnaire, FnVerification, Operation};

/// Sortie du rejouage.
///
/// `erreur` est une donnée, pas un signal : un contrôle qui tire annote le
/// résultat (possiblement NaN / inf) sans interrompre quoi que ce soit.
/// Seul le dernier contrôle ayant tiré est conservé.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: Option<f64>,
    pub en_attente: bool,
    pub description: String,
    pub erreur: Option<String>,
}

/* ------------------------ État transitoire du rejouage ------------------------ */

/// Opération binaire en attente de son second opérande.
/// Vit uniquement pendant un rejouage ; au plus une à la fois.
struct OperationEnAttente {
    fonction: FnBinaire,
    premier_operande: f64,
    verification: Option<FnVerification>,
}

impl OperationEnAttente {
    fn appliquer(&self, second_operande: f64) -> f64 {
        (self.fonction)(self.premier_operande, second_operande)
    }
}

struct Rejouage<'a> {
    variables: Option<&'a HashMap<String, f64>>,

    // (valeur, texte) courant ; None juste après un opérateur binaire
    courant: Option<(f64, String)>,
    description: String,
    erreur: Option<String>,
    attente: Option<OperationEnAttente>,
}

/* ------------------------ Entrée publique ------------------------ */

/// Rejoue `journal` contre `operations` avec les liaisons `variables`.
/// Pur : ne touche ni au journal ni à la table.
pub fn rejouer(
    journal: &[Entree],
    operations: &HashMap<String, Operation>,
    variables: Option<&HashMap<String, f64>>,
) -> Evaluation {
    let mut r = Rejouage {
        variables,
        // état initial hérité du comportement historique : 0 affiché "0",
        // description vide (un opérateur en toute première entrée agit sur 0)
        courant: Some((0.0, "0".to_string())),
        description: String::new(),
        erreur: None,
        attente: None,
    };

    for entree in journal {
        r.entree(entree, operations);
    }

    Evaluation {
        resultat: r.courant.as_ref().map(|(valeur, _)| *valeur),
        en_attente: r.attente.is_some(),
        description: r.description,
        erreur: r.erreur,
    }
}

/* ------------------------ Rejouage pas à pas ------------------------ */

impl Rejouage<'_> {
    fn entree(&mut self, entree: &Entree, operations: &HashMap<String, Operation>) {
        match entree {
            Entree::Operande { valeur, texte } => self.poser(*valeur, texte.clone()),
            Entree::Variable(nom) => {
                let valeur = self
                    .variables
                    .and_then(|liaisons| liaisons.get(nom))
                    .copied()
                    .unwrap_or(0.0); // variable non liée : 0
                self.poser(valeur, nom.clone());
            }
            Entree::Operation(symbole) => {
                // symbole inconnu : ignoré en silence
                if let Some(operation) = operations.get(symbole) {
                    self.operation(symbole, *operation);
                }
            }
        }
    }

    /// Opérande ou variable : devient la valeur courante ; hors attente,
    /// la description est remplacée (pas concaténée).
    fn poser(&mut self, valeur: f64, texte: String) {
        if self.attente.is_none() {
            self.description = texte.clone();
        }
        self.courant = Some((valeur, texte));
    }

    fn operation(&mut self, symbole: &str, operation: Operation) {
        match operation {
            Operation::Constante(valeur) => self.poser(valeur, symbole.to_string()),
            Operation::Nullaire(fonction) => self.poser(fonction(), format!("{symbole}()")),
            Operation::Unaire(fonction) => self.unaire(symbole, fonction),
            Operation::UnaireVerifiee(verification, fonction) => {
                // contrôle sur la valeur courante AVANT transformation
                if let Some((valeur, _)) = &self.courant {
                    self.noter_controle(verification(*valeur));
                }
                self.unaire(symbole, fonction);
            }
            Operation::Binaire(fonction) => self.binaire(symbole, fonction, None),
            Operation::BinaireVerifiee(verification, fonction) => {
                self.binaire(symbole, fonction, Some(verification))
            }
            Operation::Egal => self.resoudre_attente(),
        }
    }

    /// Unaire sans valeur courante (juste après un opérateur binaire) :
    /// symbole abandonné en silence.
    fn unaire(&mut self, symbole: &str, fonction: FnUnaire) {
        let Some((ancienne_valeur, ancien_texte)) = self.courant.take() else {
            return;
        };

        let texte = format!("{symbole}({ancien_texte})");

        if self.attente.is_none() {
            self.description = texte.clone();
        } else if let Some(episse) = remplacer_fin(&self.description, &ancien_texte, &texte) {
            // épissure : l'unaire s'emboîte dans l'expression en attente
            // ("8 - √(81)" -> "8 - √(√(81))"), occurrence finale seulement
            self.description = episse;
        } else {
            self.description.push(' ');
            self.description.push_str(&texte);
        }

        self.courant = Some((fonction(ancienne_valeur), texte));
    }

    /// Binaire sans valeur courante : abandon total (le contrôle éventuel
    /// ne doit pas s'accrocher à une attente plus ancienne).
    fn binaire(&mut self, symbole: &str, fonction: FnBinaire, verification: Option<FnVerification>) {
        if self.courant.is_none() {
            return;
        }

        // associativité gauche : on résout d'abord l'attente existante
        self.resoudre_attente();

        let Some((valeur, texte)) = self.courant.take() else {
            return;
        };
        self.description = format!("{texte} {symbole}");
        self.attente = Some(OperationEnAttente {
            fonction,
            premier_operande: valeur,
            verification,
        });
    }

    /// Résout l'attente si attente ET valeur courante sont présentes.
    fn resoudre_attente(&mut self) {
        if self.attente.is_none() || self.courant.is_none() {
            return;
        }
        let Some(attente) = self.attente.take() else {
            return;
        };
        let Some((second_operande, texte)) = self.courant.take() else {
            return;
        };

        // garde anti double ajout : le second opérande peut déjà terminer la
        // description (cas de l'épissure unaire)
        if !self.description.ends_with(&format!(" {texte}")) {
            self.description.push(' ');
            self.description.push_str(&texte);
        }

        if let Some(verification) = attente.verification {
            self.noter_controle(verification(second_operande));
        }

        let resultat = attente.appliquer(second_operande);
        self.courant = Some((resultat, self.description.clone()));
    }

    /// Dernier contrôle ayant tiré gagne ; un contrôle muet n'efface rien.
    fn noter_controle(&mut self, message: Option<String>) {
        if message.is_some() {
            self.erreur = message;
        }
    }
}

/* ------------------------ Épissure de description ------------------------ */

/// Remplace l'occurrence FINALE de `fin` dans `texte` (suffixe strict),
/// ou None si `texte` ne se termine pas par `fin`.
fn remplacer_fin(texte: &str, fin: &str, remplacement: &str) -> Option<String> {
    let tronc = texte.strip_suffix(fin)?;
    Some(format!("{tronc}{remplacement}"))
}
