//! src/noyau/cerveau.rs
//!
//! Le Cerveau : journal d'entrées + table des opérations.
//!
//! Contrats :
//! - Les actions (`definir_*`, `appliquer_operation`) ajoutent exactement
//!   une entrée au journal, sans évaluation ni effet de bord caché.
//! - `evaluer` est pur (`&self`) : rejouer le journal ne le modifie pas.
//! - `effacer` doit redonner exactement l'évaluation d'un Cerveau neuf
//!   (invariant exigé, pas accidentel).
//! - Accès mono-propriétaire ; pour partager entre threads, cloner (valeur
//!   bon marché) ou synchroniser côté appelant.

use std::collections::HashMap;

use super::eval::{rejouer, Evaluation};
use super::format::format_operande;
use super::journal::Entree;
use super::operations::{table_defaut, FnUnaire, Operation};

#[derive(Clone, Debug)]
pub struct Cerveau {
    journal: Vec<Entree>,
    operations: HashMap<String, Operation>,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self {
            journal: Vec::new(),
            operations: table_defaut(),
        }
    }
}

impl Cerveau {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Écritures (journal) ------------------------ */

    /// Ajoute un opérande ; son texte est figé ici, une fois pour toutes.
    pub fn definir_operande(&mut self, valeur: f64) {
        self.journal.push(Entree::Operande {
            valeur,
            texte: format_operande(valeur),
        });
    }

    /// Ajoute une variable (aucune validation du nom ; non liée => 0 au
    /// rejouage).
    pub fn definir_variable(&mut self, nom: &str) {
        self.journal.push(Entree::Variable(nom.to_string()));
    }

    /// Ajoute un symbole d'opération. Un symbole inconnu est journalisé
    /// quand même : il sera ignoré en silence au rejouage.
    pub fn appliquer_operation(&mut self, symbole: &str) {
        self.journal.push(Entree::Operation(symbole.to_string()));
    }

    /// Enregistre (ou écrase) une opération unaire dans la table.
    /// Pas d'API de retrait.
    pub fn ajouter_operation_unaire(&mut self, symbole: &str, fonction: FnUnaire) {
        self.operations
            .insert(symbole.to_string(), Operation::Unaire(fonction));
    }

    /// Retire la dernière entrée du journal (sans effet si vide).
    pub fn annuler(&mut self) {
        self.journal.pop();
    }

    /// Vide le journal.
    pub fn effacer(&mut self) {
        self.journal.clear();
    }

    /* ------------------------ Lecture (rejouage) ------------------------ */

    /// Rejoue tout le journal avec les liaisons fournies
    /// (ex. `{"M": 7.5}`) et retourne l'instantané complet.
    pub fn evaluer(&self, variables: Option<&HashMap<String, f64>>) -> Evaluation {
        rejouer(&self.journal, &self.operations, variables)
    }

    /* ------------------------ Raccourcis de lecture ------------------------ */

    pub fn resultat(&self) -> Option<f64> {
        self.evaluer(None).resultat
    }

    pub fn en_attente(&self) -> bool {
        self.evaluer(None).en_attente
    }

    pub fn description(&self) -> String {
        self.evaluer(None).description
    }
}
