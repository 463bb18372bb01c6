use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ── Summary ──────────────────────────────────────────────────────────────────

/// The labeled fields read from the first page of one FRT record.
///
/// Every field defaults to the empty string; a document that carries none of
/// the known labels still produces a (blank) summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// `Firearm Reference No.`
    pub id: String,

    /// `Make`
    pub make: String,

    /// `Model`
    pub model: String,

    /// `Manufacturer`
    pub manufacturer: String,

    /// `Type`
    #[serde(rename = "type")]
    pub kind: String,

    /// `Action`
    pub action: String,

    /// `Country of Manufacturer`
    pub manufacturer_country: String,

    /// `Legal Classification`
    pub legal_classification: String,
}

impl Summary {
    /// Store `value` in the field named by `label`.
    ///
    /// Returns `false` (and leaves the summary untouched) when the label is
    /// not one of the known ones. Labels are matched exactly.
    ///
    /// ```
    /// # use frtsummary::Summary;
    /// let mut s = Summary::default();
    /// assert!(s.set_field("Make", "Colt"));
    /// assert!(!s.set_field("make", "Colt"));
    /// assert_eq!(s.make, "Colt");
    /// ```
    pub fn set_field(&mut self, label: &str, value: &str) -> bool {
        let slot = match label {
            "Firearm Reference No." => &mut self.id,
            "Make" => &mut self.make,
            "Model" => &mut self.model,
            "Manufacturer" => &mut self.manufacturer,
            "Type" => &mut self.kind,
            "Action" => &mut self.action,
            "Country of Manufacturer" => &mut self.manufacturer_country,
            "Legal Classification" => &mut self.legal_classification,
            _ => return false,
        };
        *slot = value.to_owned();
        true
    }

    /// Returns `true` when no label was recognised in the source document.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// Distinct values seen across a set of summaries.
///
/// Useful for building filter lists: every set is sorted and never contains
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Distinct `Manufacturer` values.
    pub manufacturers: BTreeSet<String>,

    /// Distinct `Type` values.
    pub types: BTreeSet<String>,

    /// Distinct `Action` values.
    pub actions: BTreeSet<String>,

    /// Distinct `Legal Classification` values.
    pub classifications: BTreeSet<String>,

    /// Models grouped by make. Summaries without a make are left out.
    pub models: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    pub fn from_summaries(summaries: &[Summary]) -> Self {
        let mut catalog = Self::default();
        for summary in summaries {
            catalog.add(summary);
        }
        catalog
    }

    /// Fold one summary into the catalog.
    pub fn add(&mut self, summary: &Summary) {
        insert_non_empty(&mut self.manufacturers, &summary.manufacturer);
        insert_non_empty(&mut self.types, &summary.kind);
        insert_non_empty(&mut self.actions, &summary.action);
        insert_non_empty(&mut self.classifications, &summary.legal_classification);

        if !summary.make.is_empty() {
            let models = self.models.entry(summary.make.clone()).or_default();
            insert_non_empty(models, &summary.model);
        }
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() {
        set.insert(value.to_owned());
    }
}
