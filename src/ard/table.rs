//! Lookup-table allele-nomenclature backend
//!
//! [`TableArd`] answers every [`Ard`] operation from three tables: the set of
//! known allele names, the multiple allele code (MAC) table, and one mapping
//! per reduction method. Tables are loaded from a JSON file or built in code
//! (see [`TableArd::with_test_data`]).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;

use crate::ard::{gl_string, Ard};
use crate::error::ArdError;

/// MAC shape: `<locus>*<group>:<CODE>` where CODE is two or more uppercase letters
static MAC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9]+)\*(\d+):([A-Z]{2,})$").unwrap());

/// Supported reduction methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReductionMethod {
    /// G group (identical exon 2/3 nucleotide sequence)
    G,
    /// P group (identical antigen recognition domain protein sequence)
    P,
    /// Two-field `g` suffixed representative of the G group
    #[serde(rename = "lg")]
    Lg,
    /// Two-field representative of the G group without suffix
    #[serde(rename = "lgx")]
    Lgx,
    /// WHO full-field name
    W,
    /// Three-field (exon) name
    #[serde(rename = "exon")]
    Exon,
    /// Two-field unambiguous name
    U2,
    /// Serological equivalent
    S,
}

impl ReductionMethod {
    /// Get the string representation used in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionMethod::G => "G",
            ReductionMethod::P => "P",
            ReductionMethod::Lg => "lg",
            ReductionMethod::Lgx => "lgx",
            ReductionMethod::W => "W",
            ReductionMethod::Exon => "exon",
            ReductionMethod::U2 => "U2",
            ReductionMethod::S => "S",
        }
    }

    /// Get all reduction methods
    pub fn all() -> &'static [ReductionMethod] {
        &[
            ReductionMethod::G,
            ReductionMethod::P,
            ReductionMethod::Lg,
            ReductionMethod::Lgx,
            ReductionMethod::W,
            ReductionMethod::Exon,
            ReductionMethod::U2,
            ReductionMethod::S,
        ]
    }
}

impl FromStr for ReductionMethod {
    type Err = ArdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReductionMethod::all()
            .iter()
            .find(|method| method.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ArdError::InvalidReductionMethod(format!("{} is not a valid reduction method", s))
            })
    }
}

impl std::fmt::Display for ReductionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// On-disk layout of the lookup tables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArdTables {
    /// Known allele names
    #[serde(default)]
    pub alleles: Vec<String>,
    /// MAC code to expansion entries (`"01"` or `"01:01"` forms)
    #[serde(default)]
    pub macs: HashMap<String, Vec<String>>,
    /// Reduction method name to allele mapping
    #[serde(default)]
    pub reductions: HashMap<String, HashMap<String, String>>,
}

/// Allele-nomenclature backend answering from in-memory lookup tables
#[derive(Debug, Clone, Default)]
pub struct TableArd {
    alleles: HashSet<String>,
    macs: HashMap<String, Vec<String>>,
    reductions: HashMap<ReductionMethod, HashMap<String, String>>,
}

impl TableArd {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from deserialized tables
    pub fn from_tables(tables: ArdTables) -> Result<Self, ArdError> {
        let mut reductions = HashMap::new();
        for (name, mapping) in tables.reductions {
            let method = name.parse::<ReductionMethod>().map_err(|_| {
                ArdError::Data(format!("Unknown reduction method in tables: {}", name))
            })?;
            reductions.insert(method, mapping);
        }

        Ok(Self {
            alleles: tables.alleles.into_iter().collect(),
            macs: tables.macs,
            reductions,
        })
    }

    /// Load tables from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, ArdError> {
        let content = std::fs::read_to_string(path)?;
        let tables: ArdTables = serde_json::from_str(&content)?;
        Self::from_tables(tables)
    }

    /// Add a known allele name
    pub fn add_allele(&mut self, allele: impl Into<String>) {
        self.alleles.insert(allele.into());
    }

    /// Add a MAC code with its expansion entries
    pub fn add_mac(&mut self, code: impl Into<String>, entries: &[&str]) {
        self.macs
            .insert(code.into(), entries.iter().map(|e| e.to_string()).collect());
    }

    /// Add a reduction mapping for a single allele
    pub fn add_reduction(
        &mut self,
        method: ReductionMethod,
        allele: impl Into<String>,
        reduced: impl Into<String>,
    ) {
        self.reductions
            .entry(method)
            .or_default()
            .insert(allele.into(), reduced.into());
    }

    /// Number of known alleles
    pub fn allele_count(&self) -> usize {
        self.alleles.len()
    }

    /// Number of MAC codes
    pub fn mac_count(&self) -> usize {
        self.macs.len()
    }

    /// Create a backend with a small HLA-A/B/C sample dataset
    pub fn with_test_data() -> Self {
        let mut ard = Self::new();

        for allele in [
            "A*01:01", "A*01:02", "A*01:03", "A*02:01", "A*02:02", "A*03:01", "B*07:02",
            "B*08:01", "B*08:02", "C*07:01", "C*07:02",
        ] {
            ard.add_allele(allele);
        }

        ard.add_mac("AB", &["01", "02"]);
        ard.add_mac("ABC", &["01", "02", "03"]);
        ard.add_mac("XY", &["01:01", "02:01"]);

        for (allele, reduced) in [
            ("A*01:01", "A*01:01:01G"),
            ("A*01:02", "A*01:01:01G"),
            ("A*02:01", "A*02:01:01G"),
            ("B*08:01", "B*08:01:01G"),
            ("C*07:01", "C*07:01:01G"),
        ] {
            ard.add_reduction(ReductionMethod::G, allele, reduced);
        }

        for (allele, reduced) in [
            ("A*01:01", "A*01:01g"),
            ("A*01:02", "A*01:01g"),
            ("A*02:01", "A*02:01g"),
            ("B*08:01", "B*08:01g"),
        ] {
            ard.add_reduction(ReductionMethod::Lg, allele, reduced);
        }

        for (allele, reduced) in [
            ("A*01:01", "A*01:01"),
            ("A*01:02", "A*01:01"),
            ("A*02:01", "A*02:01"),
            ("B*08:01", "B*08:01"),
        ] {
            ard.add_reduction(ReductionMethod::Lgx, allele, reduced);
        }

        ard
    }

    /// Whether the token has MAC shape and a code present in the table
    fn has_mac_code(&self, token: &str) -> bool {
        MAC_PATTERN
            .captures(token)
            .is_some_and(|caps| self.macs.contains_key(&caps[3]))
    }

    fn validate_token(&self, token: &str) -> Result<(), ArdError> {
        if token.is_empty() {
            return Err(ArdError::InvalidAllele(
                "GL String contains an empty allele".to_string(),
            ));
        }
        if self.has_mac_code(token) {
            return self
                .expand_mac(token)
                .map(|_| ())
                .map_err(|e| ArdError::InvalidAllele(e.message().to_string()));
        }
        if self.alleles.contains(token) {
            Ok(())
        } else {
            Err(ArdError::InvalidAllele(format!(
                "{} is not a valid Allele",
                token
            )))
        }
    }
}

impl Ard for TableArd {
    fn is_valid_gl(&self, gl_string: &str) -> Result<(), ArdError> {
        if gl_string.trim().is_empty() {
            return Err(ArdError::InvalidAllele("GL String is empty".to_string()));
        }
        gl_string::tokens(gl_string).try_for_each(|token| self.validate_token(token))
    }

    fn redux_gl(&self, gl_string: &str, reduction_method: &str) -> Result<String, ArdError> {
        let method = reduction_method.parse::<ReductionMethod>()?;
        self.is_valid_gl(gl_string)?;

        let mapping = self.reductions.get(&method);
        gl_string::rewrite(gl_string, &|token: &str| -> Result<Vec<String>, ArdError> {
            let alleles = if self.is_mac(token) {
                self.expand_mac(token)?
            } else {
                vec![token.to_string()]
            };
            Ok(alleles
                .into_iter()
                .map(|allele| {
                    mapping
                        .and_then(|m| m.get(&allele).cloned())
                        .unwrap_or(allele)
                })
                .collect())
        })
    }

    fn is_mac(&self, allele_code: &str) -> bool {
        // A code whose entries are all unknown alleles expands to nothing
        self.expand_mac(allele_code).is_ok()
    }

    fn expand_mac(&self, allele_code: &str) -> Result<Vec<String>, ArdError> {
        let not_a_mac = || ArdError::InvalidMac(format!("{} is not a valid MAC", allele_code));

        let caps = MAC_PATTERN.captures(allele_code).ok_or_else(not_a_mac)?;
        let (locus, group, code) = (&caps[1], &caps[2], &caps[3]);
        let entries = self.macs.get(code).ok_or_else(not_a_mac)?;

        let alleles: Vec<String> = entries
            .iter()
            .map(|entry| {
                if entry.contains(':') {
                    format!("{}*{}", locus, entry)
                } else {
                    format!("{}*{}:{}", locus, group, entry)
                }
            })
            .filter(|allele| self.alleles.is_empty() || self.alleles.contains(allele))
            .collect();

        if alleles.is_empty() {
            return Err(not_a_mac());
        }
        Ok(alleles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A*01:01")]
    #[case("A*01:01+A*02:01")]
    #[case("A*01:01/A*01:02+A*02:01^B*08:01+B*08:02")]
    #[case("A*01:AB+A*02:01")]
    #[case("A*01:01~B*08:01|A*02:01~B*07:02")]
    fn test_valid_gl_strings(#[case] gl: &str) {
        let ard = TableArd::with_test_data();
        assert!(ard.is_valid_gl(gl).is_ok(), "expected {} to be valid", gl);
    }

    #[rstest]
    #[case("")]
    #[case("A*99:99")]
    #[case("A*01:01+")]
    #[case("A*01:01++A*02:01")]
    #[case("A*01:ZZ")]
    fn test_invalid_gl_strings(#[case] gl: &str) {
        let ard = TableArd::with_test_data();
        let err = ard.is_valid_gl(gl).unwrap_err();
        assert!(err.is_invalid_allele(), "unexpected error: {:?}", err);
    }

    #[test]
    fn test_invalid_allele_message_names_token() {
        let ard = TableArd::with_test_data();
        let err = ard.is_valid_gl("A*01:01+A*99:99").unwrap_err();
        assert_eq!(err.message(), "A*99:99 is not a valid Allele");
    }

    #[test]
    fn test_is_mac() {
        let ard = TableArd::with_test_data();
        assert!(ard.is_mac("A*01:AB"));
        assert!(ard.is_mac("A*01:XY"));
        assert!(!ard.is_mac("A*01:01"));
        assert!(!ard.is_mac("A*01:ZZ"));
        assert!(!ard.is_mac("not a mac"));
        assert!(!ard.is_mac(""));
    }

    #[test]
    fn test_is_mac_agrees_with_expansion() {
        let ard = TableArd::with_test_data();
        // XY expands to C*01:01 and C*02:01, neither of which is known
        assert!(ard.expand_mac("C*07:XY").is_err());
        assert!(!ard.is_mac("C*07:XY"));
        assert!(ard.is_mac("C*07:AB"));
    }

    #[test]
    fn test_expand_mac_second_field_entries() {
        let ard = TableArd::with_test_data();
        assert_eq!(
            ard.expand_mac("A*01:AB").unwrap(),
            vec!["A*01:01".to_string(), "A*01:02".to_string()]
        );
    }

    #[test]
    fn test_expand_mac_full_entries() {
        let ard = TableArd::with_test_data();
        assert_eq!(
            ard.expand_mac("A*01:XY").unwrap(),
            vec!["A*01:01".to_string(), "A*02:01".to_string()]
        );
    }

    #[test]
    fn test_expand_mac_filters_unknown_alleles() {
        let ard = TableArd::with_test_data();
        // B*08:03 is not a known allele
        assert_eq!(
            ard.expand_mac("B*08:ABC").unwrap(),
            vec!["B*08:01".to_string(), "B*08:02".to_string()]
        );
    }

    #[test]
    fn test_expand_mac_unknown_code() {
        let ard = TableArd::with_test_data();
        let err = ard.expand_mac("A*01:ZZ").unwrap_err();
        assert_eq!(err, ArdError::InvalidMac("A*01:ZZ is not a valid MAC".to_string()));
    }

    #[test]
    fn test_redux_g_group() {
        let ard = TableArd::with_test_data();
        assert_eq!(
            ard.redux_gl("A*01:01/A*01:02+A*02:01", "G").unwrap(),
            "A*01:01:01G+A*02:01:01G"
        );
    }

    #[test]
    fn test_redux_expands_macs() {
        let ard = TableArd::with_test_data();
        assert_eq!(
            ard.redux_gl("A*01:AB+A*02:01", "lgx").unwrap(),
            "A*01:01+A*02:01"
        );
    }

    #[test]
    fn test_redux_keeps_unmapped_alleles() {
        let ard = TableArd::with_test_data();
        assert_eq!(ard.redux_gl("A*03:01", "G").unwrap(), "A*03:01");
    }

    #[test]
    fn test_redux_unknown_method() {
        let ard = TableArd::with_test_data();
        let err = ard.redux_gl("A*01:01", "bogus").unwrap_err();
        assert_eq!(
            err,
            ArdError::InvalidReductionMethod("bogus is not a valid reduction method".to_string())
        );
    }

    #[test]
    fn test_redux_invalid_gl_string() {
        let ard = TableArd::with_test_data();
        assert!(ard.redux_gl("A*99:99", "G").unwrap_err().is_invalid_allele());
    }

    #[test]
    fn test_reduction_method_round_trip() {
        for method in ReductionMethod::all() {
            assert_eq!(method.as_str().parse::<ReductionMethod>().unwrap(), *method);
        }
    }

    #[test]
    fn test_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(
            &path,
            r#"{
                "alleles": ["DRB1*15:01", "DRB1*15:02"],
                "macs": {"CD": ["01", "02"]},
                "reductions": {"lgx": {"DRB1*15:02": "DRB1*15:01"}}
            }"#,
        )
        .unwrap();

        let ard = TableArd::from_json(&path).unwrap();
        assert_eq!(ard.allele_count(), 2);
        assert_eq!(ard.mac_count(), 1);
        assert!(ard.is_mac("DRB1*15:CD"));
        assert_eq!(ard.redux_gl("DRB1*15:CD", "lgx").unwrap(), "DRB1*15:01");
    }

    #[test]
    fn test_from_json_rejects_unknown_method() {
        let tables = ArdTables {
            reductions: HashMap::from([("Q".to_string(), HashMap::new())]),
            ..ArdTables::default()
        };
        assert!(matches!(
            TableArd::from_tables(tables),
            Err(ArdError::Data(_))
        ));
    }

    #[test]
    fn test_from_json_missing_file() {
        let err = TableArd::from_json(Path::new("/nonexistent/tables.json")).unwrap_err();
        assert!(matches!(err, ArdError::Data(_)));
    }
}
