//! LexiconCategorizer: Heuristic Keyword Categories
//!
//! Assigns a category to each uncategorized keyword by substring lookup in a
//! handful of fixed lexicons, one Aho-Corasick automaton per lexicon. The
//! first lexicon with any hit wins, in the order of `LEXICONS`.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};

use crate::highlight::error::HighlightError;
use crate::highlight::types::{KeywordRecord, DEFAULT_CATEGORY};

// =============================================================================
// Types
// =============================================================================

/// A keyword as it comes out of extraction, before categorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedKeyword {
    #[serde(alias = "keyword")]
    pub term: String,
    #[serde(alias = "frequency", default)]
    pub weight: u32,
    #[serde(default)]
    pub category: Option<String>,
    /// Set when this keyword is a synonym expansion of another term
    #[serde(default)]
    pub original_term: Option<String>,
}

impl ExtractedKeyword {
    pub fn new(term: &str, weight: u32) -> Self {
        Self {
            term: term.to_string(),
            weight,
            category: None,
            original_term: None,
        }
    }
}

/// Assigns categories upstream of highlighting
pub trait Categorize {
    /// Every output record carries a non-empty category
    fn categorize(&self, keywords: Vec<ExtractedKeyword>) -> Vec<KeywordRecord>;
}

// =============================================================================
// Lexicons
// =============================================================================

pub const TECHNICAL_SKILL: &str = "technical skill";
pub const ROLE: &str = "role";
pub const QUALIFICATION: &str = "qualification";
pub const SOFT_SKILL: &str = "soft skill";
pub const DOMAIN: &str = "domain";
pub const RELATED_TERM: &str = "related term";
pub const EXPERIENCE: &str = "experience";

const TECH_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "aws", "docker", "kubernetes",
    "sql", "nosql", "mongodb", "tensorflow", "pytorch", "c++", "ruby", "go", "scala",
    "php", "html", "css", "angular", "vue", "flutter", "swift", "kotlin", "typescript",
    "django", "flask", "spring", "hibernate", "selenium", "jenkins", "git", "azure",
    "gcp", "cicd", "ci/cd", "machine learning", "deep learning", "nlp", "computer vision",
    "ai", "artificial intelligence", "data science", "big data", "hadoop", "spark",
    "redis", "graphql", "rest api", "restful", "microservices", "frontend", "backend",
    "full stack", "cloud", "devops", "linux", "unix", "bash", "shell", "mobile",
    "database", "networking", "security", "hacking", "penetration testing", "blockchain",
    "crypto", "web3", "data analytics", "etl", "tableau", "power bi", "qlik", "looker",
];

const ROLE_TERMS: &[&str] = &[
    "engineer", "developer", "manager", "architect", "analyst", "scientist",
    "specialist", "consultant", "administrator", "director", "cto", "cio", "ceo",
    "vp", "lead", "head", "principal", "senior", "junior", "associate", "staff",
    "intern", "trainee", "coach", "mentor", "coordinator", "designer", "researcher",
    "professor", "instructor", "tutor", "teacher", "trainer", "fellow", "apprentice",
    "executive", "supervisor", "officer", "strategist", "evangelist",
];

const QUALIFICATION_TERMS: &[&str] = &[
    "phd", "doctorate", "master", "bachelor", "bs", "ba", "ms", "ma", "mba", "bsc",
    "msc", "btech", "mtech", "degree", "certification", "certificate", "diploma",
    "license", "credential", "certified", "qualified", "graduate", "postgraduate",
    "undergraduate", "education", "training", "coursework", "major", "minor",
    "specialization", "fellowship", "scholarship", "awarded", "honors", "distinction",
];

const SOFT_SKILL_TERMS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem solving", "critical thinking",
    "creativity", "time management", "organization", "negotiation", "conflict resolution",
    "presentation", "interpersonal", "adaptability", "flexibility", "resilience",
    "collaboration", "strategy", "planning", "analytical", "detail oriented", "motivated",
    "proactive", "innovative", "resourceful", "accountability", "integrity", "ethics",
    "emotional intelligence", "customer focus", "client management", "mentoring",
];

const DOMAIN_TERMS: &[&str] = &[
    "finance", "banking", "healthcare", "medical", "insurance", "retail", "e-commerce",
    "media", "telecom", "education", "government", "manufacturing", "logistics",
    "automotive", "aerospace", "defense", "energy", "oil", "gas", "pharmaceutical",
    "biotech", "legal", "consulting", "marketing", "advertising", "hospitality",
    "travel", "real estate", "construction", "agriculture", "food", "beverage",
    "entertainment", "gaming", "sports", "fashion", "luxury", "non-profit", "charity",
];

const SYNONYM_TERMS: &[&str] = &[
    "related", "similar", "synonym", "alternative", "variant", "equivalent",
];

/// Checked in order; the first hit decides
const LEXICONS: &[(&str, &[&str])] = &[
    (TECHNICAL_SKILL, TECH_SKILLS),
    (ROLE, ROLE_TERMS),
    (QUALIFICATION, QUALIFICATION_TERMS),
    (SOFT_SKILL, SOFT_SKILL_TERMS),
    (DOMAIN, DOMAIN_TERMS),
    (RELATED_TERM, SYNONYM_TERMS),
];

/// Phrases like "5+ years of experience"
fn mentions_experience(term: &str) -> bool {
    (term.contains("years") && term.contains("experience"))
        || term.contains("yoe")
        || term.contains("years of")
}

// =============================================================================
// LexiconCategorizer
// =============================================================================

pub struct LexiconCategorizer {
    automata: Vec<(&'static str, AhoCorasick)>,
}

impl LexiconCategorizer {
    pub fn new() -> Result<Self, HighlightError> {
        let mut automata = Vec::with_capacity(LEXICONS.len());
        for &(category, terms) in LEXICONS {
            let automaton = AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostFirst)
                .build(terms)
                .map_err(|e| HighlightError::Categorizer(format!("{}: {}", category, e)))?;
            automata.push((category, automaton));
        }
        Ok(Self { automata })
    }

    /// Category for a single term
    pub fn classify(&self, term: &str) -> &'static str {
        let term = term.trim().to_lowercase();

        for &(category, ref automaton) in &self.automata {
            if automaton.is_match(&term) {
                return category;
            }
        }

        if mentions_experience(&term) {
            return EXPERIENCE;
        }

        DEFAULT_CATEGORY
    }
}

impl Categorize for LexiconCategorizer {
    fn categorize(&self, keywords: Vec<ExtractedKeyword>) -> Vec<KeywordRecord> {
        keywords
            .into_iter()
            .map(|keyword| {
                let category = match keyword.category.as_deref().map(str::trim) {
                    Some(existing) if !existing.is_empty() => existing.to_string(),
                    _ if keyword.original_term.is_some() => RELATED_TERM.to_string(),
                    _ => self.classify(&keyword.term).to_string(),
                };
                KeywordRecord {
                    term: keyword.term,
                    category,
                    weight: keyword.weight.max(1),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorizer() -> LexiconCategorizer {
        LexiconCategorizer::new().unwrap()
    }

    #[test]
    fn test_classify_lexicons() {
        let c = categorizer();
        assert_eq!(c.classify("Kubernetes"), TECHNICAL_SKILL);
        assert_eq!(c.classify("Machine Learning"), TECHNICAL_SKILL);
        assert_eq!(c.classify("supervisor"), ROLE);
        assert_eq!(c.classify("PhD"), QUALIFICATION);
        assert_eq!(c.classify("teamwork"), SOFT_SKILL);
        assert_eq!(c.classify("healthcare"), DOMAIN);
        assert_eq!(c.classify("equivalent"), RELATED_TERM);
    }

    #[test]
    fn test_lexicon_order_decides() {
        let c = categorizer();
        // "education" is both a qualification and a domain
        assert_eq!(c.classify("education"), QUALIFICATION);
        // "security engineer" hits tech before role
        assert_eq!(c.classify("security engineer"), TECHNICAL_SKILL);
    }

    #[test]
    fn test_substring_semantics() {
        let c = categorizer();
        // "developer" contains no tech term, is a role
        assert_eq!(c.classify("Senior Developer"), ROLE);
        // "golang" contains "go"
        assert_eq!(c.classify("golang"), TECHNICAL_SKILL);
    }

    #[test]
    fn test_experience_and_other() {
        let c = categorizer();
        assert_eq!(c.classify("5+ years experience"), EXPERIENCE);
        assert_eq!(c.classify("7 yoe"), EXPERIENCE);
        assert_eq!(c.classify("zzz"), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_categorize_keeps_existing_category() {
        let c = categorizer();
        let mut keyword = ExtractedKeyword::new("python", 3);
        keyword.category = Some("Favorite".to_string());
        let records = c.categorize(vec![keyword]);
        assert_eq!(records[0].category, "Favorite");
        assert_eq!(records[0].weight, 3);
    }

    #[test]
    fn test_categorize_synonym_expansion() {
        let c = categorizer();
        let mut keyword = ExtractedKeyword::new("python", 1);
        keyword.original_term = Some("py".to_string());
        let records = c.categorize(vec![keyword]);
        assert_eq!(records[0].category, RELATED_TERM);
    }

    #[test]
    fn test_categorize_blank_category_and_zero_weight() {
        let c = categorizer();
        let mut keyword = ExtractedKeyword::new("docker", 0);
        keyword.category = Some("  ".to_string());
        let records = c.categorize(vec![keyword]);
        assert_eq!(records[0].category, TECHNICAL_SKILL);
        assert_eq!(records[0].weight, 1);
    }

    #[test]
    fn test_categorize_output_never_empty() {
        let c = categorizer();
        let records = c.categorize(vec![
            ExtractedKeyword::new("qwerty", 1),
            ExtractedKeyword::new("", 1),
        ]);
        assert!(records.iter().all(|r| !r.category.is_empty()));
    }

    #[test]
    fn test_deserialize_extractor_shape() {
        let keyword: ExtractedKeyword =
            serde_json::from_str(r#"{"keyword": "React", "frequency": 4}"#).unwrap();
        assert_eq!(keyword.term, "React");
        assert_eq!(keyword.weight, 4);
        assert!(keyword.category.is_none());
    }
}
