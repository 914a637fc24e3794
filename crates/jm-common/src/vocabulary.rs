use std::sync::LazyLock;

use crate::SkillSet;
use crate::tokenizer::parse_skill_list;

/// Canonical skill catalog used to mine job descriptions and resume text.
///
/// NOTE: entries are matched by raw substring containment, so short entries
/// such as `c`, `ai` or `ci` also hit inside longer words.
#[rustfmt::skip]
const BUILTIN_SKILLS: &[&str] = &[
    // Frontend
    "react", "javascript", "typescript", "html", "css", "sass", "scss",
    "tailwind", "bootstrap", "material ui", "redux", "nextjs",
    "vue", "vue.js", "nuxt", "angular", "angularjs", "jquery",
    "vite", "webpack", "babel",
    // Backend
    "node", "node.js", "nodejs", "express", "fastify", "nestjs",
    "python", "django", "flask", "fastapi",
    "java", "spring", "spring boot",
    "c", "c++", "c sharp", "c#", ".net", "asp.net",
    "php", "laravel", "symfony", "codeigniter",
    "golang", "rust", "ruby", "ruby on rails",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "sqlite",
    "firebase", "supabase", "oracle", "mariadb", "dynamodb",
    // Cloud / DevOps
    "aws", "azure", "google cloud", "gcp",
    "docker", "kubernetes", "jenkins", "ansible", "terraform",
    "github actions", "ci", "cd", "linux", "nginx",
    // Mobile
    "react native", "flutter", "kotlin", "swift", "ios", "android",
    // Data science / AI
    "machine learning", "deep learning", "data analysis", "data science",
    "artificial intelligence", "ai", "nlp", "computer vision",
    "tensorflow", "pytorch", "sklearn", "scikit", "matplotlib",
    "numpy", "pandas", "power bi", "tableau", "excel",
    // Product / management
    "product management", "project management", "agile", "scrum",
    "kanban", "jira", "confluence", "stakeholder management",
    "business analysis", "operations management", "hr management",
    "customer service", "client handling", "risk management",
    // Finance / business
    "accounting", "finance", "budgeting", "forecasting",
    "market research", "business development", "strategic planning",
    "sales", "marketing", "seo", "sem", "content writing",
    "digital marketing", "social media marketing", "brand management",
    // Soft skills
    "communication", "leadership", "teamwork", "critical thinking",
    "problem solving", "creativity", "adaptability", "time management",
    "decision making", "public speaking", "presentation skills",
    "negotiation", "empathy", "collaboration", "analytical thinking",
    // Security
    "cyber security", "penetration testing", "ethical hacking",
    "network security", "cryptography",
    "vulnerability assessment", "owasp",
    // General professional
    "ms office", "word", "powerpoint",
    "email writing", "documentation", "report writing", "analysis",
    "research", "problem analysis", "strategic thinking",
    "client communication", "team leadership",
    // Design
    "figma", "adobe xd", "photoshop", "illustrator",
    "ui design", "ux design", "wireframing", "prototyping",
    // Misc
    "smm", "qa testing", "automation testing",
    "selenium", "jest", "mocha", "cypress",
    "blockchain", "web3", "solidity",
];

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary::new(BUILTIN_SKILLS));

/// An ordered, deduplicated, lowercased list of known skills.
///
/// Passed explicitly into extraction and scoring; nothing reads a global list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: SkillSet = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .collect();
        Self {
            entries: normalized.into_vec(),
        }
    }

    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// One entry per line; blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        extract_known_skills(text, &self.entries)
    }
}

/// Known skills mentioned anywhere in `text`, in vocabulary order.
///
/// Matching is case-insensitive substring containment on the raw text, so a
/// multi-word entry like `spring boot` is found even though tokenizing would
/// split it. The result never contains anything outside the vocabulary.
pub fn extract_known_skills<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> SkillSet {
    let haystack = text.to_lowercase();
    if haystack.trim().is_empty() {
        return SkillSet::new();
    }

    vocabulary
        .iter()
        .map(|entry| entry.as_ref().trim().to_lowercase())
        // an empty needle would match every text
        .filter(|entry| !entry.is_empty() && haystack.contains(entry.as_str()))
        .collect()
}

/// Declared comma-separated skills first, then extracted ones not already declared.
pub fn merge_skills(declared: &str, extracted: &SkillSet) -> SkillSet {
    let mut merged = parse_skill_list(declared);
    merged.extend(extracted.iter());
    merged
}
