use std::collections::BTreeSet;

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{extract_plain_text, ContentNode};

/// Fewest tags a post should carry; padded from the generic pool when the
/// content yields less
const MIN_TAGS: usize = 5;
/// Most tags a post should carry
const MAX_TAGS: usize = 8;

/// Canonical tag, the keywords that imply it, and its ranking priority
struct TagRule {
    tag: &'static str,
    keywords: &'static [&'static str],
    priority: u32,
}

static TAG_RULES: Lazy<Vec<TagRule>> = Lazy::new(|| {
    vec![
        // Languages and frameworks
        TagRule { tag: "Rust", keywords: &["rust", "cargo", "rustc"], priority: 10 },
        TagRule { tag: "JavaScript", keywords: &["javascript", "js "], priority: 9 },
        TagRule { tag: "TypeScript", keywords: &["typescript", "ts "], priority: 10 },
        TagRule { tag: "Python", keywords: &["python"], priority: 9 },
        TagRule { tag: "React", keywords: &["react"], priority: 10 },
        TagRule { tag: "Next.js", keywords: &["next.js", "nextjs"], priority: 10 },
        TagRule { tag: "Vue.js", keywords: &["vue.js", "vue"], priority: 8 },
        TagRule { tag: "Node.js", keywords: &["node.js", "nodejs"], priority: 7 },
        TagRule { tag: "HTML", keywords: &["html"], priority: 6 },
        TagRule { tag: "CSS", keywords: &["css", "stylesheet"], priority: 6 },
        TagRule { tag: "Tailwind", keywords: &["tailwind", "tailwindcss"], priority: 8 },
        // Tooling and platforms
        TagRule { tag: "GraphQL", keywords: &["graphql"], priority: 7 },
        TagRule { tag: "REST", keywords: &["rest api", "restful"], priority: 6 },
        TagRule { tag: "Sanity", keywords: &["sanity", "portable text", "groq"], priority: 8 },
        TagRule { tag: "Vercel", keywords: &["vercel"], priority: 6 },
        TagRule { tag: "Firebase", keywords: &["firebase"], priority: 6 },
        TagRule { tag: "Git", keywords: &["git", "github", "gitlab"], priority: 6 },
        TagRule { tag: "Docker", keywords: &["docker", "container"], priority: 6 },
        TagRule { tag: "CI/CD", keywords: &["ci/cd", "cicd", "continuous integration"], priority: 6 },
        // Concepts
        TagRule { tag: "Frontend", keywords: &["frontend", "front-end"], priority: 5 },
        TagRule { tag: "Backend", keywords: &["backend", "back-end"], priority: 5 },
        TagRule { tag: "API", keywords: &["api"], priority: 4 },
        TagRule { tag: "Database", keywords: &["database", "db "], priority: 5 },
        TagRule { tag: "Security", keywords: &["security", "vulnerability"], priority: 5 },
        TagRule { tag: "Performance", keywords: &["performance", "optimization"], priority: 5 },
        TagRule { tag: "Responsive", keywords: &["responsive"], priority: 4 },
        TagRule { tag: "UI/UX", keywords: &["ui", "ux", "usability", "design"], priority: 4 },
        TagRule { tag: "Testing", keywords: &["testing", "unit test", "integration test"], priority: 5 },
        TagRule { tag: "Debugging", keywords: &["debug", "debugging"], priority: 4 },
        // Learning
        TagRule { tag: "Tutorial", keywords: &["tutorial", "walkthrough", "getting started"], priority: 3 },
        TagRule { tag: "Tips", keywords: &["tips", "tricks"], priority: 3 },
        TagRule { tag: "Beginner", keywords: &["beginner", "introduction"], priority: 3 },
    ]
});

lazy_static! {
    // Extra tech terms worth tagging even without a dictionary entry
    static ref TECH_TERM_REGEXES: Vec<Regex> = vec![
        Regex::new(r"\b(scss|sass|less)\b").unwrap(),
        Regex::new(r"\b(webpack|vite|rollup)\b").unwrap(),
        Regex::new(r"\b(eslint|prettier|jest)\b").unwrap(),
        Regex::new(r"\b(mongodb|postgresql|mysql|sqlite)\b").unwrap(),
        Regex::new(r"\b(aws|azure|gcp)\b").unwrap(),
        Regex::new(r"\b(nginx|apache)\b").unwrap(),
        Regex::new(r"\b(linux|ubuntu|debian)\b").unwrap(),
        Regex::new(r"\b(ios|android)\b").unwrap(),
    ];
}

/// Generic tags used to pad out posts whose content matched too little
const GENERIC_POOL: [&str; 5] = ["Tech", "Programming", "Development", "Web", "Coding"];

/// Suggest 5-8 tags for a document, ranked by priority.
///
/// Dictionary keywords are matched against the document's plain text;
/// additional tech terms are picked up by pattern, and the result is padded
/// from a generic pool when the content yields too few matches.
pub fn suggest_tags(doc: &[ContentNode]) -> Vec<String> {
    let plain_text = extract_plain_text(doc).to_lowercase();

    let mut matched: Vec<(&str, u32)> = Vec::new();
    for rule in TAG_RULES.iter() {
        if rule.keywords.iter().any(|kw| plain_text.contains(kw)) {
            matched.push((rule.tag, rule.priority));
        }
    }

    // Highest priority first; ties keep dictionary order for stability
    matched.sort_by(|a, b| b.1.cmp(&a.1));
    let mut tags: Vec<String> = matched.into_iter().map(|(tag, _)| tag.to_string()).collect();

    // Pattern-detected terms rank below every dictionary match
    let mut extra: BTreeSet<String> = BTreeSet::new();
    for regex in TECH_TERM_REGEXES.iter() {
        for m in regex.find_iter(&plain_text) {
            extra.insert(m.as_str().to_string());
        }
    }
    for term in extra {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&term)) {
            tags.push(term);
        }
    }

    tags.truncate(MAX_TAGS);

    for generic in GENERIC_POOL {
        if tags.len() >= MIN_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == generic) {
            tags.push(generic.to_string());
        }
    }

    tags
}
