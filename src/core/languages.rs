//! The language catalog.
//!
//! A fixed list of the programming languages the API knows about, with the
//! frameworks commonly learned alongside each of them. The catalog is built
//! once and never changes while the process runs.
//!
//! Language | Slug | Frameworks
//! ---|---|---
//! `JavaScript` | `javascript` | Node.js, Vue.js, React, Jest
//! `Python` | `python` | Flask, Django, `PyTest`
//! `Java` | `java` | Spring, `JUnit`
//! `C#` | `csharp` | ASP.NET, xUnit
//! `HTML` | `html` |
//! `CSS` | `css` |
use serde::Serialize;

/// A language supported by the API.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Human readable name, for example `C#`.
    pub name: &'static str,
    /// Lowercase key used in the documentation sources table, for example `csharp`.
    pub slug: &'static str,
    pub frameworks: Vec<&'static str>,
}

impl LanguageDescriptor {
    fn new(name: &'static str, slug: &'static str, frameworks: &[&'static str]) -> Self {
        Self {
            name,
            slug,
            frameworks: frameworks.to_vec(),
        }
    }
}

lazy_static! {
    static ref CATALOG: Vec<LanguageDescriptor> = vec![
        LanguageDescriptor::new("JavaScript", "javascript", &["Node.js", "Vue.js", "React", "Jest"]),
        LanguageDescriptor::new("Python", "python", &["Flask", "Django", "PyTest"]),
        LanguageDescriptor::new("Java", "java", &["Spring", "JUnit"]),
        LanguageDescriptor::new("C#", "csharp", &["ASP.NET", "xUnit"]),
        LanguageDescriptor::new("HTML", "html", &[]),
        LanguageDescriptor::new("CSS", "css", &[]),
    ];
}

/// All the languages in the catalog, in presentation order.
#[must_use]
pub fn all() -> &'static [LanguageDescriptor] {
    &CATALOG
}

/// Finds a language by its slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static LanguageDescriptor> {
    CATALOG.iter().find(|language| language.slug == slug)
}
