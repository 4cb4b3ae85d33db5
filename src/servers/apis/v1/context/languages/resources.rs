//! API resources for the [`languages`](crate::servers::apis::v1::context::languages)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::languages::LanguageDescriptor;

/// A supported language.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub slug: String,
    pub frameworks: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LanguageList {
    pub languages: Vec<Language>,
}

impl From<&LanguageDescriptor> for Language {
    fn from(language: &LanguageDescriptor) -> Self {
        Language {
            name: language.name.to_owned(),
            slug: language.slug.to_owned(),
            frameworks: language.frameworks.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&[LanguageDescriptor]> for LanguageList {
    fn from(languages: &[LanguageDescriptor]) -> Self {
        LanguageList {
            languages: languages.iter().map(Language::from).collect(),
        }
    }
}
