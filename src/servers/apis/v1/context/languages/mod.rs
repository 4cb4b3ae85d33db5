//! Language catalog API context.
//!
//! # Endpoints
//!
//! - [List languages](#list-languages)
//!
//! # List languages
//!
//! `GET /languages`
//!
//! Returns the languages supported by the API and the frameworks usually
//! learned with them.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/languages"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "languages": [
//!     { "name": "JavaScript", "slug": "javascript", "frameworks": ["Node.js", "Vue.js", "React", "Jest"] },
//!     { "name": "Python", "slug": "python", "frameworks": ["Flask", "Django", "PyTest"] },
//!     { "name": "Java", "slug": "java", "frameworks": ["Spring", "JUnit"] },
//!     { "name": "C#", "slug": "csharp", "frameworks": ["ASP.NET", "xUnit"] },
//!     { "name": "HTML", "slug": "html", "frameworks": [] },
//!     { "name": "CSS", "slug": "css", "frameworks": [] }
//!   ]
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`LanguageList`](crate::servers::apis::v1::context::languages::resources::LanguageList)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod routes;
