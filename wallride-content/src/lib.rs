//! Article creation for WallRide.
//!
//! - [`ContentCreateRequest`]: the validated aggregate handed to persistence
//! - [`ContentCreateRequestBuilder`]: fluent construction with batch validation
//! - [`ArticleCreateForm`]: raw form input, seeded from custom field definitions
//! - [`TagParser`]: splits the free-text tag input into names
//!
//! # Example
//!
//! ```
//! use wallride_content::ContentCreateRequest;
//!
//! let request = ContentCreateRequest::builder()
//!     .title("Hello")
//!     .body("<p>First post</p>")
//!     .tags("rust, cms")
//!     .language("en")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.tag_names(), vec!["rust", "cms"]);
//! ```

mod error;
mod form;
mod request;
mod tags;

pub use error::{ContentError, ContentResult};
pub use form::{ArticleCreateForm, CustomFieldValueForm};
pub use request::{ContentCreateRequest, ContentCreateRequestBuilder, ContentStatus, Seo};
pub use tags::{DelimitedTagParser, TagParser};
