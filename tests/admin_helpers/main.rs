//! End-to-end tests through the `adminkit` facade
//!
//! Exercises the re-exported API the way an admin UI would use it when
//! rendering a resource index page.

mod labels;
mod model_types;
mod request_helpers;
mod tag_options;
