//! Data models for the portfolio.
//!
//! Everything here is configuration-like display data and small pure
//! state: there is no lifecycle and no runtime mutation of records.
//!
//! ## Submodules
//!
//! - [`builtin`]: The default content set (profile, skills, projects, ...)
//! - [`content`]: Content types, serde-loadable from a JSON file
//! - [`media`]: Classification of preview references as video or image
//! - [`pagination`]: Page windowing over the project list

pub mod builtin;
pub mod content;
pub mod media;
pub mod pagination;

pub use content::{
    ContactInfo, Content, EducationEntry, Profile, ProjectRecord, SkillCategory, SocialLink,
};
pub use media::MediaKind;
pub use pagination::{Pagination, PROJECTS_PER_PAGE};
