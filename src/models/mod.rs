//! Domain models for the portfolio API.
//!
//! # Core Concepts
//!
//! - [`Profile`]: The person behind the portfolio. Owns every other record.
//! - [`Skill`]: A named skill. Projects are filtered by skill *name*, so names
//!   are expected to be unique within a profile.
//! - [`Project`]: Portfolio entry with free-text technology tags and links.
//! - [`Education`] / [`WorkExperience`]: Dated history entries. A missing end
//!   date means the entry is ongoing.
//! - [`Link`]: Platform label plus URL, attached to a profile or a project.
//!
//! All records are read-only on the client: they are fetched from the
//! backend (or re-fetched wholesale) and never mutated locally.

mod career;
mod profile;
mod project;
mod responses;

pub use career::*;
pub use profile::*;
pub use project::*;
pub use responses::*;
