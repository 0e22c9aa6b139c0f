//! Everything the showcase presents around the metric generator: the
//! algorithm lab, explanatory prose and the document chat.

pub mod chat;
pub mod concepts;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod knowledge;
pub mod lab;
pub mod listings;
pub mod tabs;

pub use chat::{ChatMessage, Document, DocumentChat, Speaker};
pub use concepts::Concept;
pub use config::{CONFIG_ENV, PresetValue, ShowcaseConfig};
pub use disclosure::{Disclosure, Section};
pub use error::{Result, ShowcaseErr};
pub use knowledge::{KnowledgeLevel, explain};
pub use lab::{Lab, LabEvent, LabSession, RunState};
pub use listings::{Listing, listing};
pub use tabs::TabBar;
