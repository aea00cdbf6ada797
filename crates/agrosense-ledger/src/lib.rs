pub mod collaborators;
pub mod config;
pub mod db;
pub mod engine;

pub use collaborators::{
    AlertSystem, AnalyticsEngine, CollabError, DataValidator, SensorRegistry, TokenContract,
};
pub use config::ConfigStore;
pub use db::LedgerDb;
pub use engine::SubmissionEngine;
