pub mod use_auth;
pub mod use_catalog;
pub mod use_decision;
pub mod use_draft;
pub mod use_history;
