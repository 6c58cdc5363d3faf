//! CiviForm presentation layer: login and program admin review pages, the application
//! review workflow behind them, and typed access to applicant answers.

pub mod applicant;
pub mod applications;
pub mod auth;
pub mod config;
pub mod error;
pub mod html;
pub mod i18n;
pub mod program;
pub mod routes;
pub mod telemetry;
pub mod views;
