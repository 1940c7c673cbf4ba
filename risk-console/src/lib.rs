//! Zero Trust Risk Console
//!
//! Client for the risk scoring engine. Collects incident telemetry from a
//! form, posts it to `/predict` and renders the decision.
//!
//! # Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │ Form         │───▶│ Dispatcher       │───▶│ Renderer        │
//! │ (FieldSource)│    │ POST /predict    │    │ ResultPanel     │
//! └──────────────┘    │ 2xx / 403 detail │    │ → ResultSurface │
//!                     └──────────────────┘    └─────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod terminal;
pub mod view;

pub use client::RiskClient;
pub use config::Config;
pub use dispatch::{check_risk, Invocation};
pub use error::{ConsoleError, ConsoleResult};
pub use models::{Breakdown, Decision, HealthStatus, IncidentTelemetry, ScoreResult};
pub use render::{render, ResultPanel, Theme};
