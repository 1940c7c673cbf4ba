//! Request Dispatcher
//!
//! One invocation = one scoring request:
//! 1. Trigger goes into its loading state, previous result is hidden
//! 2. Form is collected and posted to the engine
//! 3. Result is rendered, or an alert is raised
//!
//! The trigger is restored whichever way the invocation ends.

use crate::client::RiskClient;
use crate::error::ConsoleError;
use crate::form;
use crate::render::{render, ResultPanel};
use crate::view::{BusyGuard, FieldSource, ResultSurface, TriggerControl};


/// What a single invocation produced
#[derive(Debug)]
pub enum Invocation {
    Rendered(ResultPanel),
    Failed(ConsoleError),
}

impl Invocation {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Invocation::Rendered(_))
    }

    pub fn panel(&self) -> Option<&ResultPanel> {
        match self {
            Invocation::Rendered(panel) => Some(panel),
            Invocation::Failed(_) => None,
        }
    }
}

/// Run one check against the engine and update the given handles
pub async fn check_risk<F, T, S>(
    client: &RiskClient,
    fields: &F,
    trigger: &mut T,
    surface: &mut S,
) -> Invocation
where
    F: FieldSource + ?Sized,
    T: TriggerControl + ?Sized,
    S: ResultSurface + ?Sized,
{
    let _busy = BusyGuard::engage(trigger);
    surface.hide();

    let payload = form::collect(fields);

    match client.predict(&payload).await {
        Ok(result) => {
            let panel = render(&result);
            tracing::info!(
                "Decision {} ({}, confidence {})",
                result.decision.as_str(),
                result.predicted_grade,
                panel.confidence_label
            );
            surface.show(&panel);
            Invocation::Rendered(panel)
        }
        Err(err) => {
            match &err {
                ConsoleError::Server(status) => tracing::error!("Engine returned status {}", status),
                other => tracing::error!("Engine unreachable: {}", other),
            }
            surface.alert(err.user_message());
            Invocation::Failed(err)
        }
    }
}
