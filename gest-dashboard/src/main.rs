//! Pregnancy Progress Dashboard
//!
//! A two-page site: a welcome page and a dashboard with gestational age,
//! countdown to the due date, trimester, completion percentage and a baby-size
//! comparison.
//!
//! Startup flow:
//! 1. The reference dates below and the embedded baby-size CSV are parsed into
//!    a `GestationConfig`. A malformed table stops startup with an error box.
//! 2. Once the page is mounted, metrics are computed for the current instant
//!    and written into the dashboard slots. This happens once; reload the page
//!    to refresh.
//! 3. Navigation links toggle which section is visible.

use anyhow::Context;
use dioxus::prelude::*;
use gest_core::calculator::TOTAL_PREGNANCY_DAYS;
use gest_core::clock::{Clock, SystemClock};
use gest_core::config::{GestationConfig, ReferenceDates};
use gest_core::metrics::DashboardMetrics;
use gest_core::render::render;
use gest_core::size_table::BabySizeTable;
use gest_ui::components::{DashboardPage, ErrorDisplay, HomePage, NavMenu};
use gest_ui::dom::DomView;
use gest_ui::state::AppState;

/// Last menstrual period.
const LMP: &str = "2025-06-23";
/// Estimated due date.
const EDD: &str = "2026-03-30";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gestation-root"))
        .launch(App);
}

fn load_config() -> anyhow::Result<GestationConfig> {
    let reference = ReferenceDates::parse(LMP, EDD).context("Invalid reference dates")?;
    let sizes = BabySizeTable::embedded().context("Invalid baby-size table")?;
    let config = GestationConfig::new(reference, sizes, TOTAL_PREGNANCY_DAYS)?;
    log::info!(
        "LMP {}, due {}, {} size entries",
        config.reference.last_menstrual_period,
        config.reference.estimated_due_date,
        config.sizes.len()
    );
    Ok(config)
}

/// Compute metrics for now and write them into the page.
fn render_dashboard(clock: &impl Clock) -> anyhow::Result<DashboardMetrics> {
    let config = load_config()?;
    let metrics = DashboardMetrics::compute(&config, clock.now());
    log::debug!(
        "Computed metrics: {}",
        serde_json::to_string(&metrics).unwrap_or_default()
    );

    let mut view = DomView::from_window().context("No browser document available")?;
    render(&metrics, config.reference.estimated_due_date, &mut view)
        .context("Failed to render dashboard")?;
    Ok(metrics)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Runs once after mount, when every slot element exists.
    use_effect(move || match render_dashboard(&SystemClock) {
        Ok(metrics) => {
            log::info!(
                "Dashboard ready: {} weeks {} days, {}%",
                metrics.gestational_age.completed_weeks,
                metrics.gestational_age.remainder_days,
                metrics.progress_percent
            );
        }
        Err(e) => {
            log::error!("{:#}", e);
            state.error_msg.set(Some(format!("{:#}", e)));
        }
    });

    rsx! {
        div {
            class: "container",
            style: "height: 100vh; overflow-y: auto; background: #FFF8FA; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            NavMenu {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            HomePage {}
            DashboardPage {}
        }
    }
}
