//! The analysis request orchestrator.
//!
//! One cycle: validate the input buffers locally, show the busy indicator,
//! hand the request to the background worker, and when its response is
//! drained back on the UI thread, either fan the payload out to the three
//! renderers or show a failure notice. The busy indicator is hidden when the
//! request settles, on both paths. Responses from superseded cycles are
//! discarded by sequence number.

use finsnap_core::protocol::AnalysisResult;
use finsnap_core::reveal::RevealSession;
use finsnap_core::validate::parse_input;

use crate::components::charts::{ChartKind, ForecastChart};
use crate::config::AppConfig;
use crate::state::AppState;
use crate::worker::{AnalysisBackend, AnalysisRequest, AnalysisResponse};

const INVALID_INPUT_NOTICE: &str =
    "Invalid input: enter non-negative numbers for revenue, expenses, and cash";
const ANALYSIS_FAILED_NOTICE: &str =
    "Analysis could not be completed. Verify the analysis service is reachable.";
const ANALYSIS_COMPLETE_NOTICE: &str = "Analysis complete";

/// Validate the input buffers and, if they pass, issue one analysis request.
/// Validation failures never reach the worker.
pub fn submit_analysis(state: &mut AppState, worker: &impl AnalysisBackend) {
    let input = match parse_input(&state.revenue_input, &state.expenses_input, &state.cash_input) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected analysis input");
            state.set_error(INVALID_INPUT_NOTICE);
            return;
        }
    };

    state.clear_notice();
    state.loading.show();
    state.cycle_seq += 1;
    let seq = state.cycle_seq;

    if worker.send(AnalysisRequest::Analyze { seq, input }) {
        tracing::info!(
            seq,
            revenue = input.revenue,
            expenses = input.expenses,
            cash = input.cash,
            "Submitted analysis request"
        );
    } else {
        tracing::error!(seq, "Analysis worker is gone");
        state.loading.hide();
        state.set_error(ANALYSIS_FAILED_NOTICE);
    }
}

/// Drain settled responses from the worker into the state.
pub fn poll_worker(state: &mut AppState, worker: &impl AnalysisBackend, config: &AppConfig) {
    while let Some(AnalysisResponse::Complete { seq, result }) = worker.try_recv() {
        handle_response(state, seq, result, config);
    }
}

/// Apply one settled response. Stale responses (an older cycle's answer
/// arriving after a newer request was issued) are dropped without touching
/// the loading state, which still belongs to the in-flight cycle.
pub fn handle_response(
    state: &mut AppState,
    seq: u64,
    result: Result<AnalysisResult, String>,
    config: &AppConfig,
) {
    if seq != state.cycle_seq {
        tracing::debug!(seq, current = state.cycle_seq, "Discarding stale analysis response");
        return;
    }

    state.loading.hide();

    match result {
        Ok(result) => apply_result(state, &result, config),
        Err(e) => {
            // prior results stay untouched and visible
            tracing::warn!(seq, error = %e, "Analysis failed");
            state.set_error(ANALYSIS_FAILED_NOTICE);
        }
    }
}

/// Fan a successful payload out to the readouts, the chart slots, and the
/// reveal scheduler, then arm the settle delay that surfaces the result
/// sections.
fn apply_result(state: &mut AppState, result: &AnalysisResult, config: &AppConfig) {
    state.readouts.animate(&result.metrics, config.readout_duration_ms);

    state.charts.profit.bind(ForecastChart::new(
        "Profit Forecast",
        ChartKind::Line,
        &result.forecasts.profit,
    ));
    state.charts.revenue.bind(ForecastChart::new(
        "Revenue Forecast",
        ChartKind::Bar,
        &result.forecasts.revenue,
    ));

    state.narrative = Some(RevealSession::with_timing(
        &result.strategy,
        config.reveal_delay_ms,
        config.reveal_interval_ms,
    ));
    state.metrics = Some(result.metrics);
    state.risk = Some(result.risk_level);
    state.settle_ms = Some(config.settle_delay_ms);
    state.set_info(ANALYSIS_COMPLETE_NOTICE);

    tracing::info!(
        seq = state.cycle_seq,
        risk = %result.risk_level,
        "Applied analysis result"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;
    use finsnap_core::protocol::{
        AnalysisResult, ForecastSeries, MetricsSnapshot, RiskLevel, Runway,
    };
    use std::cell::RefCell;

    /// Records sent requests instead of spawning a worker thread.
    #[derive(Default)]
    struct RecordingBackend {
        sent: RefCell<Vec<AnalysisRequest>>,
    }

    impl AnalysisBackend for RecordingBackend {
        fn send(&self, request: AnalysisRequest) -> bool {
            self.sent.borrow_mut().push(request);
            true
        }

        fn try_recv(&self) -> Option<AnalysisResponse> {
            None
        }
    }

    fn result_with_profit(profit: f64) -> AnalysisResult {
        AnalysisResult {
            metrics: MetricsSnapshot {
                profit,
                profit_margin: 30.0,
                burn_rate: 7000.0,
                runway: Runway::Finite(0.71),
                growth_score: 62.0,
            },
            forecasts: ForecastSeries {
                profit: [profit; 12],
                revenue: [10_000.0; 12],
            },
            strategy: "Reinvest the surplus.".to_string(),
            risk_level: RiskLevel::Low,
        }
    }

    fn state_with_input(revenue: &str, expenses: &str, cash: &str) -> AppState {
        let mut state = AppState::default();
        state.revenue_input = revenue.to_string();
        state.expenses_input = expenses.to_string();
        state.cash_input = cash.to_string();
        state
    }

    #[test]
    fn invalid_input_never_reaches_the_worker() {
        let worker = RecordingBackend::default();
        let mut state = state_with_input("lots", "7000", "5000");

        submit_analysis(&mut state, &worker);

        assert!(worker.sent.borrow().is_empty());
        assert!(!state.loading.is_visible());
        assert!(state.notice.is_some());
        assert_eq!(state.cycle_seq, 0);
    }

    #[test]
    fn valid_input_sends_one_request_and_shows_busy() {
        let worker = RecordingBackend::default();
        let mut state = state_with_input("10000", "7000", "5000");

        submit_analysis(&mut state, &worker);

        let sent = worker.sent.borrow();
        assert_eq!(sent.len(), 1);
        match &sent[0] {
            AnalysisRequest::Analyze { seq, input } => {
                assert_eq!(*seq, 1);
                assert_eq!(input.revenue, 10_000.0);
                assert_eq!(input.expenses, 7_000.0);
                assert_eq!(input.cash, 5_000.0);
            }
            other => panic!("unexpected request {other:?}"),
        }
        assert!(state.loading.is_visible());
    }

    #[test]
    fn success_fans_out_to_all_three_renderers() {
        let config = AppConfig::default();
        let mut state = AppState::default();
        state.cycle_seq = 1;
        state.loading.show();

        handle_response(&mut state, 1, Ok(result_with_profit(3000.0)), &config);

        assert!(!state.loading.is_visible());
        assert!(state.readouts.profit.is_animating());
        assert!(state.charts.profit.is_bound());
        assert!(state.charts.revenue.is_bound());
        assert!(state.narrative.as_ref().unwrap().is_typing());
        assert_eq!(state.risk, Some(RiskLevel::Low));
        assert_eq!(state.settle_ms, Some(config.settle_delay_ms));
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Info);
        assert!(!state.sections_visible);

        // sections surface once the settle delay elapses
        state.tick(config.settle_delay_ms);
        assert!(state.sections_visible);

        // profit readout lands exactly on the formatted target
        state.tick(config.readout_duration_ms);
        assert_eq!(state.readouts.profit.text(), "$3,000");
    }

    #[test]
    fn negative_profit_lands_on_sign_aware_text() {
        let config = AppConfig::default();
        let mut state = AppState::default();
        state.cycle_seq = 1;

        handle_response(&mut state, 1, Ok(result_with_profit(-500.0)), &config);
        state.tick(config.readout_duration_ms);
        assert_eq!(state.readouts.profit.text(), "-$500");
    }

    #[test]
    fn failure_keeps_prior_results_and_restores_idle() {
        let config = AppConfig::default();
        let mut state = AppState::default();

        // first cycle succeeds
        state.cycle_seq = 1;
        handle_response(&mut state, 1, Ok(result_with_profit(3000.0)), &config);
        state.tick(config.settle_delay_ms + config.readout_duration_ms);
        let chart_generation = state.charts.profit.generation();

        // second cycle fails
        state.cycle_seq = 2;
        state.loading.show();
        handle_response(&mut state, 2, Err("status 500".to_string()), &config);

        assert!(!state.loading.is_visible());
        assert!(state.notice.is_some());
        // nothing was cleared or rebound
        assert!(state.sections_visible);
        assert_eq!(state.charts.profit.generation(), chart_generation);
        assert_eq!(state.readouts.profit.text(), "$3,000");
    }

    #[test]
    fn failure_does_not_surface_hidden_sections() {
        let config = AppConfig::default();
        let mut state = AppState::default();
        state.cycle_seq = 1;
        state.loading.show();

        handle_response(&mut state, 1, Err("timeout".to_string()), &config);

        assert!(!state.sections_visible);
        assert_eq!(state.settle_ms, None);
        assert!(!state.loading.is_visible());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let config = AppConfig::default();
        let mut state = AppState::default();

        // cycle 2 is in flight when cycle 1's answer finally arrives
        state.cycle_seq = 2;
        state.loading.show();

        handle_response(&mut state, 1, Ok(result_with_profit(9999.0)), &config);

        // untouched: the stale payload was dropped and the busy indicator
        // still belongs to cycle 2
        assert!(state.loading.is_visible());
        assert!(!state.charts.profit.is_bound());
        assert!(state.narrative.is_none());

        handle_response(&mut state, 2, Ok(result_with_profit(100.0)), &config);
        assert!(!state.loading.is_visible());
        state.tick(config.readout_duration_ms);
        assert_eq!(state.readouts.profit.text(), "$100");
    }

    #[test]
    fn reanalysis_rebinds_chart_slots_without_leaking() {
        let config = AppConfig::default();
        let mut state = AppState::default();

        state.cycle_seq = 1;
        handle_response(&mut state, 1, Ok(result_with_profit(100.0)), &config);
        state.cycle_seq = 2;
        handle_response(&mut state, 2, Ok(result_with_profit(200.0)), &config);

        assert_eq!(state.charts.profit.generation(), 2);
        assert_eq!(
            state.charts.profit.instance().unwrap().values()[0],
            200.0
        );
    }
}
