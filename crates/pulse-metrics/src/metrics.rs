use anyhow::{Context, Result};
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};
use pulse_core::{AnalysisResult, ClassifyError, ObservationError};

/// Counters and histograms for classifier traffic, kept on a private registry.
pub struct ClassifierMetrics {
    registry: Registry,
    pub classifications_total: IntCounterVec,
    pub dosha_confidence_percent: Histogram,
    pub rejected_observations_total: IntCounterVec,
}

impl ClassifierMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let classifications_total = IntCounterVec::new(
            Opts::new(
                "pulse_classifications_total",
                "Completed classifications by dominant dosha and risk tier",
            ),
            &["dosha", "risk_level"],
        )?;

        let dosha_confidence_percent = Histogram::with_opts(
            HistogramOpts::new(
                "pulse_dosha_confidence_percent",
                "Confidence percentage of the dominant dosha",
            )
            .buckets(vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]),
        )?;

        let rejected_observations_total = IntCounterVec::new(
            Opts::new(
                "pulse_rejected_observations_total",
                "Observations refused before or during classification",
            ),
            &["reason"],
        )?;

        registry
            .register(Box::new(classifications_total.clone()))
            .context("register pulse_classifications_total")?;
        registry
            .register(Box::new(dosha_confidence_percent.clone()))
            .context("register pulse_dosha_confidence_percent")?;
        registry
            .register(Box::new(rejected_observations_total.clone()))
            .context("register pulse_rejected_observations_total")?;

        Ok(Self {
            registry,
            classifications_total,
            dosha_confidence_percent,
            rejected_observations_total,
        })
    }

    pub fn observe(&self, result: &AnalysisResult) {
        self.classifications_total
            .with_label_values(&[result.dosha.as_str(), result.risk_level.as_str()])
            .inc();
        self.dosha_confidence_percent
            .observe(f64::from(result.dosha_percentage));
    }

    pub fn observe_rejection(&self, err: &ClassifyError) {
        self.rejected_observations_total
            .with_label_values(&[rejection_reason(err)])
            .inc();
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buf)
            .context("encode metrics")?;
        String::from_utf8(buf).context("metrics exposition is not utf-8")
    }
}

pub fn rejection_reason(err: &ClassifyError) -> &'static str {
    match err {
        ClassifyError::DegenerateScores => "degenerate_scores",
        ClassifyError::InvalidObservation(inner) => match inner {
            ObservationError::EmptyField(_) => "empty_field",
            ObservationError::UnknownValue { .. } => "unknown_value",
            ObservationError::PulseRateOutOfRange(_) => "pulse_rate_out_of_range",
            ObservationError::InvalidPulseRate(_) => "invalid_pulse_rate",
        },
    }
}
