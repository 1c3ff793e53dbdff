/// Evaluator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorConfig {
    /// Wall-effect coefficient `α` of the Dixon pressure-drop correlation.
    pub wall_alpha: f64,

    /// How advisory applicability windows are treated.
    pub advisory_policy: AdvisoryPolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            wall_alpha: 0.564,
            advisory_policy: AdvisoryPolicy::Report,
        }
    }
}

/// Treatment of literature-stated (advisory) applicability windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdvisoryPolicy {
    /// Compute the value and list the violated window in
    /// [`Evaluation::advisories`](super::Evaluation::advisories).
    #[default]
    Report,
    /// Treat advisory windows like required ones.
    Enforce,
}
