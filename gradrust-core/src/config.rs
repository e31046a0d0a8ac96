//! Per-graph configuration.

/// How the `pow`, `exp` and `log` rules write into their operand's gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleMode {
    /// Every rule adds its contribution (`+=`). Gradients of nodes reached through
    /// several paths are summed.
    #[default]
    Accumulate,
    /// `pow`, `exp` and `log` assign (`=`) instead of adding, discarding whatever the
    /// operand had already received. Only useful for reproducing results computed
    /// with that convention; `add`, `mul` and `relu` still accumulate.
    SourceCompatible,
}

/// Value returned by `log` for an input of exactly `0.0`.
pub const DEFAULT_LOG_ZERO_SENTINEL: f64 = -100.0;

/// Configuration shared by every node of a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    pub rule_mode: RuleMode,
    /// Finite stand-in for `ln(0)`. It is a domain convention, not a limit.
    pub log_zero_sentinel: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            rule_mode: RuleMode::Accumulate,
            log_zero_sentinel: DEFAULT_LOG_ZERO_SENTINEL,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule_mode(mut self, rule_mode: RuleMode) -> Self {
        self.rule_mode = rule_mode;
        self
    }

    pub fn with_log_zero_sentinel(mut self, sentinel: f64) -> Self {
        self.log_zero_sentinel = sentinel;
        self
    }
}
