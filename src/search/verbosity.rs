/// How much the binaries log. Library code only emits events, the binaries
/// pick the maximum level from this.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Silent,
    /// Scenario construction, search progress and results
    #[default]
    Normal,
    /// Also heuristic cache statistics
    Verbose,
    /// Everything, including planning graph construction
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
