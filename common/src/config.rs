#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Output suppression level.
    ///
    /// `0` prints headers and the full report, each level above that
    /// strips decoration from the output.
    pub quiet: u8,
}
