/// Environment a receipt is verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The live App Store.
    Production,
    /// The test environment used by sandbox accounts and TestFlight builds.
    Sandbox,
}
