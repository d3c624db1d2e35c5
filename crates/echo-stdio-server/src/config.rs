//! Responder configuration.

use clap::ValueEnum;

/// What to do with a line that is not a usable request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedPolicy {
    /// Answer with a JSON-RPC error object (`-32700` or `-32600`)
    #[default]
    Respond,
    /// Drop the line without writing anything
    Skip,
}

/// Settings for [`crate::EchoResponder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EchoConfig {
    /// Require `"jsonrpc": "2.0"` and a present `params.input`
    pub strict: bool,
    pub on_malformed: MalformedPolicy,
}

impl EchoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn on_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}
