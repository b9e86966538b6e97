//! Execution environment selection
//!
//! The renderer never probes for a DOM. Callers state where the output will be
//! displayed and the environment decides which engine capabilities are switched on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the rendered HTML will be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Server-side rendering: math and diagrams are left for client hydration
    #[default]
    Server,
    /// Client-side rendering: math and diagrams are rendered in place
    Client,
}

/// Whether math and diagram backends run inside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDiagramRendering {
    Enabled,
    Deferred,
}

impl MathDiagramRendering {
    pub fn is_enabled(self) -> bool {
        matches!(self, MathDiagramRendering::Enabled)
    }
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Server, Environment::Client];

    /// Capability flag handed to the Markdown engine
    pub fn math_diagram_rendering(self) -> MathDiagramRendering {
        match self {
            Environment::Server => MathDiagramRendering::Deferred,
            Environment::Client => MathDiagramRendering::Enabled,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Server => "server",
            Environment::Client => "client",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(Environment::Server),
            "client" => Ok(Environment::Client),
            other => Err(format!(
                "unknown environment '{other}' (expected 'server' or 'client')"
            )),
        }
    }
}
