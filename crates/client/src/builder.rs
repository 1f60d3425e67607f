//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_bootstrap::RuntimeSetup;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the runtime setup and the frontend are required; `build()` fails
/// fast when either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    setup: Option<RuntimeSetup>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime setup (required).
    ///
    /// It should be constructed via `RuntimeBuilder` from the `client-bootstrap` crate.
    pub fn runtime(mut self, setup: RuntimeSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let setup = self
            .setup
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { setup, frontend })
    }
}
