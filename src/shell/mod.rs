// Composition root for the users subgraph.
//
// Responsibilities
// - Fix the listen address.
// - Instantiate the user directory and wire it into the entity resolver.
// - Build the federated schema and expose it over HTTP.

pub mod config;
pub mod graphql;
pub mod http;
pub mod startup;
pub mod state;
pub mod telemetry;
