// Composition root for the timesheet service.
//
// Responsibilities
// - Read configuration from the environment.
// - Pick the key/value store and the collaborators.
// - Wire them into the use case handlers and expose HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
