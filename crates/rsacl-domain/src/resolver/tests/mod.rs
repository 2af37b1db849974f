//! Scenario tests for the resolvers.
