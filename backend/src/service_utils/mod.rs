//! HTTP plumbing for the records service.

pub mod cspace_client;
