// Application layer: runs one CLI command against the client.

pub mod command;
