// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod api;
pub mod beacon;
pub mod config;
pub mod engine;
pub mod errors;
pub mod server;
pub mod telemetry;
