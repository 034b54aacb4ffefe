//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation, including API endpoints,
//! business logic, data access, and infrastructure. The backend uses Axum as the web
//! framework, SeaORM for database operations, Argon2 for password hashing and JSON Web
//! Tokens for stateless authentication.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, ownership checks and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations, tracing and CORS setup
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates the bearer token via `AuthGuard`, converts DTOs to params
//! 3. **Service** verifies ownership with the explicit requester id, then mutates
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO and wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
