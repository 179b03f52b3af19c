//! Everyday Needs API - backend for a subscription box storefront
//!
//! This crate provides the REST API behind the storefront:
//! - Catalog of curated boxes and the products inside them
//! - Checkout quotes and recurring subscriptions (monthly, quarterly, annual)
//! - Login with auto-provisioning, seller verification, and role switching
//! - Role-gated seller and admin dashboards

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod pricing;
pub mod routes;
pub mod session;
pub mod state;
