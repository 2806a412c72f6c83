//! Domain value objects: ArchitectureStyle, ProjectKind, PackageRef.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold no layer metadata. The authoritative per-layer data (package
//! references, project references, boilerplate sets) lives in
//! `registry.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ArchitectureStyle ────────────────────────────────────────────────────────

/// A built-in architecture style.
///
/// Exactly two styles ship with ArchGen. Adding a style means adding a
/// variant here plus a layer table in `registry.rs`; ordering and cycle
/// checks in `graph.rs` apply to any future table unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureStyle {
    NLayer,
    Onion,
}

impl ArchitectureStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NLayer => "nlayer",
            Self::Onion => "onion",
        }
    }

    /// Human-readable name used in confirmations and listings.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::NLayer => "N-Layer",
            Self::Onion => "Onion",
        }
    }

    pub const fn all() -> [Self; 2] {
        [Self::NLayer, Self::Onion]
    }
}

impl fmt::Display for ArchitectureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitectureStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nlayer" | "n-layer" | "layered" => Ok(Self::NLayer),
            "onion" => Ok(Self::Onion),
            other => Err(DomainError::UnknownStyle(other.to_string())),
        }
    }
}

// ── ProjectKind ──────────────────────────────────────────────────────────────

/// The build-tool project template a layer is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// A class library (`dotnet new classlib`).
    Library,
    /// A web API host (`dotnet new webapi`).
    Api,
}

impl ProjectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageRef ───────────────────────────────────────────────────────────────

/// A versioned third-party package a generated project must reference.
///
/// `&'static str` fields because every package reference ships hard-coded in
/// the registry; there is no dynamic package source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageRef {
    pub name: &'static str,
    pub version: &'static str,
}

impl PackageRef {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
