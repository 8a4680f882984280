//! Repository structure checks
